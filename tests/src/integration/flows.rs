//! # Integration Test Flows
//!
//! Tests that the address resolver (02), driven by the in-memory suggestion
//! service of (01), hands a valid passport address to shared-types.
//!
//! ## Flow Tested:
//!
//! 1. **Region → City → Street → House**: each choice scopes the next query
//! 2. **Finalize**: selected candidate → official full-address string
//! 3. **Hand-off**: flat field mapping → `Address` → validation

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::{validate_address, Address, AddressFields};
    use tp_01_address_suggest::{AddressData, Candidate, DetailLevel, MockSuggestionService};
    use tp_02_address_resolver::{
        AddressField, AddressFormApi, CascadingResolver, FieldState, RecordingSurface,
        ResolverConfig,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn mo_data() -> AddressData {
        AddressData {
            country: None,
            region_fias_id: Some("29251dcf-00a1-4e34-98d4-5c47484a36d4".to_string()),
            region_with_type: Some("Московская обл.".to_string()),
            region: Some("Московская область".to_string()),
            ..Default::default()
        }
    }

    fn podolsk_data() -> AddressData {
        AddressData {
            city_fias_id: Some("b0122c31-eb1c-40ae-b998-08f9e99a0fa1".to_string()),
            city_with_type: Some("г. Подольск".to_string()),
            ..mo_data()
        }
    }

    fn kirova_data() -> AddressData {
        AddressData {
            street_fias_id: Some("street-kirova".to_string()),
            street_with_type: Some("ул. Кирова".to_string()),
            ..podolsk_data()
        }
    }

    fn house_data() -> AddressData {
        AddressData {
            house_fias_id: Some("house-5".to_string()),
            house: Some("5".to_string()),
            house_type: Some("д".to_string()),
            postal_code: None,
            ..kirova_data()
        }
    }

    /// Mock service primed for the Podolsk walk-through.
    fn podolsk_service() -> MockSuggestionService {
        let mock = MockSuggestionService::new();
        mock.respond(
            "Моск",
            vec![
                Candidate::new(
                    "г Москва",
                    AddressData {
                        region_fias_id: Some("0c5b2444-70a0-4932-980c-b4dc0d3f02b5".to_string()),
                        ..Default::default()
                    },
                ),
                Candidate::new("Московская обл", mo_data()),
            ],
        );
        mock.respond("Подол", vec![Candidate::new("г Подольск", podolsk_data())]);
        mock.respond("Кир", vec![Candidate::new("ул Кирова", kirova_data())]);
        mock.respond(
            "Московская обл г Подольск ул Кирова д 5",
            vec![Candidate::new("ул Кирова, д 5", house_data())],
        );
        mock
    }

    type Form = CascadingResolver<MockSuggestionService, RecordingSurface>;

    fn new_form(mock: &MockSuggestionService) -> (Form, RecordingSurface) {
        let surface = RecordingSurface::new();
        let form = CascadingResolver::new(
            Arc::new(mock.clone()),
            surface.clone(),
            ResolverConfig::default(),
        );
        (form, surface)
    }

    async fn type_and_pick(form: &mut Form, field: AddressField, text: &str, index: usize) {
        assert!(form.text_changed(field, text));
        form.settle().await;
        form.candidate_chosen(field, index).unwrap();
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_full_cascade_produces_official_address() {
        let mock = podolsk_service();
        let (mut form, surface) = new_form(&mock);

        type_and_pick(&mut form, AddressField::Region, "Моск", 1).await;
        type_and_pick(&mut form, AddressField::City, "Подол", 0).await;
        type_and_pick(&mut form, AddressField::Street, "Кир", 0).await;
        type_and_pick(&mut form, AddressField::House, "д 5", 0).await;

        assert_eq!(
            form.compose_full_address(),
            "Московская обл., г. Подольск, ул. Кирова, д. 5"
        );
        for field in AddressField::ALL {
            assert_eq!(form.field(field).state, FieldState::Resolved);
            assert!(!surface.is_visible(field));
        }

        // Every scoped level was filtered by the ancestor chosen just before it.
        let calls = mock.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[0].locations.is_empty());
        assert_eq!(
            calls[1].locations[0].region_fias_id.as_deref(),
            Some("29251dcf-00a1-4e34-98d4-5c47484a36d4")
        );
        assert_eq!(
            calls[2].locations[0].city_fias_id.as_deref(),
            Some("b0122c31-eb1c-40ae-b998-08f9e99a0fa1")
        );
        assert_eq!(calls[3].to_bound.unwrap().value, DetailLevel::House);
        assert!(calls[3].locations.is_empty());
    }

    #[tokio::test]
    async fn test_hand_off_builds_valid_passport_address() {
        let mock = podolsk_service();
        let (mut form, _surface) = new_form(&mock);

        type_and_pick(&mut form, AddressField::Region, "Моск", 1).await;
        type_and_pick(&mut form, AddressField::City, "Подол", 0).await;
        type_and_pick(&mut form, AddressField::Street, "Кир", 0).await;
        form.text_changed(AddressField::House, "5");
        form.set_apartment("17");
        form.settle().await;

        let fields = form.address_fields();
        let map = fields.to_map();
        assert_eq!(map.len(), AddressFields::KEYS.len());
        assert_eq!(map["subject"], "Московская обл");
        assert_eq!(map["apartment"], "17");
        assert_eq!(AddressFields::from_map(&map), fields);

        let address: Address = fields.into();
        assert!(address.validate().is_ok());
        let result = validate_address(&address);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
        assert_eq!(address.full_address(), "Московская обл, г Подольск, ул Кирова, д. 5, кв. 17");
    }

    #[tokio::test]
    async fn test_changing_region_restarts_the_chain() {
        let mock = podolsk_service();
        let (mut form, surface) = new_form(&mock);

        type_and_pick(&mut form, AddressField::Region, "Моск", 1).await;
        type_and_pick(&mut form, AddressField::City, "Подол", 0).await;
        type_and_pick(&mut form, AddressField::Street, "Кир", 0).await;

        type_and_pick(&mut form, AddressField::Region, "Моск", 0).await;

        assert_eq!(form.field(AddressField::Region).text, "г Москва");
        for field in [AddressField::City, AddressField::Street, AddressField::House] {
            assert!(form.field(field).text.is_empty());
            assert!(form.field(field).anchor.is_none());
            assert_eq!(surface.last_text(field).as_deref(), Some(""));
        }
        // The latest choice is the selected address, so nothing below the
        // region survives into the formatted line.
        assert_eq!(form.compose_full_address(), "");
        assert_eq!(form.selected_address().map(|c| c.value.as_str()), Some("г Москва"));
    }

    #[tokio::test]
    async fn test_typed_only_form_fails_validation_without_house() {
        let mock = MockSuggestionService::new();
        let (mut form, _surface) = new_form(&mock);

        form.text_changed(AddressField::Region, "Москва");
        form.text_changed(AddressField::Street, "Тверская");
        form.settle().await;

        assert_eq!(form.compose_full_address(), "Москва, Тверская");

        let address = form.address_fields().into_address();
        let err = address.validate().unwrap_err();
        assert_eq!(err.field, "house");

        let result = validate_address(&address);
        assert!(!result.valid);
        assert_eq!(result.warnings, vec!["город не указан".to_string()]);
    }
}
