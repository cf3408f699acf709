//! # Full-Address Formatter
//!
//! Composes the official-format address line from the selected candidate's
//! structured data, or from the raw field texts when nothing was selected.
//!
//! ## Ordering
//!
//! ```text
//! country, postal code, region, area, city|settlement, city district,
//! street, house, block|manual building, flat|manual apartment
//! ```

use tp_01_address_suggest::{non_empty, AddressData};

use crate::domain::{AddressField, FieldSlot, ManualInputs};

const HOUSE_LABEL: &str = "д. ";
const BLOCK_LABEL: &str = "корп. ";
const FLAT_LABEL: &str = "кв. ";

const HOUSE_TYPE_DEFAULT: &str = "д";
const BLOCK_TYPE_DEFAULT: &str = "к";
const FLAT_TYPE_DEFAULT: &str = "кв";

const SEPARATOR: &str = ", ";

/// Raw texts of the four cascade fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldTexts<'a> {
    /// Region text.
    pub region: &'a str,
    /// City text.
    pub city: &'a str,
    /// Street text.
    pub street: &'a str,
    /// House text.
    pub house: &'a str,
}

impl<'a> FieldTexts<'a> {
    /// Borrow the current texts of the resolver's fields.
    pub fn from_slots(fields: &'a [FieldSlot; 4]) -> Self {
        Self {
            region: &fields[AddressField::Region.index()].text,
            city: &fields[AddressField::City.index()].text,
            street: &fields[AddressField::Street.index()].text,
            house: &fields[AddressField::House.index()].text,
        }
    }
}

/// Compose the full address line.
///
/// Returns an empty string when every source is empty.
pub fn compose_full_address(
    selected: Option<&AddressData>,
    texts: &FieldTexts<'_>,
    manual: &ManualInputs,
) -> String {
    let parts = match selected {
        Some(data) => structured_parts(data, manual),
        None => typed_parts(texts, manual),
    };
    parts.join(SEPARATOR)
}

/// Text for the full-address label shown under the form.
pub fn full_address_label(full_address: &str) -> String {
    if full_address.is_empty() {
        "Адрес будет отображен после заполнения полей".to_string()
    } else {
        format!("📍 Полный адрес:\n{}", full_address)
    }
}

fn structured_parts(data: &AddressData, manual: &ManualInputs) -> Vec<String> {
    let mut parts: Vec<String> = [
        &data.country,
        &data.postal_code,
        &data.region_with_type,
        &data.area_with_type,
    ]
    .into_iter()
    .filter_map(non_empty)
    .map(str::to_string)
    .collect();

    if let Some(locality) = non_empty(&data.city_with_type).or(non_empty(&data.settlement_with_type)) {
        parts.push(locality.to_string());
    }
    parts.extend(
        [&data.city_district, &data.street_with_type]
            .into_iter()
            .filter_map(non_empty)
            .map(str::to_string),
    );

    if let Some(house) = non_empty(&data.house) {
        parts.push(typed_label(
            house,
            &data.house_type,
            &data.house_type_full,
            HOUSE_TYPE_DEFAULT,
            HOUSE_LABEL,
        ));
    }

    match non_empty(&data.block) {
        Some(block) => parts.push(typed_label(
            block,
            &data.block_type,
            &data.block_type_full,
            BLOCK_TYPE_DEFAULT,
            BLOCK_LABEL,
        )),
        None => push_labelled(&mut parts, BLOCK_LABEL, &manual.building),
    }

    match non_empty(&data.flat) {
        Some(flat) => parts.push(typed_label(
            flat,
            &data.flat_type,
            &data.flat_type_full,
            FLAT_TYPE_DEFAULT,
            FLAT_LABEL,
        )),
        None => push_labelled(&mut parts, FLAT_LABEL, &manual.apartment),
    }

    parts
}

fn typed_parts(texts: &FieldTexts<'_>, manual: &ManualInputs) -> Vec<String> {
    let mut parts: Vec<String> = [texts.region, texts.city, texts.street]
        .into_iter()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();

    push_labelled(&mut parts, HOUSE_LABEL, texts.house);
    push_labelled(&mut parts, BLOCK_LABEL, &manual.building);
    push_labelled(&mut parts, FLAT_LABEL, &manual.apartment);
    parts
}

fn push_labelled(parts: &mut Vec<String>, label: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        parts.push(format!("{}{}", label, value));
    }
}

/// Default label unless the service reports a non-default type.
fn typed_label(
    value: &str,
    kind: &Option<String>,
    kind_full: &Option<String>,
    default_kind: &str,
    default_label: &str,
) -> String {
    match non_empty(kind) {
        Some(kind) if kind != default_kind => {
            let name = non_empty(kind_full).unwrap_or(kind);
            format!("{} {}", name, value)
        }
        _ => format!("{}{}", default_label, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn podolsk() -> AddressData {
        AddressData {
            region: Some("Московская область".to_string()),
            region_with_type: Some("Московская обл.".to_string()),
            city_with_type: Some("г. Подольск".to_string()),
            street_with_type: Some("ул. Кирова".to_string()),
            house: Some("5".to_string()),
            house_type: Some("д".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_address() {
        let result = compose_full_address(
            Some(&podolsk()),
            &FieldTexts::default(),
            &ManualInputs::default(),
        );
        assert_eq!(result, "Московская обл., г. Подольск, ул. Кирова, д. 5");
    }

    #[test]
    fn test_typed_fallback() {
        let texts = FieldTexts {
            region: "Москва",
            city: "",
            street: "Тверская",
            house: "10",
        };
        let manual = ManualInputs {
            building: "2".to_string(),
            apartment: String::new(),
        };
        assert_eq!(
            compose_full_address(None, &texts, &manual),
            "Москва, Тверская, д. 10, корп. 2"
        );
    }

    #[test]
    fn test_everything_empty() {
        let result = compose_full_address(None, &FieldTexts::default(), &ManualInputs::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_manual_building_and_apartment_follow_structured_data() {
        let manual = ManualInputs {
            building: "3".to_string(),
            apartment: "12".to_string(),
        };
        let result = compose_full_address(Some(&podolsk()), &FieldTexts::default(), &manual);
        assert_eq!(result, "Московская обл., г. Подольск, ул. Кирова, д. 5, корп. 3, кв. 12");
    }

    #[test]
    fn test_structured_block_wins_over_manual() {
        let mut data = podolsk();
        data.block = Some("1".to_string());
        data.block_type = Some("к".to_string());
        let manual = ManualInputs {
            building: "9".to_string(),
            apartment: String::new(),
        };
        let result = compose_full_address(Some(&data), &FieldTexts::default(), &manual);
        assert!(result.ends_with("д. 5, корп. 1"));
    }

    #[test]
    fn test_non_default_types_use_full_name() {
        let mut data = podolsk();
        data.house_type = Some("влд".to_string());
        data.house_type_full = Some("владение".to_string());
        data.block = Some("2".to_string());
        data.block_type = Some("стр".to_string());
        data.block_type_full = Some("строение".to_string());
        data.flat = Some("4".to_string());
        data.flat_type = Some("оф".to_string());

        let result = compose_full_address(Some(&data), &FieldTexts::default(), &ManualInputs::default());
        assert!(result.ends_with("владение 5, строение 2, оф 4"));
    }

    #[test]
    fn test_settlement_used_without_city() {
        let data = AddressData {
            region_with_type: Some("г Москва".to_string()),
            settlement_with_type: Some("пос Коммунарка".to_string()),
            postal_code: Some("108802".to_string()),
            country: Some("Россия".to_string()),
            ..Default::default()
        };
        let result = compose_full_address(Some(&data), &FieldTexts::default(), &ManualInputs::default());
        assert_eq!(result, "Россия, 108802, г Москва, пос Коммунарка");
    }

    #[test]
    fn test_selected_address_ignores_field_texts() {
        let texts = FieldTexts {
            region: "что-то другое",
            ..Default::default()
        };
        let result = compose_full_address(Some(&podolsk()), &texts, &ManualInputs::default());
        assert!(!result.contains("что-то другое"));
    }

    #[test]
    fn test_label_text() {
        assert_eq!(
            full_address_label(""),
            "Адрес будет отображен после заполнения полей"
        );
        assert_eq!(full_address_label("Москва"), "📍 Полный адрес:\nМосква");
    }
}
