//! # Domain Entities
//!
//! Candidates returned by the suggestion service.

use super::value_objects::{DetailLevel, ScopeAnchor};
use serde::{Deserialize, Serialize};

/// Returns the value only when it is present and not blank.
///
/// The service reports inapplicable sub-fields as `null` or `""`; both mean
/// "not at this detail level".
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Response envelope of the suggestion endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionResponse {
    /// Ranked suggestions, most relevant first.
    #[serde(default)]
    pub suggestions: Vec<Candidate>,
}

/// One suggested address or address fragment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// Human-readable text used to populate the field.
    pub value: String,
    /// Full text including the region and postal code.
    #[serde(default)]
    pub unrestricted_value: String,
    /// Structured sub-fields.
    #[serde(default)]
    pub data: AddressData,
}

impl Candidate {
    /// Build a candidate with display text and structured data.
    pub fn new(value: impl Into<String>, data: AddressData) -> Self {
        let value = value.into();
        Self {
            unrestricted_value: value.clone(),
            value,
            data,
        }
    }

    /// Scope anchor this candidate provides at the given level.
    ///
    /// A city-level anchor falls back to the settlement id when the
    /// candidate is a settlement outside any city.
    pub fn anchor_at(&self, level: DetailLevel) -> Option<ScopeAnchor> {
        let data = &self.data;
        match level {
            DetailLevel::Region => non_empty(&data.region_fias_id)
                .map(|id| ScopeAnchor::new(DetailLevel::Region, id)),
            DetailLevel::Area => {
                non_empty(&data.area_fias_id).map(|id| ScopeAnchor::new(DetailLevel::Area, id))
            }
            DetailLevel::City | DetailLevel::Settlement => non_empty(&data.city_fias_id)
                .map(|id| ScopeAnchor::new(DetailLevel::City, id))
                .or_else(|| {
                    non_empty(&data.settlement_fias_id)
                        .map(|id| ScopeAnchor::new(DetailLevel::Settlement, id))
                }),
            DetailLevel::Street => non_empty(&data.street_fias_id)
                .map(|id| ScopeAnchor::new(DetailLevel::Street, id)),
            DetailLevel::House => {
                non_empty(&data.house_fias_id).map(|id| ScopeAnchor::new(DetailLevel::House, id))
            }
        }
    }
}

/// Structured address data of a candidate.
///
/// Every sub-field is optional. Unknown fields sent by the service are
/// ignored.
/// Field names mirror the service's wire names.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddressData {
    pub postal_code: Option<String>,
    pub country: Option<String>,

    pub region_fias_id: Option<String>,
    pub region_kladr_id: Option<String>,
    pub region_with_type: Option<String>,
    pub region_type: Option<String>,
    pub region_type_full: Option<String>,
    pub region: Option<String>,

    pub area_fias_id: Option<String>,
    pub area_kladr_id: Option<String>,
    pub area_with_type: Option<String>,
    pub area_type: Option<String>,
    pub area_type_full: Option<String>,
    pub area: Option<String>,

    pub city_fias_id: Option<String>,
    pub city_kladr_id: Option<String>,
    pub city_with_type: Option<String>,
    pub city_type: Option<String>,
    pub city_type_full: Option<String>,
    pub city: Option<String>,
    pub city_area: Option<String>,
    pub city_district: Option<String>,

    pub settlement_fias_id: Option<String>,
    pub settlement_kladr_id: Option<String>,
    pub settlement_with_type: Option<String>,
    pub settlement_type: Option<String>,
    pub settlement_type_full: Option<String>,
    pub settlement: Option<String>,

    pub street_fias_id: Option<String>,
    pub street_kladr_id: Option<String>,
    pub street_with_type: Option<String>,
    pub street_type: Option<String>,
    pub street_type_full: Option<String>,
    pub street: Option<String>,

    pub house_fias_id: Option<String>,
    pub house_kladr_id: Option<String>,
    pub house_type: Option<String>,
    pub house_type_full: Option<String>,
    pub house: Option<String>,

    pub block_type: Option<String>,
    pub block_type_full: Option<String>,
    pub block: Option<String>,

    pub flat_type: Option<String>,
    pub flat_type_full: Option<String>,
    pub flat: Option<String>,

    pub fias_id: Option<String>,
    pub fias_level: Option<String>,
    pub kladr_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "suggestions": [{
            "value": "г Подольск, ул Кирова, д 5",
            "unrestricted_value": "142100, Московская обл, г Подольск, ул Кирова, д 5",
            "data": {
                "postal_code": "142100",
                "country": "Россия",
                "region_fias_id": "29251dcf-00a1-4e34-98d4-5c47484a36d4",
                "region_with_type": "Московская обл",
                "city_fias_id": null,
                "settlement_fias_id": "b1f5a9e2-0000-0000-0000-000000000001",
                "city_with_type": "",
                "street_with_type": "ул Кирова",
                "house": "5",
                "house_type": "д",
                "qc_geo": "0",
                "metro": null
            }
        }]
    }"#;

    #[test]
    fn test_decode_tolerates_nulls_and_unknown_fields() {
        let response: SuggestionResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.suggestions.len(), 1);

        let candidate = &response.suggestions[0];
        assert_eq!(candidate.data.house.as_deref(), Some("5"));
        assert_eq!(candidate.data.city_fias_id, None);
        assert_eq!(candidate.data.block, None);
    }

    #[test]
    fn test_non_empty_treats_blank_as_absent() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("  ".to_string())), None);
        assert_eq!(non_empty(&Some("д".to_string())), Some("д"));
    }

    #[test]
    fn test_city_anchor_falls_back_to_settlement() {
        let response: SuggestionResponse = serde_json::from_str(SAMPLE).unwrap();
        let anchor = response.suggestions[0].anchor_at(DetailLevel::City).unwrap();

        assert_eq!(anchor.level, DetailLevel::Settlement);
        assert_eq!(anchor.fias_id, "b1f5a9e2-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_city_anchor_prefers_city_id() {
        let data = AddressData {
            city_fias_id: Some("city-1".to_string()),
            settlement_fias_id: Some("settlement-1".to_string()),
            ..Default::default()
        };
        let anchor = Candidate::new("г Москва", data)
            .anchor_at(DetailLevel::City)
            .unwrap();

        assert_eq!(anchor, ScopeAnchor::new(DetailLevel::City, "city-1"));
    }

    #[test]
    fn test_missing_anchor() {
        let candidate = Candidate::new("ул Тверская", AddressData::default());
        assert!(candidate.anchor_at(DetailLevel::Street).is_none());
    }

    #[test]
    fn test_missing_suggestions_key_decodes_empty() {
        let response: SuggestionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.suggestions.is_empty());
    }
}
