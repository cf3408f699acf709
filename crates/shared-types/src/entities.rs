//! # Core Domain Entities
//!
//! The passport address as stored by the passport subsystem, and the flat
//! field mapping the address form hands off to it.
//!
//! ## Clusters
//!
//! - **Address**: `Address` following the state address registry layout
//! - **Hand-off**: `AddressFields` (subject, city, street, house, building,
//!   apartment)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::ValidationError;

// =============================================================================
// CLUSTER A: THE ADDRESS
// =============================================================================

/// Address of a real-estate object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    /// Federal subject (region).
    pub subject: String,
    /// Administrative district.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub district: String,
    /// City or settlement.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    /// District inside the city.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city_district: String,
    /// Street.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street: String,
    /// House number.
    pub house: String,
    /// Building or block.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub building: String,
    /// Apartment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub apartment: String,
    /// Room.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
    /// Postal code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
}

impl Address {
    /// Check the fields every passport address must carry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::new("subject", "субъект РФ обязателен"));
        }
        if self.house.trim().is_empty() {
            return Err(ValidationError::new("house", "номер дома обязателен"));
        }
        Ok(())
    }

    /// Single-line address as printed in the passport.
    pub fn full_address(&self) -> String {
        let parts = [
            (self.postal_code.as_str(), None),
            (self.subject.as_str(), None),
            (self.district.as_str(), None),
            (self.city.as_str(), None),
            (self.city_district.as_str(), None),
            (self.street.as_str(), None),
            (self.house.as_str(), Some("д. ")),
            (self.building.as_str(), Some("корп. ")),
            (self.apartment.as_str(), Some("кв. ")),
            (self.room.as_str(), Some("ком. ")),
        ];

        parts
            .iter()
            .filter(|(value, _)| !value.is_empty())
            .map(|(value, label)| match label {
                Some(label) => format!("{}{}", label, value),
                None => value.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// CLUSTER B: THE HAND-OFF
// =============================================================================

/// Flat field mapping produced by the address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AddressFields {
    /// Region text.
    pub subject: String,
    /// City text.
    pub city: String,
    /// Street text.
    pub street: String,
    /// House text.
    pub house: String,
    /// Manually entered building.
    pub building: String,
    /// Manually entered apartment.
    pub apartment: String,
}

impl AddressFields {
    /// Keys of the mapping, in form order.
    pub const KEYS: [&'static str; 6] =
        ["subject", "city", "street", "house", "building", "apartment"];

    /// Field-name to value mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        Self::KEYS
            .iter()
            .zip([
                &self.subject,
                &self.city,
                &self.street,
                &self.house,
                &self.building,
                &self.apartment,
            ])
            .map(|(key, value)| (*key, value.clone()))
            .collect()
    }

    /// Rebuild from a mapping; missing keys become empty strings.
    pub fn from_map(map: &BTreeMap<&str, String>) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            subject: get("subject"),
            city: get("city"),
            street: get("street"),
            house: get("house"),
            building: get("building"),
            apartment: get("apartment"),
        }
    }

    /// Convert into a passport address.
    pub fn into_address(self) -> Address {
        Address {
            subject: self.subject,
            city: self.city,
            street: self.street,
            house: self.house,
            building: self.building,
            apartment: self.apartment,
            ..Default::default()
        }
    }
}

impl From<AddressFields> for Address {
    fn from(fields: AddressFields) -> Self {
        fields.into_address()
    }
}
