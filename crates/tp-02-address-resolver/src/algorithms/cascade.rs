//! # Cascade
//!
//! Scoping of each field's query by its resolved ancestors, and clearing of
//! the fields below an accepted one.

use tp_01_address_suggest::ScopeAnchor;

use crate::domain::{AddressField, FieldQuery, FieldSlot};

/// Nearest ancestor anchor that can scope a query for `field`.
///
/// Walks from the direct parent towards the region, so a street query falls
/// back to the region when no city was resolved. Only fields still in the
/// resolved state count; an edited ancestor no longer scopes anything.
pub fn nearest_scope(fields: &[FieldSlot; 4], field: AddressField) -> Option<ScopeAnchor> {
    let mut current = field.parent();
    while let Some(ancestor) = current {
        let slot = &fields[ancestor.index()];
        if slot.is_resolved() {
            if let Some(anchor) = slot.anchor.as_ref().filter(|a| a.to_location().is_some()) {
                return Some(anchor.clone());
            }
        }
        current = ancestor.parent();
    }
    None
}

/// Space-joined house lookup text from the current field texts.
pub fn compose_house_query(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the query `field` issues for its current text.
pub fn field_query(field: AddressField, fields: &[FieldSlot; 4]) -> FieldQuery {
    let text_of = move |f: AddressField| fields[f.index()].text.as_str();

    match field {
        AddressField::Region => FieldQuery {
            field,
            text: text_of(field).trim().to_string(),
            scope: None,
        },
        AddressField::City | AddressField::Street => FieldQuery {
            field,
            text: text_of(field).trim().to_string(),
            scope: nearest_scope(fields, field),
        },
        AddressField::House => FieldQuery {
            field,
            text: compose_house_query(&[
                text_of(AddressField::Region),
                text_of(AddressField::City),
                text_of(AddressField::Street),
                text_of(AddressField::House),
            ]),
            scope: None,
        },
    }
}

/// Clear every field after `resolved`, returning the fields touched.
///
/// Fields before `resolved` and `resolved` itself are left as they are.
pub fn clear_descendants(fields: &mut [FieldSlot; 4], resolved: AddressField) -> Vec<AddressField> {
    resolved
        .descendants()
        .iter()
        .map(|field| {
            fields[field.index()].clear();
            *field
        })
        .collect()
}
