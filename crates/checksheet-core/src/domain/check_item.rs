//! Check Item Entity
//!
//! One question of a check sheet: a name, how it is answered, and what
//! counts as a normal answer.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::ids::ItemId;
use super::normal_value::NormalValue;
use super::response_type::ResponseType;

/// A single check item
///
/// `options` is always present and only meaningful for single choice.
/// `normal_value` is omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub id: ItemId,
    /// Free text, may be empty
    pub name: String,
    pub response_type: ResponseType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_value: Option<NormalValue>,
}

impl CheckItem {
    /// Blank free text item with a fresh id
    pub fn blank() -> Self {
        Self::blank_with_id(ItemId::generate())
    }

    pub fn blank_with_id(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            response_type: ResponseType::FreeText,
            options: Vec::new(),
            normal_value: None,
        }
    }

    /// Whether the normal value kind matches the response type
    pub fn is_consistent(&self) -> bool {
        match &self.normal_value {
            Some(normal) => normal.fits(self.response_type),
            None => self.response_type == ResponseType::FreeText,
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.normal_value.as_ref().and_then(NormalValue::selected_option)
    }
}

impl Entity for CheckItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_item() {
        let item = CheckItem::blank();
        assert!(item.name.is_empty());
        assert_eq!(item.response_type, ResponseType::FreeText);
        assert!(item.options.is_empty());
        assert!(item.normal_value.is_none());
        assert!(item.is_consistent());
    }

    #[test]
    fn test_free_text_omits_normal_value() {
        let item = CheckItem::blank_with_id(ItemId::from("a1"));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": "a1", "name": "", "responseType": "free_text", "options": []})
        );
    }

    #[test]
    fn test_missing_options_defaults_to_empty() {
        let item: CheckItem = serde_json::from_value(json!({
            "id": "a1", "name": "体温", "responseType": "temperature",
            "normalValue": {"kind": "range", "min": "35.0", "max": ""}
        }))
        .unwrap();
        assert!(item.options.is_empty());
        assert_eq!(item.normal_value, Some(NormalValue::Range {
            min: "35.0".to_string(),
            max: String::new(),
        }));
    }

    #[test]
    fn test_inconsistent_item_detected() {
        let mut item = CheckItem::blank();
        item.response_type = ResponseType::Numeric;
        assert!(!item.is_consistent());
        item.normal_value = Some(NormalValue::empty_range());
        assert!(item.is_consistent());
    }
}
