//! Legacy Schema Migration
//!
//! The first editor prototype saved items with optional `options` and a
//! loosely typed normal value:
//! `{"type": "single_choice" | "range", "selectedOption"?, "min"?: number, "max"?: number}`.
//! These documents are read once and converted to the canonical model.

use serde::Deserialize;
use crate::domain::derivation::on_options_change;
use crate::domain::{CheckItem, ItemId, NormalValue, Pattern, PatternId, ResponseType};

#[derive(Debug, Deserialize)]
pub struct LegacyPattern {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    items: Vec<LegacyItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyItem {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    response_type: ResponseType,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    normal_value: Option<LegacyNormalValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyNormalValue {
    #[serde(rename = "type")]
    kind: LegacyKind,
    #[serde(default)]
    selected_option: Option<String>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LegacyKind {
    SingleChoice,
    Range,
}

/// Convert a legacy collection into canonical patterns
pub fn migrate(patterns: Vec<LegacyPattern>) -> Vec<Pattern> {
    patterns.into_iter().map(migrate_pattern).collect()
}

fn migrate_pattern(pattern: LegacyPattern) -> Pattern {
    Pattern {
        id: PatternId::from(pattern.id),
        name: pattern.name,
        items: pattern.items.into_iter().map(migrate_item).collect(),
    }
}

fn migrate_item(item: LegacyItem) -> CheckItem {
    let response_type = item.response_type;
    let normal_value = item.normal_value.map(|normal| match normal.kind {
        LegacyKind::SingleChoice => NormalValue::SingleChoice {
            selected_option: normal.selected_option.unwrap_or_default(),
        },
        LegacyKind::Range => NormalValue::Range {
            min: render_bound(response_type, normal.min),
            max: render_bound(response_type, normal.max),
        },
    });

    let mut migrated = CheckItem {
        id: ItemId::from(item.id),
        name: item.name,
        response_type,
        options: Vec::new(),
        normal_value,
    };
    if !migrated.is_consistent() {
        migrated.normal_value = NormalValue::initial_for(response_type);
    }
    // Legacy edits never cleared a selection whose option was renamed or removed
    on_options_change(migrated, item.options.unwrap_or_default())
}

/// Temperatures use one decimal place like the candidate list; other values
/// use the shortest decimal form ("36", "36.5")
fn render_bound(response_type: ResponseType, value: Option<f64>) -> String {
    match value {
        Some(v) if response_type == ResponseType::Temperature => format!("{:.1}", v),
        Some(v) => format!("{}", v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Vec<Pattern> {
        migrate(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_missing_options_and_normal_value() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [{"id": "i1", "name": "", "responseType": "free_text"}]
        }]));
        let item = &patterns[0].items[0];
        assert_eq!(item.id.as_str(), "i1");
        assert!(item.options.is_empty());
        assert_eq!(item.normal_value, None);
    }

    #[test]
    fn test_single_choice_without_selection() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [{
                "id": "i1", "name": "体調", "responseType": "single_choice",
                "options": ["良い", "悪い"], "normalValue": {"type": "single_choice"}
            }]
        }]));
        let item = &patterns[0].items[0];
        assert_eq!(item.options, vec!["良い".to_string(), "悪い".to_string()]);
        assert_eq!(item.normal_value, Some(NormalValue::empty_choice()));
    }

    #[test]
    fn test_stale_selection_is_reset() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [{
                "id": "i1", "name": "体調", "responseType": "single_choice",
                "options": ["AA", "B"],
                "normalValue": {"type": "single_choice", "selectedOption": "A"}
            }]
        }]));
        let item = &patterns[0].items[0];
        assert_eq!(item.options, vec!["AA".to_string(), "B".to_string()]);
        assert_eq!(item.selected_option(), Some(""));
    }

    #[test]
    fn test_valid_selection_is_kept() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [{
                "id": "i1", "name": "体調", "responseType": "single_choice",
                "options": ["良い", "悪い"],
                "normalValue": {"type": "single_choice", "selectedOption": "悪い"}
            }]
        }]));
        assert_eq!(patterns[0].items[0].selected_option(), Some("悪い"));
    }

    #[test]
    fn test_mismatched_normal_value_is_reset() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [
                {"id": "a", "name": "", "responseType": "free_text",
                 "normalValue": {"type": "range", "min": 1}},
                {"id": "b", "name": "", "responseType": "single_choice", "options": ["はい"]},
                {"id": "c", "name": "", "responseType": "temperature",
                 "normalValue": {"type": "single_choice", "selectedOption": "はい"}}
            ]
        }]));
        let items = &patterns[0].items;
        assert_eq!(items[0].normal_value, None);
        assert_eq!(items[1].normal_value, Some(NormalValue::empty_choice()));
        assert_eq!(items[2].normal_value, Some(NormalValue::empty_range()));
        assert!(items.iter().all(CheckItem::is_consistent));
    }

    #[test]
    fn test_numeric_bounds_become_strings() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [
                {"id": "t", "name": "体温", "responseType": "temperature",
                 "normalValue": {"type": "range", "min": 36, "max": 37.5}},
                {"id": "n", "name": "脈拍", "responseType": "numeric",
                 "normalValue": {"type": "range", "min": 50}}
            ]
        }]));
        let items = &patterns[0].items;
        assert_eq!(
            items[0].normal_value,
            Some(NormalValue::Range { min: "36.0".to_string(), max: "37.5".to_string() })
        );
        assert_eq!(
            items[1].normal_value,
            Some(NormalValue::Range { min: "50".to_string(), max: String::new() })
        );
    }

    #[test]
    fn test_null_bound_is_unset() {
        let patterns = parse(json!([{
            "id": "p1", "name": "パターン1",
            "items": [{"id": "n", "name": "", "responseType": "numeric",
                       "normalValue": {"type": "range", "min": null, "max": 80}}]
        }]));
        assert_eq!(
            patterns[0].items[0].normal_value,
            Some(NormalValue::Range { min: String::new(), max: "80".to_string() })
        );
    }
}
