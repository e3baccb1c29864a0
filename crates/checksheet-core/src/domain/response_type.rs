//! Response Type
//!
//! The answer format of a check item and the candidate values offered for
//! the selection-based formats.

use serde::{Deserialize, Serialize};

/// How a worker answers a check item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Free text answer
    #[default]
    FreeText,
    /// Pick one of the item's options
    SingleChoice,
    /// Body temperature, 35.0 to 41.0
    Temperature,
    /// Integer, 0 to 100
    Numeric,
}

impl ResponseType {
    /// Display order of the type selector
    pub const ALL: [ResponseType; 4] = [
        ResponseType::FreeText,
        ResponseType::SingleChoice,
        ResponseType::Temperature,
        ResponseType::Numeric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::FreeText => "free_text",
            ResponseType::SingleChoice => "single_choice",
            ResponseType::Temperature => "temperature",
            ResponseType::Numeric => "numeric",
        }
    }

    /// Parse a selector value; unknown values fall back to free text
    pub fn from_value(s: &str) -> Self {
        match s {
            "single_choice" => ResponseType::SingleChoice,
            "temperature" => ResponseType::Temperature,
            "numeric" => ResponseType::Numeric,
            _ => ResponseType::FreeText,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseType::FreeText => "自由記述",
            ResponseType::SingleChoice => "選択式（単数）",
            ResponseType::Temperature => "選択式（体温）",
            ResponseType::Numeric => "選択式（数値）",
        }
    }

    /// Whether the normal value of this type is a min/max range
    pub fn uses_range(&self) -> bool {
        matches!(self, ResponseType::Temperature | ResponseType::Numeric)
    }

    /// Candidate values for range bounds (empty for non-range types)
    pub fn candidates(&self) -> Vec<String> {
        match self {
            ResponseType::Temperature => temperature_candidates(),
            ResponseType::Numeric => numeric_candidates(),
            ResponseType::FreeText | ResponseType::SingleChoice => Vec::new(),
        }
    }
}

/// 35.0 to 41.0 in 0.1 steps (61 values)
pub fn temperature_candidates() -> Vec<String> {
    (350..=410u32)
        .map(|tenths| format!("{}.{}", tenths / 10, tenths % 10))
        .collect()
}

/// 0 to 100 (101 values)
pub fn numeric_candidates() -> Vec<String> {
    (0..=100u32).map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_candidates() {
        let values = temperature_candidates();
        assert_eq!(values.len(), 61);
        assert_eq!(values[0], "35.0");
        assert_eq!(values[3], "35.3");
        assert_eq!(values[25], "37.5");
        assert_eq!(values[60], "41.0");
    }

    #[test]
    fn test_numeric_candidates() {
        let values = numeric_candidates();
        assert_eq!(values.len(), 101);
        assert_eq!(values.first().map(String::as_str), Some("0"));
        assert_eq!(values.last().map(String::as_str), Some("100"));
    }

    #[test]
    fn test_value_round_trip() {
        for ty in ResponseType::ALL {
            assert_eq!(ResponseType::from_value(ty.as_str()), ty);
        }
        assert_eq!(ResponseType::from_value("checkbox"), ResponseType::FreeText);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ResponseType::SingleChoice).unwrap(),
            r#""single_choice""#
        );
        let ty: ResponseType = serde_json::from_str(r#""temperature""#).unwrap();
        assert_eq!(ty, ResponseType::Temperature);
    }
}
