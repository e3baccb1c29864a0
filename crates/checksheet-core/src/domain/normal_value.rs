//! Normal Value
//!
//! The acceptable answer of a check item: one chosen option, or a min/max
//! range. Stored as `{"kind": "single_choice" | "range", ...}`.

use serde::{Deserialize, Serialize};
use super::response_type::ResponseType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalValue {
    SingleChoice {
        /// Empty, or one of the item's options
        #[serde(rename = "selectedOption", default)]
        selected_option: String,
    },
    /// Bounds are raw candidate strings; empty means unset.
    /// `min <= max` is not enforced.
    Range {
        #[serde(default)]
        min: String,
        #[serde(default)]
        max: String,
    },
}

impl NormalValue {
    pub fn empty_choice() -> Self {
        NormalValue::SingleChoice { selected_option: String::new() }
    }

    pub fn empty_range() -> Self {
        NormalValue::Range { min: String::new(), max: String::new() }
    }

    /// The normal value a freshly selected response type starts with
    pub fn initial_for(response_type: ResponseType) -> Option<Self> {
        match response_type {
            ResponseType::SingleChoice => Some(Self::empty_choice()),
            ResponseType::Temperature | ResponseType::Numeric => Some(Self::empty_range()),
            ResponseType::FreeText => None,
        }
    }

    pub fn fits(&self, response_type: ResponseType) -> bool {
        match self {
            NormalValue::SingleChoice { .. } => response_type == ResponseType::SingleChoice,
            NormalValue::Range { .. } => response_type.uses_range(),
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        match self {
            NormalValue::SingleChoice { selected_option } => Some(selected_option.as_str()),
            NormalValue::Range { .. } => None,
        }
    }

    pub fn range(&self) -> Option<(&str, &str)> {
        match self {
            NormalValue::Range { min, max } => Some((min.as_str(), max.as_str())),
            NormalValue::SingleChoice { .. } => None,
        }
    }
}
