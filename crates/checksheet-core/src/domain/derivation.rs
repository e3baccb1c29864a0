//! Derivation Rules
//!
//! Pure item-to-item transforms applied by the editor. Changing the response
//! type resets the answer configuration; every options edit re-validates a
//! single choice normal value against the new option list.

use super::check_item::CheckItem;
use super::normal_value::NormalValue;
use super::response_type::ResponseType;

/// Switch the response type, resetting options and normal value
pub fn on_response_type_change(mut item: CheckItem, new_type: ResponseType) -> CheckItem {
    item.response_type = new_type;
    match new_type {
        ResponseType::SingleChoice => {
            if item.options.is_empty() {
                item.options = vec![String::new()];
            }
        }
        ResponseType::Temperature | ResponseType::Numeric | ResponseType::FreeText => {
            item.options.clear();
        }
    }
    item.normal_value = NormalValue::initial_for(new_type);
    item
}

/// Replace the options; a selected normal option that disappeared resets to empty
pub fn on_options_change(mut item: CheckItem, new_options: Vec<String>) -> CheckItem {
    if let Some(NormalValue::SingleChoice { selected_option }) = &mut item.normal_value {
        if !new_options.iter().any(|option| option == &*selected_option) {
            selected_option.clear();
        }
    }
    item.options = new_options;
    item
}

pub fn append_option(item: CheckItem) -> CheckItem {
    let mut options = item.options.clone();
    options.push(String::new());
    on_options_change(item, options)
}

/// Out-of-range index leaves the item unchanged
pub fn edit_option(item: CheckItem, index: usize, value: impl Into<String>) -> CheckItem {
    if index >= item.options.len() {
        return item;
    }
    let mut options = item.options.clone();
    options[index] = value.into();
    on_options_change(item, options)
}

/// Out-of-range index leaves the item unchanged
pub fn remove_option(item: CheckItem, index: usize) -> CheckItem {
    if index >= item.options.len() {
        return item;
    }
    let mut options = item.options.clone();
    options.remove(index);
    on_options_change(item, options)
}

pub fn select_normal_option(mut item: CheckItem, option: impl Into<String>) -> CheckItem {
    item.normal_value = Some(NormalValue::SingleChoice { selected_option: option.into() });
    item
}

pub fn set_range_min(item: CheckItem, value: impl Into<String>) -> CheckItem {
    let max = current_bound(&item, |_, max| max);
    set_range(item, value.into(), max)
}

pub fn set_range_max(item: CheckItem, value: impl Into<String>) -> CheckItem {
    let min = current_bound(&item, |min, _| min);
    set_range(item, min, value.into())
}

pub fn rename(mut item: CheckItem, name: impl Into<String>) -> CheckItem {
    item.name = name.into();
    item
}

/// Options offered by the normal value selector (blank ones are skipped)
pub fn choice_candidates(item: &CheckItem) -> Vec<String> {
    item.options
        .iter()
        .filter(|option| !option.trim().is_empty())
        .cloned()
        .collect()
}

fn current_bound(item: &CheckItem, pick: impl for<'a> Fn(&'a str, &'a str) -> &'a str) -> String {
    item.normal_value
        .as_ref()
        .and_then(NormalValue::range)
        .map(|(min, max)| pick(min, max).to_string())
        .unwrap_or_default()
}

fn set_range(mut item: CheckItem, min: String, max: String) -> CheckItem {
    item.normal_value = Some(NormalValue::Range { min, max });
    item
}
