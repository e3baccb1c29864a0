//! UI Components
//!
//! Pages and the check item editor pieces they are built from.

mod link_card;
mod notice_toast;
mod prototype_index;
mod heatstroke_home;
mod check_records;
mod check_item_settings;
mod pattern_tab_bar;
mod check_item_editor;
mod response_type_selector;
mod option_list_editor;
mod range_editor;

pub use link_card::LinkCard;
pub use notice_toast::NoticeToast;
pub use prototype_index::PrototypeIndexPage;
pub use heatstroke_home::HeatstrokeHomePage;
pub use check_records::CheckRecordsPage;
pub use check_item_settings::CheckItemSettingsPage;
pub use pattern_tab_bar::PatternTabBar;
pub use check_item_editor::CheckItemEditor;
pub use response_type_selector::ResponseTypeSelector;
pub use option_list_editor::OptionListEditor;
pub use range_editor::RangeEditor;
