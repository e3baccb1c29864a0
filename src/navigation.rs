//! Navigation
//!
//! Pages of the prototype and the paths that lead to them.

/// Page currently rendered by the app shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    PrototypeIndex,
    HeatstrokeHome,
    CheckItemSettings,
    CheckRecords,
}

impl AppView {
    pub fn path(&self) -> &'static str {
        match self {
            AppView::PrototypeIndex => "/",
            AppView::HeatstrokeHome => "/heatstroke_check",
            AppView::CheckItemSettings => "/heatstroke_check/check-item-settings",
            AppView::CheckRecords => "/heatstroke_check/check-records",
        }
    }

    /// Unknown paths fall back to the prototype index
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/heatstroke_check" => AppView::HeatstrokeHome,
            "/heatstroke_check/check-item-settings" => AppView::CheckItemSettings,
            "/heatstroke_check/check-records" => AppView::CheckRecords,
            _ => AppView::PrototypeIndex,
        }
    }

    /// View for the current browser location
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or_default()
    }
}
