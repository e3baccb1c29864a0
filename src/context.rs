//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::navigation::AppView;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub current_view: ReadSignal<AppView>,
    /// Page currently shown - write
    set_current_view: WriteSignal<AppView>,
}

impl AppContext {
    pub fn new(current_view: (ReadSignal<AppView>, WriteSignal<AppView>)) -> Self {
        Self {
            current_view: current_view.0,
            set_current_view: current_view.1,
        }
    }

    /// Switch to another page and record it in the browser history
    pub fn navigate(&self, view: AppView) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(view.path())) {
                web_sys::console::warn_1(&e);
            }
        }
        self.set_current_view.set(view);
    }

    /// Follow a back/forward step the browser already applied
    pub fn sync_with_location(&self) {
        self.set_current_view.set(AppView::from_location());
    }

    /// Switch to the page behind a link href
    pub fn follow(&self, href: &str) {
        self.navigate(AppView::from_path(href));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
