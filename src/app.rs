//! Heatstroke Check Prototype App
//!
//! Root component: provides the store and navigation context, then renders
//! the page for the current view.

use leptos::prelude::*;
use reactive_stores::Store;
use checksheet_core::EditorConfig;

use crate::commands;
use crate::components::{
    CheckItemSettingsPage, CheckRecordsPage, HeatstrokeHomePage, NoticeToast, PrototypeIndexPage,
};
use crate::context::AppContext;
use crate::navigation::AppView;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let book = commands::load_patterns(EditorConfig::default());
    provide_context(Store::new(AppState::new(book)));

    let ctx = AppContext::new(signal(AppView::from_location()));
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());

    let page = move || match ctx.current_view.get() {
        AppView::PrototypeIndex => view! { <PrototypeIndexPage /> }.into_any(),
        AppView::HeatstrokeHome => view! { <HeatstrokeHomePage /> }.into_any(),
        AppView::CheckItemSettings => view! { <CheckItemSettingsPage /> }.into_any(),
        AppView::CheckRecords => view! { <CheckRecordsPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <NoticeToast />
            <main class="main-content mx-auto w-full max-w-3xl px-4 py-10">
                {page}
            </main>
        </div>
    }
}
