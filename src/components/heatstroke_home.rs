//! Heatstroke Check Home Page
//!
//! Hub linking the settings editor and the records table.

use leptos::prelude::*;

use crate::components::LinkCard;
use crate::context::use_app_context;
use crate::models::HEATSTROKE_PAGES;
use crate::navigation::AppView;

#[component]
pub fn HeatstrokeHomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="app-panel p-7">
            <h1 class="text-3xl tracking-tight">"熱中症チェックシステム"</h1>
            <p class="mt-2 text-sm leading-6 text-muted-foreground">
                "目的に応じてページを選択してください（プロトタイプ用の画面遷移）。"
            </p>

            <div class="mt-7 grid gap-3">
                {HEATSTROKE_PAGES.iter().map(|page| view! {
                    <LinkCard link=page action_label="開く" />
                }).collect_view()}
            </div>

            <button
                type="button"
                class="app-link mt-7 inline-block"
                on:click=move |_| ctx.navigate(AppView::PrototypeIndex)
            >
                "プロトタイプ一覧へ戻る"
            </button>
        </section>
    }
}
