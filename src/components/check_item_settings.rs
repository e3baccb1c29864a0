//! Check Item Settings Page
//!
//! Master editor for the check sheet: pattern tabs, the active pattern's
//! items, and the explicit save button.

use leptos::prelude::*;
use checksheet_core::ItemId;

use crate::components::{CheckItemEditor, PatternTabBar};
use crate::context::use_app_context;
use crate::navigation::AppView;
use crate::store::{store_add_item, store_save, use_app_store, AppStateStoreFields};

#[component]
pub fn CheckItemSettingsPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let item_ids = move |pattern_index: usize| {
        store.book()
            .read()
            .pattern(pattern_index)
            .map(|p| p.items.iter().map(|item| item.id.clone()).collect::<Vec<ItemId>>())
            .unwrap_or_default()
    };

    view! {
        <section class="mb-6">
            <h1 class="text-3xl tracking-tight">"熱中症チェックシート マスター作成"</h1>
            <p class="mt-2 text-sm leading-6 text-muted-foreground">
                "ここで設定した項目は、ユーザーがQRコードを読み込んでチェックを実施する際に表示される内容になります。"
            </p>
        </section>

        <section class="app-panel p-5">
            <PatternTabBar />

            <div class="mt-4 space-y-3">
                // Rebuilt per tab so editors are bound to the shown pattern
                {move || {
                    let pattern_index = store.active_pattern().get();
                    view! {
                        <For
                            each=move || item_ids(pattern_index)
                            key=|id| id.clone()
                            children=move |id| view! {
                                <CheckItemEditor pattern_index=pattern_index item_id=id />
                            }
                        />
                    }
                }}

                <button
                    type="button"
                    class="app-btn-outline w-full border-dashed"
                    on:click=move |_| store_add_item(&store)
                >
                    "＋ 項目を追加"
                </button>
            </div>
        </section>

        <div class="mt-8 flex items-center justify-between">
            <button type="button" class="app-link" on:click=move |_| ctx.navigate(AppView::HeatstrokeHome)>
                "熱中症チェックシステムトップへ戻る"
            </button>

            <button type="button" class="app-btn-primary min-w-32" on:click=move |_| store_save(&store)>
                "保存"
            </button>
        </div>
    }
}
