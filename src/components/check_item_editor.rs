//! Check Item Editor Component
//!
//! One card of the settings page: name, response type, and the options or
//! range editor that goes with the chosen type.

use leptos::prelude::*;
use checksheet_core::domain::derivation::{on_response_type_change, rename};
use checksheet_core::{ItemId, ResponseType};

use crate::components::{OptionListEditor, RangeEditor, ResponseTypeSelector};
use crate::store::{use_app_store, AppStateStoreFields, ItemHandle};

#[component]
pub fn CheckItemEditor(pattern_index: usize, item_id: ItemId) -> impl IntoView {
    let store = use_app_store();

    let position_id = item_id.clone();
    let position = Memo::new(move |_| {
        store.book()
            .read()
            .pattern(pattern_index)
            .and_then(|p| p.position_of(&position_id))
            .map(|i| i + 1)
            .unwrap_or(0)
    });

    let handle = ItemHandle::new(store, pattern_index, item_id);
    let response_type = Memo::new(move |_| {
        handle.get().map(|item| item.response_type).unwrap_or_default()
    });

    view! {
        <article class="rounded-lg border bg-background p-4">
            <div class="flex items-center justify-between">
                <p class="text-sm font-medium text-muted-foreground">
                    {move || format!("項目 {}", position.get())}
                </p>
                <button
                    type="button"
                    class="text-xs font-medium text-destructive hover:underline"
                    on:click=move |_| handle.delete()
                >
                    "削除"
                </button>
            </div>

            <div class="mt-3 grid gap-3 md:grid-cols-2">
                <label class="text-sm">
                    <span class="mb-1 block text-muted-foreground">"項目名"</span>
                    <input
                        class="app-input"
                        placeholder="項目名を入力"
                        prop:value=move || handle.get().map(|item| item.name).unwrap_or_default()
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            handle.modify(move |item| rename(item, name));
                        }
                    />
                </label>

                <label class="text-sm">
                    <span class="mb-1 block text-muted-foreground">"回答方法"</span>
                    <ResponseTypeSelector
                        current_type=response_type
                        on_change=move |ty| handle.modify(move |item| on_response_type_change(item, ty))
                    />
                </label>
            </div>

            {move || match response_type.get() {
                ResponseType::SingleChoice => view! { <OptionListEditor handle=handle /> }.into_any(),
                ty @ (ResponseType::Temperature | ResponseType::Numeric) => {
                    view! { <RangeEditor handle=handle response_type=ty /> }.into_any()
                }
                ResponseType::FreeText => ().into_any(),
            }}
        </article>
    }
}
