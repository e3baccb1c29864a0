//! Option List Editor Component
//!
//! Options of a single choice item and the normal value picked among them.
//! Rows are keyed by index so typing updates the input in place.

use leptos::prelude::*;
use checksheet_core::domain::derivation::{
    append_option, choice_candidates, edit_option, remove_option, select_normal_option,
};

use crate::store::ItemHandle;

#[component]
pub fn OptionListEditor(handle: ItemHandle) -> impl IntoView {
    let option_count = move || handle.get().map(|item| item.options.len()).unwrap_or(0);
    let option_at = move |index: usize| {
        handle.get()
            .and_then(|item| item.options.get(index).cloned())
            .unwrap_or_default()
    };
    let selected = move || {
        handle.get()
            .and_then(|item| item.selected_option().map(str::to_string))
            .unwrap_or_default()
    };
    let candidates = move || handle.get().map(|item| choice_candidates(&item)).unwrap_or_default();

    view! {
        <div class="mt-4 rounded-md border bg-card p-3">
            <p class="text-sm text-muted-foreground">"選択肢"</p>
            <div class="mt-2 space-y-2">
                <For
                    each=move || 0..option_count()
                    key=|index| *index
                    children=move |index| {
                        view! {
                            <div class="flex gap-2">
                                <input
                                    class="app-input"
                                    placeholder=format!("選択肢{}", index + 1)
                                    prop:value=move || option_at(index)
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        handle.modify(move |item| edit_option(item, index, value));
                                    }
                                />
                                <button
                                    type="button"
                                    class="app-btn-outline h-9 w-9 px-0"
                                    on:click=move |_| handle.modify(move |item| remove_option(item, index))
                                >
                                    "-"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <button
                type="button"
                class="app-btn-outline mt-3 h-8 px-3 text-xs"
                on:click=move |_| handle.modify(append_option)
            >
                "＋ 選択肢追加"
            </button>

            <div class="mt-4">
                <label class="text-sm">
                    <span class="mb-1 block text-muted-foreground">"正常値（選択肢）"</span>
                    <select
                        class="app-select"
                        on:change=move |ev| {
                            let option = event_target_value(&ev);
                            handle.modify(move |item| select_normal_option(item, option));
                        }
                    >
                        <option value="" prop:selected=move || selected().is_empty()>
                            "正常値を選択してください"
                        </option>
                        {move || candidates().into_iter().map(|option| {
                            let value = option.clone();
                            let is_selected = option.clone();
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || selected() == is_selected
                                >
                                    {option}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            </div>
        </div>
    }
}
