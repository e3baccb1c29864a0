//! Pattern Tab Bar Component
//!
//! Tab bar for switching between patterns, with the add button shown while
//! below the pattern limit.

use leptos::prelude::*;
use checksheet_core::PatternId;

use crate::store::{store_add_pattern, use_app_store, AppStateStoreFields};

#[component]
pub fn PatternTabBar() -> impl IntoView {
    let store = use_app_store();

    let tabs = move || {
        store.book()
            .read()
            .patterns()
            .iter()
            .enumerate()
            .map(|(index, p)| (index, p.id.clone(), p.name.clone()))
            .collect::<Vec<(usize, PatternId, String)>>()
    };

    view! {
        <div class="flex items-center gap-2">
            <div class="flex h-9 flex-1 items-center gap-1 rounded-md bg-muted p-1">
                <For
                    each=tabs
                    key=|(index, id, name)| (*index, id.clone(), name.clone())
                    children=move |(index, _, name)| {
                        let is_active = move || store.active_pattern().get() == index;
                        let tab_class = move || {
                            if is_active() {
                                "app-btn h-7 px-3 py-1 text-xs bg-background text-foreground shadow-sm"
                            } else {
                                "app-btn h-7 px-3 py-1 text-xs text-muted-foreground hover:bg-background/70"
                            }
                        };

                        view! {
                            <button
                                type="button"
                                class=tab_class
                                on:click=move |_| store.active_pattern().set(index)
                            >
                                {name}
                            </button>
                        }
                    }
                />
            </div>

            <Show when=move || store.book().read().can_add_pattern()>
                <button
                    type="button"
                    class="app-btn-outline h-8 px-3 text-xs"
                    on:click=move |_| store_add_pattern(&store)
                >
                    "＋ パターン追加"
                </button>
            </Show>
        </div>
    }
}
