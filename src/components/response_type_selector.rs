//! Response Type Selector Component
//!
//! Drop-down for a check item's answer format.

use leptos::prelude::*;
use checksheet_core::ResponseType;

#[component]
pub fn ResponseTypeSelector(
    #[prop(into)] current_type: Signal<ResponseType>,
    on_change: impl Fn(ResponseType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="app-select"
            on:change=move |ev| on_change(ResponseType::from_value(&event_target_value(&ev)))
        >
            {ResponseType::ALL.iter().map(|ty| {
                let ty = *ty;
                view! {
                    <option
                        value=ty.as_str()
                        prop:selected=move || current_type.get() == ty
                    >
                        {ty.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
