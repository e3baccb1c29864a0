//! Range Editor Component
//!
//! Normal value bounds for temperature and numeric items, picked from the
//! fixed candidate lists.

use leptos::prelude::*;
use checksheet_core::domain::derivation::{set_range_max, set_range_min};
use checksheet_core::ResponseType;

use crate::store::ItemHandle;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

#[component]
pub fn RangeEditor(handle: ItemHandle, response_type: ResponseType) -> impl IntoView {
    let hint = match response_type {
        ResponseType::Temperature => "回答候補: 35.0℃ から 41.0℃ まで（0.1℃刻み）",
        _ => "回答候補: 0 から 100 まで",
    };

    view! {
        <div class="mt-4 rounded-md border bg-card p-3">
            <p class="text-sm text-muted-foreground">{hint}</p>
            <div class="mt-3 grid gap-3 md:grid-cols-2">
                <BoundSelect handle=handle response_type=response_type bound=Bound::Min />
                <BoundSelect handle=handle response_type=response_type bound=Bound::Max />
            </div>
        </div>
    }
}

#[component]
fn BoundSelect(handle: ItemHandle, response_type: ResponseType, bound: Bound) -> impl IntoView {
    let unit = if response_type == ResponseType::Temperature { "℃" } else { "" };
    let (label, suffix) = match bound {
        Bound::Min => ("正常値（以上）", "以上"),
        Bound::Max => ("正常値（以下）", "以下"),
    };

    let current = Memo::new(move |_| {
        handle.get()
            .and_then(|item| {
                let (min, max) = item.normal_value.as_ref()?.range()?;
                Some(if bound == Bound::Min { min.to_string() } else { max.to_string() })
            })
            .unwrap_or_default()
    });

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match bound {
            Bound::Min => handle.modify(move |item| set_range_min(item, value)),
            Bound::Max => handle.modify(move |item| set_range_max(item, value)),
        }
    };

    view! {
        <label class="text-sm">
            <span class="mb-1 block text-muted-foreground">{label}</span>
            <select class="app-select" on:change=on_change>
                <option value="" prop:selected=move || current.get().is_empty()>"未設定"</option>
                {response_type.candidates().into_iter().map(|value| {
                    let text = format!("{}{}{}", value, unit, suffix);
                    let candidate = value.clone();
                    view! {
                        <option
                            value=value
                            prop:selected=move || current.with(|c| *c == candidate)
                        >
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
