//! Notice Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, NoticeKind};

/// Current transient notice, if any
#[component]
pub fn NoticeToast() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-area">
            {move || store.notice().get().map(|notice| {
                let class = match notice.kind {
                    NoticeKind::Success => "notice notice-success",
                    NoticeKind::Error => "notice notice-error",
                };
                view! { <div class=class role="status">{notice.message}</div> }
            })}
        </div>
    }
}
