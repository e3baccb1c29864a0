//! Link Card Component
//!
//! Clickable card used by the navigation pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::PrototypeLink;

#[component]
pub fn LinkCard(link: &'static PrototypeLink, action_label: &'static str) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            type="button"
            class="link-card rounded-lg border bg-card px-5 py-4 text-left transition hover:bg-accent"
            data-link-id=link.id
            on:click=move |_| ctx.follow(link.href)
        >
            <p class="text-lg font-medium text-card-foreground">{link.title}</p>
            <p class="mt-1.5 text-sm text-muted-foreground">{link.description}</p>
            <p class="mt-3 text-sm font-medium text-primary">{action_label}</p>
        </button>
    }
}
