//! Prototype Index Page

use leptos::prelude::*;

use crate::components::LinkCard;
use crate::models::PROTOTYPE_LINKS;

#[component]
pub fn PrototypeIndexPage() -> impl IntoView {
    view! {
        <section class="app-panel p-7">
            <h1 class="text-3xl tracking-tight">"プロトタイプ一覧"</h1>
            <p class="mt-2 text-sm leading-6 text-muted-foreground">
                "ここから各プロトタイプに移動できます。"
            </p>

            <div class="mt-7 grid gap-3">
                {PROTOTYPE_LINKS.iter().map(|link| view! {
                    <LinkCard link=link action_label="移動する" />
                }).collect_view()}
            </div>
        </section>
    }
}
