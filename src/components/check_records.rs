//! Check Records Page
//!
//! Read-only dummy table of per-company check status.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::DUMMY_RECORDS;
use crate::navigation::AppView;

#[component]
pub fn CheckRecordsPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="app-panel p-7">
            <h1 class="text-2xl tracking-tight">"熱中症チェック記録"</h1>
            <p class="mt-2 text-sm leading-6 text-muted-foreground">
                "協力会社ごと・ユーザーごとの記録状況を確認するダミー画面です。"
            </p>

            <div class="mt-7 overflow-hidden rounded-lg border bg-background">
                <table class="w-full text-left text-sm">
                    <thead class="bg-muted/70 text-muted-foreground">
                        <tr>
                            <th class="px-4 py-3 font-medium">"会社名"</th>
                            <th class="px-4 py-3 font-medium">"ユーザー"</th>
                            <th class="px-4 py-3 font-medium">"日付"</th>
                            <th class="px-4 py-3 font-medium">"状態"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {DUMMY_RECORDS.iter().map(|record| view! {
                            <tr class="border-t">
                                <td class="px-4 py-3">{record.company}</td>
                                <td class="px-4 py-3">{record.user}</td>
                                <td class="px-4 py-3 text-muted-foreground">{record.date}</td>
                                <td class="px-4 py-3">
                                    <span class=record.status.badge_class()>{record.status.label()}</span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="mt-7 flex gap-4">
                <button type="button" class="app-link" on:click=move |_| ctx.navigate(AppView::HeatstrokeHome)>
                    "熱中症チェックシステムトップへ戻る"
                </button>
                <button type="button" class="app-link" on:click=move |_| ctx.navigate(AppView::PrototypeIndex)>
                    "プロトタイプ一覧へ"
                </button>
            </div>
        </section>
    }
}
