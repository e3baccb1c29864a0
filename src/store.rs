//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The pattern book
//! is the single source of truth; every editor callback goes through the
//! helpers below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use gloo_timers::future::TimeoutFuture;
use checksheet_core::{CheckItem, DomainError, ItemId, PatternBook};

use crate::commands;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown at the top of the page
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Patterns being edited
    pub book: PatternBook,
    /// Index of the pattern tab being shown
    pub active_pattern: usize,
    pub notice: Option<Notice>,
    /// Bumped per notice so a stale timer never clears a newer one
    pub notice_seq: u32,
}

impl AppState {
    pub fn new(book: PatternBook) -> Self {
        Self {
            book,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Reactive view of one check item plus a way to edit it
#[derive(Clone, Copy)]
pub struct ItemHandle {
    store: AppStore,
    pub pattern_index: usize,
    item_id: StoredValue<ItemId>,
    item: Memo<Option<CheckItem>>,
}

impl ItemHandle {
    pub fn new(store: AppStore, pattern_index: usize, item_id: ItemId) -> Self {
        let lookup_id = item_id.clone();
        let item = Memo::new(move |_| store.book().read().item(pattern_index, &lookup_id).cloned());
        Self {
            store,
            pattern_index,
            item_id: StoredValue::new(item_id),
            item,
        }
    }

    pub fn id(&self) -> ItemId {
        self.item_id.get_value()
    }

    /// Current item (tracked); `None` once deleted
    pub fn get(&self) -> Option<CheckItem> {
        self.item.get()
    }

    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(CheckItem) -> CheckItem,
    {
        store_modify_item(&self.store, self.pattern_index, &self.id(), f);
    }

    pub fn delete(&self) {
        store_delete_item(&self.store, self.pattern_index, &self.id());
    }
}

// ========================
// Store Helper Functions
// ========================

/// Add a pattern and switch to its tab; at the cap show a warning instead
pub fn store_add_pattern(store: &AppStore) {
    let result = store.book().write().add_pattern();
    match result {
        Ok(index) => {
            store.active_pattern().set(index);
            store_notify(store, NoticeKind::Success, "新しいパターンを追加しました");
        }
        Err(DomainError::CapacityReached { max }) => {
            store_notify(store, NoticeKind::Error, format!("パターンは最大{}つまでです", max));
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORE] add pattern rejected: {}", e).into());
        }
    }
}

/// Append a blank item to the active pattern
pub fn store_add_item(store: &AppStore) {
    let index = store.active_pattern().get_untracked();
    let result = store.book().write().add_item(index);
    match result {
        Ok(_) => store_notify(store, NoticeKind::Success, "項目を追加しました"),
        Err(e) => web_sys::console::warn_1(&format!("[STORE] add item rejected: {}", e).into()),
    }
}

/// Apply an editor transform to one item. Clears any pending notice.
pub fn store_modify_item<F>(store: &AppStore, pattern_index: usize, item_id: &ItemId, f: F)
where
    F: FnOnce(CheckItem) -> CheckItem,
{
    let result = store.book().write().modify_item(pattern_index, item_id, f);
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("[STORE] update item {} rejected: {}", item_id, e).into());
        return;
    }
    if store.notice().with_untracked(Option::is_some) {
        store.notice().set(None);
    }
}

pub fn store_delete_item(store: &AppStore, pattern_index: usize, item_id: &ItemId) {
    let result = store.book().write().delete_item(pattern_index, item_id);
    match result {
        Ok(()) => store_notify(store, NoticeKind::Success, "項目を削除しました"),
        Err(e) => web_sys::console::warn_1(&format!("[STORE] delete item {} rejected: {}", item_id, e).into()),
    }
}

/// Persist the whole book; failures leave the book as it is
pub fn store_save(store: &AppStore) {
    let result = commands::save_patterns(&store.book().read_untracked());
    match result {
        Ok(()) => store_notify(store, NoticeKind::Success, "保存しました"),
        Err(e) => {
            web_sys::console::error_1(&format!("[STORE] save failed: {}", e).into());
            store_notify(store, NoticeKind::Error, "保存に失敗しました");
        }
    }
}

/// Show a notice and clear it after the configured timeout
pub fn store_notify(store: &AppStore, kind: NoticeKind, message: impl Into<String>) {
    let seq = store.notice_seq().get_untracked().wrapping_add(1);
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { seq, kind, message: message.into() }));

    let timeout_ms = store.book().read_untracked().config().notice_timeout_ms;
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        let current = store.notice().with_untracked(|notice| notice.as_ref().map(|n| n.seq));
        if current == Some(seq) {
            store.notice().set(None);
        }
    });
}
