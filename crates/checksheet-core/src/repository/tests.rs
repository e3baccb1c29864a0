//! Repository Integration Tests
//!
//! PatternBook save/load through DocumentRepository over the memory and
//! file stores.

#[cfg(test)]
mod tests {
    use crate::config::{EditorConfig, LEGACY_STORAGE_KEY, STORAGE_KEY};
    use crate::domain::derivation::*;
    use crate::domain::{NormalValue, ResponseType};
    use crate::editor::{LoadOutcome, PatternBook};
    use crate::repository::{
        DocumentRepository, JsonFileStore, MemoryStore, PatternRepository, StorageError,
    };
    use serde_json::json;

    /// Two patterns covering all four response types with normal values set
    fn populated_book() -> PatternBook {
        let mut book = PatternBook::default();
        book.add_pattern().unwrap();
        let ids: Vec<_> = book.patterns()[0].items.iter().map(|i| i.id.clone()).collect();

        book.modify_item(0, &ids[0], |item| rename(item, "作業内容")).unwrap();
        book.modify_item(0, &ids[1], |item| {
            let item = on_response_type_change(rename(item, "体調"), ResponseType::SingleChoice);
            let item = edit_option(item, 0, "良い");
            let item = edit_option(append_option(item), 1, "悪い");
            select_normal_option(item, "良い")
        })
        .unwrap();
        book.modify_item(0, &ids[2], |item| {
            let item = on_response_type_change(rename(item, "体温"), ResponseType::Temperature);
            set_range_max(set_range_min(item, "35.0"), "37.5")
        })
        .unwrap();
        book.modify_item(0, &ids[3], |item| {
            let item = on_response_type_change(rename(item, "睡眠時間"), ResponseType::Numeric);
            set_range_min(item, "6")
        })
        .unwrap();
        book.delete_item(0, &ids[9]).unwrap();
        book.add_item(1).unwrap();
        book
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let repo = DocumentRepository::new(MemoryStore::new(), STORAGE_KEY);
        let book = populated_book();
        book.save(&repo).expect("save failed");

        let mut loaded = PatternBook::default();
        assert!(loaded.load(&repo));
        assert_eq!(loaded.patterns(), book.patterns());
    }

    #[test]
    fn test_saved_document_uses_canonical_layout() {
        let repo = DocumentRepository::new(MemoryStore::new(), STORAGE_KEY);
        populated_book().save(&repo).unwrap();

        let raw = repo.store().get(STORAGE_KEY).expect("document missing");
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let items = &doc[0]["items"];
        assert_eq!(items[0]["responseType"], json!("free_text"));
        assert!(items[0].get("normalValue").is_none());
        assert_eq!(
            items[1]["normalValue"],
            json!({"kind": "single_choice", "selectedOption": "良い"})
        );
        assert_eq!(items[2]["normalValue"], json!({"kind": "range", "min": "35.0", "max": "37.5"}));
        assert_eq!(items[3]["options"], json!([]));
    }

    #[test]
    fn test_load_without_document_keeps_default() {
        let repo = DocumentRepository::new(MemoryStore::new(), STORAGE_KEY);
        let mut book = PatternBook::default();
        let before = book.clone();
        assert!(!book.load(&repo));
        assert_eq!(book, before);
    }

    #[test]
    fn test_corrupt_document_keeps_default() {
        let store = MemoryStore::new();
        store.insert(STORAGE_KEY, "{not json");
        let repo = DocumentRepository::new(store, STORAGE_KEY);

        assert!(matches!(repo.load(), Err(StorageError::Parse { .. })));
        let mut book = PatternBook::default();
        let before = book.clone();
        assert!(book.try_load(&repo).is_err());
        assert_eq!(book, before);

        let mut book = PatternBook::new(EditorConfig::default());
        assert!(!book.load(&repo));
        assert_eq!(book.len(), 1);
        assert_eq!(book.patterns()[0].items.len(), 10);
    }

    #[test]
    fn test_empty_collection_keeps_default() {
        let store = MemoryStore::new();
        store.insert(STORAGE_KEY, "[]");
        let repo = DocumentRepository::new(store, STORAGE_KEY);

        let mut book = PatternBook::default();
        assert!(!book.load(&repo));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_oversized_collection_is_truncated() {
        let store = MemoryStore::new();
        let patterns: Vec<_> = (0..7)
            .map(|i| json!({"id": format!("p{}", i), "name": format!("P{}", i), "items": []}))
            .collect();
        store.insert(STORAGE_KEY, &serde_json::to_string(&patterns).unwrap());
        let repo = DocumentRepository::new(store, STORAGE_KEY);

        let mut book = PatternBook::default();
        assert_eq!(book.try_load(&repo).unwrap(), LoadOutcome::Replaced { dropped: 2 });
        assert_eq!(book.len(), 5);
        assert_eq!(book.patterns()[4].name, "P4");
    }

    #[test]
    fn test_quota_failure_is_reported_and_state_kept() {
        let repo = DocumentRepository::new(MemoryStore::with_quota(64), STORAGE_KEY);
        let book = populated_book();
        let before = book.clone();

        assert!(matches!(book.save(&repo), Err(StorageError::QuotaExceeded)));
        assert_eq!(book, before);
        assert!(repo.store().get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_legacy_document_is_migrated() {
        let store = MemoryStore::new();
        store.insert(
            LEGACY_STORAGE_KEY,
            &json!([{
                "id": "abc1234", "name": "パターン1",
                "items": [
                    {"id": "i1", "name": "体温", "responseType": "temperature",
                     "normalValue": {"type": "range", "min": 35, "max": 37.5}},
                    {"id": "i2", "name": "", "responseType": "free_text"}
                ]
            }])
            .to_string(),
        );
        let repo = DocumentRepository::from_config(store, &EditorConfig::default());

        let mut book = PatternBook::default();
        assert!(book.load(&repo));
        let items = &book.patterns()[0].items;
        assert_eq!(book.patterns()[0].id.as_str(), "abc1234");
        assert_eq!(
            items[0].normal_value,
            Some(NormalValue::Range { min: "35.0".to_string(), max: "37.5".to_string() })
        );
        assert!(items[1].options.is_empty());

        // Next save lands under the canonical key; the legacy key is left alone
        book.save(&repo).unwrap();
        assert!(repo.store().get(STORAGE_KEY).is_some());
        assert!(repo.store().get(LEGACY_STORAGE_KEY).is_some());
    }

    #[test]
    fn test_canonical_key_wins_over_legacy() {
        let store = MemoryStore::new();
        store.insert(LEGACY_STORAGE_KEY, r#"[{"id":"old","name":"旧","items":[]}]"#);
        store.insert(STORAGE_KEY, r#"[{"id":"new","name":"新","items":[]}]"#);
        let repo = DocumentRepository::new(store, STORAGE_KEY).with_legacy_key(LEGACY_STORAGE_KEY);

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded[0].name, "新");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = DocumentRepository::new(JsonFileStore::new(dir.path().join("data")), STORAGE_KEY);
        assert!(repo.load().unwrap().is_none());

        let book = populated_book();
        book.save(&repo).expect("save failed");
        assert!(dir.path().join("data").join(format!("{}.json", STORAGE_KEY)).exists());

        let mut loaded = PatternBook::new(EditorConfig::default());
        assert_eq!(loaded.try_load(&repo).unwrap(), LoadOutcome::Replaced { dropped: 0 });
        assert_eq!(loaded.patterns(), book.patterns());
    }

    #[test]
    fn test_file_store_overwrites_previous_save() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = DocumentRepository::new(JsonFileStore::new(dir.path()), STORAGE_KEY);

        let mut book = PatternBook::default();
        book.save(&repo).unwrap();
        book.add_pattern().unwrap();
        book.save(&repo).unwrap();

        assert_eq!(repo.load().unwrap().map(|p| p.len()), Some(2));
    }
}
