use travel_checklist::engine::Checklist;
use travel_checklist::repository::MemoryStore;
use travel_checklist::store::{Store, StoreConfig, CHECKLIST_STORAGE_KEY};

// One test per binary: the logger is process-global.
#[test]
fn corrupt_snapshot_is_logged_and_replaced() {
    rolling_logger::init_memory_logger(64).unwrap();

    let mut backend = MemoryStore::with_entry(CHECKLIST_STORAGE_KEY, r#"[{"id":1,"#);
    let mut store: Store<_, Checklist> = Store::open(&mut backend, StoreConfig::checklist());

    assert_eq!(store.state(), &Checklist::default_template());
    assert!(!store.backend().contains_key(CHECKLIST_STORAGE_KEY));

    let lines = rolling_logger::recent_lines();
    assert!(
        lines
            .iter()
            .any(|l| l.contains("WARN") && l.contains("Discarding unreadable saved data")),
        "missing warning in {:?}",
        lines
    );

    store.reset();
    assert!(rolling_logger::recent_lines()
        .iter()
        .any(|l| l.contains("Resetting travel-checklist-items")));
}
