//! End-to-end store scenarios through the public API: the full
//! open-dialog / submit / toggle / remove flows a session goes through,
//! observed purely via snapshots the way the view observes them.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

use tick::model::{Task, TaskId};
use tick::store::{Snapshot, StoreError, TaskStore};

#[test]
fn add_a_task_through_the_dialog() {
    let mut store = TaskStore::new();

    store.open_add_dialog();
    assert!(store.snapshot().dialog_visible);

    let id = store.add_task("Buy milk");

    let snapshot = store.snapshot();
    assert!(!snapshot.dialog_visible);
    assert_eq!(
        snapshot.tasks,
        vec![Task {
            id,
            text: "Buy milk".to_string(),
            done: false,
        }]
    );
}

#[test]
fn toggle_the_new_task() {
    let mut store = TaskStore::new();
    store.open_add_dialog();
    let id = store.add_task("Buy milk");

    store.toggle_done(id).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.tasks.len(), 1);
    assert!(snapshot.tasks[0].done);
}

#[test]
fn removing_a_nonexistent_id_changes_nothing() {
    let mut store = TaskStore::new();
    store.add_task("A");
    let before = store.snapshot();

    let result = store.remove_task(TaskId(42));

    assert_eq!(result, Err(StoreError::NotFound(TaskId(42))));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = TaskStore::new();
    store.add_task("A");
    store.add_task("B");

    let texts: Vec<String> = store
        .snapshot()
        .tasks
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, ["A", "B"]);
}

#[test]
fn length_changes_track_the_operations() {
    let mut store = TaskStore::new();
    assert_eq!(store.snapshot().tasks.len(), 0);

    let a = store.add_task("A");
    assert_eq!(store.snapshot().tasks.len(), 1);

    let b = store.add_task("B");
    assert_eq!(store.snapshot().tasks.len(), 2);

    // toggle does not change the length
    store.toggle_done(a).unwrap();
    assert_eq!(store.snapshot().tasks.len(), 2);

    // a matching remove is exactly -1
    store.remove_task(a).unwrap();
    assert_eq!(store.snapshot().tasks.len(), 1);

    // a missing remove is exactly 0
    let _ = store.remove_task(a);
    assert_eq!(store.snapshot().tasks.len(), 1);

    store.remove_task(b).unwrap();
    assert_eq!(store.snapshot().tasks.len(), 0);
}

#[test]
fn a_full_session_as_seen_by_a_subscriber() {
    let mut store = TaskStore::new();
    let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snap| sink.borrow_mut().push(snap.clone()));

    store.open_add_dialog();
    let milk = store.add_task("Buy milk");
    store.open_add_dialog();
    store.close_add_dialog();
    store.close_add_dialog(); // idempotent, publishes nothing
    store.toggle_done(milk).unwrap();
    store.remove_task(milk).unwrap();

    let published = seen.borrow();
    // open, add, open, close, toggle, remove
    assert_eq!(published.len(), 6);

    // every published snapshot is a consistent pair
    assert!(published[0].dialog_visible && published[0].tasks.is_empty());
    assert!(!published[1].dialog_visible && published[1].tasks.len() == 1);
    assert!(published[4].tasks[0].done);
    assert!(published[5].tasks.is_empty());
}

#[test]
fn ids_stay_unique_across_removal() {
    let mut store = TaskStore::new();
    let first = store.add_task("A");
    store.remove_task(first).unwrap();
    let second = store.add_task("A again");

    assert_ne!(first, second);
}
