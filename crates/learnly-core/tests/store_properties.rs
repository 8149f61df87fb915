//! Property tests for the assignment store invariants.

use chrono::{DateTime, Duration, Utc};
use learnly_core::AssignmentStore;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    "2026-08-06T00:00:00Z".parse().unwrap()
}

/// Strings guaranteed to contain at least one non-whitespace character.
fn nonblank() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 .-]{0,24}"
}

/// Whitespace-only strings, including the empty one.
fn blank() -> impl Strategy<Value = String> {
    "[ \t]{0,6}"
}

/// A store populated with arbitrary records: (title, due-offset-hours, completed).
fn populated_store() -> impl Strategy<Value = AssignmentStore> {
    prop::collection::vec(("[a-z]{1,12}", 0i64..720, any::<bool>()), 0..24).prop_map(|records| {
        let mut store = AssignmentStore::new();
        for (title, hours, completed) in records {
            let id = store
                .add(&title, "Course", Some(base() + Duration::hours(hours)))
                .map(|a| a.id.clone())
                .expect("nonblank add succeeds");
            if completed {
                store.toggle_completed(&id);
            }
        }
        store
    })
}

proptest! {
    #[test]
    fn valid_add_grows_store_by_one_at_the_head(title in nonblank(), course in nonblank()) {
        let mut store = AssignmentStore::seeded(base());
        let before = store.len();
        let added = store.add(&title, &course, None).map(|a| a.id.clone());

        prop_assert!(added.is_some());
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(&store.all()[0].id, added.as_ref().unwrap());
        prop_assert_eq!(store.all()[0].title.as_str(), title.trim());
    }

    #[test]
    fn blank_field_add_changes_nothing(title in blank(), course in nonblank()) {
        let mut store = AssignmentStore::seeded(base());
        let before = store.len();

        prop_assert!(store.add(&title, &course, None).is_none());
        prop_assert!(store.add(&course, &title, None).is_none());
        prop_assert_eq!(store.len(), before);
    }

    #[test]
    fn upcoming_is_sorted_and_open_only(store in populated_store()) {
        let upcoming = store.upcoming();
        prop_assert!(upcoming.iter().all(|a| !a.completed));
        prop_assert!(upcoming.windows(2).all(|w| w[0].due_at <= w[1].due_at));

        // Every open record appears exactly once.
        let open = store.all().iter().filter(|a| !a.completed).count();
        prop_assert_eq!(upcoming.len(), open);
    }

    #[test]
    fn double_toggle_is_identity(store in populated_store(), index in any::<prop::sample::Index>()) {
        let mut store = store;
        if store.is_empty() {
            return Ok(());
        }
        let id = store.all()[index.index(store.len())].id.clone();
        let before = store.all().iter().find(|a| a.id == id).unwrap().completed;

        store.toggle_completed(&id);
        store.toggle_completed(&id);

        let after = store.all().iter().find(|a| a.id == id).unwrap().completed;
        prop_assert_eq!(before, after);
    }
}
