//! The event store: per-day CRUD over a persisted mapping.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::date_key::DateKey;
use crate::error::{AgendumError, AgendumResult};
use crate::event::{Event, EventDraft};
use crate::snapshot::{self, EventMap};

/// Owns the `DateKey -> Vec<Event>` mapping and the id counter.
///
/// Every mutation rewrites the full snapshot before returning, so persisted
/// state always reflects the last completed call. Ids are assigned from a
/// monotonic counter seeded past the highest id in the loaded snapshot, so
/// they stay unique across restarts.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: EventMap,
    next_id: u64,
}

impl EventStore {
    /// Open the store backed by the snapshot at `path`.
    ///
    /// A missing or unreadable snapshot opens as an empty store; nothing is
    /// written until the first mutation.
    #[tracing::instrument(skip(path))]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let events = snapshot::load(&path);
        let next_id = events
            .values()
            .flatten()
            .map(|event| event.id)
            .max()
            .unwrap_or(0)
            + 1;

        info!(
            file = %path.display(),
            days = events.len(),
            next_id,
            "opened event store"
        );

        EventStore {
            path,
            events,
            next_id,
        }
    }

    /// The events of a day, in insertion order. Empty for untouched days.
    pub fn list(&self, date: DateKey) -> &[Event] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append a new event to `date`'s list and persist.
    #[tracing::instrument(skip(self, draft), fields(date = %date))]
    pub fn add(&mut self, date: DateKey, draft: &EventDraft) -> AgendumResult<Event> {
        draft.validate()?;

        let event = Event {
            id: self.fresh_id(),
            time: draft.time.clone(),
            description: draft.description.clone(),
        };
        self.events.entry(date).or_default().push(event.clone());
        self.persist()?;

        debug!(id = event.id, "added event");
        Ok(event)
    }

    /// Replace an existing event's time and description in place and persist.
    ///
    /// The id and the event's position within the day are preserved.
    #[tracing::instrument(skip(self, draft), fields(date = %date))]
    pub fn edit(&mut self, date: DateKey, id: u64, draft: &EventDraft) -> AgendumResult<Event> {
        draft.validate()?;

        let Some(event) = self
            .events
            .get_mut(&date)
            .and_then(|list| list.iter_mut().find(|event| event.id == id))
        else {
            return Err(AgendumError::EventNotFound { date, id });
        };

        event.time = draft.time.clone();
        event.description = draft.description.clone();
        let updated = event.clone();
        self.persist()?;

        debug!("edited event");
        Ok(updated)
    }

    /// Remove the event with `id` from `date`'s list, if present, and persist.
    ///
    /// Deleting an id that does not exist is not an error.
    #[tracing::instrument(skip(self), fields(date = %date))]
    pub fn delete(&mut self, date: DateKey, id: u64) -> AgendumResult<()> {
        if let Some(list) = self.events.get_mut(&date) {
            list.retain(|event| event.id != id);

            // Days only stay in the mapping while they hold events
            if list.is_empty() {
                self.events.remove(&date);
            }
        }
        self.persist()
    }

    /// The full mapping, ordered by day.
    pub fn snapshot(&self) -> &EventMap {
        &self.events
    }

    /// Days that currently hold at least one event.
    pub fn days(&self) -> impl Iterator<Item = (DateKey, &[Event])> {
        self.events
            .iter()
            .map(|(date, events)| (*date, events.as_slice()))
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn persist(&self) -> AgendumResult<()> {
        snapshot::save(&self.path, &self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_store() -> (tempfile::TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path().join("events.json"));
        (dir, store)
    }

    fn march_15() -> DateKey {
        "2024-03-15".parse().unwrap()
    }

    #[test]
    fn test_list_on_untouched_day_is_empty() {
        let (_dir, store) = open_test_store();
        assert!(store.list(march_15()).is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let (_dir, mut store) = open_test_store();

        let event = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();

        let listed = store.list(march_15());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], event);
        assert_eq!(listed[0].time, "09:00");
        assert_eq!(listed[0].description, "Standup");
    }

    #[test]
    fn test_add_appends_and_assigns_fresh_ids() {
        let (_dir, mut store) = open_test_store();

        let first = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let second = store
            .add(march_15(), &EventDraft::new("14:30", "Review"))
            .unwrap();

        assert_ne!(first.id, second.id);

        let listed = store.list(march_15());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], first);
        assert_eq!(listed[1], second);
    }

    #[test]
    fn test_add_rejects_empty_fields_without_mutating() {
        let (_dir, mut store) = open_test_store();

        assert!(matches!(
            store.add(march_15(), &EventDraft::new("", "Standup")),
            Err(AgendumError::Validation(_))
        ));
        assert!(matches!(
            store.add(march_15(), &EventDraft::new("09:00", "")),
            Err(AgendumError::Validation(_))
        ));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_edit_preserves_id_and_position() {
        let (_dir, mut store) = open_test_store();

        let first = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let second = store
            .add(march_15(), &EventDraft::new("14:30", "Review"))
            .unwrap();

        let updated = store
            .edit(march_15(), first.id, &EventDraft::new("09:15", "Standup (moved)"))
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.time, "09:15");

        let listed = store.list(march_15());
        assert_eq!(listed[0], updated);
        assert_eq!(listed[1], second);
    }

    #[test]
    fn test_edit_missing_id_fails_and_leaves_mapping_unchanged() {
        let (_dir, mut store) = open_test_store();

        store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let before = store.snapshot().clone();

        let result = store.edit(march_15(), 999, &EventDraft::new("10:00", "Ghost"));
        assert!(matches!(
            result,
            Err(AgendumError::EventNotFound { id: 999, .. })
        ));
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_dir, mut store) = open_test_store();

        let first = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let second = store
            .add(march_15(), &EventDraft::new("14:30", "Review"))
            .unwrap();

        store.delete(march_15(), first.id).unwrap();

        let listed = store.list(march_15());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], second);
    }

    #[test]
    fn test_delete_missing_id_is_a_noop() {
        let (_dir, mut store) = open_test_store();

        store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let before = store.snapshot().clone();

        store.delete(march_15(), 999).unwrap();
        store.delete("2024-01-01".parse().unwrap(), 1).unwrap();
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_deleting_last_event_drops_the_day() {
        let (_dir, mut store) = open_test_store();

        let event = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        store.delete(march_15(), event.id).unwrap();

        assert!(store.snapshot().is_empty());
        assert!(store.list(march_15()).is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut store = EventStore::open(&path);
        let first = store
            .add(march_15(), &EventDraft::new("09:00", "Standup"))
            .unwrap();
        let second = store
            .add(march_15(), &EventDraft::new("14:30", "Review"))
            .unwrap();
        store.delete(march_15(), second.id).unwrap();
        drop(store);

        let mut reopened = EventStore::open(&path);
        let third = reopened
            .add(march_15(), &EventDraft::new("16:00", "Retro"))
            .unwrap();

        assert!(third.id > first.id);
        assert!(third.id > second.id);
    }
}
