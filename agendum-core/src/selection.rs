//! Day-selection and form workflow state.
//!
//! Tracks which day is selected, the in-progress form values, and whether an
//! existing event is being edited. All of it is ephemeral: nothing here is
//! persisted, and changing the visible month resets the lot.

use crate::date_key::DateKey;
use crate::error::{AgendumError, AgendumResult};
use crate::event::{Event, EventDraft};
use crate::grid::DayCell;
use crate::store::EventStore;

/// Where the workflow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No day selected (initial state, and after a month change).
    NoSelection,
    /// A day is selected; the form is untouched.
    Idle,
    /// A day is selected and a new event is being composed.
    Composing,
    /// An existing event (by id) is being edited.
    Editing(u64),
}

/// Selection and form state for the day panel.
#[derive(Debug, Default)]
pub struct Selection {
    day: Option<DateKey>,
    draft: EventDraft,
    editing: Option<u64>,
}

impl Selection {
    /// Select a day cell. Empty padding cells are not selectable; selecting
    /// a day clears the form and any in-progress edit.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, cell: &DayCell) -> bool {
        match cell.date() {
            Some(date) => {
                self.select_date(date);
                true
            }
            None => false,
        }
    }

    /// Select a day directly by its key.
    pub fn select_date(&mut self, date: DateKey) {
        self.day = Some(date);
        self.draft.clear();
        self.editing = None;
    }

    pub fn selected_day(&self) -> Option<DateKey> {
        self.day
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.time = time.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Start editing an existing event: the form is prefilled with its
    /// current values.
    pub fn begin_edit(&mut self, event: &Event) {
        self.editing = Some(event.id);
        self.draft = EventDraft::new(event.time.clone(), event.description.clone());
    }

    /// Abandon an in-progress edit without mutating anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Submit the form against the store: `edit` when an event is being
    /// edited, `add` otherwise.
    ///
    /// On success the form and edit target are cleared; on failure they are
    /// left as-is so the caller can re-prompt.
    pub fn submit(&mut self, store: &mut EventStore) -> AgendumResult<Event> {
        let Some(day) = self.day else {
            return Err(AgendumError::Validation("No day is selected".into()));
        };

        let result = match self.editing {
            Some(id) => store.edit(day, id, &self.draft),
            None => store.add(day, &self.draft),
        };

        if result.is_ok() {
            self.editing = None;
            self.draft.clear();
        }
        result
    }

    /// Reset to no selection, e.g. when the visible month changes.
    pub fn reset(&mut self) {
        *self = Selection::default();
    }

    pub fn mode(&self) -> Mode {
        if self.day.is_none() {
            return Mode::NoSelection;
        }
        match self.editing {
            Some(id) => Mode::Editing(id),
            None if self.draft.is_blank() => Mode::Idle,
            None => Mode::Composing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::month_grid;
    use chrono::NaiveDate;

    fn open_test_store() -> (tempfile::TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path().join("events.json"));
        (dir, store)
    }

    fn march_cells() -> Vec<DayCell> {
        month_grid(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_starts_with_no_selection() {
        let selection = Selection::default();
        assert_eq!(selection.mode(), Mode::NoSelection);
        assert_eq!(selection.selected_day(), None);
    }

    #[test]
    fn test_empty_cells_are_not_selectable() {
        let mut selection = Selection::default();
        let cells = march_cells();

        // 2024-03-01 is a Friday, so the grid starts with padding
        assert!(cells[0].is_empty());
        assert!(!selection.select(&cells[0]));
        assert_eq!(selection.mode(), Mode::NoSelection);
    }

    #[test]
    fn test_selecting_a_day_clears_form_and_edit_target() {
        let mut selection = Selection::default();
        selection.select_date("2024-03-15".parse().unwrap());
        selection.set_time("09:00");
        selection.set_description("Standup");
        assert_eq!(selection.mode(), Mode::Composing);

        let cells = march_cells();
        let day_cell = cells.iter().find(|c| !c.is_empty()).unwrap();
        assert!(selection.select(day_cell));

        assert_eq!(selection.mode(), Mode::Idle);
        assert!(selection.draft().is_blank());
    }

    #[test]
    fn test_submit_without_selection_fails() {
        let (_dir, mut store) = open_test_store();
        let mut selection = Selection::default();
        selection.set_time("09:00");
        selection.set_description("Standup");

        assert!(selection.submit(&mut store).is_err());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_submit_adds_then_returns_to_idle() {
        let (_dir, mut store) = open_test_store();
        let mut selection = Selection::default();
        selection.select_date("2024-03-15".parse().unwrap());

        selection.set_time("09:00");
        selection.set_description("Standup");
        let event = selection.submit(&mut store).unwrap();

        assert_eq!(selection.mode(), Mode::Idle);
        let listed = store.list("2024-03-15".parse().unwrap());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], event);
    }

    #[test]
    fn test_submit_failure_keeps_the_form() {
        let (_dir, mut store) = open_test_store();
        let mut selection = Selection::default();
        selection.select_date("2024-03-15".parse().unwrap());
        selection.set_description("Standup"); // no time

        assert!(selection.submit(&mut store).is_err());
        assert_eq!(selection.mode(), Mode::Composing);
        assert_eq!(selection.draft().description, "Standup");
    }

    #[test]
    fn test_edit_flow_prefills_then_updates_in_place() {
        let (_dir, mut store) = open_test_store();
        let date: DateKey = "2024-03-15".parse().unwrap();
        let event = store.add(date, &EventDraft::new("09:00", "Standup")).unwrap();

        let mut selection = Selection::default();
        selection.select_date(date);
        selection.begin_edit(&event);

        assert_eq!(selection.mode(), Mode::Editing(event.id));
        assert_eq!(selection.draft().time, "09:00");
        assert_eq!(selection.draft().description, "Standup");

        selection.set_time("09:15");
        let updated = selection.submit(&mut store).unwrap();

        assert_eq!(updated.id, event.id);
        assert_eq!(updated.time, "09:15");
        assert_eq!(selection.mode(), Mode::Idle);
    }

    #[test]
    fn test_cancel_edit_returns_to_idle_without_mutation() {
        let (_dir, mut store) = open_test_store();
        let date: DateKey = "2024-03-15".parse().unwrap();
        let event = store.add(date, &EventDraft::new("09:00", "Standup")).unwrap();
        let before = store.snapshot().clone();

        let mut selection = Selection::default();
        selection.select_date(date);
        selection.begin_edit(&event);
        selection.cancel_edit();

        assert_eq!(selection.mode(), Mode::Idle);
        assert!(selection.draft().is_blank());
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_month_change_resets_to_no_selection() {
        let mut selection = Selection::default();
        selection.select_date("2024-03-15".parse().unwrap());
        selection.set_time("09:00");

        selection.reset();
        assert_eq!(selection.mode(), Mode::NoSelection);
        assert!(selection.draft().is_blank());
    }
}
