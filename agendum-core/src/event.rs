//! Event types.

use serde::{Deserialize, Serialize};

use crate::error::{AgendumError, AgendumResult};

/// A timestamped text event attached to a single day.
///
/// Events only exist inside their owning day's list in the store; the id is
/// assigned by the store and is unique across the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    /// Wall-clock time of day, e.g. "09:00"
    pub time: String,
    pub description: String,
}

/// In-progress form values for a new or edited event.
///
/// Not persisted; validated on submit. Whitespace-only input counts as
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub time: String,
    pub description: String,
}

impl EventDraft {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        EventDraft {
            time: time.into(),
            description: description.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.time.is_empty() && self.description.is_empty()
    }

    pub fn clear(&mut self) {
        *self = EventDraft::default();
    }

    /// Both fields are required.
    pub fn validate(&self) -> AgendumResult<()> {
        if self.time.is_empty() {
            return Err(AgendumError::Validation("Event time is required".into()));
        }
        if self.description.is_empty() {
            return Err(AgendumError::Validation(
                "Event description is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert!(EventDraft::new("09:00", "Standup").validate().is_ok());
        assert!(EventDraft::new("", "Standup").validate().is_err());
        assert!(EventDraft::new("09:00", "").validate().is_err());
        assert!(EventDraft::default().validate().is_err());
    }

    #[test]
    fn test_whitespace_only_input_is_accepted() {
        assert!(EventDraft::new(" ", "  ").validate().is_ok());
    }
}
