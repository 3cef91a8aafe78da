//! Snapshot persistence for the event mapping.
//!
//! The whole mapping lives in a single JSON document, keyed by date string:
//! `{"2024-03-15": [{"id": 1, "time": "09:00", "description": "Standup"}]}`.
//! It is read once when the store opens and rewritten wholesale after every
//! mutation; there is no delta persistence. A missing or malformed file loads
//! as an empty mapping rather than an error, so a corrupted snapshot costs
//! the data but never the session.
//!
//! Writes go through a temp file in the same directory and are renamed into
//! place, so a crash mid-write leaves the previous snapshot intact. Multiple
//! processes writing the same slot are last-writer-wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::date_key::DateKey;
use crate::error::{AgendumError, AgendumResult};
use crate::event::Event;

/// The full event mapping: one ordered event list per day.
pub type EventMap = BTreeMap<DateKey, Vec<Event>>;

/// Load the snapshot at `path`, substituting an empty mapping if the file is
/// absent, unreadable, or malformed.
#[tracing::instrument(skip(path), fields(file = %path.display()))]
pub fn load(path: &Path) -> EventMap {
    if !path.exists() {
        debug!("no snapshot yet, starting empty");
        return EventMap::new();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "failed to read snapshot, starting empty");
            return EventMap::new();
        }
    };

    match serde_json::from_str::<EventMap>(&raw) {
        Ok(events) => {
            debug!(days = events.len(), "loaded snapshot");
            events
        }
        Err(err) => {
            warn!(error = %err, "malformed snapshot, starting empty");
            EventMap::new()
        }
    }
}

/// Write the full mapping to `path`, atomically.
#[tracing::instrument(skip(path, events), fields(file = %path.display()))]
pub fn save(path: &Path, events: &EventMap) -> AgendumResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut temp, events)
        .map_err(|err| AgendumError::Serialization(err.to_string()))?;
    temp.flush()?;
    temp.persist(path).map_err(|err| AgendumError::Io(err.error))?;

    debug!(days = events.len(), "saved snapshot");
    Ok(())
}
