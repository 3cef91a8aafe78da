//! Terminal rendering for agendum types.
//!
//! Keeps all the owo_colors formatting in one place so the command modules
//! stay about behavior, not presentation.

use chrono::Datelike;
use owo_colors::OwoColorize;

use agendum_core::event::Event;
use agendum_core::grid::DayCell;
use agendum_core::month::{Month, WEEKDAY_LABELS};
use agendum_core::store::EventStore;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{:>5}", self.time);
        let id = format!("#{}", self.id);
        format!("{}  {} {}", time.bold(), self.description, id.dimmed())
    }
}

// Seven cells of width 4, space separated
const GRID_WIDTH: usize = 7 * 5 - 1;

/// Render the month grid with a header row and per-day event markers,
/// followed by the event counts for days that have any.
pub fn render_month(month: &Month, store: &EventStore) -> String {
    let mut lines = Vec::new();

    let label = format!("{:^1$}", month.label(), GRID_WIDTH);
    lines.push(label.bold().to_string());
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|day| format!("{:>4}", day))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for row in month.grid().chunks(7) {
        let cells: Vec<String> = row.iter().map(|cell| render_cell(cell, store)).collect();
        lines.push(cells.join(" "));
    }

    let busy_days: Vec<String> = store
        .days()
        .filter(|(date, _)| {
            date.date().year() == month.year() && date.date().month() == month.month()
        })
        .map(|(date, events)| {
            let count = format!("({} {})", events.len(), pluralize("event", events.len()));
            format!(" {:>2}  {}", date.date().day(), count.dimmed())
        })
        .collect();

    if !busy_days.is_empty() {
        lines.push(String::new());
        lines.extend(busy_days);
    }

    lines.join("\n")
}

fn render_cell(cell: &DayCell, store: &EventStore) -> String {
    match cell {
        DayCell::Empty { .. } => "    ".to_string(),
        DayCell::Day { number, date } => {
            // Mark days that already hold events
            let padded = format!("{:>3}", number);
            if store.list(*date).is_empty() {
                format!("{} ", padded)
            } else {
                format!("{}*", padded.bold())
            }
        }
    }
}

/// Render a day's event list, one line per event.
pub fn render_day(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events".dimmed().to_string();
    }

    events
        .iter()
        .map(|event| event.render())
        .collect::<Vec<_>>()
        .join("\n")
}

fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}
