use agendum_core::date_key::DateKey;
use agendum_core::event::EventDraft;
use agendum_core::store::EventStore;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore, date: DateKey, time: String, description: String) -> Result<()> {
    let event = store.add(date, &EventDraft::new(time, description))?;

    let line = format!("Added to {}: {} {} (#{})", date, event.time, event.description, event.id);
    println!("{}", line.green());
    Ok(())
}
