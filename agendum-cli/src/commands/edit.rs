use agendum_core::date_key::DateKey;
use agendum_core::event::EventDraft;
use agendum_core::store::EventStore;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(
    store: &mut EventStore,
    date: DateKey,
    id: u64,
    time: String,
    description: String,
) -> Result<()> {
    let event = store.edit(date, id, &EventDraft::new(time, description))?;

    let line = format!("Updated #{}: {} {}", event.id, event.time, event.description);
    println!("{}", line.green());
    Ok(())
}
