use agendum_core::date_key::DateKey;
use agendum_core::store::EventStore;
use anyhow::Result;

pub fn run(store: &mut EventStore, date: DateKey, id: u64) -> Result<()> {
    store.delete(date, id)?;
    println!("Deleted event #{} from {}", id, date);
    Ok(())
}
