use agendum_core::month::Month;
use agendum_core::store::EventStore;
use anyhow::Result;

use crate::render::render_month;

pub fn run(store: &EventStore, month: Month) -> Result<()> {
    println!("{}", render_month(&month, store));
    Ok(())
}
