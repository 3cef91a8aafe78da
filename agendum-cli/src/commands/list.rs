use agendum_core::date_key::DateKey;
use agendum_core::store::EventStore;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::render_day;

pub fn run(store: &EventStore, date: DateKey) -> Result<()> {
    let header = date.date().format("%A, %-d %B %Y").to_string();
    println!("{}", header.bold());
    println!("{}", render_day(store.list(date)));
    Ok(())
}
