//! Interactive session for a single day.
//!
//! Drives the selection state machine the same way a grid UI would: the day
//! is selected up front, adding composes a fresh form, editing prefills it
//! from the chosen event, and picking "Cancel" backs out without mutating.

use agendum_core::date_key::DateKey;
use agendum_core::event::Event;
use agendum_core::selection::Selection;
use agendum_core::store::EventStore;
use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::render::render_day;

pub fn run(store: &mut EventStore, date: DateKey) -> Result<()> {
    let mut selection = Selection::default();
    selection.select_date(date);

    loop {
        println!();
        let header = date.date().format("%A, %-d %B %Y").to_string();
        println!("{}", header.bold());
        println!("{}", render_day(store.list(date)));
        println!();

        let mut actions = vec!["Add event"];
        if !store.list(date).is_empty() {
            actions.push("Edit event");
            actions.push("Delete event");
        }
        actions.push("Done");

        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Add event" => add_event(store, &mut selection)?,
            "Edit event" => edit_event(store, &mut selection, date)?,
            "Delete event" => delete_event(store, date)?,
            _ => break,
        }
    }

    Ok(())
}

fn add_event(store: &mut EventStore, selection: &mut Selection) -> Result<()> {
    let time: String = Input::new()
        .with_prompt("  Time (e.g. 09:00)")
        .interact_text()?;
    let description: String = Input::new().with_prompt("  Description").interact_text()?;

    selection.set_time(time);
    selection.set_description(description);

    match selection.submit(store) {
        Ok(event) => {
            let line = format!("  Added: {} {}", event.time, event.description);
            println!("{}", line.green());
        }
        Err(err) => eprintln!("  {}", err.to_string().red()),
    }
    Ok(())
}

fn edit_event(store: &mut EventStore, selection: &mut Selection, date: DateKey) -> Result<()> {
    let Some(target) = pick_event(store.list(date), "Edit which event?")? else {
        return Ok(());
    };

    selection.begin_edit(&target);

    let time: String = Input::new()
        .with_prompt("  Time")
        .default(selection.draft().time.clone())
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("  Description")
        .default(selection.draft().description.clone())
        .interact_text()?;

    selection.set_time(time);
    selection.set_description(description);

    match selection.submit(store) {
        Ok(event) => {
            let line = format!("  Updated: {} {}", event.time, event.description);
            println!("{}", line.green());
        }
        Err(err) => {
            selection.cancel_edit();
            eprintln!("  {}", err.to_string().red());
        }
    }
    Ok(())
}

fn delete_event(store: &mut EventStore, date: DateKey) -> Result<()> {
    let Some(target) = pick_event(store.list(date), "Delete which event?")? else {
        return Ok(());
    };

    store.delete(date, target.id)?;
    let line = format!("  Deleted: {} {}", target.time, target.description);
    println!("{}", line.red());
    Ok(())
}

/// Let the user pick one of the day's events, or back out.
fn pick_event(events: &[Event], prompt: &str) -> Result<Option<Event>> {
    let mut items: Vec<String> = events
        .iter()
        .map(|event| format!("{} {}", event.time, event.description))
        .collect();
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(events.get(choice).cloned())
}
