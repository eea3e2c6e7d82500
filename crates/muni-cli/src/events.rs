//! # Events Subcommand
//!
//! Volunteer events: list with fill ratio, create, register volunteers.

use clap::{Args, Subcommand};

use muni_admin::AdminConsole;
use muni_core::{EventId, Timestamp};
use muni_stats::fill_ratio;
use muni_store::VolunteerEventDraft;

use crate::print_json;

/// Arguments for the events subcommand.
#[derive(Args, Debug)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub action: EventAction,
}

#[derive(Subcommand, Debug)]
pub enum EventAction {
    /// List events with registration progress.
    List,
    /// Create a volunteer event.
    Create {
        /// Event name.
        #[arg(long)]
        name: String,
        /// What volunteers will do.
        #[arg(long, default_value = "")]
        description: String,
        /// Schedule, ISO8601 UTC (e.g. 2025-02-01T08:00:00Z).
        #[arg(long)]
        date: String,
        /// Venue.
        #[arg(long)]
        location: String,
        /// Volunteers requested.
        #[arg(long)]
        required: u32,
        /// Organizing body.
        #[arg(long, default_value = "Ward 5 Municipality Office")]
        organizer: String,
    },
    /// Register a volunteer for an event.
    Register {
        /// Event identifier.
        id: EventId,
        /// Volunteer name.
        #[arg(long)]
        name: String,
        /// Volunteer contact number.
        #[arg(long)]
        contact: String,
    },
}

pub fn run(args: EventsArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        EventAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.volunteer_events());
            }
            for event in store.volunteer_events() {
                println!(
                    "{}  {} — {}/{} volunteers ({:.0}%)",
                    event.id,
                    event.name,
                    event.registered_volunteers,
                    event.required_volunteers,
                    fill_ratio(event) * 100.0
                );
            }
        }
        EventAction::Create { name, description, date, location, required, organizer } => {
            let id = console.create_volunteer_event(VolunteerEventDraft {
                name,
                description,
                scheduled_for: Timestamp::parse(&date)?,
                location,
                required_volunteers: required,
                organizer,
            })?;
            println!("created {id}");
        }
        EventAction::Register { id, name, contact } => {
            console.register_volunteer(id, &name, &contact)?;
            println!("registered {name} for {id}");
        }
    }
    Ok(())
}
