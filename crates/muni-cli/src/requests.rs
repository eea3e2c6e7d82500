//! # Requests Subcommand
//!
//! Help request tracking: list, assign, start, close.

use clap::{Args, Subcommand};

use muni_admin::AdminConsole;
use muni_core::HelpRequestId;
use muni_state::HelpRequestStatus;

use crate::print_json;

/// Arguments for the requests subcommand.
#[derive(Args, Debug)]
pub struct RequestsArgs {
    #[command(subcommand)]
    pub action: RequestAction,
}

#[derive(Subcommand, Debug)]
pub enum RequestAction {
    /// List help requests with their work status.
    List,
    /// Assign a request to a ward team.
    Assign {
        /// Request identifier.
        id: HelpRequestId,
        /// Team to assign (e.g. "Electrician Team A").
        #[arg(long)]
        to: String,
    },
    /// Start work on an open request.
    Start {
        /// Request identifier.
        id: HelpRequestId,
    },
    /// Close an in-progress request.
    Close {
        /// Request identifier.
        id: HelpRequestId,
    },
}

pub fn run(args: RequestsArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        RequestAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.help_requests());
            }
            for request in store.help_requests() {
                let assigned = request
                    .assigned_to
                    .as_deref()
                    .map(|team| format!(" -> {team}"))
                    .unwrap_or_default();
                println!(
                    "{}  {:<12} {} ({}){assigned}",
                    request.id,
                    request.status.to_string(),
                    request.kind,
                    request.citizen_name
                );
            }
        }
        RequestAction::Assign { id, to } => {
            console.assign_help_request(id, &to)?;
            println!("assigned {id} to {to}");
        }
        RequestAction::Start { id } => {
            console.update_help_request_status(id, HelpRequestStatus::InProgress)?;
            println!("started {id}");
        }
        RequestAction::Close { id } => {
            console.update_help_request_status(id, HelpRequestStatus::Closed)?;
            println!("closed {id}");
        }
    }
    Ok(())
}
