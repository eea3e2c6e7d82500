//! # Poll Subcommand
//!
//! Community polls: list with vote shares, create, vote, close.

use clap::{Args, Subcommand};

use muni_admin::AdminConsole;
use muni_core::{PollId, Ward};
use muni_stats::option_shares;
use muni_store::PollDraft;

use crate::print_json;

/// Arguments for the poll subcommand.
#[derive(Args, Debug)]
pub struct PollArgs {
    #[command(subcommand)]
    pub action: PollAction,
}

#[derive(Subcommand, Debug)]
pub enum PollAction {
    /// List polls with option vote shares.
    List,
    /// Create a poll (starts active, zero votes).
    Create {
        /// The question to put to the ward.
        #[arg(long)]
        question: String,
        /// Answer option; repeat for each option.
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        /// Target ward label.
        #[arg(long, default_value = "Ward 5")]
        ward: String,
        /// Advertised duration.
        #[arg(long, default_value = "7 days")]
        duration: String,
    },
    /// Record one vote for an option.
    Vote {
        /// Poll identifier.
        id: PollId,
        /// Zero-based option index.
        #[arg(long)]
        option: usize,
    },
    /// Close a poll, optionally publishing a decision.
    Close {
        /// Poll identifier.
        id: PollId,
        /// Administrator decision to publish.
        #[arg(long)]
        decision: Option<String>,
    },
}

pub fn run(args: PollArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        PollAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.polls());
            }
            for poll in store.polls() {
                println!("{}  {:<7} {}", poll.id, poll.status.to_string(), poll.question);
                let shares = option_shares(poll);
                for (option, share) in poll.options.iter().zip(shares) {
                    println!(
                        "    {} — {} votes ({:.1}%)",
                        option.text,
                        option.votes,
                        share * 100.0
                    );
                }
                if let Some(decision) = &poll.admin_decision {
                    println!("    decision: {decision}");
                }
            }
        }
        PollAction::Create { question, options, ward, duration } => {
            let id = console.create_poll(PollDraft {
                question,
                options,
                target_ward: Ward::new(ward)?,
                duration,
            })?;
            println!("created {id}");
        }
        PollAction::Vote { id, option } => {
            console.record_vote(id, option)?;
            println!("vote recorded on {id}");
        }
        PollAction::Close { id, decision } => {
            console.close_poll(id, decision)?;
            println!("closed {id}");
        }
    }
    Ok(())
}
