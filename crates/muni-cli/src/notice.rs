//! # Notice Subcommand
//!
//! Notice management: list, create (draft or published), publish, archive.

use clap::{Args, Subcommand, ValueEnum};

use muni_admin::AdminConsole;
use muni_core::{NoticeId, Ward};
use muni_state::NoticeStatus;
use muni_store::{NoticeCategory, NoticeDraft, PublishIntent};

use crate::print_json;

/// Arguments for the notice subcommand.
#[derive(Args, Debug)]
pub struct NoticeArgs {
    #[command(subcommand)]
    pub action: NoticeAction,
}

/// Clap-facing notice category.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CategoryArg {
    Health,
    Water,
    Electricity,
    Community,
    Emergency,
}

impl From<CategoryArg> for NoticeCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Health => NoticeCategory::Health,
            CategoryArg::Water => NoticeCategory::Water,
            CategoryArg::Electricity => NoticeCategory::Electricity,
            CategoryArg::Community => NoticeCategory::Community,
            CategoryArg::Emergency => NoticeCategory::Emergency,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum NoticeAction {
    /// List notices with their publication status.
    List,
    /// Create a notice.
    Create {
        /// Notice headline.
        #[arg(long)]
        title: String,
        /// Notice category.
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// Body text.
        #[arg(long)]
        description: String,
        /// Target ward label.
        #[arg(long, default_value = "Ward 5")]
        ward: String,
        /// Attached document name.
        #[arg(long)]
        attachment: Option<String>,
        /// Publish immediately instead of saving as draft.
        #[arg(long)]
        publish: bool,
    },
    /// Publish a draft notice.
    Publish {
        /// Notice identifier.
        id: NoticeId,
    },
    /// Archive a published notice.
    Archive {
        /// Notice identifier.
        id: NoticeId,
    },
}

pub fn run(args: NoticeArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        NoticeAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.notices());
            }
            for notice in store.notices() {
                println!(
                    "{}  {:<9} [{}] {}",
                    notice.id,
                    notice.status.to_string(),
                    notice.category,
                    notice.title
                );
            }
        }
        NoticeAction::Create { title, category, description, ward, attachment, publish } => {
            let intent = if publish { PublishIntent::Publish } else { PublishIntent::Draft };
            let id = console.create_notice(
                NoticeDraft {
                    title,
                    category: category.into(),
                    description,
                    attachment,
                    target_ward: Ward::new(ward)?,
                },
                intent,
            )?;
            println!("created {id}");
        }
        NoticeAction::Publish { id } => {
            console.update_notice_status(id, NoticeStatus::Published)?;
            println!("published {id}");
        }
        NoticeAction::Archive { id } => {
            console.update_notice_status(id, NoticeStatus::Archived)?;
            println!("archived {id}");
        }
    }
    Ok(())
}
