//! # Safety Subcommand
//!
//! Safety alerts: list, create, expire.

use clap::{Args, Subcommand, ValueEnum};

use muni_admin::AdminConsole;
use muni_core::SafetyAlertId;
use muni_state::SafetyStatus;
use muni_store::{Priority, SafetyAlertDraft, SafetyAlertKind};

use crate::print_json;

/// Arguments for the safety subcommand.
#[derive(Args, Debug)]
pub struct SafetyArgs {
    #[command(subcommand)]
    pub action: SafetyAction,
}

/// Clap-facing alert kind.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    RoadClosure,
    PowerOutage,
    WaterSupply,
    WeatherWarning,
}

impl From<KindArg> for SafetyAlertKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::RoadClosure => SafetyAlertKind::RoadClosure,
            KindArg::PowerOutage => SafetyAlertKind::PowerOutage,
            KindArg::WaterSupply => SafetyAlertKind::WaterSupply,
            KindArg::WeatherWarning => SafetyAlertKind::WeatherWarning,
        }
    }
}

/// Clap-facing priority.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SafetyAction {
    /// List alerts with their broadcast status.
    List,
    /// Create an alert (goes out active).
    Create {
        /// Alert kind.
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Message shown to citizens.
        #[arg(long)]
        message: String,
        /// Affected area description.
        #[arg(long)]
        area: String,
        /// Urgency.
        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityArg,
    },
    /// Expire an active alert.
    Expire {
        /// Alert identifier.
        id: SafetyAlertId,
    },
}

pub fn run(args: SafetyArgs, console: &mut AdminConsole, json: bool) -> anyhow::Result<()> {
    match args.action {
        SafetyAction::List => {
            let store = console.store()?;
            if json {
                return print_json(&store.safety_alerts());
            }
            for alert in store.safety_alerts() {
                println!(
                    "{}  {:<8} {:?} [{}] {}",
                    alert.id,
                    alert.status.to_string(),
                    alert.priority,
                    alert.kind,
                    alert.affected_area
                );
            }
        }
        SafetyAction::Create { kind, message, area, priority } => {
            let id = console.create_safety_alert(SafetyAlertDraft {
                kind: kind.into(),
                message,
                affected_area: area,
                priority: priority.into(),
            })?;
            println!("created {id}");
        }
        SafetyAction::Expire { id } => {
            console.update_safety_alert_status(id, SafetyStatus::Expired)?;
            println!("expired {id}");
        }
    }
    Ok(())
}
