//! # Demo Subcommand
//!
//! A scripted session: one pass over every console operation, including
//! the rejections the lifecycle engine is there to produce.

use clap::Args;

use muni_admin::AdminConsole;
use muni_core::Ward;
use muni_state::{CitizenStatus, HelpRequestStatus, NoticeStatus, SosStatus};
use muni_store::PollDraft;

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {}

pub fn run(_args: DemoArgs, console: &mut AdminConsole) -> anyhow::Result<()> {
    println!("== ward overview ==");
    let overview = console.stats()?;
    println!(
        "{} citizens ({} pending), {} active SOS, {} open requests\n",
        overview.total_citizens,
        overview.pending_verifications,
        overview.active_sos,
        overview.open_help_requests
    );

    println!("== citizen verification ==");
    let pending = console
        .store()?
        .citizens()
        .iter()
        .find(|c| c.status == CitizenStatus::Pending)
        .map(|c| (c.id, c.name.clone()));
    if let Some((id, name)) = pending {
        console.update_citizen_status(id, CitizenStatus::Approved, None)?;
        println!("approved {name}");
        // A second review of the same registration must bounce.
        match console.update_citizen_status(id, CitizenStatus::Rejected, Some("late")) {
            Err(e) => println!("re-review rejected as expected: {e}"),
            Ok(()) => println!("unexpected: terminal registration re-reviewed"),
        }
    }

    println!("\n== sos triage ==");
    let active = console
        .store()?
        .sos_alerts()
        .iter()
        .find(|a| a.status == SosStatus::Active)
        .map(|a| (a.id, a.citizen_name.clone()));
    if let Some((id, name)) = active {
        console.update_sos_status(id, SosStatus::Acknowledged)?;
        console.update_sos_status(id, SosStatus::Resolved)?;
        println!("acknowledged and resolved alert from {name}");
        match console.update_sos_status(id, SosStatus::Escalated) {
            Err(e) => println!("late escalation rejected as expected: {e}"),
            Ok(()) => println!("unexpected: resolved alert escalated"),
        }
    }

    println!("\n== notices ==");
    let draft = console
        .store()?
        .notices()
        .iter()
        .find(|n| n.status == NoticeStatus::Draft)
        .map(|n| (n.id, n.title.clone()));
    if let Some((id, title)) = draft {
        console.update_notice_status(id, NoticeStatus::Published)?;
        println!("published: {title}");
    }

    println!("\n== help requests ==");
    let open = console
        .store()?
        .help_requests()
        .iter()
        .find(|r| r.status == HelpRequestStatus::Open)
        .map(|r| (r.id, r.kind.clone()));
    if let Some((id, kind)) = open {
        match console.update_help_request_status(id, HelpRequestStatus::Closed) {
            Err(e) => println!("direct closure rejected as expected: {e}"),
            Ok(()) => println!("unexpected: open request closed directly"),
        }
        console.assign_help_request(id, "Maintenance Team A")?;
        console.update_help_request_status(id, HelpRequestStatus::InProgress)?;
        console.update_help_request_status(id, HelpRequestStatus::Closed)?;
        println!("assigned, started, and closed: {kind}");
    }

    println!("\n== polls ==");
    let id = console.create_poll(PollDraft {
        question: "Should the library stay open till 9 PM?".into(),
        options: vec!["Yes".into(), "No".into()],
        target_ward: Ward::new("Ward 5")?,
        duration: "7 days".into(),
    })?;
    for option in [0, 0, 1] {
        console.record_vote(id, option)?;
    }
    console.close_poll(id, Some("Extended hours approved on a trial basis.".into()))?;
    println!("created, voted on, and closed a poll");

    println!("\n== audit log ==");
    for entry in console.audit_log()? {
        println!("#{:<3} {:<8} {}", entry.seq, entry.severity.to_string(), entry.details);
    }

    Ok(())
}
