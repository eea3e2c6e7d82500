//! # Ward 5 Seed Fixture
//!
//! The demo dataset for Ward 5, Thiruvottiyur. Identifiers are fixed
//! (`Uuid::from_u128`) so the CLI can refer to seeded records across
//! invocations; everything else mirrors the citizen-facing deployment's
//! sample data.
//!
//! Seeded records are inserted directly with their historical statuses —
//! the audit log starts empty and only ever reflects actions taken in the
//! current session.

use uuid::Uuid;

use muni_core::{
    CitizenId, EventId, HelpRequestId, MuniError, NoticeId, Operator, PollId, SafetyAlertId,
    SosAlertId, Timestamp, Ward,
};
use muni_state::{
    CitizenStatus, HelpRequestStatus, NoticeStatus, PollStatus, SafetyStatus, SosStatus,
};

use crate::citizen::{Citizen, ServiceProfile};
use crate::help::HelpRequest;
use crate::notice::{Notice, NoticeCategory};
use crate::poll::{Poll, PollOption};
use crate::safety::{Priority, SafetyAlert, SafetyAlertKind};
use crate::sos::SosAlert;
use crate::store::WardStore;
use crate::volunteer::{Attendance, Volunteer, VolunteerEvent};

/// Build the Ward 5 demo store.
pub fn ward5() -> Result<WardStore, MuniError> {
    let ward = Ward::new("Ward 5")?;
    let mut store = WardStore::new(ward.clone(), Operator::default());

    seed_citizens(&mut store, &ward)?;
    seed_sos_alerts(&mut store, &ward)?;
    seed_notices(&mut store, &ward)?;
    seed_help_requests(&mut store)?;
    seed_volunteer_events(&mut store)?;
    seed_safety_alerts(&mut store)?;
    seed_polls(&mut store, &ward)?;

    Ok(store)
}

fn seed_citizens(store: &mut WardStore, ward: &Ward) -> Result<(), MuniError> {
    let entries: [(u128, &str, &str, &str, &str, &str, CitizenStatus, Option<&str>, Option<(&str, &str)>, u32); 8] = [
        (
            0x01,
            "Rajesh Kumar",
            "No. 45, Kamaraj Nagar, Thiruvottiyur",
            "+91 98765 43210",
            "rajesh.kumar@email.com",
            "2025-01-01T00:00:00Z",
            CitizenStatus::Pending,
            None,
            None,
            0,
        ),
        (
            0x02,
            "Priya Sharma",
            "No. 78, Gandhi Street, Thiruvottiyur",
            "+91 98765 43211",
            "priya.sharma@email.com",
            "2025-01-02T00:00:00Z",
            CitizenStatus::Approved,
            None,
            None,
            3,
        ),
        (
            0x03,
            "Kumar Plumbing Services",
            "No. 12, Market Road, Thiruvottiyur",
            "+91 98765 43212",
            "kumar.plumbing@email.com",
            "2024-12-15T00:00:00Z",
            CitizenStatus::Approved,
            None,
            Some(("Plumber", "Kumar Plumbing Services")),
            0,
        ),
        (
            0x04,
            "Lakshmi Devi",
            "No. 56, Anna Nagar, Thiruvottiyur",
            "+91 98765 43213",
            "lakshmi.devi@email.com",
            "2025-01-03T00:00:00Z",
            CitizenStatus::Pending,
            None,
            None,
            0,
        ),
        (
            0x05,
            "Ravi Electricals",
            "No. 89, Bus Stand Road, Thiruvottiyur",
            "+91 98765 43214",
            "ravi.electricals@email.com",
            "2024-12-20T00:00:00Z",
            CitizenStatus::Pending,
            None,
            Some(("Electrician", "Ravi Electricals")),
            0,
        ),
        (
            0x06,
            "Sunita Reddy",
            "No. 34, Lake View Road, Thiruvottiyur",
            "+91 98765 43215",
            "sunita.reddy@email.com",
            "2024-12-28T00:00:00Z",
            CitizenStatus::Approved,
            None,
            None,
            5,
        ),
        (
            0x07,
            "Vijay Clinic",
            "No. 23, Hospital Road, Thiruvottiyur",
            "+91 98765 43216",
            "vijay.clinic@email.com",
            "2024-12-10T00:00:00Z",
            CitizenStatus::Approved,
            None,
            Some(("Medical", "Vijay Clinic")),
            0,
        ),
        (
            0x08,
            "Arun Mohan",
            "No. 67, Temple Street, Thiruvottiyur",
            "+91 98765 43217",
            "arun.mohan@email.com",
            "2025-01-04T00:00:00Z",
            CitizenStatus::Rejected,
            Some("Incomplete documentation"),
            None,
            0,
        ),
    ];

    for (raw, name, address, phone, email, registered, status, reason, service, past) in entries {
        store.seed_citizen(Citizen {
            id: CitizenId::from_uuid(Uuid::from_u128(raw)),
            name: name.into(),
            address: address.into(),
            ward: ward.clone(),
            phone: phone.into(),
            email: email.into(),
            registered_at: Timestamp::parse(registered)?,
            status,
            rejection_reason: reason.map(Into::into),
            service_provider: service.map(|(service_type, business_name)| ServiceProfile {
                service_type: service_type.into(),
                business_name: business_name.into(),
            }),
            past_requests: past,
        });
    }
    Ok(())
}

fn seed_sos_alerts(store: &mut WardStore, ward: &Ward) -> Result<(), MuniError> {
    let entries: [(u128, &str, &str, &str, &str, SosStatus, &str); 3] = [
        (
            0x101,
            "Amit Patel",
            "No. 89, Gandhi Street, Thiruvottiyur",
            "2025-01-05T10:30:00Z",
            "+91 98765 43212",
            SosStatus::Active,
            "Medical Emergency",
        ),
        (
            0x102,
            "Meera Nair",
            "No. 45, Market Road, Thiruvottiyur",
            "2025-01-05T11:15:00Z",
            "+91 98765 43218",
            SosStatus::Active,
            "Fire Emergency",
        ),
        (
            0x103,
            "Ravi Kumar",
            "No. 23, Lake View Road, Thiruvottiyur",
            "2025-01-04T21:00:00Z",
            "+91 98765 43219",
            SosStatus::Resolved,
            "Safety Concern",
        ),
    ];

    for (raw, citizen, location, raised, contact, status, kind) in entries {
        store.seed_sos_alert(SosAlert {
            id: SosAlertId::from_uuid(Uuid::from_u128(raw)),
            citizen_name: citizen.into(),
            ward: ward.clone(),
            location: location.into(),
            raised_at: Timestamp::parse(raised)?,
            emergency_contact: contact.into(),
            status,
            kind: Some(kind.into()),
        });
    }
    Ok(())
}

fn seed_notices(store: &mut WardStore, ward: &Ward) -> Result<(), MuniError> {
    let entries: [(u128, &str, NoticeCategory, &str, Option<&str>, NoticeStatus, &str); 3] = [
        (
            0x201,
            "Water Supply Disruption - January 10",
            NoticeCategory::Water,
            "Water supply will be disrupted on January 10 from 10 AM to 4 PM for maintenance work",
            Some("notice_water_supply.pdf"),
            NoticeStatus::Published,
            "2025-01-02T00:00:00Z",
        ),
        (
            0x202,
            "Community Health Camp - Free Check-up",
            NoticeCategory::Health,
            "Free health check-up camp organized at Ward 5 Community Center on January 15",
            Some("notice_health_camp.pdf"),
            NoticeStatus::Published,
            "2025-01-03T00:00:00Z",
        ),
        (
            0x203,
            "Property Tax Payment Reminder",
            NoticeCategory::Community,
            "Last date to pay property tax without penalty is January 31",
            None,
            NoticeStatus::Draft,
            "2025-01-04T00:00:00Z",
        ),
    ];

    for (raw, title, category, description, attachment, status, created) in entries {
        store.seed_notice(Notice {
            id: NoticeId::from_uuid(Uuid::from_u128(raw)),
            title: title.into(),
            category,
            description: description.into(),
            attachment: attachment.map(Into::into),
            target_ward: ward.clone(),
            status,
            created_at: Timestamp::parse(created)?,
        });
    }
    Ok(())
}

fn seed_help_requests(store: &mut WardStore) -> Result<(), MuniError> {
    let entries: [(u128, &str, &str, &str, &str, HelpRequestStatus, &str, Option<&str>, Option<&str>); 4] = [
        (
            0x301,
            "Road Repair",
            "Large pothole near Main Market causing accidents",
            "Main Market Road, Ward 5, Thiruvottiyur",
            "Sunita Devi",
            HelpRequestStatus::Open,
            "2025-01-02T00:00:00Z",
            Some("pothole_image.jpg"),
            None,
        ),
        (
            0x302,
            "Street Light",
            "Street light not working for past 3 days",
            "Anna Nagar, Ward 5, Thiruvottiyur",
            "Prakash Rao",
            HelpRequestStatus::InProgress,
            "2025-01-03T00:00:00Z",
            Some("streetlight_issue.jpg"),
            Some("Electrician Team A"),
        ),
        (
            0x303,
            "Garbage Collection",
            "Garbage not collected for 2 days",
            "Temple Street, Ward 5, Thiruvottiyur",
            "Anita Singh",
            HelpRequestStatus::Open,
            "2025-01-04T00:00:00Z",
            None,
            None,
        ),
        (
            0x304,
            "Water Leakage",
            "Water pipe leaking on the road",
            "Bus Stand Road, Ward 5, Thiruvottiyur",
            "Mohan Das",
            HelpRequestStatus::Closed,
            "2025-01-01T00:00:00Z",
            None,
            Some("Plumber Team B"),
        ),
    ];

    for (raw, kind, description, location, citizen, status, submitted, photo, assigned) in entries {
        store.seed_help_request(HelpRequest {
            id: HelpRequestId::from_uuid(Uuid::from_u128(raw)),
            kind: kind.into(),
            description: description.into(),
            location: location.into(),
            citizen_name: citizen.into(),
            status,
            submitted_at: Timestamp::parse(submitted)?,
            photo: photo.map(Into::into),
            assigned_to: assigned.map(Into::into),
        });
    }
    Ok(())
}

fn seed_volunteer_events(store: &mut WardStore) -> Result<(), MuniError> {
    store.seed_volunteer_event(VolunteerEvent {
        id: EventId::from_uuid(Uuid::from_u128(0x401)),
        name: "Community Cleanliness Drive".into(),
        description: "Join us for a neighborhood cleanup activity".into(),
        scheduled_for: Timestamp::parse("2025-01-15T08:00:00Z")?,
        location: "Community Park, Ward 5, Thiruvottiyur".into(),
        required_volunteers: 50,
        registered_volunteers: 32,
        organizer: "Ward 5 Municipality Office".into(),
        roster: vec![
            Volunteer {
                name: "Rahul Sharma".into(),
                contact: "+91 98765 11111".into(),
                attendance: Attendance::Confirmed,
            },
            Volunteer {
                name: "Priya Patel".into(),
                contact: "+91 98765 22222".into(),
                attendance: Attendance::Confirmed,
            },
            Volunteer {
                name: "Amit Kumar".into(),
                contact: "+91 98765 33333".into(),
                attendance: Attendance::Pending,
            },
        ],
    });

    store.seed_volunteer_event(VolunteerEvent {
        id: EventId::from_uuid(Uuid::from_u128(0x402)),
        name: "Tree Plantation Drive".into(),
        description: "Plant trees for a greener Ward 5".into(),
        scheduled_for: Timestamp::parse("2025-01-20T07:00:00Z")?,
        location: "Lake View Road, Ward 5, Thiruvottiyur".into(),
        required_volunteers: 30,
        registered_volunteers: 18,
        organizer: "Environmental Committee - Ward 5".into(),
        roster: Vec::new(),
    });
    Ok(())
}

fn seed_safety_alerts(store: &mut WardStore) -> Result<(), MuniError> {
    let entries: [(u128, SafetyAlertKind, &str, &str, Priority, SafetyStatus, &str); 3] = [
        (
            0x501,
            SafetyAlertKind::RoadClosure,
            "Main Road under construction from January 10-15. Use alternate route via Lake View Road",
            "Main Road, Sector 15, Ward 5",
            Priority::High,
            SafetyStatus::Active,
            "2025-01-02T00:00:00Z",
        ),
        (
            0x502,
            SafetyAlertKind::PowerOutage,
            "Scheduled power outage for electrical maintenance",
            "Anna Nagar, Ward 5",
            Priority::Medium,
            SafetyStatus::Active,
            "2025-01-04T00:00:00Z",
        ),
        (
            0x503,
            SafetyAlertKind::WeatherWarning,
            "Heavy rain expected. Please stay indoors",
            "All areas, Ward 5",
            Priority::High,
            SafetyStatus::Expired,
            "2025-01-01T00:00:00Z",
        ),
    ];

    for (raw, kind, message, area, priority, status, created) in entries {
        store.seed_safety_alert(SafetyAlert {
            id: SafetyAlertId::from_uuid(Uuid::from_u128(raw)),
            kind,
            message: message.into(),
            affected_area: area.into(),
            priority,
            status,
            created_at: Timestamp::parse(created)?,
        });
    }
    Ok(())
}

fn seed_polls(store: &mut WardStore, ward: &Ward) -> Result<(), MuniError> {
    store.seed_poll(Poll {
        id: PollId::from_uuid(Uuid::from_u128(0x601)),
        question: "What time is best for weekly market in Ward 5?".into(),
        options: vec![
            PollOption { text: "Morning (6-10 AM)".into(), votes: 145 },
            PollOption { text: "Afternoon (2-6 PM)".into(), votes: 89 },
            PollOption { text: "Evening (6-10 PM)".into(), votes: 76 },
        ],
        target_ward: ward.clone(),
        duration: "7 days".into(),
        status: PollStatus::Active,
        total_votes: 310,
        admin_decision: None,
        closed_at: None,
    });

    store.seed_poll(Poll {
        id: PollId::from_uuid(Uuid::from_u128(0x602)),
        question: "Should Ward 5 install more CCTV cameras for safety?".into(),
        options: vec![
            PollOption { text: "Yes, definitely needed".into(), votes: 234 },
            PollOption { text: "No, not required".into(), votes: 45 },
            PollOption { text: "Not sure".into(), votes: 21 },
        ],
        target_ward: ward.clone(),
        duration: "10 days".into(),
        status: PollStatus::Closed,
        total_votes: 300,
        admin_decision: Some(
            "Based on overwhelming support (78%), Ward 5 Municipality will install 15 new CCTV \
             cameras at key locations by February 2025."
                .into(),
        ),
        closed_at: Some(Timestamp::parse("2024-12-30T18:00:00Z")?),
    });
    Ok(())
}
