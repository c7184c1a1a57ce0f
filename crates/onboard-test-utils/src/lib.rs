//! Testing utilities for the onboard workspace
//!
//! Shared fixtures: transcript exports, freeze configuration, people and
//! usage telemetry.

#![allow(missing_docs)]

pub mod transcripts {
    /// Teams export with a cue identifier, a NOTE block and a merged turn
    pub const TEAMS_VTT: &str = "WEBVTT

NOTE exported from Microsoft Teams

1f0c7a2e-1
00:00:01.000 --> 00:00:03.200
<v Bustos, Luis (LDN-MOM)>Good morning everyone.</v>

1f0c7a2e-2
00:00:04.100 --> 00:00:06.000
<v Bustos, Luis (LDN-MOM)>Let's review the new starters.</v>

1f0c7a2e-3
00:00:07.250 --> 00:00:11.000
<v Rivera, Ana (NYC-IT)>The laptop for Priya is ready.</v>

1f0c7a2e-4
00:00:12.900 --> 00:00:15.000
<v Bustos, Luis (LDN-MOM)>Great, and the second laptop ships Monday.</v>
";

    /// Plain-text standup with a repeated speaker label
    pub const PLAIN_STANDUP: &str = "John Smith (Eng): Good morning.
John Smith (Eng): Let's begin.
Priya Patel (HR): Two new starters on Monday.

John Smith (Eng): Thanks, laptops are imaged.
";
}

pub mod freeze {
    use chrono::NaiveDate;
    use onboard_freeze::{FreezePeriod, Person};

    /// Two valid periods and one with an unreadable date
    pub const FREEZE_CONFIG_YAML: &str = r#"
- id: holiday-2024
  name: Holiday freeze
  start_date: "2024-11-01"
  end_date: "2025-01-05"
  is_active: true
  helix_email: helix-intake@example.com
  cc_recipients:
    - it-lead@example.com
- id: summer-2025
  name: Summer change freeze
  startDate: "2025-07-01"
  endDate: "2025-07-14"
  isActive: true
  helixEmail: helix-intake@example.com
- id: broken
  name: Draft
  start_date: TBD
  end_date: "2025-09-30"
"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
    }

    pub fn holiday_freeze() -> FreezePeriod {
        FreezePeriod::new("holiday-2024", "Holiday freeze", date(2024, 11, 1), date(2025, 1, 5))
            .with_routing(
                "helix-intake@example.com",
                vec!["it-lead@example.com".to_string()],
            )
    }

    pub fn new_starter() -> Person {
        Person {
            start_date: Some(date(2025, 1, 13)),
            role: Some("Analyst".to_string()),
            department: Some("Finance".to_string()),
            manager: Some("Ana Rivera".to_string()),
            ..Person::new("ph-17", "Priya Patel")
        }
    }
}

pub mod usage {
    use chrono::NaiveDate;
    use onboard_usage::UsageEvent;

    fn event(id: u32, user: &str, kind: &str, day: u32) -> UsageEvent {
        UsageEvent {
            event_id: id.to_string(),
            user_email: user.to_string(),
            event_type: kind.to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 3, day),
            tour_action: None,
        }
    }

    fn tour(id: u32, user: &str, action: &str) -> UsageEvent {
        UsageEvent {
            event_type: "tour".to_string(),
            tour_action: Some(action.to_string()),
            ..event(id, user, "tour", 1)
        }
    }

    /// A week of meeting-notes telemetry for three users
    pub fn sample_events() -> Vec<UsageEvent> {
        vec![
            event(1, "ana.rivera@example.com", "userLogin", 1),
            event(2, "ana.rivera@example.com", "notesGenerated", 1),
            event(3, "ana.rivera@example.com", "pdfExport", 1),
            event(4, "luis.bustos@example.com", "userLogin", 2),
            event(5, "luis.bustos@example.com", "notesGenerated", 2),
            event(6, "luis.bustos@example.com", "notesGenerated", 3),
            event(7, "luis.bustos@example.com", "clipboardExport", 3),
            event(8, "luis.bustos@example.com", "EmailExport", 3),
            event(9, "priya", "userLogin", 3),
            tour(10, "ana.rivera@example.com", "started"),
            tour(11, "ana.rivera@example.com", "completed"),
            tour(12, "priya", "started"),
        ]
    }
}
