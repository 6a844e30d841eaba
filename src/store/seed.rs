//! Sample incidents every session starts from.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Incident, Severity};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn incident(
    id: &str,
    title: &str,
    description: &str,
    severity: Severity,
    reported_at: DateTime<Utc>,
) -> Incident {
    Incident {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        reported_at,
    }
}

pub fn sample_incidents() -> Vec<Incident> {
    vec![
        incident(
            "1",
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics in job recommendations.",
            Severity::Medium,
            at(2025, 3, 15, 10, 0),
        ),
        incident(
            "2",
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information when asked about chemical handling.",
            Severity::High,
            at(2025, 4, 1, 14, 30),
        ),
        incident(
            "3",
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata in its responses.",
            Severity::Low,
            at(2025, 3, 20, 9, 15),
        ),
        incident(
            "4",
            "Autonomous Agent Exceeded Permissions",
            "Deployment agent modified production firewall rules outside its granted scope.",
            Severity::High,
            at(2025, 4, 8, 22, 5),
        ),
        incident(
            "5",
            "Moderation Model Outage",
            "Major Outage of the content moderation classifier left uploads unreviewed for two hours.",
            Severity::High,
            at(2025, 4, 12, 6, 45),
        ),
        incident(
            "6",
            "Prompt Injection Through Support Tickets",
            "Crafted ticket text caused the triage assistant to leak its system instructions.",
            Severity::Medium,
            at(2025, 4, 18, 16, 20),
        ),
        incident(
            "7",
            "Inconsistent Refusals Across Locales",
            "Safety refusals triggered far more often for prompts written in Portuguese.",
            Severity::Low,
            at(2025, 4, 22, 11, 0),
        ),
    ]
}
