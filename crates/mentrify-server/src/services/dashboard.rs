use serde::Serialize;

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub greeting: String,
    pub journey: &'static str,
    pub stats: Vec<StatCard>,
}

fn card(title: &'static str, value: String, change: &'static str) -> StatCard {
    StatCard {
        title,
        value,
        change,
        change_type: ChangeType::Positive,
    }
}

pub fn for_user(user: &User) -> Dashboard {
    let stats = if user.is_mentor() {
        vec![
            card("Total Mentees", "24".into(), "+3 this month"),
            card(
                "Sessions Completed",
                user.total_sessions.unwrap_or(0).to_string(),
                "+12 this month",
            ),
            card(
                "Average Rating",
                user.rating.unwrap_or(0.0).to_string(),
                "↗ 0.2 this month",
            ),
            card(
                "Monthly Earnings",
                format!("₹{}", group_thousands(u64::from(user.session_cost.unwrap_or(0)) * 12)),
                "+₹3,600",
            ),
        ]
    } else {
        vec![
            card("Sessions Attended", "18".into(), "+4 this month"),
            StatCard {
                title: "Active Mentors",
                value: "3".into(),
                change: "No change",
                change_type: ChangeType::Neutral,
            },
            card("Learning Hours", "36".into(), "+8 this month"),
            card("Progress Score", "87%".into(), "+12% this month"),
        ]
    };

    Dashboard {
        greeting: format!("Welcome back, {}!", user.name),
        journey: if user.is_mentor() { "mentoring" } else { "learning" },
        stats,
    }
}

/// `12345` -> `"12,345"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
