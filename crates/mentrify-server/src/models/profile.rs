use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Role, User};

pub const DAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A weekly window a mentor marks as available. `day` is 0 (Sunday) to 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: u8,
    pub start: String,
    pub end: String,
}

impl Slot {
    pub fn day_label(&self) -> String {
        DAY_LABELS
            .get(usize::from(self.day))
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.day.to_string())
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            day: 1,
            start: "09:00".to_string(),
            end: "10:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringSettings {
    pub enabled: bool,
    /// Months the weekly schedule repeats for.
    pub duration: u32,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(default)]
    pub exceptions: Vec<Exception>,
}

impl RecurringSettings {
    pub fn disabled(today: NaiveDate) -> Self {
        Self {
            enabled: false,
            duration: 1,
            start_date: today.format("%Y-%m-%d").to_string(),
            exceptions: Vec::new(),
        }
    }

    /// Last day covered by the recurring window, if the start date parses.
    pub fn window_end(&self) -> Option<NaiveDate> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        start.checked_add_months(Months::new(self.duration))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(default = "mentor_role")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<Slot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_settings: Option<RecurringSettings>,
}

fn mentor_role() -> Role {
    Role::Mentor
}

fn mentee_role() -> Role {
    Role::Mentee
}

impl MentorProfile {
    /// Demo mentor shown to visitors and used when nothing is cached.
    pub fn sample(today: NaiveDate) -> Self {
        Self {
            id: "mentor-demo".to_string(),
            name: "Dr. Jemin Vasoya".to_string(),
            email: "jeminvasoya@example.com".to_string(),
            username: "PrimeSolverXp".to_string(),
            role: Role::Mentor,
            brief: Some(
                "Experienced software architect with 15+ years in the industry. \
                 Specializing in cloud infrastructure, microservices, and leading \
                 high-performing engineering teams. I'm here to help you navigate \
                 your career path and achieve your professional goals."
                    .to_string(),
            ),
            expertise: Some(
                [
                    "Cloud Architecture",
                    "Microservices",
                    "Team Leadership",
                    "Career Development",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ),
            session_cost: Some(800),
            total_sessions: Some(250),
            rating: Some(4.9),
            linkedin: Some("https://www.linkedin.com/in/jeminvasoya/".to_string()),
            availability: Some(vec![
                Slot {
                    day: 2,
                    start: "17:00".to_string(),
                    end: "18:00".to_string(),
                },
                Slot {
                    day: 4,
                    start: "17:00".to_string(),
                    end: "18:30".to_string(),
                },
            ]),
            recurring_settings: Some(RecurringSettings {
                enabled: true,
                duration: 3,
                start_date: today.format("%Y-%m-%d").to_string(),
                exceptions: vec![Exception {
                    date: "2025-12-25".to_string(),
                    reason: "Christmas Day".to_string(),
                }],
            }),
        }
    }

    /// Copy the profile fields onto the signed-in user, keeping their identity.
    pub fn merge_into(&self, user: &mut User) {
        user.name = self.name.clone();
        user.username = Some(self.username.clone());
        user.brief = self.brief.clone();
        user.expertise = self.expertise.clone();
        user.session_cost = self.session_cost;
        user.total_sessions = self.total_sessions;
        user.rating = self.rating;
        user.linkedin = self.linkedin.clone();
        user.availability = self.availability.clone();
        user.recurring_settings = self.recurring_settings.clone();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenteeProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(default = "mentee_role")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl MenteeProfile {
    pub fn sample() -> Self {
        Self {
            id: "mentee-demo".to_string(),
            name: "Parth Vekariya".to_string(),
            email: "Parth.vekariya@example.com".to_string(),
            username: "Parthiv".to_string(),
            role: Role::Mentee,
            brief: Some(
                "Aspiring Full-Stack Developer with a passion for creating intuitive \
                 user experiences. Currently learning React, Node.js, and TypeScript. \
                 Looking for guidance on building scalable projects and preparing for \
                 technical interviews."
                    .to_string(),
            ),
            linkedin: Some("https://www.linkedin.com/in/".to_string()),
        }
    }

    pub fn merge_into(&self, user: &mut User) {
        user.name = self.name.clone();
        user.username = Some(self.username.clone());
        user.brief = self.brief.clone();
        user.linkedin = self.linkedin.clone();
    }
}
