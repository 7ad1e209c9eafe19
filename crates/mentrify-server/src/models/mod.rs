pub mod mentor;
pub mod profile;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use profile::{RecurringSettings, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentee,
    Mentor,
}

/// The signed-in user, stored as the single `mentrify_user` record of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cost: Option<u32>,

    // Present once a mentor has saved their profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<Slot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_settings: Option<RecurringSettings>,
}

impl User {
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
    /// Mentors only.
    #[serde(default)]
    pub brief: Option<String>,
    /// Mentors only.
    #[serde(default)]
    pub dob: Option<String>,
}

impl RegisterData {
    /// Full sign-up form validation, stricter than what `auth::register` checks.
    pub fn validate(&self) -> AppResult<()> {
        let fail = |msg: &str| Err(AppError::BadRequest(msg.to_string()));

        if self.first_name.trim().is_empty() {
            return fail("Please enter your first name");
        }
        if self.last_name.trim().is_empty() {
            return fail("Please enter your last name");
        }
        if self.email.trim().is_empty() {
            return fail("Please enter your email address");
        }
        if !is_valid_email(&self.email) {
            return fail("Please enter a valid email address");
        }
        if self.username.trim().is_empty() {
            return fail("Please enter a username");
        }
        if self.username.chars().count() < 3 {
            return fail("Username must be at least 3 characters long");
        }
        if self.phone.trim().is_empty() {
            return fail("Please enter your phone number");
        }
        if self.password.chars().count() < 6 {
            return fail("Password must be at least 6 characters long");
        }
        if self.role == Role::Mentor {
            if is_blank(&self.brief) {
                return fail("Please enter a brief description about yourself");
            }
            if is_blank(&self.dob) {
                return fail("Please enter your date of birth");
            }
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
