use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::is_valid_email;

/// The "become a mentor" form. Applications are logged, never stored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MentorApplication {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub motivation: String,
}

impl MentorApplication {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(AppError::BadRequest(
                "Please enter a valid email address".to_string(),
            ));
        }
        if self.college.trim().is_empty() {
            return Err(AppError::BadRequest("College is required".to_string()));
        }
        Ok(())
    }
}

pub fn submit(application: &MentorApplication) -> AppResult<()> {
    application.validate()?;
    tracing::info!(
        name = %application.name,
        email = %application.email,
        college = %application.college,
        course = %application.course,
        "Mentor application received"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_email_college() {
        let mut app = MentorApplication::default();
        assert!(submit(&app).is_err());

        app.name = "Isha".into();
        app.email = "isha@example".into();
        assert!(submit(&app).is_err());

        app.email = "isha@example.com".into();
        assert!(submit(&app).is_err());

        app.college = "IIT Bombay".into();
        assert!(submit(&app).is_ok());
    }
}
