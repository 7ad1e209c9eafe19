//! Demo authentication. There is no password hashing and no session: a
//! successful login or registration simply stores the user as the client's
//! current user record, and logout removes it.

pub mod client;
pub mod middleware;

use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::models::{RegisterData, Role, User};
use crate::storage::LocalStorage;

pub const USER_KEY: &str = "mentrify_user";

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "demo@example.com",
        password: "demo123",
        name: "Demo Student",
        role: Role::Mentee,
    },
    DemoAccount {
        email: "mentor@example.com",
        password: "mentor123",
        name: "Demo Mentor",
        role: Role::Mentor,
    },
];

pub async fn login(
    storage: &LocalStorage,
    email: &str,
    password: &str,
    delay: Duration,
) -> AppResult<User> {
    tokio::time::sleep(delay).await;

    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
        .ok_or(AppError::InvalidCredentials)?;

    let mentor = account.role == Role::Mentor;
    let mut names = account.name.split(' ');
    let user = User {
        id: account.email.to_string(),
        email: account.email.to_string(),
        name: account.name.to_string(),
        role: account.role,
        username: Some(if mentor { "demo_mentor" } else { "demo_student" }.to_string()),
        first_name: names.next().map(str::to_string),
        last_name: Some(names.next().unwrap_or_default().to_string()),
        phone: Some("+1 (555) 123-4567".to_string()),
        brief: None,
        dob: None,
        total_sessions: Some(if mentor { 24 } else { 18 }),
        rating: mentor.then_some(4.8),
        session_cost: mentor.then_some(50),
        expertise: None,
        linkedin: None,
        availability: None,
        recurring_settings: None,
    };

    save_user(storage, &user)?;
    tracing::info!(client = %storage.client_id(), email, "Demo login");
    Ok(user)
}

pub async fn register(
    storage: &LocalStorage,
    data: RegisterData,
    delay: Duration,
) -> AppResult<User> {
    tokio::time::sleep(delay).await;

    if data.email.is_empty() || data.password.is_empty() || data.username.is_empty() {
        return Err(AppError::BadRequest(
            "Please fill in all required fields".to_string(),
        ));
    }
    if data.password.chars().count() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    let mentor = data.role == Role::Mentor;
    let user = User {
        id: data.email.clone(),
        name: format!("{} {}", data.first_name, data.last_name),
        email: data.email,
        role: data.role,
        username: Some(data.username),
        first_name: Some(data.first_name),
        last_name: Some(data.last_name),
        phone: Some(data.phone),
        brief: data.brief,
        dob: data.dob,
        total_sessions: Some(0),
        rating: mentor.then_some(0.0),
        session_cost: mentor.then_some(50),
        expertise: None,
        linkedin: None,
        availability: None,
        recurring_settings: None,
    };

    save_user(storage, &user)?;
    tracing::info!(client = %storage.client_id(), email = %user.email, role = ?user.role, "Registered demo user");
    Ok(user)
}

pub fn logout(storage: &LocalStorage) -> AppResult<()> {
    storage.remove_item(USER_KEY)?;
    tracing::info!(client = %storage.client_id(), "User logged out");
    Ok(())
}

pub fn get_user(storage: &LocalStorage) -> AppResult<Option<User>> {
    storage.get_json(USER_KEY)
}

pub fn save_user(storage: &LocalStorage, user: &User) -> AppResult<()> {
    storage.set_json(USER_KEY, user)
}

pub fn is_authenticated(storage: &LocalStorage) -> AppResult<bool> {
    Ok(get_user(storage)?.is_some())
}
