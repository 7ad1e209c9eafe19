use chrono::NaiveDate;
use serde::Serialize;

use crate::auth;
use crate::error::{AppError, AppResult};
use crate::models::profile::{MenteeProfile, MentorProfile};
use crate::models::{Role, User};
use crate::services::availability::AvailabilityEditor;
use crate::storage::LocalStorage;

pub const MENTOR_PROFILE_KEY: &str = "mentr_mentor_profile_demo";
pub const MENTEE_PROFILE_KEY: &str = "mentr_mentee_profile_demo";

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView<T> {
    pub profile: T,
    /// True when the viewer owns the profile and may edit it.
    pub editable: bool,
}

fn ensure_owner(user: &User, profile_id: &str, role: Role) -> AppResult<()> {
    if user.id != profile_id {
        return Err(AppError::Forbidden(
            "You can only edit your own profile".to_string(),
        ));
    }
    if user.role != role {
        return Err(AppError::Forbidden(format!(
            "Only a {} can edit this profile",
            match role {
                Role::Mentor => "mentor",
                Role::Mentee => "mentee",
            }
        )));
    }
    Ok(())
}

fn cached_mentor_profile(storage: &LocalStorage, today: NaiveDate) -> AppResult<MentorProfile> {
    Ok(storage
        .get_json(MENTOR_PROFILE_KEY)?
        .unwrap_or_else(|| MentorProfile::sample(today)))
}

fn cached_mentee_profile(storage: &LocalStorage) -> AppResult<MenteeProfile> {
    Ok(storage
        .get_json(MENTEE_PROFILE_KEY)?
        .unwrap_or_else(MenteeProfile::sample))
}

/// A mentor viewing their own id sees their cached document (or the sample);
/// everyone else sees the sample, read-only.
pub fn load_mentor_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
    today: NaiveDate,
) -> AppResult<ProfileView<MentorProfile>> {
    if ensure_owner(user, profile_id, Role::Mentor).is_ok() {
        Ok(ProfileView {
            profile: cached_mentor_profile(storage, today)?,
            editable: true,
        })
    } else {
        Ok(ProfileView {
            profile: MentorProfile::sample(today),
            editable: false,
        })
    }
}

pub fn save_mentor_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
    mut profile: MentorProfile,
) -> AppResult<MentorProfile> {
    ensure_owner(user, profile_id, Role::Mentor)?;
    profile.id = profile_id.to_string();
    profile.role = Role::Mentor;

    storage.set_json(MENTOR_PROFILE_KEY, &profile)?;
    let mut updated = user.clone();
    profile.merge_into(&mut updated);
    auth::save_user(storage, &updated)?;

    tracing::info!(client = %storage.client_id(), profile_id, "Mentor profile saved");
    Ok(profile)
}

pub fn reset_mentor_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
    today: NaiveDate,
) -> AppResult<MentorProfile> {
    ensure_owner(user, profile_id, Role::Mentor)?;
    storage.remove_item(MENTOR_PROFILE_KEY)?;
    Ok(MentorProfile::sample(today))
}

/// Load the owner's mentor document, apply one availability edit, save it.
pub fn edit_mentor_availability<F>(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
    today: NaiveDate,
    edit: F,
) -> AppResult<MentorProfile>
where
    F: FnOnce(&mut AvailabilityEditor) -> AppResult<()>,
{
    ensure_owner(user, profile_id, Role::Mentor)?;

    let profile = cached_mentor_profile(storage, today)?;
    let mut editor = AvailabilityEditor::from_profile(&profile, today);
    edit(&mut editor)?;

    save_mentor_profile(storage, user, profile_id, editor.into_profile(profile))
}

pub fn load_mentee_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
) -> AppResult<ProfileView<MenteeProfile>> {
    if ensure_owner(user, profile_id, Role::Mentee).is_ok() {
        Ok(ProfileView {
            profile: cached_mentee_profile(storage)?,
            editable: true,
        })
    } else {
        Ok(ProfileView {
            profile: MenteeProfile::sample(),
            editable: false,
        })
    }
}

pub fn save_mentee_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
    mut profile: MenteeProfile,
) -> AppResult<MenteeProfile> {
    ensure_owner(user, profile_id, Role::Mentee)?;
    profile.id = profile_id.to_string();
    profile.role = Role::Mentee;

    storage.set_json(MENTEE_PROFILE_KEY, &profile)?;
    let mut updated = user.clone();
    profile.merge_into(&mut updated);
    auth::save_user(storage, &updated)?;

    tracing::info!(client = %storage.client_id(), profile_id, "Mentee profile saved");
    Ok(profile)
}

pub fn reset_mentee_profile(
    storage: &LocalStorage,
    user: &User,
    profile_id: &str,
) -> AppResult<MenteeProfile> {
    ensure_owner(user, profile_id, Role::Mentee)?;
    storage.remove_item(MENTEE_PROFILE_KEY)?;
    Ok(MenteeProfile::sample())
}
