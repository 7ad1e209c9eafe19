//! Editing of a mentor's weekly slots and recurring-schedule settings.
//!
//! Slots are kept in insertion order. Overlapping slots, a slot ending before
//! it starts, and exceptions outside the recurring window are all accepted.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::profile::{Exception, MentorProfile, RecurringSettings, Slot};

/// A single-field change to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum SlotField {
    Day(u8),
    Start(String),
    End(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecurringUpdate {
    pub enabled: Option<bool>,
    pub duration: Option<u32>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityEditor {
    slots: Vec<Slot>,
    recurring: RecurringSettings,
}

impl AvailabilityEditor {
    pub fn new(slots: Vec<Slot>, recurring: RecurringSettings) -> Self {
        Self { slots, recurring }
    }

    pub fn from_profile(profile: &MentorProfile, today: NaiveDate) -> Self {
        Self::new(
            profile.availability.clone().unwrap_or_default(),
            profile
                .recurring_settings
                .clone()
                .unwrap_or_else(|| RecurringSettings::disabled(today)),
        )
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn recurring(&self) -> &RecurringSettings {
        &self.recurring
    }

    /// Appends the default Monday 09:00-10:00 slot and returns its index.
    pub fn add_slot(&mut self) -> usize {
        self.slots.push(Slot::default());
        self.slots.len() - 1
    }

    pub fn remove_slot(&mut self, index: usize) -> AppResult<Slot> {
        self.check_slot(index)?;
        Ok(self.slots.remove(index))
    }

    /// Appends a copy of the slot at `index`.
    pub fn duplicate_slot(&mut self, index: usize) -> AppResult<usize> {
        self.check_slot(index)?;
        let copy = self.slots[index].clone();
        self.slots.push(copy);
        Ok(self.slots.len() - 1)
    }

    pub fn update_slot(&mut self, index: usize, change: SlotField) -> AppResult<()> {
        self.check_slot(index)?;
        let slot = &mut self.slots[index];
        match change {
            SlotField::Day(day) if day > 6 => {
                return Err(AppError::BadRequest(
                    "Day must be between 0 (Sunday) and 6 (Saturday)".to_string(),
                ));
            }
            SlotField::Day(day) => slot.day = day,
            SlotField::Start(start) => slot.start = start,
            SlotField::End(end) => slot.end = end,
        }
        Ok(())
    }

    /// Adds an exception date and keeps the list ordered by date string.
    pub fn add_exception(&mut self, date: &str, reason: &str) -> AppResult<()> {
        let reason = reason.trim();
        if date.is_empty() || reason.is_empty() {
            return Err(AppError::BadRequest(
                "An exception needs both a date and a reason".to_string(),
            ));
        }
        self.recurring.exceptions.push(Exception {
            date: date.to_string(),
            reason: reason.to_string(),
        });
        self.recurring
            .exceptions
            .sort_by(|a, b| a.date.cmp(&b.date));
        Ok(())
    }

    pub fn remove_exception(&mut self, index: usize) -> AppResult<Exception> {
        if index >= self.recurring.exceptions.len() {
            return Err(AppError::NotFound(format!("No exception at position {index}")));
        }
        Ok(self.recurring.exceptions.remove(index))
    }

    pub fn set_recurring(&mut self, update: RecurringUpdate) -> AppResult<()> {
        if update.duration == Some(0) {
            return Err(AppError::BadRequest(
                "Duration must be at least one month".to_string(),
            ));
        }
        if let Some(enabled) = update.enabled {
            self.recurring.enabled = enabled;
        }
        if let Some(duration) = update.duration {
            self.recurring.duration = duration;
        }
        if let Some(start_date) = update.start_date {
            self.recurring.start_date = start_date;
        }
        Ok(())
    }

    /// The profile with this editor's slots and settings folded in.
    pub fn into_profile(self, mut profile: MentorProfile) -> MentorProfile {
        profile.availability = Some(self.slots);
        profile.recurring_settings = Some(self.recurring);
        profile
    }

    fn check_slot(&self, index: usize) -> AppResult<()> {
        if index >= self.slots.len() {
            return Err(AppError::NotFound(format!("No slot at position {index}")));
        }
        Ok(())
    }
}
