//! The three-step booking wizard: pick a slot, confirm, pay.
//!
//! Candidate dates and times are fixed demo lists; they are not derived from
//! the mentor's availability and nothing here checks for double booking.

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::mentor::Mentor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectSlot,
    Confirm,
    Success,
}

impl BookingStep {
    pub fn number(self) -> u8 {
        match self {
            BookingStep::SelectSlot => 1,
            BookingStep::Confirm => 2,
            BookingStep::Success => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CandidateDate {
    pub date: &'static str,
    pub day: &'static str,
    pub day_num: u8,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CandidateTime {
    pub time: &'static str,
    pub available: bool,
}

pub static DATES: [CandidateDate; 7] = [
    CandidateDate { date: "2024-01-15", day: "Mon", day_num: 15, available: true },
    CandidateDate { date: "2024-01-16", day: "Tue", day_num: 16, available: true },
    CandidateDate { date: "2024-01-17", day: "Wed", day_num: 17, available: false },
    CandidateDate { date: "2024-01-18", day: "Thu", day_num: 18, available: true },
    CandidateDate { date: "2024-01-19", day: "Fri", day_num: 19, available: true },
    CandidateDate { date: "2024-01-20", day: "Sat", day_num: 20, available: true },
    CandidateDate { date: "2024-01-21", day: "Sun", day_num: 21, available: false },
];

pub const SESSION_MINUTES: u32 = 45;

pub static TIME_SLOTS: [CandidateTime; 8] = [
    CandidateTime { time: "09:00 AM", available: true },
    CandidateTime { time: "10:00 AM", available: true },
    CandidateTime { time: "11:00 AM", available: false },
    CandidateTime { time: "02:00 PM", available: true },
    CandidateTime { time: "03:00 PM", available: true },
    CandidateTime { time: "04:00 PM", available: false },
    CandidateTime { time: "05:00 PM", available: true },
    CandidateTime { time: "06:00 PM", available: true },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWizard {
    mentor_id: u32,
    selected_date: String,
    selected_time: String,
    step: BookingStep,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub mentor_id: u32,
    pub mentor_name: &'static str,
    pub date: String,
    pub time: String,
    pub price: u32,
    pub duration_minutes: u32,
    pub step: BookingStep,
    pub step_number: u8,
}

impl BookingWizard {
    pub fn new(mentor_id: u32) -> Self {
        Self {
            mentor_id,
            selected_date: String::new(),
            selected_time: String::new(),
            step: BookingStep::SelectSlot,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn selected_time(&self) -> &str {
        &self.selected_time
    }

    pub fn select_date(&mut self, date: &str) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSlot)?;
        if !DATES.iter().any(|d| d.available && d.date == date) {
            return Err(AppError::BadRequest(format!("{date} is not available")));
        }
        self.selected_date = date.to_string();
        Ok(())
    }

    pub fn select_time(&mut self, time: &str) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSlot)?;
        if self.selected_date.is_empty() {
            return Err(AppError::BadRequest("Please select a date first".to_string()));
        }
        if !TIME_SLOTS.iter().any(|t| t.available && t.time == time) {
            return Err(AppError::BadRequest(format!("{time} is not available")));
        }
        self.selected_time = time.to_string();
        Ok(())
    }

    /// Step 1 to 2. Needs both a date and a time.
    pub fn proceed(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSlot)?;
        if self.selected_date.is_empty() || self.selected_time.is_empty() {
            return Err(AppError::BadRequest(
                "Please select a date and time".to_string(),
            ));
        }
        self.step = BookingStep::Confirm;
        Ok(())
    }

    /// Step 2 back to 1, keeping the selection.
    pub fn back(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::Confirm)?;
        self.step = BookingStep::SelectSlot;
        Ok(())
    }

    /// Step 2 to 3. Payment is simulated and always succeeds.
    pub fn pay(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::Confirm)?;
        self.step = BookingStep::Success;
        tracing::info!(
            mentor_id = self.mentor_id,
            date = %self.selected_date,
            time = %self.selected_time,
            "Session booked"
        );
        Ok(())
    }

    pub fn summary(&self, mentor: &Mentor) -> BookingSummary {
        BookingSummary {
            mentor_id: mentor.id,
            mentor_name: mentor.name,
            date: self.selected_date.clone(),
            time: self.selected_time.clone(),
            price: mentor.price,
            duration_minutes: SESSION_MINUTES,
            step: self.step,
            step_number: self.step.number(),
        }
    }

    fn expect_step(&self, expected: BookingStep) -> AppResult<()> {
        if self.step != expected {
            return Err(AppError::BadRequest(format!(
                "Booking is at step {}, expected step {}",
                self.step.number(),
                expected.number()
            )));
        }
        Ok(())
    }
}
