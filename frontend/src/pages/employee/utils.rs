use crate::api::{ApiError, CreateLeaveRequest};
use chrono::NaiveDate;
use leptos::*;

/// Form inputs stay raw strings until submission; `to_payload` is the only
/// place they become typed. Date ordering is deliberately not checked here,
/// the backend owns that rule and its message is shown as-is.
#[derive(Clone, Copy)]
pub struct LeaveFormState {
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let start = parse_date(&self.start_date.get_untracked(), "Start date")?;
        let end = parse_date(&self.end_date.get_untracked(), "End date")?;
        let reason = self.reason.get_untracked();
        if reason.trim().is_empty() {
            return Err(ApiError::validation("Reason is required"));
        }
        Ok(CreateLeaveRequest {
            start_date: start,
            end_date: end,
            reason,
        })
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", field)));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("{} must be in YYYY-MM-DD format", field)))
}
