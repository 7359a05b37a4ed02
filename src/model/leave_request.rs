use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum LeaveType {
    Casual,
    Sick,
    Earned,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Approved and Rejected have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// A manager's resolution of a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for LeaveStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => LeaveStatus::Approved,
            Decision::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "employeeId": 2,
    "leaveType": "Casual",
    "startDate": "2024-01-01",
    "endDate": "2024-01-05",
    "reason": "Family trip",
    "status": "Pending",
    "managerComment": null,
    "createdAt": "2024-01-01T00:00:00Z"
}))]
pub struct LeaveRequest {
    pub id: u64,
    pub employee_id: u64,
    pub leave_type: LeaveType,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub manager_comment: Option<String>,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Inclusive day count of the requested range.
    pub fn duration_days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days().unsigned_abs();
        u32::try_from(span).unwrap_or(u32::MAX).saturating_add(1)
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// A validated application, ready to be persisted with status Pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeave {
    pub employee_id: u64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Raw apply payload. Every field is optional so that missing input is
/// reported as a validation failure rather than a decoding error.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeave {
    #[schema(example = 2)]
    pub employee_id: Option<u64>,
    #[schema(example = "Casual")]
    pub leave_type: Option<String>,
    #[schema(example = "2024-01-01", format = "date")]
    pub start_date: Option<String>,
    #[schema(example = "2024-01-05", format = "date")]
    pub end_date: Option<String>,
    #[schema(example = "Family trip")]
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideLeave {
    #[schema(example = "Approved")]
    pub status: Option<String>,
    #[schema(example = "Enjoy the break")]
    pub manager_comment: Option<String>,
}
