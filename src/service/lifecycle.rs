//! Leave request lifecycle.
//!
//! ```text
//! Pending --decide(Approved)--> Approved
//! Pending --decide(Rejected)--> Rejected
//! Pending --cancel()----------> <deleted>
//! ```
//!
//! Approved and Rejected are terminal. Both guarded transitions are applied
//! by the store as conditional writes, so a concurrent second decision on
//! the same request loses instead of overwriting the first.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use tracing::{info, instrument, warn};

use crate::error::LeaveError;
use crate::model::leave_request::{
    ApplyLeave, DecideLeave, Decision, LeaveRequest, LeaveStatus, LeaveType, NewLeave,
};
use crate::service::LeaveService;
use crate::store::Conditional;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, LeaveError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(LeaveError::validation(format!("{field} is required"))),
    }
}

/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (date part is kept).
fn parse_date(value: &str, field: &str) -> Result<NaiveDate, LeaveError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| LeaveError::validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

/// Checks an apply payload and turns it into a typed `NewLeave`.
pub fn validate_application(input: &ApplyLeave) -> Result<NewLeave, LeaveError> {
    let employee_id = input
        .employee_id
        .ok_or_else(|| LeaveError::validation("employeeId is required"))?;

    let leave_type = required(input.leave_type.as_deref(), "leaveType")?;
    let leave_type = LeaveType::from_str(leave_type).map_err(|_| {
        LeaveError::validation(format!(
            "invalid leaveType '{leave_type}'. Allowed: Casual, Sick, Earned"
        ))
    })?;

    let start_date = parse_date(required(input.start_date.as_deref(), "startDate")?, "startDate")?;
    let end_date = parse_date(required(input.end_date.as_deref(), "endDate")?, "endDate")?;
    if start_date > end_date {
        return Err(LeaveError::validation("startDate cannot be after endDate"));
    }

    let reason = required(input.reason.as_deref(), "reason")?.to_string();

    Ok(NewLeave {
        employee_id,
        leave_type,
        start_date,
        end_date,
        reason,
    })
}

impl LeaveService {
    /// Files a new request. The result is always Pending. Overlapping
    /// requests for the same employee are not detected.
    pub async fn create(&self, input: ApplyLeave) -> Result<LeaveRequest, LeaveError> {
        self.submit(validate_application(&input)?).await
    }

    /// Persists an application that already passed `validate_application`.
    #[instrument(skip(self, new_leave), fields(employee_id = new_leave.employee_id))]
    pub async fn submit(&self, new_leave: NewLeave) -> Result<LeaveRequest, LeaveError> {
        let leave = self
            .store
            .insert_leave(new_leave)
            .await
            .map_err(LeaveError::unavailable)?;

        info!(leave_id = leave.id, leave_type = %leave.leave_type, "Leave request submitted");
        Ok(leave)
    }

    /// Resolves a Pending request to Approved or Rejected.
    #[instrument(skip(self, input))]
    pub async fn decide(&self, id: u64, input: DecideLeave) -> Result<LeaveRequest, LeaveError> {
        let decision = required(input.status.as_deref(), "status")?;
        let decision = Decision::from_str(decision).map_err(|_| {
            LeaveError::validation(format!(
                "invalid status '{decision}'. Allowed: Approved, Rejected"
            ))
        })?;
        let comment = input
            .manager_comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        match self
            .store
            .decide_if_pending(id, decision.into(), comment)
            .await
            .map_err(LeaveError::unavailable)?
        {
            Conditional::Applied(leave) => {
                info!(leave_id = id, status = %leave.status, "Leave request decided");
                Ok(leave)
            }
            Conditional::Missing => Err(LeaveError::leave_not_found(id)),
            Conditional::NotPending(current) => {
                warn!(leave_id = id, status = %current, "Decision on processed leave refused");
                Err(LeaveError::InvalidState(format!(
                    "leave request has already been processed ({current})"
                )))
            }
        }
    }

    /// Permanently removes a Pending request.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: u64) -> Result<(), LeaveError> {
        match self
            .store
            .delete_if_pending(id)
            .await
            .map_err(LeaveError::unavailable)?
        {
            Conditional::Applied(()) => {
                info!(leave_id = id, "Leave request cancelled");
                Ok(())
            }
            Conditional::Missing => Err(LeaveError::leave_not_found(id)),
            Conditional::NotPending(_) => Err(LeaveError::InvalidState(
                "cannot cancel a processed request".to_string(),
            )),
        }
    }

    pub async fn get(&self, id: u64) -> Result<LeaveRequest, LeaveError> {
        self.store
            .get_leave(id)
            .await
            .map_err(LeaveError::unavailable)?
            .ok_or_else(|| LeaveError::leave_not_found(id))
    }

    pub async fn list_for_employee(&self, employee_id: u64) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.store
            .list_by_employee(employee_id)
            .await
            .map_err(LeaveError::unavailable)
    }

    pub async fn list_all(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.store
            .list_leaves(status)
            .await
            .map_err(LeaveError::unavailable)
    }
}
