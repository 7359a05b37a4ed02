use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::LeaveError;
use crate::model::{
    employee::Employee,
    leave_request::{LeaveRequest, LeaveType},
};
use crate::service::LeaveService;

/// Longest range a single calendar query may span.
pub const MAX_RANGE_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub leave_id: u64,
    pub employee_id: u64,
    pub employee_name: Option<String>,
    pub leave_type: LeaveType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalendarDay {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub off: Vec<Absence>,
}

/// One entry per day of `[from, to]`, listing the Approved leaves covering it.
pub fn availability(
    from: NaiveDate,
    to: NaiveDate,
    approved: &[LeaveRequest],
    employees: &HashMap<u64, Employee>,
) -> Vec<CalendarDay> {
    from.iter_days()
        .take_while(|day| *day <= to)
        .map(|date| CalendarDay {
            date,
            off: approved
                .iter()
                .filter(|leave| leave.covers(date))
                .map(|leave| Absence {
                    leave_id: leave.id,
                    employee_id: leave.employee_id,
                    employee_name: employees.get(&leave.employee_id).map(|e| e.name.clone()),
                    leave_type: leave.leave_type,
                })
                .collect(),
        })
        .collect()
}

impl LeaveService {
    /// Approved leaves overlapping `[from, to]`, for the team calendar.
    pub async fn approved_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, LeaveError> {
        if from > to {
            return Err(LeaveError::validation("from cannot be after to"));
        }
        if (to - from).num_days() >= MAX_RANGE_DAYS {
            return Err(LeaveError::validation(format!(
                "calendar range is limited to {MAX_RANGE_DAYS} days"
            )));
        }
        self.store
            .list_approved_overlapping(from, to)
            .await
            .map_err(LeaveError::unavailable)
    }
}
