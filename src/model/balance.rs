use serde::Serialize;
use utoipa::ToSchema;

use crate::model::leave_request::LeaveType;

/// Fixed annual day budget per leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceTable {
    pub casual: u32,
    pub sick: u32,
    pub earned: u32,
}

impl Default for AllowanceTable {
    fn default() -> Self {
        Self {
            casual: 12,
            sick: 7,
            earned: 15,
        }
    }
}

/// Remaining days per leave type. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({ "casual": 7, "sick": 7, "earned": 15 }))]
pub struct LeaveBalance {
    pub casual: u32,
    pub sick: u32,
    pub earned: u32,
}

impl From<AllowanceTable> for LeaveBalance {
    fn from(table: AllowanceTable) -> Self {
        Self {
            casual: table.casual,
            sick: table.sick,
            earned: table.earned,
        }
    }
}

impl LeaveBalance {
    /// Subtracts `days` from one bucket, flooring at zero.
    pub fn deduct(&mut self, leave_type: LeaveType, days: u32) {
        let bucket = match leave_type {
            LeaveType::Casual => &mut self.casual,
            LeaveType::Sick => &mut self.sick,
            LeaveType::Earned => &mut self.earned,
        };
        *bucket = bucket.saturating_sub(days);
    }
}
