use tracing::debug;

use crate::error::LeaveError;
use crate::model::{
    balance::{AllowanceTable, LeaveBalance},
    leave_request::{LeaveRequest, LeaveStatus},
};
use crate::service::LeaveService;

/// Remaining balance of one employee: the allowance table minus the
/// inclusive day count of each of their Approved requests, floored at zero.
///
/// Requests of other employees and requests in any other status are ignored.
/// Nothing is cached; callers recompute after every change to the request set.
pub fn compute(
    employee_id: u64,
    requests: &[LeaveRequest],
    allowances: &AllowanceTable,
) -> LeaveBalance {
    requests
        .iter()
        .filter(|r| r.employee_id == employee_id && r.status == LeaveStatus::Approved)
        .fold(LeaveBalance::from(*allowances), |mut balance, r| {
            balance.deduct(r.leave_type, r.duration_days());
            balance
        })
}

impl LeaveService {
    pub async fn balance_for(&self, employee_id: u64) -> Result<LeaveBalance, LeaveError> {
        let requests = self.list_for_employee(employee_id).await?;
        let balance = compute(employee_id, &requests, &self.allowances);
        debug!(employee_id, ?balance, "Computed leave balance");
        Ok(balance)
    }
}
