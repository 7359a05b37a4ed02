use std::sync::{
    RwLock,
    atomic::{AtomicU64, Ordering},
};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::model::{
    employee::{Credentials, Employee, NewEmployee},
    leave_request::{LeaveRequest, LeaveStatus, NewLeave},
};
use crate::store::{Conditional, EmployeeStore, LeaveStore};

/// Process-local store. Records live in insertion order; every
/// read-modify-write happens under one write lock.
#[derive(Default)]
pub struct MemoryStore {
    leaves: RwLock<Vec<LeaveRequest>>,
    employees: RwLock<Vec<Credentials>>,
    next_leave_id: AtomicU64,
    next_employee_id: AtomicU64,
}

fn poisoned() -> anyhow::Error {
    anyhow!("memory store lock poisoned")
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn insert_leave(&self, leave: NewLeave) -> Result<LeaveRequest> {
        let mut leaves = self.leaves.write().map_err(|_| poisoned())?;
        let record = LeaveRequest {
            id: self.next_leave_id.fetch_add(1, Ordering::SeqCst) + 1,
            employee_id: leave.employee_id,
            leave_type: leave.leave_type,
            start_date: leave.start_date,
            end_date: leave.end_date,
            reason: leave.reason,
            status: LeaveStatus::Pending,
            manager_comment: None,
            created_at: Utc::now(),
        };
        leaves.push(record.clone());
        Ok(record)
    }

    async fn get_leave(&self, id: u64) -> Result<Option<LeaveRequest>> {
        let leaves = self.leaves.read().map_err(|_| poisoned())?;
        Ok(leaves.iter().find(|l| l.id == id).cloned())
    }

    async fn list_by_employee(&self, employee_id: u64) -> Result<Vec<LeaveRequest>> {
        let leaves = self.leaves.read().map_err(|_| poisoned())?;
        Ok(leaves
            .iter()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>> {
        let leaves = self.leaves.read().map_err(|_| poisoned())?;
        Ok(leaves
            .iter()
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect())
    }

    async fn list_approved_overlapping(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>> {
        let leaves = self.leaves.read().map_err(|_| poisoned())?;
        Ok(leaves
            .iter()
            .filter(|l| l.status == LeaveStatus::Approved)
            .filter(|l| l.start_date <= to && l.end_date >= from)
            .cloned()
            .collect())
    }

    async fn decide_if_pending(
        &self,
        id: u64,
        status: LeaveStatus,
        manager_comment: Option<String>,
    ) -> Result<Conditional<LeaveRequest>> {
        let mut leaves = self.leaves.write().map_err(|_| poisoned())?;
        let Some(leave) = leaves.iter_mut().find(|l| l.id == id) else {
            return Ok(Conditional::Missing);
        };
        if leave.status.is_terminal() {
            return Ok(Conditional::NotPending(leave.status));
        }
        leave.status = status;
        leave.manager_comment = manager_comment;
        Ok(Conditional::Applied(leave.clone()))
    }

    async fn delete_if_pending(&self, id: u64) -> Result<Conditional<()>> {
        let mut leaves = self.leaves.write().map_err(|_| poisoned())?;
        let Some(pos) = leaves.iter().position(|l| l.id == id) else {
            return Ok(Conditional::Missing);
        };
        if leaves[pos].status.is_terminal() {
            return Ok(Conditional::NotPending(leaves[pos].status));
        }
        leaves.remove(pos);
        Ok(Conditional::Applied(()))
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert_employee(&self, employee: NewEmployee) -> Result<Employee> {
        let mut employees = self.employees.write().map_err(|_| poisoned())?;
        let email = employee.email.trim().to_lowercase();
        if employees.iter().any(|c| c.employee.email == email) {
            return Err(anyhow!("employee with email {email} already exists"));
        }
        let record = Employee {
            id: self.next_employee_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: employee.name,
            email,
            role: employee.role,
        };
        employees.push(Credentials {
            employee: record.clone(),
            password_hash: employee.password_hash,
        });
        Ok(record)
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>> {
        let email = email.trim().to_lowercase();
        let employees = self.employees.read().map_err(|_| poisoned())?;
        Ok(employees.iter().find(|c| c.employee.email == email).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.read().map_err(|_| poisoned())?;
        Ok(employees.iter().map(|c| c.employee.clone()).collect())
    }

    async fn count_employees(&self) -> Result<u64> {
        let employees = self.employees.read().map_err(|_| poisoned())?;
        Ok(employees.len() as u64)
    }
}
