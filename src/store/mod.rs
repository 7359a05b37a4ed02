//! Leave record store abstraction.
//!
//! The service layer only talks to these traits, so the in-memory backend
//! and the MySQL backend are interchangeable.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::{
    employee::{Credentials, Employee, NewEmployee},
    leave_request::{LeaveRequest, LeaveStatus, NewLeave},
};

pub mod memory;
pub mod mysql;

/// Result of a write guarded by `status = Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conditional<T> {
    Applied(T),
    Missing,
    /// The record exists but has already left Pending.
    NotPending(LeaveStatus),
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    /// Persist a new request with status Pending and return it with its id.
    async fn insert_leave(&self, leave: NewLeave) -> Result<LeaveRequest>;

    async fn get_leave(&self, id: u64) -> Result<Option<LeaveRequest>>;

    /// All requests of one employee, in insertion order.
    async fn list_by_employee(&self, employee_id: u64) -> Result<Vec<LeaveRequest>>;

    /// All requests, optionally restricted to one status, in insertion order.
    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>>;

    /// Approved requests overlapping `[from, to]`.
    async fn list_approved_overlapping(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>>;

    /// Set status and comment only if the record is still Pending.
    async fn decide_if_pending(
        &self,
        id: u64,
        status: LeaveStatus,
        manager_comment: Option<String>,
    ) -> Result<Conditional<LeaveRequest>>;

    /// Delete the record only if it is still Pending.
    async fn delete_if_pending(&self, id: u64) -> Result<Conditional<()>>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert_employee(&self, employee: NewEmployee) -> Result<Employee>;

    /// Lookup is case-insensitive on the email address.
    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>>;

    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn count_employees(&self) -> Result<u64>;
}
