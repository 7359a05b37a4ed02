use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, MySqlPool};
use tracing::warn;

use crate::model::{
    employee::{Credentials, Employee, NewEmployee},
    leave_request::{LeaveRequest, LeaveStatus, LeaveType, NewLeave},
    role::Role,
};
use crate::store::{Conditional, EmployeeStore, LeaveStore};

const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leave_requests (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        employee_id BIGINT UNSIGNED NOT NULL,
        leave_type VARCHAR(16) NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        reason TEXT NOT NULL,
        status VARCHAR(16) NOT NULL DEFAULT 'Pending',
        manager_comment TEXT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        INDEX idx_leave_employee (employee_id),
        INDEX idx_leave_status (status)
    )
    "#,
];

const LEAVE_COLUMNS: &str =
    "id, employee_id, leave_type, start_date, end_date, reason, status, manager_comment, created_at";

#[derive(FromRow)]
struct LeaveRow {
    id: u64,
    employee_id: u64,
    leave_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: String,
    status: String,
    manager_comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaveRow> for LeaveRequest {
    type Error = anyhow::Error;

    fn try_from(row: LeaveRow) -> Result<Self> {
        Ok(LeaveRequest {
            id: row.id,
            employee_id: row.employee_id,
            leave_type: LeaveType::from_str(&row.leave_type)
                .map_err(|_| anyhow!("unknown leave type '{}'", row.leave_type))?,
            start_date: row.start_date,
            end_date: row.end_date,
            reason: row.reason,
            status: LeaveStatus::from_str(&row.status)
                .map_err(|_| anyhow!("unknown leave status '{}'", row.status))?,
            manager_comment: row.manager_comment,
            created_at: row.created_at,
        })
    }
}

/// Rows written by older clients may carry free-text leave types; those are
/// skipped with a warning instead of failing the whole listing.
fn into_requests(rows: Vec<LeaveRow>) -> Vec<LeaveRequest> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match LeaveRequest::try_from(row) {
                Ok(leave) => Some(leave),
                Err(e) => {
                    warn!(error = %e, leave_id = id, "Skipping unreadable leave row");
                    None
                }
            }
        })
        .collect()
}

#[derive(FromRow)]
struct EmployeeRow {
    id: u64,
    name: String,
    email: String,
    password: String,
    role: String,
}

impl TryFrom<EmployeeRow> for Credentials {
    type Error = anyhow::Error;

    fn try_from(row: EmployeeRow) -> Result<Self> {
        Ok(Credentials {
            employee: Employee {
                id: row.id,
                name: row.name,
                email: row.email,
                role: Role::from_str(&row.role)
                    .map_err(|_| anyhow!("unknown role '{}'", row.role))?,
            },
            password_hash: row.password,
        })
    }
}

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        for ddl in SCHEMA {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .context("failed to apply schema")?;
        }
        Ok(())
    }

    async fn current_status(&self, id: u64) -> Result<Option<LeaveStatus>> {
        let status = sqlx::query_scalar::<_, String>("SELECT status FROM leave_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        status
            .map(|s| LeaveStatus::from_str(&s).map_err(|_| anyhow!("unknown leave status '{s}'")))
            .transpose()
    }
}

#[async_trait]
impl LeaveStore for MySqlStore {
    async fn insert_leave(&self, leave: NewLeave) -> Result<LeaveRequest> {
        let result = sqlx::query(
            r#"
            INSERT INTO leave_requests
                (employee_id, leave_type, start_date, end_date, reason, status)
            VALUES (?, ?, ?, ?, ?, 'Pending')
            "#,
        )
        .bind(leave.employee_id)
        .bind(leave.leave_type.to_string())
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(&leave.reason)
        .execute(&self.pool)
        .await
        .context("insert leave request")?;

        let id = result.last_insert_id();
        self.get_leave(id)
            .await?
            .ok_or_else(|| anyhow!("leave request {id} vanished after insert"))
    }

    async fn get_leave(&self, id: u64) -> Result<Option<LeaveRequest>> {
        let row = sqlx::query_as::<_, LeaveRow>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(LeaveRequest::try_from).transpose()
    }

    async fn list_by_employee(&self, employee_id: u64) -> Result<Vec<LeaveRequest>> {
        let rows = sqlx::query_as::<_, LeaveRow>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE employee_id = ? ORDER BY id"
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(into_requests(rows))
    }

    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, LeaveRow>(&format!(
                    "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE status = ? ORDER BY id"
                ))
                .bind(status.to_string())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, LeaveRow>(&format!(
                    "SELECT {LEAVE_COLUMNS} FROM leave_requests ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(into_requests(rows))
    }

    async fn list_approved_overlapping(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>> {
        let rows = sqlx::query_as::<_, LeaveRow>(&format!(
            r#"
            SELECT {LEAVE_COLUMNS} FROM leave_requests
            WHERE status = 'Approved'
            AND start_date <= ?
            AND end_date >= ?
            ORDER BY id
            "#
        ))
        .bind(to)
        .bind(from)
        .fetch_all(&self.pool)
        .await?;
        Ok(into_requests(rows))
    }

    async fn decide_if_pending(
        &self,
        id: u64,
        status: LeaveStatus,
        manager_comment: Option<String>,
    ) -> Result<Conditional<LeaveRequest>> {
        let result = sqlx::query(
            r#"
            UPDATE leave_requests
            SET status = ?, manager_comment = ?
            WHERE id = ?
            AND status = 'Pending'
            "#,
        )
        .bind(status.to_string())
        .bind(manager_comment)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("decide leave request")?;

        if result.rows_affected() == 0 {
            return Ok(match self.current_status(id).await? {
                Some(current) => Conditional::NotPending(current),
                None => Conditional::Missing,
            });
        }

        match self.get_leave(id).await? {
            Some(leave) => Ok(Conditional::Applied(leave)),
            None => Ok(Conditional::Missing),
        }
    }

    async fn delete_if_pending(&self, id: u64) -> Result<Conditional<()>> {
        let result = sqlx::query("DELETE FROM leave_requests WHERE id = ? AND status = 'Pending'")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("cancel leave request")?;

        if result.rows_affected() == 0 {
            return Ok(match self.current_status(id).await? {
                Some(current) => Conditional::NotPending(current),
                None => Conditional::Missing,
            });
        }
        Ok(Conditional::Applied(()))
    }
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn insert_employee(&self, employee: NewEmployee) -> Result<Employee> {
        let email = employee.email.trim().to_lowercase();
        let result = sqlx::query(
            r#"INSERT INTO employees (name, email, password, role) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&employee.name)
        .bind(&email)
        .bind(&employee.password_hash)
        .bind(employee.role.to_string())
        .execute(&self.pool)
        .await
        .with_context(|| format!("insert employee {email}"))?;

        Ok(Employee {
            id: result.last_insert_id(),
            name: employee.name,
            email,
            role: employee.role,
        })
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, email, password, role FROM employees WHERE email = ?",
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;
        row.map(Credentials::try_from).transpose()
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, email, password, role FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| Credentials::try_from(row).map(|c| c.employee))
            .collect()
    }

    async fn count_employees(&self) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
