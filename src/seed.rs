use anyhow::{Context, Result};
use tracing::info;

use crate::auth::password::hash_password;
use crate::model::{employee::NewEmployee, role::Role};
use crate::store::EmployeeStore;

pub const DEMO_PASSWORD: &str = "123456";

const DEMO_USERS: [(&str, &str, Role); 2] = [
    ("Alice Manager", "manager@test.com", Role::Manager),
    ("Bob Employee", "employee@test.com", Role::Employee),
];

/// Creates the demo manager and employee accounts when no employee exists yet.
/// Returns how many accounts were inserted.
pub async fn seed_demo_users(employees: &dyn EmployeeStore) -> Result<usize> {
    if employees.count_employees().await? > 0 {
        return Ok(0);
    }

    for (name, email, role) in DEMO_USERS {
        let password_hash = hash_password(DEMO_PASSWORD)
            .map_err(|e| anyhow::anyhow!("hashing demo password: {e}"))?;
        employees
            .insert_employee(NewEmployee {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .with_context(|| format!("seeding {email}"))?;
    }

    info!(count = DEMO_USERS.len(), "Seeded demo users");
    Ok(DEMO_USERS.len())
}
