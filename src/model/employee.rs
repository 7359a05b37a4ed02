use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 2,
        "name": "Bob Employee",
        "email": "employee@test.com",
        "role": "employee"
    })
)]
pub struct Employee {
    #[schema(example = 2)]
    pub id: u64,

    #[schema(example = "Bob Employee")]
    pub name: String,

    #[schema(example = "employee@test.com")]
    pub email: String,

    pub role: Role,
}

/// Employee row together with its stored password hash. Never serialized.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub employee: Employee,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Requester projection attached to leave records for manager views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeSummary {
    #[schema(example = 2)]
    pub id: u64,
    #[schema(example = "Bob Employee")]
    pub name: String,
    #[schema(example = "employee@test.com")]
    pub email: String,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
        }
    }
}
