use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{employee::Employee, role::Role};

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "employee@test.com")]
    pub email: String,
    #[schema(example = "123456")]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: Employee,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    pub sub: String, // email
    pub name: String,
    pub role: Role,
    pub exp: usize,
    pub jti: String,
}
