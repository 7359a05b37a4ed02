use crate::{
    auth::{jwt::generate_access_token, password::verify_password},
    config::Config,
    error::LeaveError,
    models::{LoginReqDto, LoginResponse},
    store::EmployeeStore,
};
use actix_web::{HttpResponse, web};
use tracing::{debug, error, info, instrument};

/// Login endpoint
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body(
        content = LoginReqDto,
        description = "Email and password",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(employees, config, user),
    fields(email = %user.email)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    employees: web::Data<dyn EmployeeStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, LeaveError> {
    info!("Login request received");

    // 1️⃣ Basic validation
    if user.email.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty email or password");
        return Err(LeaveError::validation("email and password are required"));
    }

    // 2️⃣ Fetch employee
    let credentials = match employees
        .find_credentials(&user.email)
        .await
        .map_err(LeaveError::unavailable)?
    {
        Some(c) => {
            debug!(user_id = c.employee.id, "Employee found");
            c
        }
        None => {
            info!("Invalid credentials: unknown email");
            return Err(LeaveError::Unauthorized("Invalid credentials".into()));
        }
    };

    // 3️⃣ Verify password
    if !verify_password(&user.password, &credentials.password_hash) {
        info!("Invalid credentials: password mismatch");
        return Err(LeaveError::Unauthorized("Invalid credentials".into()));
    }

    // 4️⃣ Generate access token
    let token = generate_access_token(
        &credentials.employee,
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign access token");
        LeaveError::Unavailable("Could not issue token".into())
    })?;

    info!(user_id = credentials.employee.id, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: credentials.employee,
    }))
}
