use crate::config::Config;
use crate::error::LeaveError;
use crate::{auth::jwt::verify_token, model::role::Role, models::Claims};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}

/// Verifies the bearer token of a request.
pub fn authenticate(req: &HttpRequest) -> Result<AuthUser, LeaveError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| LeaveError::Unauthorized("Missing bearer token".into()))?;

    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| LeaveError::Unavailable("Config missing".into()))?;

    verify_token(token, &config.jwt_secret)
        .map(AuthUser::from)
        .map_err(|e| LeaveError::Unauthorized(format!("Invalid or expired token: {e}")))
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // set by the bearer middleware; routes outside it fall back to decoding
        if let Some(user) = req.extensions().get::<AuthUser>() {
            return ready(Ok(user.clone()));
        }
        ready(authenticate(req).map_err(Into::into))
    }
}

impl AuthUser {
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    pub fn require_manager(&self) -> Result<(), LeaveError> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(LeaveError::Forbidden("Manager only".into()))
        }
    }

    /// The employee themself, or any manager.
    pub fn require_self_or_manager(&self, employee_id: u64) -> Result<(), LeaveError> {
        if self.user_id == employee_id || self.is_manager() {
            Ok(())
        } else {
            Err(LeaveError::Forbidden(
                "Cannot access another employee's leave records".into(),
            ))
        }
    }

    pub fn require_self(&self, employee_id: u64) -> Result<(), LeaveError> {
        if self.user_id == employee_id {
            Ok(())
        } else {
            Err(LeaveError::Forbidden(
                "Only the requesting employee may do this".into(),
            ))
        }
    }
}
