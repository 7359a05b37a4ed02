use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failure kinds surfaced by the leave service and its handlers.
///
/// Every variant renders as `{"error": {"kind": ..., "message": ...}}` so
/// clients can branch on `kind` instead of parsing prose.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum LeaveError {
    /// Missing or malformed input, bad date ordering
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
    /// Transition not allowed from the record's current status
    #[display(fmt = "{}", _0)]
    InvalidState(String),
    #[display(fmt = "{}", _0)]
    Unauthorized(String),
    #[display(fmt = "{}", _0)]
    Forbidden(String),
    /// The backing store could not be reached or failed mid-operation
    #[display(fmt = "{}", _0)]
    Unavailable(String),
}

impl LeaveError {
    pub fn validation(message: impl Into<String>) -> Self {
        LeaveError::Validation(message.into())
    }

    pub fn leave_not_found(id: u64) -> Self {
        LeaveError::NotFound(format!("leave request {id} not found"))
    }

    /// Any store failure is reported the same way; the cause goes to the log only.
    pub fn unavailable(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "Leave store operation failed");
        LeaveError::Unavailable("service temporarily unavailable, please retry".to_string())
    }

    /// Stable machine-readable discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            LeaveError::Validation(_) => "validation_error",
            LeaveError::NotFound(_) => "not_found",
            LeaveError::InvalidState(_) => "invalid_state",
            LeaveError::Unauthorized(_) => "unauthorized",
            LeaveError::Forbidden(_) => "forbidden",
            LeaveError::Unavailable(_) => "unavailable",
        }
    }
}

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeaveError::Validation(_) => StatusCode::BAD_REQUEST,
            LeaveError::NotFound(_) => StatusCode::NOT_FOUND,
            LeaveError::InvalidState(_) => StatusCode::CONFLICT,
            LeaveError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            LeaveError::Forbidden(_) => StatusCode::FORBIDDEN,
            LeaveError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_body_carries_kind_and_message() {
        let err = LeaveError::InvalidState("cannot cancel a processed request".into());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["kind"], "invalid_state");
        assert_eq!(value["error"]["message"], "cannot cancel a processed request");
    }

    #[test]
    fn status_codes_follow_kind() {
        assert_eq!(
            LeaveError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(LeaveError::leave_not_found(7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            LeaveError::leave_not_found(7).to_string(),
            "leave request 7 not found"
        );
        assert_eq!(
            LeaveError::Forbidden("no".into()).kind(),
            "forbidden"
        );
    }
}
