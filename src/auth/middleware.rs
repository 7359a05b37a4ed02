use crate::auth::auth::{AuthUser, authenticate};
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
};
use tracing::debug;

/// Rejects requests without a valid bearer token and stores the caller
/// as an `AuthUser` request extension.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let auth_user: AuthUser = match authenticate(req.request()) {
        Ok(user) => user,
        Err(e) => {
            debug!(path = %req.path(), error = %e, "Rejected unauthenticated request");
            let resp = e.error_response();
            return Ok(req.into_response(resp));
        }
    };

    req.extensions_mut().insert(auth_user);

    next.call(req).await
}
