use std::sync::Arc;

use crate::{
    api::{health, leave},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
    error::LeaveError,
    service::LeaveService,
    store::{EmployeeStore, LeaveStore},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

/// Shared handles registered as app data.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<Config>,
    pub leaves: web::Data<LeaveService>,
    pub employees: web::Data<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        leave_store: Arc<dyn LeaveStore>,
        employee_store: Arc<dyn EmployeeStore>,
    ) -> Self {
        let leaves = LeaveService::new(leave_store, config.allowances);
        Self {
            config: web::Data::new(config),
            leaves: web::Data::new(leaves),
            employees: web::Data::from(employee_store),
        }
    }
}

// Extraction failures use the same error body as every other validation failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        LeaveError::validation(format!("invalid request body: {err}")).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _| LeaveError::validation(format!("invalid path: {err}")).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _| LeaveError::validation(format!("invalid query: {err}")).into())
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / u64::from(requests_per_min)).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap_or_default();
        Governor::new(&cfg)
    }

    cfg.app_data(state.config.clone())
        .app_data(state.leaves.clone())
        .app_data(state.employees.clone())
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(health::index)
        .service(health::health);

    cfg.service(
        web::scope(&state.config.api_prefix)
            // Public routes
            .service(
                web::scope("/auth").service(
                    web::resource("/login")
                        .wrap(build_limiter(state.config.rate_login_per_min))
                        .route(web::post().to(handlers::login)),
                ),
            )
            // Protected routes
            .service(
                web::scope("/leaves")
                    .wrap(from_fn(auth_middleware))
                    .service(web::resource("/all").route(web::get().to(leave::all_leaves)))
                    .service(
                        web::resource("/my-leaves/{employee_id}")
                            .route(web::get().to(leave::my_leaves)),
                    )
                    .service(web::resource("/apply").route(web::post().to(leave::apply_leave)))
                    .service(
                        web::resource("/balance/{employee_id}")
                            .route(web::get().to(leave::leave_balance)),
                    )
                    .service(
                        web::resource("/calendar").route(web::get().to(leave::leave_calendar)),
                    )
                    // /leaves/{leave_id}
                    .service(
                        web::resource("/{leave_id}")
                            .route(web::get().to(leave::get_leave))
                            .route(web::put().to(leave::decide_leave))
                            .route(web::delete().to(leave::cancel_leave)),
                    ),
            ),
    );
}

// LOGIN
//  └─ token (ACCESS_TOKEN_TTL)

// LEAVE ROUTES
//  └─ Authorization: Bearer token
