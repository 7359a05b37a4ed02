use crate::api::leave::{LeaveFilter, LeaveView};
use crate::model::{
    balance::LeaveBalance,
    employee::{Employee, EmployeeSummary},
    leave_request::{ApplyLeave, DecideLeave, LeaveRequest, LeaveStatus, LeaveType},
    role::Role,
};
use crate::models::{LoginReqDto, LoginResponse};
use crate::service::calendar::{Absence, CalendarDay};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management API",
        version = "1.0.0",
        description = r#"
## Leave Management System

Employees submit and track leave requests; managers approve or reject them
and see team availability.

### 🔹 Key Features
- **Leave requests**
  - Apply, list your own requests, cancel while still pending
- **Decisions**
  - Managers approve or reject pending requests with an optional comment
- **Balances**
  - Remaining Casual / Sick / Earned days, derived from approved requests
- **Team calendar**
  - Who is off on each day of a range

### 🔐 Security
Leave endpoints require a **JWT Bearer** token from `/api/auth/login`.

### 📦 Errors
Failures return `{"error": {"kind", "message"}}` with `kind` one of
`validation_error`, `not_found`, `invalid_state`, `unauthorized`, `forbidden`, `unavailable`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,

        crate::api::leave::my_leaves,
        crate::api::leave::all_leaves,
        crate::api::leave::apply_leave,
        crate::api::leave::decide_leave,
        crate::api::leave::cancel_leave,
        crate::api::leave::get_leave,
        crate::api::leave::leave_balance,
        crate::api::leave::leave_calendar
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            Employee,
            EmployeeSummary,
            Role,
            LeaveRequest,
            LeaveType,
            LeaveStatus,
            ApplyLeave,
            DecideLeave,
            LeaveFilter,
            LeaveView,
            LeaveBalance,
            CalendarDay,
            Absence
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login"),
        (name = "Leave", description = "Leave management APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
