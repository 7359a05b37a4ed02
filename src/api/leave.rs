use std::collections::HashMap;
use std::str::FromStr;

use crate::auth::auth::AuthUser;
use crate::error::LeaveError;
use crate::model::{
    balance::LeaveBalance,
    employee::{Employee, EmployeeSummary},
    leave_request::{ApplyLeave, DecideLeave, LeaveRequest, LeaveStatus},
};
use crate::service::{
    LeaveService,
    calendar::{CalendarDay, availability},
    lifecycle::validate_application,
};
use crate::store::EmployeeStore;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LeaveFilter {
    #[schema(example = "Pending")]
    /// Filter by leave status (Pending, Approved, Rejected)
    pub status: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    #[param(example = "2024-01-01", format = "date", value_type = String)]
    /// First day of the range (inclusive)
    pub from: NaiveDate,
    #[param(example = "2024-01-31", format = "date", value_type = String)]
    /// Last day of the range (inclusive)
    pub to: NaiveDate,
}

/// Leave record joined with its requester, for manager views.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveView {
    #[serde(flatten)]
    pub leave: LeaveRequest,
    /// null when the requesting employee no longer exists
    pub employee: Option<EmployeeSummary>,
}

impl LeaveView {
    fn join(leave: LeaveRequest, employees: &HashMap<u64, Employee>) -> Self {
        Self {
            employee: employees.get(&leave.employee_id).map(EmployeeSummary::from),
            leave,
        }
    }
}

async fn employee_index(
    employees: &dyn EmployeeStore,
) -> Result<HashMap<u64, Employee>, LeaveError> {
    Ok(employees
        .list_employees()
        .await
        .map_err(LeaveError::unavailable)?
        .into_iter()
        .map(|e| (e.id, e))
        .collect())
}

/* =========================
List my leaves
========================= */
#[utoipa::path(
    get,
    path = "/api/leaves/my-leaves/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee whose requests are listed")
    ),
    responses(
        (status = 200, description = "Leave requests of the employee", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn my_leaves(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, LeaveError> {
    let employee_id = path.into_inner();
    auth.require_self_or_manager(employee_id)?;

    let leaves = service.list_for_employee(employee_id).await?;
    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
List all leaves (manager)
========================= */
#[utoipa::path(
    get,
    path = "/api/leaves/all",
    params(LeaveFilter),
    responses(
        (status = 200, description = "All leave requests with requester", body = [LeaveView]),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn all_leaves(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    employees: web::Data<dyn EmployeeStore>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse, LeaveError> {
    auth.require_manager()?;

    let status = query
        .status
        .as_deref()
        .map(|s| {
            LeaveStatus::from_str(s)
                .map_err(|_| LeaveError::validation(format!("unknown status '{s}'")))
        })
        .transpose()?;

    let leaves = service.list_all(status).await?;
    let index = employee_index(employees.get_ref()).await?;
    let views: Vec<LeaveView> = leaves
        .into_iter()
        .map(|leave| LeaveView::join(leave, &index))
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

/* =========================
Apply for leave
========================= */
#[utoipa::path(
    post,
    path = "/api/leaves/apply",
    request_body(
        content = ApplyLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Validation error", body = Object, example = json!({
            "error": { "kind": "validation_error", "message": "startDate cannot be after endDate" }
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    payload: web::Json<ApplyLeave>,
) -> Result<HttpResponse, LeaveError> {
    let new_leave = validate_application(&payload)?;
    auth.require_self(new_leave.employee_id)?;

    let leave = service.submit(new_leave).await?;
    Ok(HttpResponse::Created().json(leave))
}

/* =========================
Approve / reject (manager)
========================= */
#[utoipa::path(
    put,
    path = "/api/leaves/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to decide")
    ),
    request_body(
        content = DecideLeave,
        description = "Decision and optional comment",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request decided", body = LeaveRequest),
        (status = 400, description = "Invalid decision"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already processed", body = Object, example = json!({
            "error": { "kind": "invalid_state", "message": "leave request has already been processed (Approved)" }
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn decide_leave(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
    payload: web::Json<DecideLeave>,
) -> Result<HttpResponse, LeaveError> {
    auth.require_manager()?;

    let leave = service.decide(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Cancel (owning employee)
========================= */
#[utoipa::path(
    delete,
    path = "/api/leaves/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to cancel")
    ),
    responses(
        (status = 200, description = "Leave cancelled", body = Object, example = json!({
            "message": "Leave Cancelled",
            "id": 1
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Cannot cancel a processed request")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn cancel_leave(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, LeaveError> {
    let leave_id = path.into_inner();

    let leave = service.get(leave_id).await?;
    auth.require_self(leave.employee_id)?;

    service.cancel(leave_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave Cancelled",
        "id": leave_id
    })))
}

#[utoipa::path(
    get,
    path = "/api/leaves/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, LeaveError> {
    let leave = service.get(path.into_inner()).await?;
    auth.require_self_or_manager(leave.employee_id)?;
    Ok(HttpResponse::Ok().json(leave))
}

/// Remaining balance, recomputed from the employee's Approved requests on every call.
#[utoipa::path(
    get,
    path = "/api/leaves/balance/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee whose balance is computed")
    ),
    responses(
        (status = 200, description = "Remaining days per leave type", body = LeaveBalance),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_balance(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, LeaveError> {
    let employee_id = path.into_inner();
    auth.require_self_or_manager(employee_id)?;

    let balance = service.balance_for(employee_id).await?;
    Ok(HttpResponse::Ok().json(balance))
}

/// Team availability: who is off on each day of the range.
#[utoipa::path(
    get,
    path = "/api/leaves/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "One entry per day with the approved absences", body = [CalendarDay]),
        (status = 400, description = "Invalid range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_calendar(
    auth: AuthUser,
    service: web::Data<LeaveService>,
    employees: web::Data<dyn EmployeeStore>,
    query: web::Query<CalendarQuery>,
) -> Result<HttpResponse, LeaveError> {
    auth.require_manager()?;

    let approved = service.approved_between(query.from, query.to).await?;
    let index = employee_index(employees.get_ref()).await?;
    Ok(HttpResponse::Ok().json(availability(query.from, query.to, &approved, &index)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::auth::jwt::generate_access_token;
    use crate::config::Config;
    use crate::model::{employee::NewEmployee, role::Role};
    use crate::routes::{self, AppState};
    use crate::store::memory::MemoryStore;

    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::Value;

    struct Fixture {
        state: AppState,
        manager: Employee,
        bob: Employee,
        carol: Employee,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let mut people = Vec::new();
        for (name, email, role) in [
            ("Alice Manager", "manager@test.com", Role::Manager),
            ("Bob Employee", "bob@test.com", Role::Employee),
            ("Carol Employee", "carol@test.com", Role::Employee),
        ] {
            people.push(
                store
                    .insert_employee(NewEmployee {
                        name: name.into(),
                        email: email.into(),
                        password_hash: "unused".into(),
                        role,
                    })
                    .await
                    .unwrap(),
            );
        }
        let carol = people.pop().unwrap();
        let bob = people.pop().unwrap();
        let manager = people.pop().unwrap();

        Fixture {
            state: AppState::new(Config::for_tests(), store.clone(), store),
            manager,
            bob,
            carol,
        }
    }

    fn bearer(state: &AppState, who: &Employee) -> (header::HeaderName, String) {
        let token = generate_access_token(who, &state.config.jwt_secret, 900).unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    fn application(employee_id: u64, start: &str, end: &str) -> Value {
        json!({
            "employeeId": employee_id,
            "leaveType": "Casual",
            "startDate": start,
            "endDate": end,
            "reason": "Family trip"
        })
    }

    #[actix_web::test]
    async fn apply_approve_and_recompute_balance() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;

        // employee applies
        let req = test::TestRequest::post()
            .uri("/api/leaves/apply")
            .insert_header(bearer(&f.state, &f.bob))
            .set_json(application(f.bob.id, "2024-01-01", "2024-01-05"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["status"], "Pending");
        let leave_id = created["id"].as_u64().unwrap();

        // visible in own list
        let req = test::TestRequest::get()
            .uri(&format!("/api/leaves/my-leaves/{}", f.bob.id))
            .insert_header(bearer(&f.state, &f.bob))
            .to_request();
        let mine: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mine.as_array().unwrap().len(), 1);
        assert_eq!(mine[0]["status"], "Pending");

        // and in the manager's pending view, joined with the requester
        let req = test::TestRequest::get()
            .uri("/api/leaves/all?status=Pending")
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        let pending: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pending[0]["id"].as_u64(), Some(leave_id));
        assert_eq!(pending[0]["employee"]["name"], "Bob Employee");
        assert_eq!(pending[0]["employee"]["email"], "bob@test.com");
        assert_eq!(pending[0]["leaveType"], "Casual");
        assert_eq!(pending[0]["employeeId"].as_u64(), Some(f.bob.id));

        // manager approves
        let req = test::TestRequest::put()
            .uri(&format!("/api/leaves/{leave_id}"))
            .insert_header(bearer(&f.state, &f.manager))
            .set_json(json!({ "status": "Approved", "managerComment": "ok" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let decided: Value = test::read_body_json(resp).await;
        assert_eq!(decided["status"], "Approved");
        assert_eq!(decided["managerComment"], "ok");

        let req = test::TestRequest::get()
            .uri("/api/leaves/all?status=pending")
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        let pending: Value = test::call_and_read_body_json(&app, req).await;
        assert!(pending.as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/leaves/balance/{}", f.bob.id))
            .insert_header(bearer(&f.state, &f.bob))
            .to_request();
        let balance: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(balance, json!({ "casual": 7, "sick": 7, "earned": 15 }));
    }

    #[actix_web::test]
    async fn invalid_applications_return_validation_error() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;

        let mut missing_reason = application(f.bob.id, "2024-01-01", "2024-01-02");
        missing_reason["reason"] = json!("");

        for body in [
            application(f.bob.id, "2024-05-10", "2024-05-01"),
            missing_reason,
            json!({ "employeeId": f.bob.id }),
            // without an owner there is nothing to authorize against
            json!({ "leaveType": "Casual", "startDate": "2024-01-01", "endDate": "2024-01-02", "reason": "trip" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/leaves/apply")
                .insert_header(bearer(&f.state, &f.bob))
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["kind"], "validation_error");
        }

        // undecodable body goes through the same error shape
        let req = test::TestRequest::post()
            .uri("/api/leaves/apply")
            .insert_header(bearer(&f.state, &f.bob))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"employeeId\": \"bob\"}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "validation_error");
    }

    #[actix_web::test]
    async fn cancel_only_while_pending() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;

        let first = f
            .state
            .leaves
            .create(serde_json::from_value(application(f.bob.id, "2024-01-01", "2024-01-02")).unwrap())
            .await
            .unwrap();
        let second = f
            .state
            .leaves
            .create(serde_json::from_value(application(f.bob.id, "2024-02-01", "2024-02-02")).unwrap())
            .await
            .unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/leaves/{}", first.id))
            .insert_header(bearer(&f.state, &f.bob))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/leaves/{}", first.id))
            .insert_header(bearer(&f.state, &f.bob))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "not_found");

        f.state
            .leaves
            .decide(
                second.id,
                serde_json::from_value(json!({ "status": "Rejected" })).unwrap(),
            )
            .await
            .unwrap();
        let req = test::TestRequest::delete()
            .uri(&format!("/api/leaves/{}", second.id))
            .insert_header(bearer(&f.state, &f.bob))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "invalid_state");
        assert_eq!(body["error"]["message"], "cannot cancel a processed request");
    }

    #[actix_web::test]
    async fn second_decision_is_an_invalid_state() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;
        let leave = f
            .state
            .leaves
            .create(serde_json::from_value(application(f.bob.id, "2024-01-01", "2024-01-02")).unwrap())
            .await
            .unwrap();

        let mut statuses = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::put()
                .uri(&format!("/api/leaves/{}", leave.id))
                .insert_header(bearer(&f.state, &f.manager))
                .set_json(json!({ "status": "Approved", "managerComment": "ok" }))
                .to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }
        assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);

        let req = test::TestRequest::put()
            .uri("/api/leaves/9999")
            .insert_header(bearer(&f.state, &f.manager))
            .set_json(json!({ "status": "Rejected" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn roles_gate_each_operation() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;
        let leave = f
            .state
            .leaves
            .create(serde_json::from_value(application(f.bob.id, "2024-01-01", "2024-01-02")).unwrap())
            .await
            .unwrap();

        let forbidden = [
            // employees cannot see everyone
            test::TestRequest::get()
                .uri("/api/leaves/all")
                .insert_header(bearer(&f.state, &f.bob))
                .to_request(),
            // nor decide
            test::TestRequest::put()
                .uri(&format!("/api/leaves/{}", leave.id))
                .insert_header(bearer(&f.state, &f.bob))
                .set_json(json!({ "status": "Approved" }))
                .to_request(),
            // nor read a colleague's list
            test::TestRequest::get()
                .uri(&format!("/api/leaves/my-leaves/{}", f.bob.id))
                .insert_header(bearer(&f.state, &f.carol))
                .to_request(),
            // nor cancel a colleague's request
            test::TestRequest::delete()
                .uri(&format!("/api/leaves/{}", leave.id))
                .insert_header(bearer(&f.state, &f.carol))
                .to_request(),
            // nor apply in someone else's name
            test::TestRequest::post()
                .uri("/api/leaves/apply")
                .insert_header(bearer(&f.state, &f.carol))
                .set_json(application(f.bob.id, "2024-03-01", "2024-03-02"))
                .to_request(),
            // managers do not cancel on an employee's behalf
            test::TestRequest::delete()
                .uri(&format!("/api/leaves/{}", leave.id))
                .insert_header(bearer(&f.state, &f.manager))
                .to_request(),
        ];
        for req in forbidden {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["kind"], "forbidden");
        }

        // the request survived every refused attempt
        assert_eq!(
            f.state.leaves.get(leave.id).await.unwrap().status,
            LeaveStatus::Pending
        );

        // a manager may read any employee's list
        let req = test::TestRequest::get()
            .uri(&format!("/api/leaves/my-leaves/{}", f.bob.id))
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_or_bad_token_is_unauthorized() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;

        let req = test::TestRequest::get().uri("/api/leaves/all").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "unauthorized");

        let req = test::TestRequest::get()
            .uri("/api/leaves/all")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn unknown_status_filter_is_rejected() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;

        let req = test::TestRequest::get()
            .uri("/api/leaves/all?status=Cancelled")
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn calendar_shows_who_is_off() {
        let f = fixture().await;
        let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &f.state))).await;
        let approved = f
            .state
            .leaves
            .create(serde_json::from_value(application(f.bob.id, "2024-01-02", "2024-01-03")).unwrap())
            .await
            .unwrap();
        f.state
            .leaves
            .decide(
                approved.id,
                serde_json::from_value(json!({ "status": "Approved" })).unwrap(),
            )
            .await
            .unwrap();
        // pending requests never show on the calendar
        f.state
            .leaves
            .create(serde_json::from_value(application(f.carol.id, "2024-01-01", "2024-01-04")).unwrap())
            .await
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/api/leaves/calendar?from=2024-01-01&to=2024-01-04")
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        let days: Value = test::call_and_read_body_json(&app, req).await;
        let days = days.as_array().unwrap();
        assert_eq!(days.len(), 4);
        assert!(days[0]["off"].as_array().unwrap().is_empty());
        assert_eq!(days[1]["off"][0]["employeeName"], "Bob Employee");
        assert_eq!(days[2]["off"].as_array().unwrap().len(), 1);
        assert!(days[3]["off"].as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/leaves/calendar?from=2024-02-01&to=2024-01-01")
            .insert_header(bearer(&f.state, &f.manager))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
