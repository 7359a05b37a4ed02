use crate::config::Config;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/")]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Leave Management System API is Operational!",
        "status": "online",
        "environment": config.environment,
    }))
}

/// Liveness probe
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn status_endpoints_answer_without_auth() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::for_tests()))
                .service(index)
                .service(health),
        )
        .await;

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request())
                .await;
        assert_eq!(body["status"], "ok");

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["environment"], "test");
    }
}
