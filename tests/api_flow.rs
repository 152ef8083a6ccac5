use actix_web::http::StatusCode;
use actix_web::{App, ResponseError, test};
use freskin_backend::AppServices;
use freskin_backend::middlewares::AuthMiddleware;
use freskin_backend::services::WeatherSource;
use freskin_backend::utils::JwtService;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

async fn sqlite_pool() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let pool = Database::connect(options).await.unwrap();
    Migrator::up(&pool, None).await.unwrap();
    pool
}

macro_rules! app {
    () => {{
        let jwt = JwtService::new("integration-secret", 3600);
        let services = AppServices::new(
            sqlite_pool().await,
            jwt.clone(),
            WeatherSource::Simulated,
            "Mumbai".to_string(),
        );
        test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(jwt))
                .configure(|cfg| services.configure(cfg)),
        )
        .await
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

fn registration(email: &str) -> Value {
    json!({
        "name": "Asha Rao",
        "email": email,
        "password": "Password123",
        "phone": "+91 98200 12345"
    })
}

#[actix_web::test]
async fn test_register_login_quiz_subscribe() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("asha@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert!(body["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ASHA@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "asha@example.com", "password": "wrong-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "asha@example.com", "password": "Password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/skin-quiz")
        .insert_header(bearer(&token))
        .set_json(json!({
            "skin_type": "dry",
            "concerns": ["dullness", "fine lines"],
            "allergies": [],
            "preferred_ingredients": ["honey"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let recs = &body["recommendations"];
    assert_eq!(recs["plan"], "premium");
    for bucket in ["morning", "evening", "weekly"] {
        let products = recs[bucket].as_array().unwrap();
        assert!(products.len() <= 3);
        for p in products {
            let skin_types = p["skin_types"].as_array().unwrap();
            assert!(skin_types.iter().any(|t| t == "dry"), "{p}");
        }
    }
    assert_eq!(body["skin_profile"]["skin_type"], "dry");

    let req = test::TestRequest::get().uri("/api/subscriptions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let plans = body["subscriptions"].as_array().unwrap();
    assert_eq!(plans.len(), 3);
    let plan_id = plans[0]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/subscribe")
        .insert_header(bearer(&token))
        .set_json(json!({"subscription_id": plan_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["orders_created"], 21);

    let req = test::TestRequest::get()
        .uri("/api/orders?page=1&per_page=50")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 21);
    assert_eq!(body["orders"].as_array().unwrap().len(), 21);
    assert!(
        body["orders"]
            .as_array()
            .unwrap()
            .iter()
            .all(|o| o["status"] == "preparing")
    );

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["subscription"]["id"], plan_id);
    assert_eq!(body["skin_profile"]["skin_type"], "dry");
}

#[actix_web::test]
async fn test_protected_route_requires_token() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/orders/today")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_public_catalog_and_delivery() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/products?skin_type=oily")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let products = body["products"].as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| {
        p["skin_types"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t == "oily")
    }));

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 12);

    let req = test::TestRequest::post()
        .uri("/api/check-delivery-availability")
        .set_json(json!({"pincode": "110001"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["available"], true);
    assert_eq!(body["zone"]["zone_name"], "Central Delhi");

    let req = test::TestRequest::post()
        .uri("/api/check-delivery-availability")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let req = test::TestRequest::get()
        .uri("/api/ingredient-transparency?product_id=9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
