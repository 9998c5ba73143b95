use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::create_router;
use crate::config::Config;
use crate::db::testing;
use crate::entities::{address, user};
use crate::AppState;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration_hours: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        admin_username: None,
    }
}

async fn setup() -> (Router, DatabaseConnection, address::Model) {
    let db = testing::memory().await;
    let state = testing::seed_state(&db, "California", "california").await;
    let address = testing::seed_address(&db, &state).await;

    let app = create_router(AppState {
        db: db.clone(),
        config: test_config(),
    });

    (app, db, address)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn register(app: &Router, username: &str, address: &address::Model) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "username": username,
            "password": "donuts-forever",
            "mobile": "5550123",
            "address_id": address.id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    body["token"].as_str().unwrap().to_string()
}

async fn login(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": "donuts-forever" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    body["token"].as_str().unwrap().to_string()
}

async fn make_staff(db: &DatabaseConnection, username: &str) {
    use sea_orm::{ColumnTrait, QueryFilter};

    let found = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let mut active: user::ActiveModel = found.into();
    active.is_staff = Set(true);
    active.update(db).await.unwrap();
}

#[tokio::test]
async fn test_register_and_place_order() {
    let (app, _db, address) = setup().await;
    let token = register(&app, "homer", &address).await;

    let (status, me) = send(&app, Method::GET, "/api/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "homer");
    assert_eq!(me["user_type"], "customer");
    assert!(me.get("password").is_none());

    let (status, placed) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(&token),
        Some(json!({
            "bill": { "total_cost": 21.0, "coupon_code": "WELCOME10", "tax": 1.5, "discount": 2.0 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", placed);
    assert_eq!(placed["status"], "placed");
    assert_eq!(placed["bill"]["coupon_code"], "WELCOME10");

    let (status, orders) = send(&app, Method::GET, "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["id"], placed["id"]);
}

#[tokio::test]
async fn test_register_rejects_invalid_mobile() {
    let (app, _db, address) = setup().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "username": "flanders",
            "password": "okily-dokily",
            "mobile": "555-0123",
            "address_id": address.id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("mobile"));
}

#[tokio::test]
async fn test_admin_routes_require_staff() {
    let (app, _db, address) = setup().await;
    let token = register(&app, "bart", &address).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/admin/states",
        Some(&token),
        Some(json!({ "name": "Nevada", "alias": "nevada" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_cannot_delete_referenced_state() {
    let (app, db, address) = setup().await;
    register(&app, "skinner", &address).await;
    make_staff(&db, "skinner").await;
    let token = login(&app, "skinner").await;

    let (status, nevada) = send(
        &app,
        Method::POST,
        "/api/admin/states",
        Some(&token),
        Some(json!({ "name": "Nevada", "alias": "nevada" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", nevada);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/addresses",
        Some(&token),
        Some(json!({
            "address_line1": "1 Strip Blvd",
            "address_line2": "Suite 9",
            "city": "Las Vegas",
            "state_id": nevada["id"],
            "zip_code": "89109",
            "landmark": "Fountain",
            "longitude": "-115.172816",
            "latitude": "36.114647",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", created);
    assert_eq!(
        created["full_address"],
        "1 Strip Blvd, Suite 9, Nevada, Las Vegas, 89109"
    );
    assert_eq!(created["created_by"], nevada["created_by"]);

    let uri = format!("/api/admin/states/{}", nevada["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_address_includes_full_address() {
    let (app, _db, address) = setup().await;
    let token = register(&app, "lisa", &address).await;

    let uri = format!("/api/addresses/{}", address.id);
    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["full_address"],
        "123 Main St, Apt 4, California, Springfield, 90210"
    );
}
