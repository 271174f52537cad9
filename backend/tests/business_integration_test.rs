//! Integration tests for business registration and listing

mod common;

use axum::http::StatusCode;

const FIELDS: &[(&str, &str)] = &[
    ("name", "Ana's Bakery"),
    ("description", "Fresh bread daily"),
    ("category", "food"),
    ("contact", "555-0100"),
    ("address", "1 Main St"),
];

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_business_success() {
    let app = common::TestApp::new().await;

    let email = format!("biz_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;

    let response = app
        .post_multipart("/register-business", FIELDS, None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let json = response.json();
    assert_eq!(json["business"]["name"], "Ana's Bakery");
    assert_eq!(json["business"]["image_path"], "");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_business_with_image_records_stored_path() {
    let app = common::TestApp::new().await;

    let email = format!("biz_img_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;

    let response = app
        .post_multipart(
            "/register-business",
            FIELDS,
            Some(("logo.png", b"fake-png-bytes")),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let path = response.json()["business"]["image_path"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(path.starts_with("uploads/"));
    assert!(path.ends_with(".png"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_second_business_for_same_owner_is_rejected() {
    let app = common::TestApp::new().await;

    let email = format!("biz_dup_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;

    let response = app
        .post_multipart("/register-business", FIELDS, None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .post_multipart("/register-business", FIELDS, None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.json()["message"],
        "You have already registered a business."
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_business_accepts_blank_fields() {
    let app = common::TestApp::new().await;

    let email = format!("biz_blank_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;

    // No field is mandatory; an all-blank profile is stored as-is
    let response = app
        .post_multipart("/register-business", &[("name", "")], None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.json()["business"]["name"], "");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_business_requires_auth() {
    let app = common::TestApp::new().await;

    let response = app
        .post_multipart("/register-business", FIELDS, None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_shows_registered_business() {
    let app = common::TestApp::new().await;

    let email = format!("biz_dash_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;

    // Before registration the dashboard carries no business
    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["business"].is_null());

    app.post_multipart("/register-business", FIELDS, None, Some(&cookie))
        .await;

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["business"]["name"], "Ana's Bakery");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_businesses_listing_is_public() {
    let app = common::TestApp::new().await;

    let email = format!("biz_list_{}@example.com", uuid::Uuid::new_v4());
    let (_, cookie) = common::register_user(&app, &email).await;
    app.post_multipart("/register-business", FIELDS, None, Some(&cookie))
        .await;

    // No cookie: the listing is open to everyone
    let response = app.get("/businesses", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let businesses = response.json()["businesses"].as_array().unwrap().clone();
    assert!(businesses
        .iter()
        .any(|b| b["name"] == "Ana's Bakery"));
}
