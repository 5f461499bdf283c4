use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, Responder, get, test, web};

use toxtrack::auth::{AuthSettings, AuthUser, create_token};

const SECRET: &str = "test-secret";

// Minimal protected route standing in for the mutation endpoints: the
// AuthUser extractor is the whole authentication gate.
#[get("/api/protected")]
async fn protected(user: AuthUser) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "username": user.username,
        "role": user.role,
    }))
}

async fn call(
    auth_header: Option<&str>,
) -> actix_web::dev::ServiceResponse<actix_web::body::BoxBody> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AuthSettings {
                jwt_secret: SECRET.to_string(),
            }))
            .service(protected),
    )
    .await;

    let mut req = test::TestRequest::get().uri("/api/protected");
    if let Some(value) = auth_header {
        req = req.insert_header(("Authorization", value));
    }

    test::call_service(&app, req.to_request()).await
}

#[actix_rt::test]
async fn missing_token_is_rejected_with_401() {
    let resp = call(None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("Authentication failed"));
}

#[actix_rt::test]
async fn malformed_token_is_rejected_with_401() {
    let resp = call(Some("Bearer not.a.token")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn wrong_scheme_is_rejected_with_401() {
    let token = create_token(1, "alice", "admin", SECRET).unwrap();
    let resp = call(Some(&format!("Token {}", token))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn token_signed_with_another_secret_is_rejected_with_401() {
    let token = create_token(1, "alice", "admin", "other-secret").unwrap();
    let resp = call(Some(&format!("Bearer {}", token))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn valid_token_reaches_the_handler() {
    let token = create_token(1, "alice", "admin", SECRET).unwrap();
    let resp = call(Some(&format!("Bearer {}", token))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("alice"));
    assert!(body_str.contains("admin"));
}
