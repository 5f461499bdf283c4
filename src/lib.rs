// Re-export modules for integration tests
pub mod auth;
pub mod client;
pub mod db;
pub mod error;
pub mod foods;
pub mod label;
pub mod models;
pub mod schema;
pub mod toxins;
pub mod users;

pub use crate::handlers::health;

mod handlers {
    use actix_web::{HttpResponse, Responder, get};
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct HealthResponse {
        pub status: String,
        pub message: String,
    }

    #[get("/health")]
    pub async fn health() -> impl Responder {
        HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
            message: "Toxtrack API is running".to_string(),
        })
    }
}
