use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Safe for client responses: no password hash.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::foods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Food {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub serving_size: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::foods)]
pub struct NewFood {
    pub name: String,
    pub description: Option<String>,
    pub serving_size: String,
}

// A `None` description clears the column on update, as the original
// full-row UPDATE did.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::foods)]
#[diesel(treat_none_as_null = true)]
pub struct FoodChanges {
    pub name: String,
    pub description: Option<String>,
    pub serving_size: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::toxins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Toxin {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub daily_value: Option<f64>,
    pub unit: String,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = crate::schema::toxins)]
pub struct NewToxin {
    pub name: String,
    pub description: Option<String>,
    pub daily_value: Option<f64>,
    pub unit: String,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = crate::schema::toxins)]
#[diesel(treat_none_as_null = true)]
pub struct ToxinChanges {
    pub name: String,
    pub description: Option<String>,
    pub daily_value: Option<f64>,
    pub unit: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::food_toxins)]
pub struct NewFoodToxin {
    pub food_id: i32,
    pub toxin_id: i32,
    pub amount: f64,
}

/// One toxin row in a food's detail payload: the toxin joined with the
/// food-specific amount.
#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
pub struct FoodToxinDetail {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub daily_value: Option<f64>,
    pub unit: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoodDetail {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub serving_size: String,
    pub toxins: Vec<FoodToxinDetail>,
}

// Request payloads

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ToxinAmount {
    pub toxin_id: i32,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct FoodPayload {
    pub name: String,
    pub description: Option<String>,
    pub serving_size: String,
    #[serde(default)]
    pub toxins: Vec<ToxinAmount>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

// Response payloads

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedFood {
    pub message: String,
    #[serde(rename = "foodId")]
    pub food_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedToxin {
    pub message: String,
    #[serde(rename = "toxinId")]
    pub toxin_id: i32,
}
