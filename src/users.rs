use actix_web::{HttpResponse, get, post, web};
use diesel::prelude::*;

use crate::auth::{self, AuthSettings, AuthUser};
use crate::db::{self, DbPool};
use crate::error::ApiError;
use crate::models::{
    LoginRequest, NewUser, RegisterRequest, TokenResponse, User, UserProfile,
};
use crate::schema::users;

#[post("/api/auth/register")]
pub async fn register(
    pool: web::Data<DbPool>,
    settings: web::Data<AuthSettings>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let username = payload.username.clone();

    let user_id = web::block(move || -> Result<i32, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        let existing: i64 = users::table
            .filter(
                users::username
                    .eq(&payload.username)
                    .or(users::email.eq(&payload.email)),
            )
            .count()
            .get_result(&mut conn)?;

        if existing > 0 {
            return Err(ApiError::Conflict("User already exists".to_string()));
        }

        let new_user = NewUser {
            username: payload.username,
            email: payload.email,
            password_hash: auth::hash_password(&payload.password)?,
            // Every registration currently gets the admin role; this mirrors
            // the deployed behavior and is flagged to product owners.
            // TODO: default to a non-admin role once role management is specified.
            role: "admin".to_string(),
        };

        let id = diesel::insert_into(users::table)
            .values(&new_user)
            .returning(users::id)
            .get_result::<i32>(&mut conn)?;

        Ok(id)
    })
    .await??;

    let token = auth::create_token(user_id, &username, "admin", &settings.jwt_secret)?;

    Ok(HttpResponse::Created().json(TokenResponse {
        message: "User registered successfully".to_string(),
        token,
    }))
}

#[post("/api/auth/login")]
pub async fn login(
    pool: web::Data<DbPool>,
    settings: web::Data<AuthSettings>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let user = web::block(move || -> Result<User, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        let user = users::table
            .filter(users::username.eq(&payload.username))
            .select(User::as_select())
            .first::<User>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::Conflict("Invalid credentials".to_string()))?;

        if !auth::verify_password(&payload.password, &user.password_hash)? {
            return Err(ApiError::Conflict("Invalid credentials".to_string()));
        }

        Ok(user)
    })
    .await??;

    let token = auth::create_token(user.id, &user.username, &user.role, &settings.jwt_secret)?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

#[get("/api/auth/me")]
pub async fn current_user(
    user: AuthUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let profile = web::block(move || -> Result<UserProfile, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        users::table
            .find(user.id)
            .select(UserProfile::as_select())
            .first::<UserProfile>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    })
    .await??;

    Ok(HttpResponse::Ok().json(profile))
}
