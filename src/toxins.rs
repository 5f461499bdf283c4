use actix_web::{HttpResponse, delete, get, post, put, web};
use diesel::prelude::*;

use crate::auth::AuthUser;
use crate::db::{self, DbPool};
use crate::error::ApiError;
use crate::models::{CreatedToxin, MessageResponse, NewToxin, Toxin, ToxinChanges};
use crate::schema::toxins;

#[get("/api/toxins")]
pub async fn list_toxins(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let toxins = web::block(move || -> Result<Vec<Toxin>, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        Ok(toxins::table
            .order(toxins::name.asc())
            .select(Toxin::as_select())
            .load::<Toxin>(&mut conn)?)
    })
    .await??;

    Ok(HttpResponse::Ok().json(toxins))
}

#[get("/api/toxins/{id}")]
pub async fn get_toxin(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let toxin_id = path.into_inner();

    let toxin = web::block(move || -> Result<Toxin, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        toxins::table
            .find(toxin_id)
            .select(Toxin::as_select())
            .first::<Toxin>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Toxin not found".to_string()))
    })
    .await??;

    Ok(HttpResponse::Ok().json(toxin))
}

#[post("/api/toxins")]
pub async fn create_toxin(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    payload: web::Json<NewToxin>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let toxin_id = web::block(move || -> Result<i32, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        Ok(diesel::insert_into(toxins::table)
            .values(&payload)
            .returning(toxins::id)
            .get_result::<i32>(&mut conn)?)
    })
    .await??;

    Ok(HttpResponse::Created().json(CreatedToxin {
        message: "Toxin created successfully".to_string(),
        toxin_id,
    }))
}

#[put("/api/toxins/{id}")]
pub async fn update_toxin(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<ToxinChanges>,
) -> Result<HttpResponse, ApiError> {
    let toxin_id = path.into_inner();
    let payload = payload.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = db::get_conn(&pool)?;

        let updated = diesel::update(toxins::table.find(toxin_id))
            .set(&payload)
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(ApiError::NotFound("Toxin not found".to_string()));
        }

        Ok(())
    })
    .await??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Toxin updated successfully")))
}

#[delete("/api/toxins/{id}")]
pub async fn delete_toxin(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let toxin_id = path.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = db::get_conn(&pool)?;

        let deleted = diesel::delete(toxins::table.find(toxin_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(ApiError::NotFound("Toxin not found".to_string()));
        }

        Ok(())
    })
    .await??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Toxin deleted successfully")))
}
