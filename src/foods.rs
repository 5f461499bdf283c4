use actix_web::{HttpResponse, delete, get, post, put, web};
use diesel::prelude::*;

use crate::auth::AuthUser;
use crate::db::{self, DbPool};
use crate::error::ApiError;
use crate::models::{
    CreatedFood, Food, FoodChanges, FoodDetail, FoodPayload, FoodToxinDetail, MessageResponse,
    NewFood, NewFoodToxin, SearchParams, ToxinAmount,
};
use crate::schema::{food_toxins, foods};

#[get("/api/foods")]
pub async fn list_foods(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let foods = web::block(move || -> Result<Vec<Food>, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        Ok(foods::table
            .order(foods::name.asc())
            .select(Food::as_select())
            .load::<Food>(&mut conn)?)
    })
    .await??;

    Ok(HttpResponse::Ok().json(foods))
}

// Registered before get_food so "search" is never captured as an {id}.
#[get("/api/foods/search")]
pub async fn search_foods(
    pool: web::Data<DbPool>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, ApiError> {
    let pattern = format!("%{}%", params.query);

    let foods = web::block(move || -> Result<Vec<Food>, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        Ok(foods::table
            .filter(foods::name.ilike(&pattern))
            .order(foods::name.asc())
            .select(Food::as_select())
            .load::<Food>(&mut conn)?)
    })
    .await??;

    Ok(HttpResponse::Ok().json(foods))
}

#[get("/api/foods/{id}")]
pub async fn get_food(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let food_id = path.into_inner();

    let detail = web::block(move || -> Result<FoodDetail, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        let food = foods::table
            .find(food_id)
            .select(Food::as_select())
            .first::<Food>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        let toxins = load_food_toxins(&mut conn, food_id)?;

        Ok(FoodDetail {
            id: food.id,
            name: food.name,
            description: food.description,
            serving_size: food.serving_size,
            toxins,
        })
    })
    .await??;

    Ok(HttpResponse::Ok().json(detail))
}

#[post("/api/foods")]
pub async fn create_food(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    payload: web::Json<FoodPayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let food_id = web::block(move || -> Result<i32, ApiError> {
        let mut conn = db::get_conn(&pool)?;

        conn.transaction::<i32, ApiError, _>(|conn| {
            let food_id = diesel::insert_into(foods::table)
                .values(NewFood {
                    name: payload.name,
                    description: payload.description,
                    serving_size: payload.serving_size,
                })
                .returning(foods::id)
                .get_result::<i32>(conn)?;

            insert_associations(conn, food_id, &payload.toxins)?;

            Ok(food_id)
        })
    })
    .await??;

    Ok(HttpResponse::Created().json(CreatedFood {
        message: "Food created successfully".to_string(),
        food_id,
    }))
}

#[put("/api/foods/{id}")]
pub async fn update_food(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<FoodPayload>,
) -> Result<HttpResponse, ApiError> {
    let food_id = path.into_inner();
    let payload = payload.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = db::get_conn(&pool)?;

        // Food row update and association replacement commit together or
        // not at all; a stale association set is an unacceptable state.
        conn.transaction::<(), ApiError, _>(|conn| {
            let updated = diesel::update(foods::table.find(food_id))
                .set(FoodChanges {
                    name: payload.name,
                    description: payload.description,
                    serving_size: payload.serving_size,
                })
                .execute(conn)?;

            if updated == 0 {
                return Err(ApiError::NotFound("Food not found".to_string()));
            }

            // Full replace: drop every existing association and reinsert the
            // provided set. Omitting a toxin from the payload removes it.
            diesel::delete(food_toxins::table.filter(food_toxins::food_id.eq(food_id)))
                .execute(conn)?;

            insert_associations(conn, food_id, &payload.toxins)?;

            Ok(())
        })
    })
    .await??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Food updated successfully")))
}

#[delete("/api/foods/{id}")]
pub async fn delete_food(
    _user: AuthUser,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let food_id = path.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = db::get_conn(&pool)?;

        // Associations go with the food via ON DELETE CASCADE.
        let deleted = diesel::delete(foods::table.find(food_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(ApiError::NotFound("Food not found".to_string()));
        }

        Ok(())
    })
    .await??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Food deleted successfully")))
}

fn load_food_toxins(
    conn: &mut PgConnection,
    food_id: i32,
) -> Result<Vec<FoodToxinDetail>, ApiError> {
    use crate::schema::toxins;

    Ok(toxins::table
        .inner_join(food_toxins::table)
        .filter(food_toxins::food_id.eq(food_id))
        .select((
            toxins::id,
            toxins::name,
            toxins::description,
            toxins::daily_value,
            toxins::unit,
            food_toxins::amount,
        ))
        .load::<FoodToxinDetail>(conn)?)
}

fn insert_associations(
    conn: &mut PgConnection,
    food_id: i32,
    toxins: &[ToxinAmount],
) -> Result<(), ApiError> {
    if toxins.is_empty() {
        return Ok(());
    }

    let rows: Vec<NewFoodToxin> = toxins
        .iter()
        .map(|toxin| NewFoodToxin {
            food_id,
            toxin_id: toxin.toxin_id,
            amount: toxin.amount,
        })
        .collect();

    diesel::insert_into(food_toxins::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}
