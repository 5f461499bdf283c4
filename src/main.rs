use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use toxtrack::auth::AuthSettings;
use toxtrack::{db, foods, health, toxins, users};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid number");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let jwt_secret =
        std::env::var("JWT_SECRET").unwrap_or_else(|_| "development_secret".to_string());

    let pool = web::Data::new(db::build_pool(&database_url));
    let auth_settings = web::Data::new(AuthSettings { jwt_secret });

    log::info!("Starting Toxtrack API server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::permissive(); // Configure this properly for production

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(pool.clone())
            .app_data(auth_settings.clone())
            .service(health)
            .service(users::register)
            .service(users::login)
            .service(users::current_user)
            .service(foods::list_foods)
            // search must come before the {id} route or it is shadowed
            .service(foods::search_foods)
            .service(foods::get_food)
            .service(foods::create_food)
            .service(foods::update_food)
            .service(foods::delete_food)
            .service(toxins::list_toxins)
            .service(toxins::get_toxin)
            .service(toxins::create_toxin)
            .service(toxins::update_toxin)
            .service(toxins::delete_toxin)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
