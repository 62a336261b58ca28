use actix_web::{App, HttpServer, middleware, web};
use chrono::Utc;

use admin_console::config::AppConfig;
use admin_console::handlers;
use admin_console::models::user;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let users = web::Data::new(user::mock_users(config.mock_user_count, Utc::now()));
    log::info!("Seeded {} mock users", users.len());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(users.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
