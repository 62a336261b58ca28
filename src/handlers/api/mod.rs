pub mod users;

use actix_web::web;

/// Configure `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(users::list))
            .route("/table", web::get().to(users::table))
    );
}
