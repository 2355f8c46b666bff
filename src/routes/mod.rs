// Route exports
pub mod pages;
pub mod predict;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .service(web::scope("/api/v1").configure(predict::configure));
}
