use actix_web::{HttpResponse, Responder};

/// The single-page UI, embedded at compile time
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the tracker page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
