use actix_web::{get, HttpResponse};

/// Reaching this handler means the api key gate let the request through.
#[get("/")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json("Application is safe and healthy.")
}
