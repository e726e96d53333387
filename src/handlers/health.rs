use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Welcome to Biryani Delivery System API" }))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
