use crate::errors::ApiError;
use crate::handlers;
use actix_cors::Cors;
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(handlers::health::root))
        .route("/health", web::get().to(handlers::health::health))
        .service(
            web::scope("/orders")
                .route("", web::get().to(handlers::orders::list_orders))
                .route("/", web::get().to(handlers::orders::list_orders))
                .route(
                    "/{id}/assign",
                    web::put().to(handlers::orders::assign_rider),
                )
                .route(
                    "/{id}/status",
                    web::put().to(handlers::orders::update_status),
                ),
        )
        .service(
            web::scope("/products")
                .route("", web::get().to(handlers::products::list_products))
                .route("/", web::get().to(handlers::products::list_products))
                .route("", web::post().to(handlers::products::create_product))
                .route("/", web::post().to(handlers::products::create_product))
                .route("/{id}", web::put().to(handlers::products::update_product))
                .route(
                    "/{id}",
                    web::delete().to(handlers::products::delete_product),
                ),
        )
        .service(
            web::scope("/riders")
                .route("", web::get().to(handlers::riders::list_rider_locations))
                .route("/", web::get().to(handlers::riders::list_rider_locations))
                .route("/profiles", web::get().to(handlers::riders::list_riders)),
        );
}

/// Any origin, method and header, with credentials. The caller's origin is
/// echoed back since a wildcard is not allowed together with credentials.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}
