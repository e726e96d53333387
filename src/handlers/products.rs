use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::entities::product::{NewProduct, ProductPatch};
use crate::errors::ApiError;
use crate::state::AppState;

const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .products
        .list()
        .await
        .inspect_err(|e| error!(err = %e, "error fetching products"))?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn create_product(
    state: web::Data<AppState>,
    payload: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let created = state
        .products
        .create(payload.into_inner())
        .await
        .inspect_err(|e| error!(err = %e, "error creating product"))?
        .ok_or_else(|| {
            warn!("store returned no row for product insert");
            ApiError::BadRequest("Could not create product".into())
        })?;
    info!(product_id = created.id, name = %created.name, "product created");
    Ok(HttpResponse::Ok().json(created))
}

pub async fn update_product(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let patch = payload.into_inner();
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".into()));
    }
    let updated = state
        .products
        .update(id, patch)
        .await
        .inspect_err(|e| error!(product_id = id, err = %e, "error updating product"))?
        .ok_or(ApiError::NotFound(PRODUCT_NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_product(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let deleted = state
        .products
        .delete(id)
        .await
        .inspect_err(|e| error!(product_id = id, err = %e, "error deleting product"))?;
    if !deleted {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND));
    }
    info!(product_id = id, "product deleted");
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Product deleted",
    }))
}
