use actix_web::{web, HttpResponse};
use tracing::error;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_rider_locations(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .riders
        .list_locations()
        .await
        .inspect_err(|e| error!(err = %e, "error fetching rider locations"))?;
    Ok(HttpResponse::Ok().json(items))
}

/// Profiles with the `rider` role, for pairing with their locations.
pub async fn list_riders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .riders
        .list_riders()
        .await
        .inspect_err(|e| error!(err = %e, "error fetching riders"))?;
    Ok(HttpResponse::Ok().json(items))
}
