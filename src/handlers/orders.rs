use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::entities::order::{OrderPatch, OrderStatus};
use crate::errors::ApiError;
use crate::state::AppState;

const ORDER_NOT_FOUND: &str = "Order not found";

#[derive(Debug, Deserialize)]
pub struct AssignRiderPayload {
    pub rider_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: OrderStatus,
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .orders
        .list()
        .await
        .inspect_err(|e| error!(err = %e, "error fetching orders"))?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn assign_rider(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<AssignRiderPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let rider_id = payload.rider_id;
    let updated = state
        .orders
        .update(id, OrderPatch::assign(rider_id))
        .await
        .inspect_err(|e| error!(order_id = id, err = %e, "error assigning order"))?
        .ok_or(ApiError::NotFound(ORDER_NOT_FOUND))?;
    info!(order_id = id, %rider_id, "rider assigned");
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateStatusPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let status = payload.status;
    let updated = state
        .orders
        .update(id, OrderPatch::status(status))
        .await
        .inspect_err(|e| error!(order_id = id, err = %e, "error updating order status"))?
        .ok_or(ApiError::NotFound(ORDER_NOT_FOUND))?;
    info!(order_id = id, ?status, "order status updated");
    Ok(HttpResponse::Ok().json(updated))
}
