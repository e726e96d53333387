use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: Uuid,
    #[serde(default)]
    pub rider_id: Option<Uuid>,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_lat: Option<f64>,
    #[serde(default)]
    pub delivery_lng: Option<f64>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// Checkout payload: the line items plus where the order goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_lat: Option<f64>,
    #[serde(default)]
    pub delivery_lng: Option<f64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

/// Columns forwarded to the store on an order update. Unset fields are
/// omitted from the body so they keep their stored value.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    /// Handing an order to a rider always moves it to `confirmed`,
    /// whatever stage it was in.
    pub fn assign(rider_id: Uuid) -> Self {
        Self {
            rider_id: Some(rider_id),
            status: Some(OrderStatus::Confirmed),
        }
    }

    pub fn status(status: OrderStatus) -> Self {
        Self {
            rider_id: None,
            status: Some(status),
        }
    }

    pub fn apply(&self, order: &mut Order, now: DateTime<Utc>) {
        if let Some(rider_id) = self.rider_id {
            order.rider_id = Some(rider_id);
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        order.updated_at = now;
    }
}
