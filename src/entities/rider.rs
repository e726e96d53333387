use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// Last known position of a rider, written by the rider app straight to the
/// store and only read back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiderLocation {
    pub id: i64,
    pub rider_id: Uuid,
    pub lat: f64,
    pub lng: f64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
}
