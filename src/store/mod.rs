//! Handle to the hosted relational store.
//!
//! The store is reached over its REST table API. When no usable credentials
//! were configured the handle is [`Store::Unavailable`] and every operation
//! fails with [`RepoErr::Unavailable`] instead of reaching the network.

mod query;

use std::{sync::Arc, time::Duration};

use tracing::{error, info};

pub use query::{Direction, RestClient, TableQuery};

use crate::config::StoreSettings;
use crate::errors::RepoErr;

pub const ORDERS: &str = "orders";
pub const PRODUCTS: &str = "products";
pub const PROFILES: &str = "profiles";
pub const RIDER_LOCATIONS: &str = "rider_locations";

#[derive(Debug, Clone)]
pub enum Store {
    Connected(Arc<RestClient>),
    Unavailable,
}

impl Store {
    pub fn connect(settings: Option<&StoreSettings>, timeout: Duration) -> Self {
        let Some(settings) = settings else {
            return Store::Unavailable;
        };
        match RestClient::new(settings, timeout) {
            Ok(client) => {
                info!(url = %settings.url, "data store client ready");
                Store::Connected(Arc::new(client))
            }
            Err(e) => {
                error!("Error initializing data store client: {e}");
                Store::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Store::Connected(_))
    }

    pub fn client(&self) -> Result<&RestClient, RepoErr> {
        match self {
            Store::Connected(client) => Ok(client.as_ref()),
            Store::Unavailable => Err(RepoErr::Unavailable),
        }
    }
}
