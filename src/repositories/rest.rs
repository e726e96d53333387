use async_trait::async_trait;

use crate::entities::order::{Order, OrderPatch};
use crate::entities::product::{NewProduct, Product, ProductPatch};
use crate::entities::profile::{Profile, Role};
use crate::entities::rider::RiderLocation;
use crate::errors::RepoErr;
use crate::repositories::{OrderRepository, ProductRepository, RiderRepository};
use crate::store::{Direction, Store, ORDERS, PRODUCTS, PROFILES, RIDER_LOCATIONS};

/// Repositories backed by the hosted store. Each call is exactly one request.
#[derive(Debug, Clone)]
pub struct RestRepository {
    store: Store,
}

impl RestRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for RestRepository {
    async fn list(&self) -> Result<Vec<Order>, RepoErr> {
        self.store
            .client()?
            .table(ORDERS)
            .order("created_at", Direction::Desc)
            .fetch()
            .await
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Option<Order>, RepoErr> {
        let rows: Vec<Order> = self
            .store
            .client()?
            .table(ORDERS)
            .eq("id", id)
            .update(&patch)
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl ProductRepository for RestRepository {
    async fn list(&self) -> Result<Vec<Product>, RepoErr> {
        self.store.client()?.table(PRODUCTS).fetch().await
    }

    async fn create(&self, new: NewProduct) -> Result<Option<Product>, RepoErr> {
        let rows: Vec<Product> = self
            .store
            .client()?
            .table(PRODUCTS)
            .insert(&new)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, RepoErr> {
        let rows: Vec<Product> = self
            .store
            .client()?
            .table(PRODUCTS)
            .eq("id", id)
            .update(&patch)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoErr> {
        let rows: Vec<serde_json::Value> = self
            .store
            .client()?
            .table(PRODUCTS)
            .eq("id", id)
            .delete()
            .await?;
        Ok(!rows.is_empty())
    }
}

#[async_trait]
impl RiderRepository for RestRepository {
    async fn list_locations(&self) -> Result<Vec<RiderLocation>, RepoErr> {
        self.store.client()?.table(RIDER_LOCATIONS).fetch().await
    }

    async fn list_riders(&self) -> Result<Vec<Profile>, RepoErr> {
        self.store
            .client()?
            .table(PROFILES)
            .eq("role", Role::Rider.as_str())
            .order("created_at", Direction::Asc)
            .fetch()
            .await
    }
}
