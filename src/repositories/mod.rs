pub mod in_memory;
pub mod rest;

use async_trait::async_trait;

use crate::{
    entities::{
        order::{Order, OrderPatch},
        product::{NewProduct, Product, ProductPatch},
        profile::Profile,
        rider::RiderLocation,
    },
    errors::RepoErr,
};

/// Updates return `Ok(None)` and deletes `Ok(false)` when no row matched.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Order>, RepoErr>;
    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Option<Order>, RepoErr>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, RepoErr>;
    async fn create(&self, new: NewProduct) -> Result<Option<Product>, RepoErr>;
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, RepoErr>;
    async fn delete(&self, id: i64) -> Result<bool, RepoErr>;
}

#[async_trait]
pub trait RiderRepository: Send + Sync {
    async fn list_locations(&self) -> Result<Vec<RiderLocation>, RepoErr>;
    async fn list_riders(&self) -> Result<Vec<Profile>, RepoErr>;
}
