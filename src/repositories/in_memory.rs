use crate::entities::order::{Order, OrderPatch};
use crate::entities::product::{NewProduct, Product, ProductPatch};
use crate::entities::profile::{Profile, Role};
use crate::entities::rider::RiderLocation;
use crate::errors::RepoErr;
use crate::repositories::{OrderRepository, ProductRepository, RiderRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    orders: BTreeMap<i64, Order>,
    products: BTreeMap<i64, Product>,
    rider_locations: Vec<RiderLocation>,
    profiles: Vec<Profile>,
}

/// Process-local stand-in for the hosted store, with the same row semantics.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    pub async fn seed_orders(&self, orders: impl IntoIterator<Item = Order>) {
        let mut t = self.inner.write().await;
        for o in orders {
            t.orders.insert(o.id, o);
        }
    }

    pub async fn seed_products(&self, products: impl IntoIterator<Item = Product>) {
        let mut t = self.inner.write().await;
        for p in products {
            t.products.insert(p.id, p);
        }
    }

    pub async fn seed_rider_locations(&self, locations: impl IntoIterator<Item = RiderLocation>) {
        self.inner.write().await.rider_locations.extend(locations);
    }

    pub async fn seed_profiles(&self, profiles: impl IntoIterator<Item = Profile>) {
        self.inner.write().await.profiles.extend(profiles);
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Order>, RepoErr> {
        let t = self.inner.read().await;
        let mut items: Vec<Order> = t.orders.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Option<Order>, RepoErr> {
        let mut t = self.inner.write().await;
        Ok(t.orders.get_mut(&id).map(|o| {
            patch.apply(o, Utc::now());
            o.clone()
        }))
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Product>, RepoErr> {
        let t = self.inner.read().await;
        Ok(t.products.values().cloned().collect())
    }

    async fn create(&self, new: NewProduct) -> Result<Option<Product>, RepoErr> {
        let mut t = self.inner.write().await;
        let id = t.products.keys().next_back().map_or(1, |last| last + 1);
        let product = Product::from_new(id, new, Utc::now());
        t.products.insert(id, product.clone());
        Ok(Some(product))
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, RepoErr> {
        let mut t = self.inner.write().await;
        Ok(t.products.get_mut(&id).map(|p| {
            patch.apply(p);
            p.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoErr> {
        let mut t = self.inner.write().await;
        Ok(t.products.remove(&id).is_some())
    }
}

#[async_trait]
impl RiderRepository for InMemoryRepository {
    async fn list_locations(&self) -> Result<Vec<RiderLocation>, RepoErr> {
        Ok(self.inner.read().await.rider_locations.clone())
    }

    async fn list_riders(&self) -> Result<Vec<Profile>, RepoErr> {
        let t = self.inner.read().await;
        let mut riders: Vec<Profile> = t
            .profiles
            .iter()
            .filter(|p| p.role == Role::Rider)
            .cloned()
            .collect();
        riders.sort_by_key(|p| p.created_at);
        Ok(riders)
    }
}
