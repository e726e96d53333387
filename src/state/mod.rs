use crate::repositories::{OrderRepository, ProductRepository, RiderRepository};
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub riders: Arc<dyn RiderRepository>,
}

impl AppState {
    /// Serves every handler group from one backing repository.
    pub fn new<R>(repo: R) -> Data<Self>
    where
        R: OrderRepository + ProductRepository + RiderRepository + 'static,
    {
        let repo = Arc::new(repo);
        Data::new(Self {
            orders: repo.clone(),
            products: repo.clone(),
            riders: repo,
        })
    }
}
