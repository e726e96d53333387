use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use biryani_delivery_api::{
    config::Config, repositories::rest::RestRepository, routes, state::AppState, store::Store,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    let store = Store::connect(config.store.as_ref(), config.store_timeout);
    info!(store_available = store.is_available(), "initialized data store handle");

    let state = AppState::new(RestRepository::new(store));

    info!(addr = %config.server_addr, "starting Biryani Delivery System API");
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(&config.server_addr)?
    .run()
    .await
}
