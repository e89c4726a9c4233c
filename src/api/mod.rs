use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod contact;
mod error;
mod loans;
mod types;
mod users;

pub use error::ApiError;
pub use types::*;

/// Shared per-request context. The store connection is the only mutable
/// resource; it is owned here and handed to each handler instead of living
/// in process-global state.
#[derive(Clone)]
pub struct AppState {
    store: Store,
    config: Config,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState { store, config }))
}

pub fn router(state: Arc<AppState>) -> Router {
    // Single fixed origin with credentials; credentialed CORS forbids
    // wildcard methods/headers, so both lists are explicit.
    let cors_layer = match state.config().server.cors_allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]),
        Err(_) => CorsLayer::new(),
    };

    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/apply-loan", post(loans::apply_loan))
        .route("/loan-applications", get(loans::list_applications))
        .route("/my-loans/{username}", get(loans::my_loans))
        .route("/update-loan-status/{id}", put(loans::update_status))
        .route("/contact", post(contact::submit_contact))
        .route("/loan-stats/{username}", get(loans::loan_stats))
        .route("/users", get(users::list_users))
        .with_state(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}
