mod auth;
mod config;
mod general;

use axum::{routing::get, Router};
use shuttle_runtime::SecretStore;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;

#[shuttle_runtime::main]
async fn main(#[shuttle_runtime::Secrets] secrets: SecretStore) -> shuttle_axum::ShuttleAxum {
    let config = AppConfig::from_secrets(&secrets);

    info!(
        "Starting {} with static assets from {}",
        config.app_name,
        config.static_dir.display()
    );

    Ok(router(&config).into())
}

/// Routes served by this app
/// The links of the form (home, terms, privacy, signin, and the form submission) are served elsewhere
fn router(config: &AppConfig) -> Router {
    Router::new()
        .route("/register", get(auth::register::get_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
