mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration);

    let app = router::router(&config.cors_allowed_origins).with_state(AppState::new(db, tokens));

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
