// Start of file: /src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use hello_docker_service::config::state::AppState;
use hello_docker_service::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    // build our router
    let app: Router = server::create_app(state.clone());

    let listener: TcpListener = server::setup_listener(&state).await?;

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: /src/main.rs
