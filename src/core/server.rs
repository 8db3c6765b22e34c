// Application server configuration and setup

use axum::{
    Router,
    middleware::from_fn,
};
use tower::ServiceBuilder;
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::config::state::AppState;
use crate::middlewares::{request_logger, start_time};
use crate::routes::{fallback, root};

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(root::root_routes())
        .fallback(fallback::fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(start_time::start_time_middleware))
                .layer(from_fn(request_logger::request_logger)),
        )
        .with_state(state)
}

/// Sets up the TCP listener from the environment or binds to the configured address
pub async fn setup_listener(state: &AppState) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", state.env.host, state.env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
