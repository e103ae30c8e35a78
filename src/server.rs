use crate::{config::Config, error::ServerError, routes::create_router};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Starting,
    Serving,
}

/// Binds the listener. No retry and no fallback port.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    info!(state = ?Lifecycle::Starting, addr = %config.addr, "Binding listener");

    TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })
}

/// Serves until the accept loop fails, which in practice is never.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let port = listener.local_addr()?.port();
    info!(state = ?Lifecycle::Serving, "Listening on port {port}");

    axum::serve(listener, create_router()).await?;

    Ok(())
}

pub async fn run(config: Config) -> Result<(), ServerError> {
    let listener = bind(&config).await?;
    serve(listener).await
}
