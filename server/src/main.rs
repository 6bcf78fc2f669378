use tokio::net::TcpListener;
use todo_server::{Config, ServerError};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!(app = %config.app_name, "Server running on {address}");

    todo_server::run(listener, config).await?;

    info!("Server shut down");
    Ok(())
}
