pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = config.static_dir();
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html, run `trunk build` in crates/frontend first",
            static_dir.display()
        );
    }
    tracing::info!(
        "Serving {} for {}",
        static_dir.display(),
        config.site.base_url
    );

    let app = routes::configure_routes(&config.site.base_url, &static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
