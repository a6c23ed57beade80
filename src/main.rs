use property_ai_core::config::{CorsConfig, ServerConfig};
use property_ai_core::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    let cors = CorsConfig::development().into_layer();

    let app = routes::create_router().layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("property-ai-core listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
