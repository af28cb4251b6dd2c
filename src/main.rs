use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use memeforge_api::{api, config, leonardo};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    // Create generation client when a key is present
    let leonardo_client = config
        .leonardo_api_key
        .clone()
        .map(|key| leonardo::client::LeonardoClient::new(config.leonardo_base_url.clone(), key));
    if leonardo_client.is_none() {
        tracing::warn!("LEONARDO_API_KEY is not set; /api/generate will answer with a configuration error");
    }

    let poll_max_attempts: u32 = config.poll_max_attempts.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid POLL_MAX_ATTEMPTS '{}', falling back to 30", config.poll_max_attempts);
        30
    });
    let poll_interval_ms: u64 = config.poll_interval_ms.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid POLL_INTERVAL_MS '{}', falling back to 1000", config.poll_interval_ms);
        1000
    });

    let state = Arc::new(api::routes::AppState {
        leonardo: leonardo_client,
        static_dir: config.static_dir.clone(),
        poll_max_attempts,
        poll_interval: Duration::from_millis(poll_interval_ms),
    });

    // Build our application with a route
    let cors = api::routes::cors_layer(&config.allowed_origin);
    let app = api::routes::build_router(state, cors);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 0.0.0.0", host_str);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid PORT '{}', falling back to 8000", port_str);
        8000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
