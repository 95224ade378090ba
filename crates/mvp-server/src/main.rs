use tracing_subscriber::EnvFilter;

use mvp_server::build_app;
use mvp_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    let json_logs = std::env::var("MVP_LOG_FORMAT").is_ok_and(|v| v == "json");
    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    if json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = ServerConfig::load();
    config.validate();

    let listen_addr = config.listen_addr.clone();
    let (app, _state) = build_app(config);

    let listener = match tokio::net::TcpListener::bind(&listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %listen_addr, "Failed to bind: {e}");
            std::process::exit(1);
        },
    };
    tracing::info!(addr = %listen_addr, "MVP leaderboard server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
