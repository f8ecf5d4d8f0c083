//! ChatProxy server binary.
//!
//! Serves the GraphQL endpoint and proxies chat mutations to the configured
//! OpenAI-compatible provider.

use clap::Parser;
use tracing::{info, warn};

use chatproxy_api::AppState;
use chatproxy_core::chat::ChatProxy;
use chatproxy_core::config::ProxyConfig;

/// CLI arguments for the proxy server.
#[derive(Parser, Debug)]
#[command(
    name = "chatproxy_server",
    about = "GraphQL edge proxy for OpenAI-compatible chat APIs"
)]
struct Args {
    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8787)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,chatproxy_api=debug,chatproxy_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    let config = ProxyConfig::from_env();
    if config.api_key.is_none() {
        warn!("CHAT_API_KEY is not set; chatWithAI will fail until it is configured");
    }
    info!(base_url = %config.base_url, model = %config.model, "starting chatproxy_server");

    let state = AppState::new(ChatProxy::new(config));
    let app = chatproxy_api::router(state);

    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "GraphQL endpoint listening");

    axum::serve(listener, app).await?;

    Ok(())
}
