use ai_gateway::GatewayConfig;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Serve the title and thumbnail generation functions over HTTP.
#[derive(Parser, Debug)]
#[command(name = "web_service_standalone", version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "APP_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();
    let config = GatewayConfig::new();

    tracing::info!(
        endpoint = %config.endpoint,
        title_model = %config.title_model,
        thumbnail_model = %config.thumbnail_model,
        "Starting standalone web service..."
    );

    web_service::run(config, &args.host, args.port)
        .await
        .map_err(anyhow::Error::msg)
}
