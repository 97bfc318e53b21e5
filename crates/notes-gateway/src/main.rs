//! Notes Gateway - Markdown notes over an S3-compatible bucket

use clap::Parser;
use notes_gateway::{run_server, GatewayConfig, UpstreamPolicy};
use notes_store::StoreSettings;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "notes-gateway")]
#[command(about = "HTTP gateway for Markdown notes stored in an S3-compatible bucket")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "NOTES_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8787", env = "NOTES_PORT")]
    port: u16,

    /// Object store endpoint URL
    #[arg(long, env = "STORJ_ENDPOINT")]
    endpoint: Option<String>,

    /// Bucket holding the notes
    #[arg(long, env = "STORJ_BUCKET")]
    bucket: Option<String>,

    /// Key prefix ("folder") of the notes inside the bucket
    #[arg(long, env = "STORJ_PREFIX")]
    prefix: Option<String>,

    /// Access key
    #[arg(long, env = "STORJ_ACCESS_KEY", hide_env_values = true)]
    access_key: Option<String>,

    /// Secret key
    #[arg(long, env = "STORJ_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Region tag sent to the store
    #[arg(long, default_value = notes_store::DEFAULT_REGION, env = "STORJ_REGION")]
    region: String,

    /// Listing pages to follow per request
    #[arg(long, default_value = "1", env = "NOTES_MAX_LIST_PAGES")]
    max_list_pages: usize,

    /// Forward failed reads as content and report failed writes as saved
    #[arg(long, env = "NOTES_LENIENT_UPSTREAM")]
    lenient_upstream: bool,

    /// Timeout for calls to the object store, in seconds
    #[arg(long, env = "NOTES_UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: Option<u64>,

    /// Maximum request body size in bytes
    #[arg(long, default_value = "10485760", env = "NOTES_MAX_BODY_SIZE")]
    max_body_size: usize,

    /// Disable CORS headers
    #[arg(long, env = "NOTES_NO_CORS")]
    no_cors: bool,

    /// Enable debug logging
    #[arg(short, long, env = "NOTES_DEBUG")]
    debug: bool,

    /// Emit logs as JSON
    #[arg(long, env = "NOTES_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "notes_gateway={level},notes_store={level},tower_http=info",
            level = log_level
        )
        .into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Notes Gateway on {}:{}", args.host, args.port);
    if let Some(ref endpoint) = args.endpoint {
        tracing::info!("Object store: {}", endpoint);
    }

    let upstream_policy = if args.lenient_upstream {
        tracing::warn!("Lenient upstream mode: store failures on read/write are not reported");
        UpstreamPolicy::Lenient
    } else {
        UpstreamPolicy::Strict
    };

    let mut store = StoreSettings::new()
        .with_region(args.region)
        .with_max_list_pages(args.max_list_pages);
    store.endpoint = args.endpoint;
    store.bucket = args.bucket;
    store.prefix = args.prefix;
    store.access_key = args.access_key;
    store.secret_key = args.secret_key;

    let config = GatewayConfig {
        host: args.host,
        port: args.port,
        store,
        upstream_policy,
        upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        max_body_size: args.max_body_size,
        cors_enabled: !args.no_cors,
    };

    run_server(config).await
}
