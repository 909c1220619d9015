use anyhow::Context;
use clap::Parser;
use librix_api::RestApi;
use librix_store::load_library;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A book recommendation lookup service
#[derive(Parser, Debug)]
#[command(name = "librix")]
#[command(about = "A book recommendation lookup service", long_about = None)]
struct Args {
    /// Path to the precomputed artifacts directory
    #[arg(short, long, default_value = "./artifacts")]
    artifacts_dir: PathBuf,

    /// HTTP port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting LibriX v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifacts directory: {:?}", args.artifacts_dir);
    info!("HTTP port: {}", args.http_port);

    let library = Arc::new(
        load_library(&args.artifacts_dir)
            .with_context(|| format!("failed to load artifacts from {:?}", args.artifacts_dir))?,
    );

    let library_http = library.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(library_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("LibriX started successfully");
    info!("Web UI: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
