use clap::{Parser, Subcommand};
use hist_eq::{ColorMode, Enhancer, ImageFormat, Intensity, Outcome};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumeq::models::AppConfig;
use lumeq::server;

#[derive(Parser)]
#[command(name = "lumeq")]
#[command(about = "Histogram equalization image enhancer with a web upload form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// YAML configuration file
        #[arg(short, long, env = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
    /// Enhance a single image file
    Enhance {
        /// Image to read
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the result (format follows the extension when known)
        #[arg(short, long)]
        output: PathBuf,

        /// Convert to grayscale and equalize the gray levels
        #[arg(short, long)]
        grayscale: bool,

        /// Strength of the luma equalization in percent
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
        intensity: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { config }) => run_server(config.as_deref()).await,
        Some(Commands::Enhance {
            input,
            output,
            grayscale,
            intensity,
        }) => run_enhance_command(&input, &output, grayscale, intensity),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Enhance one file without starting the server
fn run_enhance_command(
    input: &Path,
    output: &Path,
    grayscale: bool,
    intensity: u32,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumeq=warn,hist_eq=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mode = if grayscale {
        ColorMode::Grayscale
    } else {
        ColorMode::Color
    };
    let intensity = Intensity::from_percent(intensity)?;

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;

    let mut enhancer = Enhancer::new(mode).intensity(intensity);
    if let Ok(format) = ImageFormat::from_path(output) {
        enhancer = enhancer.output_format(format);
    }

    let result = enhancer.run(&bytes);
    std::fs::write(output, result.bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    match result.outcome() {
        Outcome::Enhanced {
            width,
            height,
            format,
        } => {
            tracing::info!(width, height, format = ?format, "enhanced");
            println!(
                "Enhanced {} -> {} ({width}x{height}, {mode}, intensity {intensity})",
                input.display(),
                output.display()
            );
        }
        Outcome::Fallback(reason) => {
            tracing::warn!(%reason, "fallback");
            println!(
                "Could not enhance {} ({reason}); copied it to {} unchanged",
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Show version, effective configuration and usage
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = AppConfig::load(config_file.as_deref().map(Path::new)).apply_env_overrides();

    println!("Lumeq v{VERSION}");
    println!("Histogram equalization image enhancer\n");

    println!("Configuration:");
    println!(
        "  CONFIG_FILE       = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!("  bind_addr         = {}", config.bind_addr);
    println!("  upload_dir        = {}", config.upload_dir.display());
    println!("  processed_dir     = {}", config.processed_dir.display());
    println!("  default_intensity = {}%", config.default_intensity);
    println!("  max_upload_bytes  = {}", config.max_upload_bytes);

    println!("\nUsage:");
    println!("  lumeq serve [--config FILE]");
    println!("  lumeq enhance --input IN --output OUT [--grayscale] [--intensity 1-100]");
}

async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumeq=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_path).apply_env_overrides();
    tracing::info!(
        config = ?config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        upload_dir = %config.upload_dir.display(),
        processed_dir = %config.processed_dir.display(),
        default_intensity = config.default_intensity,
        "Configuration loaded"
    );

    let bind_addr = config.bind_addr.clone();
    let state = server::create_app_state(config)?;
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Lumeq server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
