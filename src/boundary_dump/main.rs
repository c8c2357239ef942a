//! Resolves the national boundary the same way `hotspots` does and writes
//! it as a GeoJSON Feature, with the winning source in its properties.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use firewatch::boundary::{HttpFetcher, SourceChainProvider};
use firewatch::config::Config;
use firewatch::output::boundary_feature;

#[derive(Parser, Debug)]
#[command(name = "boundary")]
#[command(about = "Resolve the Nepal boundary and print it as GeoJSON")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra boundary sources tried before the configured ones
    #[arg(long = "source")]
    sources: Vec<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };

    let sources: Vec<String> = args
        .sources
        .iter()
        .chain(config.boundary.sources.iter())
        .cloned()
        .collect();
    let provider = SourceChainProvider::new(
        HttpFetcher::new(config.http.build_client()?),
        sources,
        config.boundary.target(),
    );
    info!("Resolving boundary from {} source(s)", provider.sources().len());
    let boundary = provider.boundary().await;

    if boundary.is_fallback() {
        warn!("Boundary is the embedded outline");
    }
    if let Some((west, south, east, north)) = boundary.bbox() {
        info!(
            "Boundary extent: W {:.3} S {:.3} E {:.3} N {:.3}",
            west, south, east, north
        );
    }

    let feature = boundary_feature(&boundary);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &feature)?;
            writer.flush()?;
            info!("Wrote boundary to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &feature)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
