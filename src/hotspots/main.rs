//! Live hotspot geofencing.
//!
//! Resolves the Nepal boundary, downloads (or reads) FIRMS active-fire
//! detections, keeps those inside the boundary and writes them out as
//! GeoJSON or CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use firewatch::boundary::{BoundaryProvider, FixedBoundaryProvider, HttpFetcher, SourceChainProvider};
use firewatch::config::Config;
use firewatch::firms::{AreaRequest, CsvFileSource, FirmsClient, PointSource, Sensor};
use firewatch::geofence::filter_inside;
use firewatch::notify::AlertWebhook;
use firewatch::output::{write_hotspots, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "hotspots")]
#[command(about = "Fetch FIRMS fire hotspots and keep those inside Nepal")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// FIRMS map key
    #[arg(long, env = "FIRMS_MAP_KEY", hide_env_values = true)]
    map_key: Option<String>,

    /// Satellite sensor
    #[arg(long, value_enum)]
    sensor: Option<Sensor>,

    /// Day window (1-10)
    #[arg(long)]
    days: Option<u8>,

    /// Read a saved FIRMS CSV instead of downloading
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "geojson")]
    format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave the boundary outline out of GeoJSON output
    #[arg(long)]
    no_boundary: bool,

    /// Webhook URL for a hotspot summary (optional)
    #[arg(long)]
    webhook: Option<String>,

    /// Skip remote boundary sources and use the embedded outline
    #[arg(long)]
    fallback_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(key) = args.map_key.clone() {
        config.firms.map_key = Some(key);
    }
    if let Some(sensor) = args.sensor {
        config.firms.sensor = sensor;
    }
    if let Some(days) = args.days {
        config.firms.days = days;
    }

    info!("Nepal Forest Fire Watch - live hotspots");

    let client = config.http.build_client()?;

    let provider: Box<dyn BoundaryProvider> = if args.fallback_only {
        info!("Using embedded boundary outline");
        Box::new(FixedBoundaryProvider::fallback())
    } else {
        Box::new(SourceChainProvider::new(
            HttpFetcher::new(client.clone()),
            config.boundary.sources.clone(),
            config.boundary.target(),
        ))
    };

    let request = AreaRequest::new(config.firms.sensor, config.firms.area(), config.firms.days)
        .context("Invalid FIRMS request")?;

    let source: Box<dyn PointSource> = match &args.input {
        Some(path) => Box::new(CsvFileSource::new(path)),
        None => {
            let map_key = config
                .firms
                .map_key
                .as_deref()
                .context("A FIRMS map key is required (--map-key or FIRMS_MAP_KEY)")?;
            Box::new(FirmsClient::new(
                client.clone(),
                &config.firms.base_url,
                map_key,
                request,
            ))
        }
    };

    // Boundary and candidates are independent
    let (boundary, candidates) = tokio::join!(provider.get_boundary(), source.get_candidates());
    let candidates = candidates.context("Failed to load fire hotspots")?;

    let inside = filter_inside(&candidates, &boundary);
    info!(
        "{} of {} hotspots inside boundary ({})",
        inside.len(),
        candidates.len(),
        boundary.source()
    );
    if inside.is_empty() {
        info!("No active fires detected in the selected time range");
    }

    let outline = if args.no_boundary {
        None
    } else {
        Some(boundary.as_ref())
    };
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_hotspots(&mut writer, args.format, &inside, outline)?;
            writer.flush()?;
            info!("Wrote {} hotspots to {}", inside.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_hotspots(&mut writer, args.format, &inside, outline)?;
            if args.format == OutputFormat::Geojson {
                writeln!(writer)?;
            }
        }
    }

    if let Some(url) = &args.webhook {
        let webhook = AlertWebhook::new(url.clone(), client);
        let request = args.input.is_none().then_some(&request);
        webhook.send_summary(inside.len(), &boundary, request).await?;
    }

    Ok(())
}
