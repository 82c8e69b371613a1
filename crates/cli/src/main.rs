//! # price-anomaly
//!
//! Command-line interface for detecting anomalies in daily price histories.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anomaly::{
    collect_headlines, DetectionConfig, DetectionOrchestrator, DetectorKind, HeadlineDigest,
    PriceSeries, ResultBundle,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use data::{closing_points, CsvPriceSource, JsonHeadlineArchive, LoadConfig, PriceSource};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "price-anomaly")]
#[command(about = "Robust anomaly detection for daily price series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that runs detection.
#[derive(Args, Debug, Clone)]
struct DetectArgs {
    /// Price-history CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Detection configuration (JSON with all seven fields); built-in defaults if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Header of the date column
    #[arg(long, default_value = data::DEFAULT_DATE_COLUMN)]
    date_column: String,

    /// Header of the closing-price column
    #[arg(long, default_value = data::DEFAULT_CLOSE_COLUMN)]
    close_column: String,

    /// Run the detectors in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all detectors and report the anomalies
    Detect {
        #[command(flatten)]
        args: DetectArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the flagged dates, one per line
    Dates {
        #[command(flatten)]
        args: DetectArgs,
    },

    /// Detect, then attach headlines from a stored archive
    Enrich {
        #[command(flatten)]
        args: DetectArgs,

        /// Headline archive (JSON map of date to titles)
        #[arg(short, long)]
        archive: PathBuf,

        /// Subject passed to the headline source
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default detection configuration
    Config,
}

/// Report written by `detect`.
#[derive(Serialize)]
struct DetectionReport<'a> {
    config: &'a DetectionConfig,
    anomalies: &'a ResultBundle,
    flagged_dates: Vec<String>,
}

/// Load a detection configuration, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<DetectionConfig> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config {}", path.display()))?;
            DetectionConfig::from_json_reader(BufReader::new(file))
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(DetectionConfig::default()),
    }
}

/// Load a price series from a history file.
fn load_series(args: &DetectArgs) -> Result<PriceSeries> {
    let layout = LoadConfig::builder()
        .date_column(&args.date_column)
        .close_column(&args.close_column)
        .build()?;
    let source = CsvPriceSource::with_config(&args.input, layout);
    let quotes = source
        .load()
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let series = PriceSeries::from_pairs(closing_points(&quotes))
        .with_context(|| format!("Invalid price series in {}", args.input.display()))?;
    info!(
        source = source.name(),
        observations = series.len(),
        "loaded price series"
    );
    Ok(series)
}

fn run_detection(args: &DetectArgs) -> Result<(DetectionConfig, ResultBundle)> {
    let config = load_config(args.config.as_deref())?;
    let series = load_series(args)?;
    let orchestrator = DetectionOrchestrator::new(config)?;
    let bundle = if args.parallel {
        orchestrator.run_parallel(&series)?
    } else {
        orchestrator.run(&series)?
    };
    Ok((config, bundle))
}

/// Write pretty JSON to `output`, or to stdout.
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
            println!("Results written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn run_detect(args: DetectArgs, output: Option<PathBuf>) -> Result<()> {
    let (config, bundle) = run_detection(&args)?;

    println!("Anomalies found: {}", bundle.len());
    for kind in DetectorKind::ALL {
        println!("  {:<10} {}", kind, bundle.count(kind));
    }

    let report = DetectionReport {
        config: &config,
        anomalies: &bundle,
        flagged_dates: bundle.query_keys(),
    };
    write_json(&report, output.as_deref())
}

fn run_dates(args: DetectArgs) -> Result<()> {
    let (_, bundle) = run_detection(&args)?;
    for key in bundle.query_keys() {
        println!("{}", key);
    }
    Ok(())
}

fn run_enrich(
    args: DetectArgs,
    archive: PathBuf,
    query: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let (_, bundle) = run_detection(&args)?;
    let archive = JsonHeadlineArchive::from_path(&archive)
        .with_context(|| format!("Failed to load archive {}", archive.display()))?;

    let digest: HeadlineDigest = collect_headlines(&bundle, &query, &archive);
    println!("Enriched {} flagged date(s)", digest.len());
    write_json(&digest, output.as_deref())
}

fn run_config() -> Result<()> {
    write_json(&DetectionConfig::default(), None)
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "price_anomaly=info,anomaly_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect { args, output } => run_detect(args, output),
        Commands::Dates { args } => run_dates(args),
        Commands::Enrich {
            args,
            archive,
            query,
            output,
        } => run_enrich(args, archive, query, output),
        Commands::Config => run_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
