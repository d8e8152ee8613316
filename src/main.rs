use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use harvest_flow::catalog;
use harvest_flow::marketplace::{filter_products, ALL_CATEGORIES};
use harvest_flow::models::{Config, Section};
use harvest_flow::ui;

#[derive(Parser, Debug)]
#[command(name = "harvest-flow", author, version, about = "HarvestFlow agri-tech demo in the terminal", long_about = None)]
struct Cli {
    /// Section to open first (home, marketplace, logistics, weather, quality, dashboard)
    #[arg(short, long)]
    section: Option<Section>,

    /// Simulated grading delay in milliseconds
    #[arg(long)]
    analysis_delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List marketplace products through the category and search filter
    Products {
        /// Category id, or "all"
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Case-insensitive match on product or seller name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List navigable sections
    Sections,
}

/// Where tracing output goes while the binary runs
#[derive(Debug, PartialEq)]
enum LogTarget {
    File(PathBuf),
    /// The TUI owns the terminal, so without a log file events are dropped
    Discard,
}

impl LogTarget {
    fn for_config(config: &Config) -> Self {
        match &config.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Discard,
        }
    }
}

fn init_logging(config: &Config) -> Result<()> {
    match LogTarget::for_config(config) {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let filter = EnvFilter::try_from_env("HARVESTFLOW_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("harvest_flow=info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Discard => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("harvest_flow=error"))
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

fn print_products(category: &str, search: &str, json: bool) -> Result<()> {
    if category != ALL_CATEGORIES && !catalog::categories().contains(&category) {
        anyhow::bail!(
            "Unknown category '{}'. Expected one of: {}",
            category,
            catalog::categories().join(", ")
        );
    }

    let products = catalog::products();
    let matches = filter_products(&products, category, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No products found");
        return Ok(());
    }

    println!("{:<22} {:<6} {:>12}  {:<18} {:<11} {:>6}", "PRODUCT", "GRADE", "PRICE", "SELLER", "LOCATION", "STOCK");
    for p in matches {
        println!(
            "{:<22} {:<6} {:>12}  {:<18} {:<11} {:>6}",
            p.name,
            p.grade.to_string(),
            format!("${:.2}/{}", p.price, p.unit),
            p.seller,
            p.location,
            p.stock
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(section) = cli.section {
        config.start_section = section;
    }
    if let Some(ms) = cli.analysis_delay_ms {
        config.analysis_delay = Duration::from_millis(ms);
    }

    init_logging(&config)?;

    match cli.command {
        Some(Commands::Products { category, search, json }) => print_products(&category, &search, json),
        Some(Commands::Sections) => {
            for section in Section::ALL {
                println!("{:<12} {}", section.id(), section.label());
            }
            Ok(())
        }
        None => {
            info!("🚀 Starting HarvestFlow TUI");
            if let Err(e) = ui::run_app(&config).await {
                error!("TUI error: {}", e);
                eprintln!("❌ TUI Error: {}", e);
                return Err(e);
            }
            println!("Thanks for using HarvestFlow!");
            Ok(())
        }
    }
}
