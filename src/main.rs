use analytics::PeriodStatistics;
use anyhow::Context;
use catalog::RollCatalog;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use configuration::{
    init_tracing, load_config_with_backend, Config, StorageBackend, DEFAULT_CONFIG_FILE,
};
use core_types::{Range, RangeFilter, Roll, RollId};
use std::net::SocketAddr;
use std::path::PathBuf;

/// The main entry point for the warehouse application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config_with_backend(&cli.config, cli.backend)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    let _guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Migrate => {
            let pool = database::connect(&config.database).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("Migrations applied.");
        }
        Commands::Serve { addr } => {
            let addr = match addr {
                Some(addr) => addr,
                None => config.server.address().parse().with_context(|| {
                    format!("invalid listen address {}", config.server.address())
                })?,
            };
            let catalog = open_catalog(&config).await?;
            web_server::run_server(addr, catalog).await?;
        }
        Commands::Add { length, weight } => {
            let roll = open_catalog(&config).await?.add(length, weight).await?;
            println!("{}", rolls_table(&[roll]));
        }
        Commands::Remove { id } => {
            let roll = open_catalog(&config).await?.remove(id).await?;
            println!("{}", rolls_table(&[roll]));
        }
        Commands::List(args) => {
            let rolls = open_catalog(&config).await?.list(&args.into()).await?;
            println!("{}", rolls_table(&rolls));
        }
        Commands::Stats { start, end } => {
            let stats = open_catalog(&config).await?.stats(start, end).await?;
            println!("{}", stats_table(&stats));
        }
    }

    Ok(())
}

/// Opens the configured store and wraps it in a catalog on the host clock.
async fn open_catalog(config: &Config) -> anyhow::Result<RollCatalog> {
    let store = database::open_store(&config.database).await?;
    Ok(RollCatalog::with_system_clock(store))
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Inventory of metal rolls: add, remove, list and report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overrides `database.backend` from the configuration.
    #[arg(long, global = true, value_enum)]
    backend: Option<StorageBackend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve {
        /// Listen address (defaults to `[server]` from the configuration).
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Apply database migrations and exit.
    Migrate,
    /// Add a roll received today.
    Add {
        #[arg(long)]
        length: f64,
        #[arg(long)]
        weight: f64,
    },
    /// Mark a roll as removed today.
    Remove {
        #[arg(long)]
        id: RollId,
    },
    /// List rolls, optionally narrowed by inclusive ranges.
    List(ListArgs),
    /// Show statistics for a date window (format: YYYY-MM-DD).
    Stats {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
}

/// Each range only applies when both of its ends are given.
#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    id_from: Option<RollId>,
    #[arg(long)]
    id_to: Option<RollId>,
    #[arg(long)]
    length_from: Option<f64>,
    #[arg(long)]
    length_to: Option<f64>,
    #[arg(long)]
    weight_from: Option<f64>,
    #[arg(long)]
    weight_to: Option<f64>,
    #[arg(long)]
    added_from: Option<NaiveDate>,
    #[arg(long)]
    added_to: Option<NaiveDate>,
    #[arg(long)]
    removed_from: Option<NaiveDate>,
    #[arg(long)]
    removed_to: Option<NaiveDate>,
}

impl From<ListArgs> for RangeFilter {
    fn from(args: ListArgs) -> Self {
        RangeFilter {
            id: Range::new(args.id_from, args.id_to),
            length: Range::new(args.length_from, args.length_to),
            weight: Range::new(args.weight_from, args.weight_to),
            date_added: Range::new(args.added_from, args.added_to),
            date_removed: Range::new(args.removed_from, args.removed_to),
        }
    }
}

// ==============================================================================
// Output
// ==============================================================================

fn rolls_table(rolls: &[Roll]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Length", "Weight", "Added", "Removed"]);
    for roll in rolls {
        table.add_row(vec![
            Cell::new(roll.id),
            Cell::new(roll.length),
            Cell::new(roll.weight),
            Cell::new(roll.date_added),
            Cell::new(
                roll.date_removed
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
            ),
        ]);
    }
    table
}

fn stats_table(stats: &PeriodStatistics) -> Table {
    let day = |d: Option<NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    let rows: [(&str, String); 15] = [
        ("Added", stats.added_count.to_string()),
        ("Removed", stats.removed_count.to_string()),
        ("Avg length", format!("{:.2}", stats.avg_length)),
        ("Avg weight", format!("{:.2}", stats.avg_weight)),
        ("Max length", stats.max_length.to_string()),
        ("Min length", stats.min_length.to_string()),
        ("Max weight", stats.max_weight.to_string()),
        ("Min weight", stats.min_weight.to_string()),
        ("Total weight", stats.total_weight.to_string()),
        ("Max interval (days)", stats.max_interval_days.to_string()),
        ("Min interval (days)", stats.min_interval_days.to_string()),
        ("Day with fewest rolls", day(stats.day_with_min_count)),
        ("Day with most rolls", day(stats.day_with_max_count)),
        ("Lightest day", day(stats.day_with_min_weight)),
        ("Heaviest day", day(stats.day_with_max_weight)),
    ];
    for (metric, value) in rows {
        table.add_row(vec![metric.to_string(), value]);
    }
    table
}
