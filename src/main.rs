//! Tripdesk CLI application entry point
//!
//! Browse travel-desk exports (bookings, corporate accounts, agents, refunds,
//! visa applications) from the terminal: search, filter, sort and page
//! through a JSON or CSV file the same way the admin dashboards do.
//!
//! # Usage
//!
//! ```bash
//! # First page of flight bookings to Dubai
//! tripdesk show bookings.json --entity flight-bookings -s dubai
//!
//! # Verified corporate accounts, largest first
//! tripdesk show users.json -e corporate-users -f status=verified \
//!     --sort employeesCount --sort employeesCount
//!
//! # Any CSV, described by a schema file
//! tripdesk show hotels.csv --schema hotels.toml -p 2
//!
//! # Filter choices with counts
//! tripdesk options users.json industry -e corporate-users --counts
//!
//! # Quiet mode (only record ids)
//! tripdesk -q show refunds.json -e refunds -f status=pending
//! ```
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/tripdesk/config.toml` (created on first
//! run). Set `RUST_LOG=tripdesk=debug` to trace browser state changes.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use tripdesk::{
    TripdeskError,
    cli::{Cli, Commands},
    commands,
    config::TripdeskConfig,
};

type Result<T> = std::result::Result<T, TripdeskError>;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();
    let config = TripdeskConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Show { file, source, query } => {
            commands::show(file, source, query, &config, quiet)?;
        }
        Commands::Options {
            file,
            filter,
            source,
            counts,
        } => {
            commands::options(file, filter, source, *counts, &config, quiet)?;
        }
        Commands::Entities => {
            commands::entities(&config, quiet)?;
        }
        Commands::Schema { entity, output } => {
            commands::schema(*entity, output.as_deref(), quiet)?;
        }
    }

    Ok(())
}
