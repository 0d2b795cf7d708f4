use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments for citydb
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "CLI for querying a citydb city/region/country database"
)]
pub struct CliArgs {
    /// Path to the SQLite database file
    #[arg(
        short = 'd',
        long = "db",
        env = "CITYDB_PATH",
        default_value = "citydb.sqlite3",
        global = true
    )]
    pub db: PathBuf,

    /// Print results as JSON (the DTO key-value projection)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show row counts for the three tables
    Stats,

    /// Look up a single city by name (or by id with --id)
    City {
        /// City name, or a numeric id when --id is given
        query: String,

        /// Require an exact name match instead of prefix/alias matching
        #[arg(long)]
        strict: bool,

        /// Treat the query as a city id
        #[arg(long)]
        id: bool,
    },

    /// List all cities carrying a tag
    Tag {
        /// Tag to match exactly (e.g. capital)
        tag: String,

        /// Restrict to one country id
        #[arg(short = 'c', long)]
        country: Option<i64>,
    },

    /// List cities, optionally filtered
    List {
        /// Name filter (prefix on the name, substring on the alias)
        #[arg(long)]
        name: Option<String>,

        /// Only cities in active countries
        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        /// Only cities in inactive countries
        #[arg(long)]
        inactive: bool,

        /// Restrict to one country id
        #[arg(short = 'c', long)]
        country: Option<i64>,

        /// Skip the sentinel "online" city
        #[arg(long = "exclude-online")]
        exclude_online: bool,
    },

    /// Create the schema and load the demo dataset
    Seed,
}
