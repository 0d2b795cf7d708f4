//! citydb — Command-line interface for citydb-core
//!
//! This binary provides a simple way to inspect a city/region/country
//! database from your terminal. It supports printing row counts, looking
//! up a single city by id or name, listing cities by tag, and listing
//! cities with optional filters.
//!
//! Usage examples
//! --------------
//!
//! - Create and seed a demo database
//!   $ citydb --db demo.sqlite3 seed
//!
//! - Show overall stats
//!   $ citydb --db demo.sqlite3 stats
//!
//! - Look up a city (non-strict: name prefix or alias substring)
//!   $ citydb --db demo.sqlite3 city lyo
//!   $ citydb --db demo.sqlite3 city Lyon --strict
//!   $ citydb --db demo.sqlite3 city 2 --id
//!
//! - List cities by tag, optionally narrowed to a country
//!   $ citydb --db demo.sqlite3 tag capital --country 1
//!
//! - List with filters (filters AND together)
//!   $ citydb --db demo.sqlite3 list --name par --active --exclude-online
//!
//! The database path can also come from the `CITYDB_PATH` environment
//! variable. Pass `--json` to print the DTO projection instead of text.
mod args;

use crate::args::{CliArgs, Commands};
use citydb_core::{seed, CityDto, CityFilter, CityQueryHandler};
use clap::Parser;
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let handler = CityQueryHandler::open(&args.db)?;

    match args.command {
        Commands::Seed => {
            seed::seed_demo(handler.connection())?;
            println!("Seeded demo dataset into {}", args.db.display());
        }

        Commands::Stats => {
            let stats = handler.stats()?;
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Cities: {}", stats.cities);
        }

        Commands::City { query, strict, id } => {
            let city = if id {
                handler.city_by_id(query.parse()?)?
            } else {
                handler.city_by_name(&query, strict)?
            };
            print_city(&city, args.json)?;
        }

        Commands::Tag { tag, country } => {
            let cities = handler.cities_by_tag(&tag, country)?;
            print_cities(&cities, &tag, args.json)?;
        }

        Commands::List {
            name,
            active,
            inactive,
            country,
            exclude_online,
        } => {
            let mut filter = CityFilter::new();
            filter.name = name;
            filter.country_id = country;
            filter.active_countries = match (active, inactive) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            filter.exclude_online_city = exclude_online;

            let cities = handler.cities(&filter)?;
            print_cities(&cities, "filter", args.json)?;
        }
    }

    Ok(())
}

fn print_city(city: &CityDto, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Value::Object(city.to_map()))?);
    } else {
        println!(
            "{} — {}, {} [{}] (weight {})",
            city.name, city.region, city.country, city.alias, city.weight
        );
    }
    Ok(())
}

fn print_cities(cities: &[CityDto], query: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let maps: Vec<Value> = cities.iter().map(|c| Value::Object(c.to_map())).collect();
        println!("{}", serde_json::to_string_pretty(&maps)?);
        return Ok(());
    }
    if cities.is_empty() {
        println!("No cities found matching: {query}");
    } else {
        for city in cities {
            println!(
                "{} — {}, {} [{}] (weight {})",
                city.name, city.region, city.country, city.alias, city.weight
            );
        }
    }
    Ok(())
}
