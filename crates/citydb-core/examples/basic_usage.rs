//! Basic usage example for citydb-core
//!
//! Seeds an in-memory database and runs each of the four lookups.

use citydb_core::{seed, CityFilter, CityQueryHandler, Result};

fn main() -> Result<()> {
    let handler = CityQueryHandler::open_in_memory()?;
    seed::seed_demo(handler.connection())?;

    let stats = handler.stats()?;
    println!("Database statistics:");
    println!("  Countries: {}", stats.countries);
    println!("  Regions: {}", stats.regions);
    println!("  Cities: {}", stats.cities);
    println!();

    let paris = handler.city_by_id(1)?;
    println!("By id 1: {} ({}, {})", paris.name, paris.region, paris.country);

    // Non-strict matching: prefix on the name, substring on the alternate
    // name. "gdunu" only appears inside Lyon's alt name "Lugdunum".
    let lyon = handler.city_by_name("gdunu", false)?;
    println!("Fuzzy \"gdunu\": {}", lyon.name);

    let capitals = handler.cities_by_tag("capital", None)?;
    println!("Capitals:");
    for city in &capitals {
        println!("- {} — {}, {}", city.name, city.region, city.country);
    }

    let filter = CityFilter::new().active_countries(true).exclude_online_city();
    let listed = handler.cities(&filter)?;
    println!("Active, physical cities:");
    for city in &listed {
        println!("- {} (weight {})", city.name, city.weight);
    }

    Ok(())
}
