// crates/citydb-core/src/seed.rs

//! Schema creation and row insertion.
//!
//! Production data is loaded by an external process; these helpers exist
//! so tests, examples, and the CLI `seed` command can stand up a small
//! database of their own.

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::model::{City, Country, Region, ONLINE_CITY_NAME};
use crate::schema;

/// Creates the three tables and enables foreign-key enforcement.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(schema::CREATE_TABLES)?;
    Ok(())
}

pub fn insert_country(conn: &Connection, country: &Country) -> Result<()> {
    conn.execute(
        schema::INSERT_COUNTRY,
        params![country.id, country.name, country.active],
    )?;
    Ok(())
}

pub fn insert_region(conn: &Connection, region: &Region) -> Result<()> {
    conn.execute(
        schema::INSERT_REGION,
        params![region.id, region.name, region.country_id],
    )?;
    Ok(())
}

pub fn insert_city(conn: &Connection, city: &City) -> Result<()> {
    conn.execute(
        schema::INSERT_CITY,
        params![
            city.id,
            city.name,
            city.weight,
            city.country_id,
            city.region_id,
            city.tag,
            city.alt
        ],
    )?;
    Ok(())
}

/// A small demo dataset: two countries, three regions, five cities plus
/// the sentinel online city.
pub fn demo_dataset() -> (Vec<Country>, Vec<Region>, Vec<City>) {
    let countries = vec![
        Country {
            id: 1,
            name: "France".to_string(),
            active: true,
        },
        Country {
            id: 2,
            name: "Germany".to_string(),
            active: false,
        },
    ];
    let regions = vec![
        Region {
            id: 1,
            name: "Île-de-France".to_string(),
            country_id: 1,
        },
        Region {
            id: 2,
            name: "Auvergne-Rhône-Alpes".to_string(),
            country_id: 1,
        },
        Region {
            id: 3,
            name: "Berlin".to_string(),
            country_id: 2,
        },
    ];
    let cities = vec![
        City {
            id: 1,
            name: "Paris".to_string(),
            weight: 90,
            country_id: 1,
            region_id: 1,
            tag: "capital".to_string(),
            alt: "Paname".to_string(),
        },
        City {
            id: 2,
            name: "Lyon".to_string(),
            weight: 40,
            country_id: 1,
            region_id: 2,
            tag: "region".to_string(),
            alt: "Lugdunum".to_string(),
        },
        City {
            id: 3,
            name: "Berlin".to_string(),
            weight: 80,
            country_id: 2,
            region_id: 3,
            tag: "capital".to_string(),
            alt: "Berlin-Stadt".to_string(),
        },
        City {
            id: 4,
            name: ONLINE_CITY_NAME.to_string(),
            weight: 0,
            country_id: 1,
            region_id: 1,
            tag: "virtual".to_string(),
            alt: "Remote".to_string(),
        },
    ];
    (countries, regions, cities)
}

/// Creates the schema and loads [`demo_dataset`] into `conn`.
pub fn seed_demo(conn: &Connection) -> Result<()> {
    create_tables(conn)?;
    let (countries, regions, cities) = demo_dataset();
    for country in &countries {
        insert_country(conn, country)?;
    }
    for region in &regions {
        insert_region(conn, region)?;
    }
    for city in &cities {
        insert_city(conn, city)?;
    }
    Ok(())
}
