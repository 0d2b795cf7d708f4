// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! Read-oriented lookup queries for a relational city/region/country
//! database. The crate assumes a pre-populated schema (see [`schema`]) and
//! only issues joined SELECT statements; the sole write surface is the
//! seeding helpers used by tests and the demo CLI.
//!
//! The central type is [`CityQueryHandler`], which wraps a SQLite
//! connection and maps result rows into flat [`CityDto`] values.

pub mod dto;
pub mod error;
pub mod model;
pub mod query;
pub mod row;
pub mod schema;
pub mod seed;

// Re-exports
pub use crate::dto::CityDto;
pub use crate::error::{Error, Result};
pub use crate::model::{City, Country, Region, ONLINE_CITY_NAME};
pub use crate::query::{CityFilter, CityQueryHandler, DbStats};
