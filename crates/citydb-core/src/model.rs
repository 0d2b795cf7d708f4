// crates/citydb-core/src/model.rs

//! Plain data records mirroring the three tables.
//!
//! These carry no persistence metadata; the mapping between rows and
//! structs is hand-written in [`crate::row`] and [`crate::schema`].

use serde::{Deserialize, Serialize};

/// Name of the sentinel row representing a non-physical "online" city.
///
/// [`crate::CityFilter::exclude_online_city`] excludes exactly the city
/// whose name equals this constant.
pub const ONLINE_CITY_NAME: &str = "Online";

/// A country. Root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// A region within a country.
///
/// Deleting the owning country cascades to its regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
}

/// A city, referencing both its region and its country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    /// Ranking hint for callers; not interpreted by this crate.
    pub weight: i64,
    pub country_id: i64,
    pub region_id: i64,
    /// Categorical label used for thematic filtering (e.g. "capital").
    pub tag: String,
    /// Alternate name, matched as a substring in non-strict lookups.
    pub alt: String,
}
