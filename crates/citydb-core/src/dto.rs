// crates/citydb-core/src/dto.rs

use serde::Serialize;
use serde_json::{Map, Value};

/// Flattened read-only projection of a city joined with its country and
/// region names.
///
/// Constructed fresh per query result row; it has no lifecycle of its own.
/// `alias` carries the city's *tag* column — this mirrors the projection
/// the existing callers rely on, even though the entity also has a
/// separate `alt` field used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub alias: String,
    pub weight: i64,
    pub country: String,
    pub region: String,
}

impl CityDto {
    /// Key-value projection for serialization.
    ///
    /// Note: `weight` is intentionally absent, matching what callers of
    /// the projection already expect.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), Value::from(self.id));
        map.insert("name".into(), Value::from(self.name.clone()));
        map.insert("alias".into(), Value::from(self.alias.clone()));
        map.insert("country".into(), Value::from(self.country.clone()));
        map.insert("region".into(), Value::from(self.region.clone()));
        map
    }
}
