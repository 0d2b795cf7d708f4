// crates/citydb-core/src/query.rs

//! The city query handler.
//!
//! Four read operations over the joined city/country/region tables. Each
//! optional parameter contributes exactly one predicate to the WHERE
//! clause; absent parameters are omitted entirely rather than matched
//! against NULL. All predicates combine with AND.
//!
//! Non-strict name matching means: the city name *starts with* the query,
//! OR the alternate name *contains* it as a substring. The two are joined
//! by OR on purpose; callers depend on the widened results.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use serde::Serialize;
use tracing::debug;

use crate::dto::CityDto;
use crate::error::{Error, Result};
use crate::model::ONLINE_CITY_NAME;
use crate::row::city_from_row;
use crate::schema;

/// Row counts for the three tables.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
}

/// Optional filters for [`CityQueryHandler::cities`].
///
/// Built incrementally; every field left unset adds no predicate.
///
/// # Example
///
/// ```no_run
/// use citydb_core::{CityFilter, CityQueryHandler};
///
/// let handler = CityQueryHandler::open("cities.db").unwrap();
/// let filter = CityFilter::new()
///     .name("par")
///     .active_countries(true)
///     .exclude_online_city();
/// let cities = handler.cities(&filter).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CityFilter {
    pub name: Option<String>,
    pub active_countries: Option<bool>,
    pub country_id: Option<i64>,
    pub exclude_online_city: bool,
}

impl CityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix-or-substring name filter (see the module docs).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to cities in active (`true`) or inactive (`false`) countries.
    pub fn active_countries(mut self, active: bool) -> Self {
        self.active_countries = Some(active);
        self
    }

    pub fn country_id(mut self, country_id: i64) -> Self {
        self.country_id = Some(country_id);
        self
    }

    /// Exclude the sentinel row named [`ONLINE_CITY_NAME`].
    pub fn exclude_online_city(mut self) -> Self {
        self.exclude_online_city = true;
        self
    }

    /// WHERE-clause fragments and their bound values, in bind order.
    ///
    /// An empty name string adds no predicate, same as `None`.
    fn predicates(&self) -> (Vec<&'static str>, Vec<Value>) {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if self.exclude_online_city {
            clauses.push("c.name <> ?");
            values.push(Value::Text(ONLINE_CITY_NAME.to_string()));
        }
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            clauses.push("(c.name LIKE ? OR c.alt LIKE ?)");
            values.push(Value::Text(format!("{name}%")));
            values.push(Value::Text(format!("%{name}%")));
        }
        if let Some(country_id) = self.country_id {
            clauses.push("c.country_id = ?");
            values.push(Value::Integer(country_id));
        }
        match self.active_countries {
            Some(true) => clauses.push("cc.active = 1"),
            Some(false) => clauses.push("cc.active = 0"),
            None => {}
        }

        (clauses, values)
    }
}

/// Read-only lookups against a city database.
///
/// Holds nothing but the connection handle; every call issues a single
/// query, so instances are safe to use without coordination beyond what
/// the connection itself requires.
pub struct CityQueryHandler {
    conn: Connection,
}

impl CityQueryHandler {
    /// Wraps an existing connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens a database file. The schema is assumed to exist already.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(Error::Query)?;
        Ok(Self::new(conn))
    }

    /// Opens a fresh in-memory database (no schema). Mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::Query)?;
        Ok(Self::new(conn))
    }

    /// Access to the underlying connection, e.g. for seeding.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Exact lookup by city id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no city has this id.
    pub fn city_by_id(&self, id: i64) -> Result<CityDto> {
        debug!(id, "city_by_id");
        let sql = format!("{} WHERE c.city_id = ?", schema::SELECT_CITY_BASE);
        self.conn
            .query_row(&sql, params![id], city_from_row)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("City", id.to_string()),
                other => other.into(),
            })
    }

    /// Lookup by name, returning the first matching row.
    ///
    /// With `strict` the name must match exactly; otherwise the
    /// prefix-or-alt-substring semantics apply.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when nothing matches.
    pub fn city_by_name(&self, name: &str, strict: bool) -> Result<CityDto> {
        debug!(name, strict, "city_by_name");
        let (sql, values) = if strict {
            (
                format!("{} WHERE c.name = ?", schema::SELECT_CITY_BASE),
                vec![Value::Text(name.to_string())],
            )
        } else {
            (
                format!(
                    "{} WHERE (c.name LIKE ? OR c.alt LIKE ?)",
                    schema::SELECT_CITY_BASE
                ),
                vec![
                    Value::Text(format!("{name}%")),
                    Value::Text(format!("%{name}%")),
                ],
            )
        };
        self.conn
            .query_row(&sql, params_from_iter(values), city_from_row)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    Error::not_found("City", name.to_string())
                }
                other => other.into(),
            })
    }

    /// All cities carrying `tag`, optionally narrowed to one country.
    ///
    /// Never signals NotFound; an empty result is an empty vector.
    pub fn cities_by_tag(&self, tag: &str, country_id: Option<i64>) -> Result<Vec<CityDto>> {
        debug!(tag, country_id, "cities_by_tag");
        let mut sql = format!("{} WHERE c.tag = ?", schema::SELECT_CITY_BASE);
        let mut values = vec![Value::Text(tag.to_string())];
        if let Some(country_id) = country_id {
            sql.push_str(" AND c.country_id = ?");
            values.push(Value::Integer(country_id));
        }
        self.collect(&sql, values)
    }

    /// Cities matching every filter in `filter` (logical AND).
    ///
    /// With an empty filter this returns every city.
    pub fn cities(&self, filter: &CityFilter) -> Result<Vec<CityDto>> {
        let (clauses, values) = filter.predicates();
        debug!(predicates = clauses.len(), "cities");
        let mut sql = schema::SELECT_CITY_BASE.to_string();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        self.collect(&sql, values)
    }

    /// Row counts for the three tables.
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            countries: self.count(schema::COUNT_COUNTRIES)?,
            regions: self.count(schema::COUNT_REGIONS)?,
            cities: self.count(schema::COUNT_CITIES)?,
        })
    }

    fn count(&self, sql: &str) -> Result<usize> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n as usize)
    }

    fn collect(&self, sql: &str, values: Vec<Value>) -> Result<Vec<CityDto>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(values), city_from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
