// crates/citydb-core/src/schema.rs

//! SQL statement constants.
//!
//! Pure data, no I/O. The query handler composes its WHERE clauses on top
//! of [`SELECT_CITY_BASE`]; the DDL and INSERT statements exist so tests
//! and the demo CLI can stand up a database — schema migration proper is
//! out of scope.

/// DDL for the three tables.
///
/// Foreign keys cascade on delete: removing a country removes its regions
/// and cities, removing a region removes its cities. SQLite only enforces
/// this when `PRAGMA foreign_keys = ON` is set on the connection.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS country (
    country_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    active INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS region (
    region_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    country_id INTEGER NOT NULL,
    FOREIGN KEY (country_id) REFERENCES country(country_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS city (
    city_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    weight INTEGER NOT NULL,
    country_id INTEGER NOT NULL,
    region_id INTEGER NOT NULL,
    tag TEXT NOT NULL,
    alt TEXT NOT NULL,
    FOREIGN KEY (country_id) REFERENCES country(country_id) ON DELETE CASCADE,
    FOREIGN KEY (region_id) REFERENCES region(region_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_region_country_id ON region(country_id);
CREATE INDEX IF NOT EXISTS idx_city_country_id ON city(country_id);
CREATE INDEX IF NOT EXISTS idx_city_tag ON city(tag);
"#;

/// Joined select shared by every lookup.
///
/// All four operations project the same six columns; they differ only in
/// the WHERE clause appended to this base.
pub const SELECT_CITY_BASE: &str = "\
SELECT c.city_id AS id, c.name AS name, c.tag AS tag, c.weight AS weight, \
cc.name AS country_name, cr.name AS region_name \
FROM city c \
INNER JOIN country cc ON c.country_id = cc.country_id \
INNER JOIN region cr ON c.region_id = cr.region_id";

// Seeding statements (tests and the demo CLI only)

pub const INSERT_COUNTRY: &str = "\
INSERT INTO country (country_id, name, active) VALUES (?1, ?2, ?3)";

pub const INSERT_REGION: &str = "\
INSERT INTO region (region_id, name, country_id) VALUES (?1, ?2, ?3)";

pub const INSERT_CITY: &str = "\
INSERT INTO city (city_id, name, weight, country_id, region_id, tag, alt) \
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

// Row counts for `stats`

pub const COUNT_COUNTRIES: &str = "SELECT COUNT(*) FROM country";
pub const COUNT_REGIONS: &str = "SELECT COUNT(*) FROM region";
pub const COUNT_CITIES: &str = "SELECT COUNT(*) FROM city";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_tables_defines_all_three_tables() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS country"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS region"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS city"));
        assert_eq!(CREATE_TABLES.matches("ON DELETE CASCADE").count(), 3);
    }

    #[test]
    fn base_select_joins_both_parents() {
        assert_eq!(SELECT_CITY_BASE.matches("INNER JOIN").count(), 2);
        assert!(!SELECT_CITY_BASE.contains("WHERE"));
        for alias in ["id", "tag", "weight", "country_name", "region_name"] {
            assert!(SELECT_CITY_BASE.contains(&format!("AS {alias}")), "missing alias {alias}");
        }
    }
}
