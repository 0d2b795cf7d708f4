// crates/citydb-core/src/row.rs

//! Row-to-DTO conversion.
//!
//! Columns are read by name so that a mismatched projection surfaces as
//! [`crate::Error::MissingColumn`] rather than silently shifting values.

use rusqlite::Row;

use crate::dto::CityDto;

/// Converts one row of the joined city select into a [`CityDto`].
///
/// Expected columns: `id`, `name`, `tag`, `weight`, `country_name`,
/// `region_name`. The DTO's `alias` field is filled from `tag`.
pub fn city_from_row(row: &Row<'_>) -> rusqlite::Result<CityDto> {
    Ok(CityDto {
        id: row.get("id")?,
        name: row.get("name")?,
        alias: row.get("tag")?,
        weight: row.get("weight")?,
        country: row.get("country_name")?,
        region: row.get("region_name")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rusqlite::Connection;

    #[test]
    fn maps_aliased_columns_into_dto() {
        let conn = Connection::open_in_memory().unwrap();
        let dto = conn
            .query_row(
                "SELECT 1 AS id, 'Paris' AS name, 'capital' AS tag, 90 AS weight, \
                 'France' AS country_name, 'Île-de-France' AS region_name",
                [],
                city_from_row,
            )
            .unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "Paris");
        assert_eq!(dto.alias, "capital");
        assert_eq!(dto.weight, 90);
        assert_eq!(dto.country, "France");
        assert_eq!(dto.region, "Île-de-France");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row(
                // no `tag` column in the projection
                "SELECT 1 AS id, 'Paris' AS name, 90 AS weight, \
                 'France' AS country_name, 'IdF' AS region_name",
                [],
                city_from_row,
            )
            .map(|_| ())
            .unwrap_err();

        match Error::from(err) {
            Error::MissingColumn { name } => assert_eq!(name, "tag"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_weight_is_a_type_mismatch() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row(
                "SELECT 1 AS id, 'Paris' AS name, 'capital' AS tag, 'heavy' AS weight, \
                 'France' AS country_name, 'IdF' AS region_name",
                [],
                city_from_row,
            )
            .map(|_| ())
            .unwrap_err();

        match Error::from(err) {
            Error::TypeMismatch { column, .. } => assert_eq!(column, "weight"),
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }
}
