//! End-to-end tests for the query handler against an in-memory database.

use citydb_core::{seed, City, CityFilter, CityQueryHandler, Country, Error, Region};

fn fixture() -> CityQueryHandler {
    let handler = CityQueryHandler::open_in_memory().unwrap();
    let conn = handler.connection();
    seed::create_tables(conn).unwrap();

    let countries = [
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
    let regions = [
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
    let cities = [
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
            alt: "Hauptstadt".to_string(),
        },
        City {
            id: 4,
            name: "Online".to_string(),
            weight: 0,
            country_id: 1,
            region_id: 1,
            tag: "virtual".to_string(),
            alt: "Remote".to_string(),
        },
    ];

    for country in &countries {
        seed::insert_country(conn, country).unwrap();
    }
    for region in &regions {
        seed::insert_region(conn, region).unwrap();
    }
    for city in &cities {
        seed::insert_city(conn, city).unwrap();
    }
    handler
}

fn names(mut dtos: Vec<citydb_core::CityDto>) -> Vec<String> {
    dtos.sort_by_key(|dto| dto.id);
    dtos.into_iter().map(|dto| dto.name).collect()
}

#[test]
fn city_by_id_returns_the_joined_projection() {
    let handler = fixture();
    let dto = handler.city_by_id(1).unwrap();
    assert_eq!(dto.id, 1);
    assert_eq!(dto.name, "Paris");
    assert_eq!(dto.alias, "capital");
    assert_eq!(dto.weight, 90);
    assert_eq!(dto.country, "France");
    assert_eq!(dto.region, "Île-de-France");
}

#[test]
fn city_by_id_signals_not_found_for_missing_ids() {
    let handler = fixture();
    match handler.city_by_id(999) {
        Err(Error::NotFound { entity, key }) => {
            assert_eq!(entity, "City");
            assert_eq!(key, "999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn strict_name_lookup_requires_exact_equality() {
    let handler = fixture();
    assert_eq!(handler.city_by_name("Lyon", true).unwrap().id, 2);
    assert!(matches!(
        handler.city_by_name("Lyo", true),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn non_strict_lookup_matches_name_prefix() {
    let handler = fixture();
    // "Par" is a prefix of "Paris" but matches no alt field
    assert_eq!(handler.city_by_name("Par", false).unwrap().id, 1);
}

#[test]
fn non_strict_lookup_matches_alt_substring() {
    let handler = fixture();
    // "gdunu" appears inside Lyon's alternate name "Lugdunum" only
    assert_eq!(handler.city_by_name("gdunu", false).unwrap().id, 2);
    // alt matching is substring, not prefix
    assert_eq!(handler.city_by_name("stadt", false).unwrap().id, 3);
}

#[test]
fn non_strict_lookup_misses_on_name_substring() {
    let handler = fixture();
    // "aris" is inside "Paris" but name matching is prefix-only and no
    // alt contains it
    assert!(matches!(
        handler.city_by_name("aris", false),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn cities_by_tag_returns_exact_tag_matches() {
    let handler = fixture();
    let capitals = handler.cities_by_tag("capital", None).unwrap();
    assert_eq!(names(capitals), vec!["Paris", "Berlin"]);
}

#[test]
fn cities_by_tag_narrows_by_country() {
    let handler = fixture();
    let german = handler.cities_by_tag("capital", Some(2)).unwrap();
    assert_eq!(names(german), vec!["Berlin"]);
}

#[test]
fn cities_by_tag_returns_empty_vec_instead_of_not_found() {
    let handler = fixture();
    assert!(handler.cities_by_tag("capital", Some(999)).unwrap().is_empty());
    assert!(handler.cities_by_tag("nope", None).unwrap().is_empty());
}

#[test]
fn unfiltered_cities_returns_every_row() {
    let handler = fixture();
    let all = handler.cities(&CityFilter::new()).unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn name_filter_uses_prefix_or_alt_substring() {
    let handler = fixture();
    // 'n%' matches nothing by name; alt contains "n" for Paname and
    // Lugdunum
    let hits = handler.cities(&CityFilter::new().name("n")).unwrap();
    assert_eq!(names(hits), vec!["Paris", "Lyon"]);
}

#[test]
fn active_country_filter_splits_the_dataset() {
    let handler = fixture();
    let active = handler
        .cities(&CityFilter::new().active_countries(true))
        .unwrap();
    assert_eq!(names(active), vec!["Paris", "Lyon", "Online"]);

    let inactive = handler
        .cities(&CityFilter::new().active_countries(false))
        .unwrap();
    assert_eq!(names(inactive), vec!["Berlin"]);
}

#[test]
fn filters_narrow_with_logical_and() {
    let handler = fixture();
    let hits = handler
        .cities(&CityFilter::new().name("Ber").country_id(2))
        .unwrap();
    assert_eq!(names(hits), vec!["Berlin"]);

    let none = handler
        .cities(&CityFilter::new().name("Ber").country_id(1))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn exclude_online_city_removes_exactly_the_sentinel() {
    let handler = fixture();
    let physical = handler
        .cities(&CityFilter::new().exclude_online_city())
        .unwrap();
    assert_eq!(names(physical), vec!["Paris", "Lyon", "Berlin"]);
}

#[test]
fn stats_counts_all_three_tables() {
    let handler = fixture();
    let stats = handler.stats().unwrap();
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.regions, 3);
    assert_eq!(stats.cities, 4);
}

#[test]
fn mistyped_column_surfaces_as_type_mismatch() {
    let handler = fixture();
    // SQLite keeps the TEXT value despite the INTEGER column affinity
    handler
        .connection()
        .execute("UPDATE city SET weight = 'heavy' WHERE city_id = 1", [])
        .unwrap();

    match handler.city_by_id(1) {
        Err(Error::TypeMismatch { column, .. }) => assert_eq!(column, "weight"),
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn query_against_missing_schema_is_a_faulted_query() {
    let handler = CityQueryHandler::open_in_memory().unwrap();
    assert!(matches!(handler.city_by_id(1), Err(Error::Query(_))));
}
