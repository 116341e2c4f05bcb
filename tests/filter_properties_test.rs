use location_listing::core::detail::{parse_location_id, resolve, DetailOutcome};
use location_listing::core::filter::filter;
use location_listing::domain::ports::LocationSource;
use location_listing::Catalog;

/// Every record is found by any slice of its name, category or address,
/// whatever the casing.
#[test]
fn test_every_record_found_by_its_own_substrings() {
    let catalog = Catalog::builtin().unwrap();

    for record in catalog.records() {
        for field in [&record.name, &record.category, &record.address] {
            let chars: Vec<char> = field.chars().collect();
            for window in [1, 3, chars.len()] {
                let window = window.min(chars.len());
                let slice: String = chars[chars.len() - window..].iter().collect();
                if slice.trim().is_empty() {
                    continue;
                }

                let variants = [
                    slice.to_uppercase(),
                    slice.to_lowercase(),
                    format!("  {}  ", slice),
                ];
                for query in variants {
                    let hits = filter(catalog.records(), &query);
                    assert!(
                        hits.iter().any(|r| r.id == record.id),
                        "query {:?} should find {}",
                        query,
                        record.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_filter_result_is_ordered_subsequence() {
    let catalog = Catalog::builtin().unwrap();
    let positions = |query: &str| -> Vec<usize> {
        filter(catalog.records(), query)
            .iter()
            .map(|hit| catalog.records().iter().position(|r| r.id == hit.id).unwrap())
            .collect()
    };

    for query in ["a", "e", "o", ", ", "house"] {
        let found = positions(query);
        assert!(found.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
    }
}

#[test]
fn test_historic_corridor_examples() {
    let catalog = Catalog::builtin().unwrap();
    let ids = |q: &str| -> Vec<u32> {
        filter(catalog.records(), q)
            .iter()
            .map(|r| r.id.get())
            .collect()
    };

    assert!(ids("historic").contains(&3));
    assert!(ids("HISTORIC").contains(&3));
    assert!(ids("francisco").contains(&3));
    assert!(ids("zzz").is_empty());
}

#[test]
fn test_detail_lookup_for_every_record() {
    let catalog = Catalog::builtin().unwrap();

    for record in catalog.records() {
        let query = format!("id={}", record.id);
        match resolve(&catalog, parse_location_id(Some(&query)), "/") {
            DetailOutcome::Found(found) => assert_eq!(found, record),
            other => panic!("id {} should resolve, got {:?}", record.id, other),
        }
    }
}
