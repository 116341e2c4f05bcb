use crate::core::{query_param, LocationRecord};

/// Name of the query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "q";

/// The search text from a raw URL query string. Missing means empty, and the
/// first `q` wins when it is repeated.
pub fn search_query(raw_query: Option<&str>) -> String {
    query_param(raw_query, SEARCH_PARAM).unwrap_or_default()
}

/// Trims and lowercases a search query. `None` means "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// `needle` must already be normalized.
pub fn matches(record: &LocationRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
        || record.address.to_lowercase().contains(needle)
}

/// Records whose name, category or address contain `query`, case-insensitively,
/// in their original order. An empty or whitespace-only query keeps everything.
pub fn filter<'a>(records: &'a [LocationRecord], query: &str) -> Vec<&'a LocationRecord> {
    match normalize_query(query) {
        None => records.iter().collect(),
        Some(needle) => {
            let hits: Vec<_> = records.iter().filter(|r| matches(r, &needle)).collect();
            tracing::debug!(
                "Query {:?} matched {}/{} locations",
                needle,
                hits.len(),
                records.len()
            );
            hits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::ports::LocationSource;

    fn ids(hits: &[&LocationRecord]) -> Vec<u32> {
        hits.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_search_query() {
        assert_eq!(search_query(None), "");
        assert_eq!(search_query(Some("page=2")), "");
        assert_eq!(search_query(Some("q=loft&q=historic")), "loft");
        assert_eq!(search_query(Some("q=San%20Francisco")), "San Francisco");
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t\n "), None);
        assert_eq!(normalize_query("  HisToric "), Some("historic".to_string()));
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let all: Vec<u32> = catalog.records().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids(&filter(catalog.records(), "")), all);
        assert_eq!(ids(&filter(catalog.records(), "    ")), all);
    }

    #[test]
    fn test_matches_category_and_address() {
        let catalog = Catalog::builtin().unwrap();
        assert!(ids(&filter(catalog.records(), "historic")).contains(&3));
        assert!(ids(&filter(catalog.records(), "HISTORIC")).contains(&3));
        assert!(ids(&filter(catalog.records(), "francisco")).contains(&3));
        assert!(filter(catalog.records(), "zzz").is_empty());
    }

    #[test]
    fn test_description_and_features_not_searched() {
        let catalog = Catalog::builtin().unwrap();
        // only appears in the Historic Corridor description
        assert!(filter(catalog.records(), "victorian").is_empty());
        // only appears as a feature
        assert!(filter(catalog.records(), "grand staircase").is_empty());
    }

    #[test]
    fn test_order_preserved_for_partial_match() {
        let catalog = Catalog::builtin().unwrap();
        // ", ca" hits Los Angeles (1) and San Francisco (3)
        assert_eq!(ids(&filter(catalog.records(), ", ca")), vec![1, 3]);
    }
}
