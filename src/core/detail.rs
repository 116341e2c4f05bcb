use crate::core::{query_param, LocationId, LocationRecord, LocationSource};

/// Name of the query parameter carrying the location id.
pub const ID_PARAM: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome<'a> {
    Found(&'a LocationRecord),
    Redirect { to: String },
}

/// Reads `id` from a raw URL query string such as `id=3&ref=home`.
///
/// Returns `None` when the parameter is missing, empty, not a number, zero,
/// or out of range. The first `id` wins when it is repeated.
pub fn parse_location_id(raw_query: Option<&str>) -> Option<LocationId> {
    let value = query_param(raw_query, ID_PARAM)?;

    let parsed = value.trim().parse::<u32>().ok().and_then(LocationId::new);
    if parsed.is_none() {
        tracing::debug!("Ignoring unusable location id {:?}", value);
    }
    parsed
}

/// Looks up the location for `id`. Anything that is not an exact match sends
/// the caller back to `listing_path`.
pub fn resolve<'a, S: LocationSource + ?Sized>(
    source: &'a S,
    id: Option<LocationId>,
    listing_path: &str,
) -> DetailOutcome<'a> {
    let found = id.and_then(|id| source.records().iter().find(|r| r.id == id));

    match found {
        Some(record) => DetailOutcome::Found(record),
        None => {
            tracing::info!(
                "No location for id {:?}, redirecting to {}",
                id.map(LocationId::get),
                listing_path
            );
            DetailOutcome::Redirect {
                to: listing_path.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    #[test]
    fn test_parse_location_id() {
        assert_eq!(parse_location_id(Some("id=3")).map(LocationId::get), Some(3));
        assert_eq!(parse_location_id(Some("ref=home&id=%205")).map(LocationId::get), Some(5));
        assert_eq!(parse_location_id(Some("id=4&id=9")).map(LocationId::get), Some(4));
    }

    #[test]
    fn test_parse_location_id_unusable() {
        assert_eq!(parse_location_id(None), None);
        assert_eq!(parse_location_id(Some("")), None);
        assert_eq!(parse_location_id(Some("id=")), None);
        assert_eq!(parse_location_id(Some("id=abc")), None);
        assert_eq!(parse_location_id(Some("id=-2")), None);
        assert_eq!(parse_location_id(Some("id=0")), None);
        assert_eq!(parse_location_id(Some("id=3.5")), None);
        assert_eq!(parse_location_id(Some("id=99999999999")), None);
        assert_eq!(parse_location_id(Some("name=3")), None);
    }

    #[test]
    fn test_resolve_found() {
        let catalog = Catalog::builtin().unwrap();
        match resolve(&catalog, LocationId::new(3), "/") {
            DetailOutcome::Found(record) => assert_eq!(record.name, "Historic Corridor"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_redirects() {
        let catalog = Catalog::builtin().unwrap();
        let expected = DetailOutcome::Redirect { to: "/".to_string() };
        assert_eq!(resolve(&catalog, None, "/"), expected);
        assert_eq!(resolve(&catalog, LocationId::new(404), "/"), expected);
    }
}
