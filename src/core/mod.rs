pub mod detail;
pub mod filter;
pub mod forms;
pub mod render;

pub use crate::domain::model::{LocationId, LocationRecord};
pub use crate::domain::ports::{LocationSource, SiteSettings};
pub use crate::utils::error::Result;

/// First value of `name` in a raw form-urlencoded query string.
pub fn query_param(raw_query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
