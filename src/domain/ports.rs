use crate::domain::model::LocationRecord;

/// Read-only access to the ordered record set.
pub trait LocationSource: Send + Sync {
    fn records(&self) -> &[LocationRecord];
}

pub trait SiteSettings: Send + Sync {
    fn bind_address(&self) -> &str;
    fn site_title(&self) -> &str;
    fn tagline(&self) -> &str;
}
