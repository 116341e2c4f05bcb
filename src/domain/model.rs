use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive integer identifying a location. Zero is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(u32);

impl LocationId {
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// For ids written as literals in the builtin catalog.
    pub(crate) const fn from_static(raw: u32) -> Self {
        assert!(raw > 0, "location id must be positive");
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: String,
    pub image: String,
    pub category: String,
    pub address: String,
    pub description: String,
    pub features: Vec<String>,
}
