pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{router, run_server, AppState};
pub use config::Settings;
pub use crate::core::render::Site;
pub use domain::catalog::Catalog;
pub use domain::model::{LocationId, LocationRecord};
pub use utils::error::{ListingError, Result};
