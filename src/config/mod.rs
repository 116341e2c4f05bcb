pub mod toml_config;

use crate::core::SiteSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "location-listing")]
#[command(about = "Serve the location listing site")]
pub struct CliConfig {
    /// Path to a TOML site configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on as host:port, overrides [server].bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Site title, overrides [site].title
    #[arg(long)]
    pub site_title: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Effective settings after merging the config file and command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub bind: String,
    pub title: String,
    pub tagline: String,
}

impl Settings {
    pub fn from_site_config(config: &SiteConfig) -> Self {
        Self {
            bind: config.bind_address().to_string(),
            title: config.site_title().to_string(),
            tagline: config.tagline().to_string(),
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        let mut settings = Self::from_site_config(&file);
        if let Some(bind) = &cli.bind {
            settings.bind = bind.clone();
        }
        if let Some(title) = &cli.site_title {
            settings.title = title.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_site_config(&SiteConfig::default())
    }
}

impl SiteSettings for Settings {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn site_title(&self) -> &str {
        &self.title
    }

    fn tagline(&self) -> &str {
        &self.tagline
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_bind_address("bind", &self.bind)?;
        crate::utils::validation::validate_non_empty_string("site_title", &self.title)?;
        Ok(())
    }
}
