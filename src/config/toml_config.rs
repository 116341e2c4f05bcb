use crate::core::SiteSettings;
use crate::utils::error::{ListingError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TITLE: &str = "Location Scout";
pub const DEFAULT_TAGLINE: &str = "Find the perfect location for your next shoot";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_tagline() -> String {
    DEFAULT_TAGLINE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ListingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ListingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ListingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl SiteSettings for SiteConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind
    }

    fn site_title(&self) -> &str {
        &self.site.title
    }

    fn tagline(&self) -> &str {
        &self.site.tagline
    }
}
