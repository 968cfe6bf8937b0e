//! Client configuration, read once from the environment

use std::env;

/// Credential that switches the client to the alternate provider
pub const ALTERNATE_KEY_VAR: &str = "RAPIDAPI_KEY";
/// Optional override for the alternate provider host header
pub const ALTERNATE_HOST_VAR: &str = "RAPIDAPI_HOST";
/// Optional TCGDex language segment
pub const LANGUAGE_VAR: &str = "TCGDEX_LANG";

pub const DEFAULT_ALTERNATE_HOST: &str = "pokemon-tcg-api.p.rapidapi.com";
pub const DEFAULT_LANGUAGE: &str = "fr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub language: String,
    pub alternate_api_key: Option<String>,
    pub alternate_host: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            alternate_api_key: None,
            alternate_host: DEFAULT_ALTERNATE_HOST.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Snapshot the relevant environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            language: non_empty_var(LANGUAGE_VAR).unwrap_or(defaults.language),
            alternate_api_key: non_empty_var(ALTERNATE_KEY_VAR),
            alternate_host: non_empty_var(ALTERNATE_HOST_VAR).unwrap_or(defaults.alternate_host),
        }
    }

    /// Alternate credential, if one is set and not blank
    pub fn alternate_key(&self) -> Option<&str> {
        self.alternate_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn primary_base_url(&self) -> String {
        format!("https://api.tcgdex.net/v2/{}", self.language)
    }

    pub fn alternate_base_url(&self) -> String {
        format!("https://{}/v2", self.alternate_host)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
