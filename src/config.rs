//! Runtime configuration for the agent bridge.
//!
//! Values come from the process environment (optionally seeded from `.env`)
//! and may be overridden by command-line flags. Nothing here fails when the
//! API key is absent; the provider reports that on first use.

use std::env;

use anyhow::Result;
use smartterm_llm::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiProvider};

pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
}

/// Load `.env` from the working directory. A missing file is not an error.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("Loaded environment variables from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!("Failed to load .env file: {}", e);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }
}

impl AgentConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key =
            non_empty(env_vars::GEMINI_API_KEY).or_else(|| non_empty(env_vars::GOOGLE_API_KEY));
        let model = non_empty(env_vars::GEMINI_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url =
            non_empty(env_vars::GEMINI_BASE_URL).unwrap_or_else(|| GEMINI_API_BASE.to_string());

        Self {
            api_key,
            model,
            base_url,
        }
    }

    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|model| !model.trim().is_empty()) {
            self.model = model;
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn build_provider(&self) -> GeminiProvider {
        GeminiProvider::from_config(
            self.api_key.clone(),
            Some(self.model.clone()),
            Some(self.base_url.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AgentConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AgentConfig::default());
        assert!(!config.has_api_key());
    }

    #[test]
    fn gemini_key_takes_precedence_over_google_key() {
        let config = AgentConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn falls_back_to_google_key_when_gemini_key_is_blank() {
        let config =
            AgentConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), ("GOOGLE_API_KEY", "g")]));
        assert_eq!(config.api_key.as_deref(), Some("g"));
    }

    #[test]
    fn model_and_base_url_overrides() {
        let config = AgentConfig::from_lookup(lookup(&[
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:8080"),
        ]))
        .with_model_override(Some("gemini-flash-latest".to_string()));
        assert_eq!(config.model, "gemini-flash-latest");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_cli_model_keeps_env_model() {
        let config = AgentConfig::from_lookup(lookup(&[("GEMINI_MODEL", "gemini-2.5-pro")]))
            .with_model_override(Some(String::new()));
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
