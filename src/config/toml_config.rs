use crate::core::ConfigProvider;
use crate::utils::error::{FrenzyError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub transform: Option<TransformConfig>,
    pub load: LoadConfig,
    pub query: Option<QueryConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// HTTP(S) URL or local path of the restaurant feed.
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    pub skip_invalid_hours: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Local date-times to report open restaurants for after loading.
    pub open_at: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FrenzyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FrenzyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_source("source.endpoint", &self.source.endpoint)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        self.open_at_instants()?;

        let valid_formats = ["compact", "json"];
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_ref()) {
            if !valid_formats.contains(&format.as_str()) {
                return Err(FrenzyError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn open_at_instants(&self) -> Result<Vec<NaiveDateTime>> {
        self.query
            .iter()
            .flat_map(|q| q.open_at.iter().flatten())
            .map(|value| validation::validate_open_at("query.open_at", value))
            .collect()
    }

    pub fn skip_invalid_hours(&self) -> bool {
        self.transform
            .as_ref()
            .and_then(|t| t.skip_invalid_hours)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format == "json")
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn skip_invalid_hours(&self) -> bool {
        TomlConfig::skip_invalid_hours(self)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
