// Thu Aug 27 2026 - Alex

use crate::classify::default_publish_overrides;
use crate::component::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project_prefix: String,
    pub publish_overrides: Vec<String>,
    pub output_file: Option<PathBuf>,
    pub enable_progress_bars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_prefix: DEFAULT_PREFIX.to_string(),
            publish_overrides: default_publish_overrides().into_iter().collect(),
            output_file: None,
            enable_progress_bars: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.project_prefix = prefix;
        self
    }

    pub fn with_publish_overrides(mut self, overrides: Vec<String>) -> Self {
        self.publish_overrides.extend(overrides);
        self
    }

    pub fn with_output_file(mut self, output: Option<PathBuf>) -> Self {
        self.output_file = output;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.project_prefix.is_empty() {
            return Err("project_prefix must not be empty".to_string());
        }
        if self.project_prefix.contains('/') {
            return Err("project_prefix must not contain path separators".to_string());
        }
        for symbol in &self.publish_overrides {
            if !symbol.ends_with('*') {
                return Err(format!(
                    "publish override `{}` must be a symbol key ending in `*`",
                    symbol
                ));
            }
        }
        Ok(())
    }
}
