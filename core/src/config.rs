use std::fmt;

use serde::Deserialize;

use crate::counter::COUNTER_DURATION_MS;
use crate::page::DEFAULT_TOTAL_PAGES;

pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub total_pages: u32,
    pub counter_duration_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub verbose: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            total_pages: DEFAULT_TOTAL_PAGES,
            counter_duration_ms: COUNTER_DURATION_MS,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            verbose: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(raw)
            .map(Self::sanitized)
            .map_err(ConfigError::Parse)
    }

    pub fn sanitized(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            Self::default().reveal_threshold
        };
        if self.reveal_root_margin.trim().is_empty() {
            self.reveal_root_margin = Self::default().reveal_root_margin;
        }
        self
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid site config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
        }
    }
}
