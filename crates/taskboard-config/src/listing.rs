//! Listing configuration: page size defaults and the unbounded-scan guard.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_page_size() -> u32 {
    10
}

const fn max_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Page size used when a filter request does not specify one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Ceiling applied to requested page sizes. The query layer itself does
    /// not bound the window, so this guard is applied where requests are
    /// translated into filters.
    #[serde(default = "max_page_size")]
    pub max_page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: max_page_size(),
        }
    }
}

impl ListingConfig {
    /// Check the section for contradictory values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if either page size is zero or the
    /// default exceeds the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.page_size".into(),
                reason: "page sizes must be at least 1".into(),
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "listing.default_page_size".into(),
                reason: format!(
                    "default ({}) exceeds max_page_size ({})",
                    self.default_page_size, self.max_page_size
                ),
            });
        }
        Ok(())
    }
}
