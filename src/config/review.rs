//! Review workflow tuning

use serde::Deserialize;

use super::error::ValidationError;

/// Limits applied by the verification handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    /// Page size used when a listing is consumed as a stream
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Most file URLs accepted by a single upload call
    #[serde(default = "default_max_files_per_upload")]
    pub max_files_per_upload: usize,
}

impl ReviewConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=100).contains(&self.page_size) {
            return Err(ValidationError::InvalidPageSize);
        }
        if !(1..=50).contains(&self.max_files_per_upload) {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_files_per_upload: default_max_files_per_upload(),
        }
    }
}

fn default_page_size() -> u32 {
    50
}

fn default_max_files_per_upload() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ReviewConfig::default();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_files_per_upload, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_are_rejected() {
        let no_page = ReviewConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(no_page.validate(), Err(ValidationError::InvalidPageSize));

        let no_files = ReviewConfig {
            max_files_per_upload: 0,
            ..Default::default()
        };
        assert_eq!(no_files.validate(), Err(ValidationError::InvalidUploadLimit));
    }
}
