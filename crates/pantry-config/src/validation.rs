//! Validation engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default lower bound on phone digits.
const fn default_phone_min() -> usize {
    7
}

/// Default upper bound on phone digits (ITU E.164).
const fn default_phone_max() -> usize {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Report input keys that match no schema field instead of dropping them.
    #[serde(default)]
    pub deny_unknown_fields: bool,

    /// Fewest digits a normalized phone number may have.
    #[serde(default = "default_phone_min")]
    pub phone_min_digits: usize,

    /// Most digits a normalized phone number may have.
    #[serde(default = "default_phone_max")]
    pub phone_max_digits: usize,
}

impl ValidationConfig {
    /// Reject bound pairs that would make every phone number invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `phone_min_digits` exceeds
    /// `phone_max_digits` or either bound is zero.
    pub fn ensure_sane(&self) -> Result<(), ConfigError> {
        if self.phone_min_digits == 0 || self.phone_max_digits == 0 {
            return Err(ConfigError::InvalidValue {
                field: "validation.phone_min_digits".to_string(),
                reason: "digit bounds must be at least 1".to_string(),
            });
        }
        if self.phone_min_digits > self.phone_max_digits {
            return Err(ConfigError::InvalidValue {
                field: "validation.phone_min_digits".to_string(),
                reason: format!(
                    "lower bound {} exceeds upper bound {}",
                    self.phone_min_digits, self.phone_max_digits
                ),
            });
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            deny_unknown_fields: false,
            phone_min_digits: default_phone_min(),
            phone_max_digits: default_phone_max(),
        }
    }
}
