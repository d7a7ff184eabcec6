//! Cipher configuration: row count and optional key mask.

use serde::{Deserialize, Serialize};

use crate::error::RailFenceError;
use crate::order::Order;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 2;

/// Smallest accepted number of grid rows.
pub const MIN_ROWS: usize = 2;

/// Immutable configuration of a [`RailFence`](crate::RailFence).
///
/// Missing fields take their defaults when deserialized, so `{}` is the
/// unkeyed two-row cipher.
///
/// # Examples
///
/// ```
/// use railfence::RailFenceConfig;
///
/// let config = RailFenceConfig::new(4).with_mask("bcaf");
/// assert!(config.validate().is_ok());
///
/// assert!(RailFenceConfig::new(1).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailFenceConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Key mask, one `A-Za-z` character per row.
    pub mask: Option<String>,
}

impl Default for RailFenceConfig {
    fn default() -> Self {
        RailFenceConfig {
            rows: DEFAULT_ROWS,
            mask: None,
        }
    }
}

impl RailFenceConfig {
    /// Unkeyed configuration with `rows` rows.
    pub fn new(rows: usize) -> Self {
        RailFenceConfig { rows, mask: None }
    }

    /// Sets the key mask.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Checks the configuration and resolves the mask order.
    ///
    /// # Returns
    /// The resolved [`Order`], or `None` for an unkeyed configuration.
    ///
    /// # Errors
    /// - [`RailFenceError::InvalidRowCount`] if `rows < 2`.
    /// - [`RailFenceError::MaskLengthMismatch`] if the mask length differs
    ///   from `rows`.
    /// - [`RailFenceError::InvalidMaskChar`] or
    ///   [`RailFenceError::DuplicateMaskRank`] for an unusable mask.
    pub fn validate(&self) -> Result<Option<Order>, RailFenceError> {
        if self.rows < MIN_ROWS {
            return Err(RailFenceError::InvalidRowCount { rows: self.rows });
        }

        let Some(mask) = self.mask.as_deref() else {
            return Ok(None);
        };

        let actual = mask.chars().count();
        if actual != self.rows {
            return Err(RailFenceError::MaskLengthMismatch {
                expected: self.rows,
                actual,
            });
        }

        Order::from_mask(mask).map(Some)
    }
}
