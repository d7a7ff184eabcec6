//! RailFence: columnar transposition cipher engine.
//!
//! Encryption cuts the text into chunks of `rows` characters and deals the
//! characters of each chunk onto the grid rows (optionally routed through a
//! mask [`Order`]), then emits the rows back to back. Decryption recomputes
//! each row's span from the ciphertext length and reads the grid column by
//! column.
//!
//! All working state (layout, grid, inverse order) is local to a call, so a
//! single `RailFence` can be shared freely between threads.

use tracing::debug;

use crate::config::RailFenceConfig;
use crate::error::RailFenceError;
use crate::layout::Layout;
use crate::order::Order;
use crate::utils::text;

/// Fill character for grid cells left empty in the final column.
pub const PAD: char = ' ';

/// Columnar transposition cipher with an optional key mask.
///
/// # Examples
///
/// ```
/// use railfence::RailFence;
///
/// let rf = RailFence::new(2, None).unwrap();
/// let ciphertext = rf.encrypt("helloworld", false).unwrap();
/// assert_eq!(ciphertext, "hloolelwrd");
/// assert_eq!(rf.decrypt(&ciphertext).unwrap(), "helloworld");
/// ```
///
/// The [`Default`] cipher is unkeyed with two rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RailFence {
    config: RailFenceConfig,
    order: Option<Order>,
}

impl RailFence {
    /// Creates a cipher with `rows` rows and an optional key mask.
    ///
    /// # Errors
    /// Returns the configuration errors of [`RailFenceConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::RailFence;
    ///
    /// assert!(RailFence::new(4, Some("bcaf")).is_ok());
    /// assert!(RailFence::new(1, None).is_err());
    /// assert!(RailFence::new(4, Some("abc")).is_err());
    /// ```
    pub fn new(rows: usize, mask: Option<&str>) -> Result<Self, RailFenceError> {
        let mut config = RailFenceConfig::new(rows);
        if let Some(mask) = mask {
            config = config.with_mask(mask);
        }
        Self::from_config(config)
    }

    /// Creates a cipher from a configuration.
    ///
    /// # Errors
    /// Returns the configuration errors of [`RailFenceConfig::validate`].
    pub fn from_config(config: RailFenceConfig) -> Result<Self, RailFenceError> {
        let order = config.validate()?;
        debug!(rows = config.rows, keyed = order.is_some(), "built rail fence cipher");
        Ok(RailFence { config, order })
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Key mask, if any.
    pub fn mask(&self) -> Option<&str> {
        self.config.mask.as_deref()
    }

    /// Resolved mask order, `None` for an unkeyed cipher.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Configuration this cipher was built from.
    pub fn config(&self) -> &RailFenceConfig {
        &self.config
    }

    /// Encrypts `source`.
    ///
    /// With `strip_whitespace` set, every whitespace character is removed
    /// before encoding.
    ///
    /// # Errors
    /// Returns [`RailFenceError::UnexpectedColumnCount`] if the (stripped)
    /// text does not span at least two columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::RailFence;
    ///
    /// let rf = RailFence::new(4, Some("bcaf")).unwrap();
    /// assert_eq!(rf.encrypt("hello world", true).unwrap(), "loholewdlr");
    /// assert!(rf.encrypt("tiny", false).is_err());
    /// ```
    pub fn encrypt(&self, source: &str, strip_whitespace: bool) -> Result<String, RailFenceError> {
        let chars: Vec<char> = if strip_whitespace {
            text::strip_whitespace(source).chars().collect()
        } else {
            source.chars().collect()
        };
        let layout = Layout::new(chars.len(), self.rows())?;

        let mut grid = vec![String::with_capacity(layout.columns); layout.rows];
        for chunk in chars.chunks(layout.rows) {
            for (offset, &ch) in chunk.iter().enumerate() {
                grid[self.row_of(offset)].push(ch);
            }
        }

        Ok(grid.concat())
    }

    /// Decrypts `ciphertext`, returning exactly as many characters as it holds.
    ///
    /// # Errors
    /// Returns [`RailFenceError::UnexpectedColumnCount`] if the ciphertext
    /// does not span at least two columns.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, RailFenceError> {
        let (layout, plain) = self.read_columns(ciphertext)?;
        Ok(plain.into_iter().take(layout.length).collect())
    }

    /// Decrypts `ciphertext` keeping the full `rows * columns` grid read-out.
    ///
    /// Cells left empty in the final column are read as [`PAD`], so the
    /// result is the plaintext followed by one space per short row.
    ///
    /// # Errors
    /// Returns [`RailFenceError::UnexpectedColumnCount`] if the ciphertext
    /// does not span at least two columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::RailFence;
    ///
    /// let rf = RailFence::new(3, None).unwrap();
    /// assert_eq!(rf.decrypt_padded("hlodeorlwl").unwrap(), "helloworld  ");
    /// ```
    pub fn decrypt_padded(&self, ciphertext: &str) -> Result<String, RailFenceError> {
        let (_, plain) = self.read_columns(ciphertext)?;
        Ok(plain.into_iter().collect())
    }

    /// Rebuilds the grid from `ciphertext` and reads it column by column.
    fn read_columns(&self, ciphertext: &str) -> Result<(Layout, Vec<char>), RailFenceError> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let layout = Layout::new(chars.len(), self.rows())?;
        let inverse = self.order.as_ref().map(Order::inverse);

        // Rows are stored back to back in row order; each row's length
        // depends on the chunk offset that was routed to it.
        let empty: &[char] = &[];
        let mut grid = vec![empty; layout.rows];
        let mut start = 0;
        for row in 0..layout.rows {
            let offset = inverse.as_ref().map_or(row, |inv| inv[row]);
            let end = start + layout.span(offset);
            grid[offset] = &chars[start..end];
            start = end;
        }

        let mut plain = Vec::with_capacity(layout.rows * layout.columns);
        for column in 0..layout.columns {
            for line in &grid {
                plain.push(line.get(column).copied().unwrap_or(PAD));
            }
        }

        Ok((layout, plain))
    }

    /// Grid row that chunk offset `offset` is written to.
    fn row_of(&self, offset: usize) -> usize {
        self.order.as_ref().map_or(offset, |order| order.target(offset))
    }
}

/// Encrypts `source` with a one-off cipher.
///
/// # Errors
/// Returns any configuration or structural [`RailFenceError`].
///
/// # Examples
///
/// ```
/// let ciphertext = railfence::encrypt("helloworld", 2, None, false).unwrap();
/// assert_eq!(ciphertext, "hloolelwrd");
/// ```
pub fn encrypt(
    source: &str,
    rows: usize,
    mask: Option<&str>,
    strip_whitespace: bool,
) -> Result<String, RailFenceError> {
    RailFence::new(rows, mask)?.encrypt(source, strip_whitespace)
}

/// Decrypts `ciphertext` with a one-off cipher.
///
/// # Errors
/// Returns any configuration or structural [`RailFenceError`].
///
/// # Examples
///
/// ```
/// let plaintext = railfence::decrypt("hloolelwrd", 2, None).unwrap();
/// assert_eq!(plaintext, "helloworld");
/// ```
pub fn decrypt(ciphertext: &str, rows: usize, mask: Option<&str>) -> Result<String, RailFenceError> {
    RailFence::new(rows, mask)?.decrypt(ciphertext)
}
