//! Per-call grid layout and structural validation.
//!
//! A text of `length` characters over `rows` rows fills
//! `columns = ceil(length / rows)` chunks. The final chunk may be short, so
//! the first `long_rows` chunk offsets carry `columns` characters and the
//! remaining `short_rows` offsets carry `columns - 1`.

use tracing::debug;

use crate::config::MIN_ROWS;
use crate::error::RailFenceError;

/// Smallest accepted number of grid columns.
pub const MIN_COLUMNS: usize = 2;

/// Working parameters derived for a single encrypt or decrypt call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Number of characters being transformed.
    pub length: usize,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of chunks, `ceil(length / rows)`.
    pub columns: usize,
}

impl Layout {
    /// Computes the layout for `length` characters and checks that the text
    /// spans at least two columns.
    ///
    /// # Errors
    /// - [`RailFenceError::InvalidRowCount`] if `rows < 2`.
    /// - [`RailFenceError::UnexpectedColumnCount`] if `columns < 2`.
    pub fn new(length: usize, rows: usize) -> Result<Self, RailFenceError> {
        if rows < MIN_ROWS {
            return Err(RailFenceError::InvalidRowCount { rows });
        }
        let columns = length.div_ceil(rows);
        if columns < MIN_COLUMNS {
            debug!(length, rows, columns, "rejecting text shorter than two columns");
            return Err(RailFenceError::UnexpectedColumnCount {
                columns,
                length,
                rows,
            });
        }

        let layout = Layout {
            length,
            rows,
            columns,
        };
        debug!(
            length,
            rows,
            columns,
            long_rows = layout.long_rows(),
            short_rows = layout.short_rows(),
            "computed grid layout"
        );
        Ok(layout)
    }

    /// Number of unused cells in the final column.
    pub fn short_rows(&self) -> usize {
        self.rows * self.columns - self.length
    }

    /// Number of chunk offsets that are filled in every column.
    pub fn long_rows(&self) -> usize {
        self.rows - self.short_rows()
    }

    /// Number of characters held by chunk offset `offset`.
    pub fn span(&self, offset: usize) -> usize {
        if offset < self.long_rows() {
            self.columns
        } else {
            self.columns - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_division() {
        let layout = Layout::new(10, 2).unwrap();
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.short_rows(), 0);
        assert_eq!(layout.long_rows(), 2);
        assert_eq!(layout.span(0), 5);
        assert_eq!(layout.span(1), 5);
    }

    #[test]
    fn test_uneven_division() {
        let layout = Layout::new(10, 4).unwrap();
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.short_rows(), 2);
        assert_eq!(layout.long_rows(), 2);
        let spans: Vec<usize> = (0..4).map(|o| layout.span(o)).collect();
        assert_eq!(spans, vec![3, 3, 2, 2]);
        assert_eq!(spans.iter().sum::<usize>(), layout.length);
    }

    #[test]
    fn test_single_column_rejected() {
        assert_eq!(
            Layout::new(2, 2),
            Err(RailFenceError::UnexpectedColumnCount {
                columns: 1,
                length: 2,
                rows: 2,
            })
        );
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            Layout::new(0, 3),
            Err(RailFenceError::UnexpectedColumnCount { columns: 0, .. })
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert_eq!(
            Layout::new(10, 0),
            Err(RailFenceError::InvalidRowCount { rows: 0 })
        );
    }

    #[test]
    fn test_one_past_row_count_accepted() {
        let layout = Layout::new(5, 4).unwrap();
        assert_eq!(layout.columns, 2);
        assert_eq!(layout.long_rows(), 1);
        assert_eq!(layout.short_rows(), 3);
    }
}
