//! Order Resolver: turns a key mask into a row permutation.
//!
//! Each mask character is ranked in a fixed 52-symbol alphabet, upper-case
//! block first (`A` = 0 .. `Z` = 25, `a` = 26 .. `z` = 51). Row `i` of the
//! grid is then routed to the position of its rank within the sorted ranks,
//! which is the classic columnar-transposition keying scheme.

use crate::error::RailFenceError;

/// Ranking alphabet for mask characters.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 52;

/// Returns the rank of `ch` in [`ALPHABET`], or `None` if `ch` is not in `A-Za-z`.
///
/// # Examples
///
/// ```
/// use railfence::order::rank;
///
/// assert_eq!(rank('A'), Some(0));
/// assert_eq!(rank('a'), Some(26));
/// assert_eq!(rank('z'), Some(51));
/// assert_eq!(rank('0'), None);
/// ```
pub fn rank(ch: char) -> Option<usize> {
    match ch {
        'A'..='Z' => Some(ch as usize - 'A' as usize),
        'a'..='z' => Some(ch as usize - 'a' as usize + 26),
        _ => None,
    }
}

/// Resolved row permutation derived from a mask.
///
/// `order.target(i)` is the grid row that chunk offset `i` is written to
/// during encryption and read back from during decryption. An `Order` built
/// through [`Order::from_mask`] is always a bijection on `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    targets: Vec<usize>,
}

impl Order {
    /// Resolves the permutation for `mask`.
    ///
    /// # Errors
    /// - [`RailFenceError::InvalidMaskChar`] if a character is outside `A-Za-z`.
    /// - [`RailFenceError::DuplicateMaskRank`] if a character appears twice,
    ///   since repeated ranks cannot produce a permutation.
    pub fn from_mask(mask: &str) -> Result<Self, RailFenceError> {
        let mut first_seen = [None::<usize>; ALPHABET_LEN];
        let mut ranks = Vec::with_capacity(mask.len());

        for (position, ch) in mask.chars().enumerate() {
            let r = rank(ch).ok_or(RailFenceError::InvalidMaskChar { ch, position })?;
            if let Some(first) = first_seen[r] {
                return Err(RailFenceError::DuplicateMaskRank {
                    ch,
                    first,
                    second: position,
                });
            }
            first_seen[r] = Some(position);
            ranks.push(r);
        }

        Ok(Order {
            targets: Self::resolve(&ranks),
        })
    }

    /// Maps each rank to the index of its first match in the sorted ranks.
    fn resolve(ranks: &[usize]) -> Vec<usize> {
        let mut sorted = ranks.to_vec();
        sorted.sort_unstable();
        ranks
            .iter()
            .map(|&r| sorted.partition_point(|&s| s < r))
            .collect()
    }

    /// Number of rows covered by this order.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the order covers no rows.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Row that chunk offset `offset` is routed to.
    ///
    /// # Panics
    /// Panics if `offset >= self.len()`.
    pub fn target(&self, offset: usize) -> usize {
        self.targets[offset]
    }

    /// Full inverse permutation: `inverse()[row]` is the offset routed to `row`.
    pub fn inverse(&self) -> Vec<usize> {
        let mut inverse = vec![0; self.targets.len()];
        for (offset, &row) in self.targets.iter().enumerate() {
            inverse[row] = offset;
        }
        inverse
    }

    /// Resolved targets, indexed by chunk offset.
    pub fn as_slice(&self) -> &[usize] {
        &self.targets
    }
}
