//! Columnar transposition ("rail fence") cipher for short text.
//!
//! The text is cut into chunks of `rows` characters, each chunk is dealt
//! onto the grid rows, and the rows are emitted back to back. An optional
//! key mask (one `A-Za-z` character per row) permutes the rows by the
//! alphabetic rank of its characters.
//!
//! This is a classical cipher: the key space is at most `rows!` and it
//! offers no real confidentiality.
//!
//! # Architecture
//!
//! ```text
//! RailFenceConfig  (rows + optional mask, validated once)
//!     ↓ mask
//! Order            (mask → row permutation by alphabetic rank)
//!     ↓ per call
//! Layout           (length, columns, long/short rows; structural check)
//!     ↓
//! RailFence        (encrypt: chunk → rows, decrypt: rows → columns)
//! ```
//!
//! # Examples
//!
//! Unkeyed, two rows:
//!
//! ```
//! use railfence::RailFence;
//!
//! let rf = RailFence::default();
//! let ciphertext = rf.encrypt("helloworld", false).unwrap();
//! assert_eq!(ciphertext, "hloolelwrd");
//! assert_eq!(rf.decrypt(&ciphertext).unwrap(), "helloworld");
//! ```
//!
//! Keyed with a mask, stripping whitespace first:
//!
//! ```
//! let ciphertext = railfence::encrypt("meet me at noon", 4, Some("bcaf"), true).unwrap();
//! assert_eq!(railfence::decrypt(&ciphertext, 4, Some("bcaf")).unwrap(), "meetmeatnoon");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod layout;
pub mod order;

mod rail_fence;
pub(crate) mod utils;

pub use config::RailFenceConfig;
pub use error::RailFenceError;
pub use order::Order;
pub use rail_fence::{decrypt, encrypt, RailFence, PAD};
