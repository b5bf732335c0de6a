//! Prefix-code compression.
//!
//! This module provides:
//! - A binary min-heap used to merge weighted entries in a fixed, reproducible order
//! - Huffman code construction over a `char` alphabet, with encode and decode
//!
//! # Examples
//!
//! ```rust
//! use prefix_codes::compression::CodeTree;
//!
//! let tree = CodeTree::from_letters("ABCDE", &[20, 20, 30, 10, 20]).unwrap();
//! let bits = tree.encode("AECBC").unwrap();
//! assert_eq!(bits, "11101100010");
//! assert_eq!(tree.decode(&bits).unwrap(), "AECBC");
//! ```

use crate::cs::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod huffman;
pub mod min_heap;

pub use huffman::{
    build_frequency_table, huffman_decode, huffman_encode, Bits, CodeTree, Entry,
};
pub use min_heap::MinHeap;
