pub mod compression;
pub mod error;
pub mod hashing;
pub mod string;

// Re-export the main entry points
pub use compression::{CodeTree, MinHeap};
pub use string::{longest_repeating_substring_length, RepeatFinder};
