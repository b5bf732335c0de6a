pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::{compression, hashing, string};
