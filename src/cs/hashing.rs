pub mod polynomial_rolling;

pub use polynomial_rolling::{DoubleRollingHash, PolyHashBuilder, PolynomialRollingHash};
