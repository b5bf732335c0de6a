//! Error types shared by the coding and string algorithms.

use thiserror::Error;

/// Errors reported when an input violates a precondition of an algorithm.
#[derive(Debug, Error)]
pub enum Error {
    /// Generic malformed input, e.g. an unparsable token.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The number of symbols and the number of weights differ.
    #[error("got {symbols} symbols but {weights} weights")]
    LengthMismatch { symbols: usize, weights: usize },

    /// A symbol was given a negative weight.
    #[error("negative weight {weight} for symbol '{symbol}'")]
    NegativeWeight { symbol: char, weight: i64 },

    /// The same symbol appeared twice in the alphabet.
    #[error("duplicate symbol '{0}'")]
    DuplicateSymbol(char),

    /// The total weight does not fit in a `u64`.
    #[error("total weight overflows u64")]
    WeightOverflow,

    /// A bitstream character other than '0' or '1'.
    #[error("malformed bit {found:?} at position {position}")]
    MalformedBit { position: usize, found: char },

    /// A bit that has no edge in the code tree.
    #[error("bit at position {position} does not follow any codeword")]
    InvalidCode { position: usize },

    /// The bitstream stopped in the middle of a codeword.
    #[error("bitstream ends inside a codeword ({trailing} trailing bits)")]
    IncompleteCode { trailing: usize },

    /// Encoding a symbol that has no codeword.
    #[error("symbol '{0}' has no codeword")]
    UnknownSymbol(char),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_precondition() {
        let err = Error::LengthMismatch {
            symbols: 3,
            weights: 2,
        };
        assert_eq!(err.to_string(), "got 3 symbols but 2 weights");

        let err = Error::MalformedBit {
            position: 4,
            found: 'x',
        };
        assert_eq!(err.to_string(), "malformed bit 'x' at position 4");

        let err = Error::NegativeWeight {
            symbol: 'A',
            weight: -1,
        };
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
