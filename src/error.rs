use std::fmt;

/// Reasons a suffix array or BWT call is rejected.
///
/// Every check runs before output is written, so a rejected call leaves its output untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two symbols in the alphabet of a text of length two or more.
    AlphabetTooSmall,
    /// A symbol is not below the alphabet size.
    SymbolOutOfRange { position: usize, symbol: usize },
    /// An output or companion buffer does not match the text length.
    LengthMismatch { expected: usize, actual: usize },
    /// The text is too long for the chosen index width.
    TooLong { len: usize, max: usize },
    /// The BWT of an empty text is undefined.
    Empty,
    /// A rotation pointer outside `1..=len`.
    PointerOutOfRange { pointer: usize, len: usize },
    /// The array handed to the BWT has an entry outside `0..len`, or not exactly one entry for
    /// position 0.
    NotASuffixArray,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::AlphabetTooSmall => write!(f, "alphabet must have at least two symbols"),
            Error::SymbolOutOfRange { position, symbol } => {
                write!(f, "symbol {} at position {} is outside the alphabet", symbol, position)
            }
            Error::LengthMismatch { expected, actual } => {
                write!(f, "buffer has length {}, expected {}", actual, expected)
            }
            Error::TooLong { len, max } => {
                write!(f, "text of length {} exceeds the index limit {}", len, max)
            }
            Error::Empty => write!(f, "text is empty"),
            Error::PointerOutOfRange { pointer, len } => {
                write!(f, "rotation pointer {} is outside 1..={}", pointer, len)
            }
            Error::NotASuffixArray => write!(f, "input is not a suffix array"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_values() {
        let e = Error::SymbolOutOfRange {
            position: 3,
            symbol: 300,
        };
        assert_eq!(e.to_string(), "symbol 300 at position 3 is outside the alphabet");

        let e = Error::PointerOutOfRange { pointer: 0, len: 6 };
        assert_eq!(e.to_string(), "rotation pointer 0 is outside 1..=6");
    }
}
