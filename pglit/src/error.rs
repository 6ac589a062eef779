//! Codec errors.
use std::borrow::Cow;

use crate::ext::FmtExt;

/// An error when scanning a postgres value into a typed target.
///
/// Variants carrying bytes keep the whole rejected input, so an error
/// surfaced far from the read site still names the offending value.
pub enum ScanError {
    /// Source value kind does not match the scan target.
    Unsupported {
        /// Name of the source value kind.
        from: &'static str,
        /// Name of the scan target type.
        to: &'static str,
    },
    /// Input does not satisfy the expected grammar.
    Format { input: Box<[u8]> },
    /// A digit run contains a non digit byte.
    Number {
        /// The rejected digit run.
        found: Box<[u8]>,
        /// The enclosing input.
        input: Box<[u8]>,
    },
    /// Recognized date style which cannot be decoded without session state.
    Ambiguous { input: Box<[u8]> },
    /// Recognized form with no decoder.
    Unimplemented {
        what: &'static str,
        input: Box<[u8]>,
    },
    /// Binary value with the wrong byte length.
    Length { expected: usize, found: usize },
}

impl ScanError {
    pub(crate) fn unsupported(from: &'static str, to: &'static str) -> Self {
        Self::Unsupported { from, to }
    }

    pub(crate) fn format(input: &[u8]) -> Self {
        Self::Format { input: input.into() }
    }

    pub(crate) fn number(found: &[u8], input: &[u8]) -> Self {
        Self::Number { found: found.into(), input: input.into() }
    }

    pub(crate) fn ambiguous(input: &[u8]) -> Self {
        Self::Ambiguous { input: input.into() }
    }

    pub(crate) fn unimplemented(what: &'static str, input: &[u8]) -> Self {
        Self::Unimplemented { what, input: input.into() }
    }

    pub(crate) fn length(expected: usize, found: usize) -> Self {
        Self::Length { expected, found }
    }
}

impl std::error::Error for ScanError {}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { from, to } => write!(f, "cannot convert {from} to {to}"),
            Self::Format { input } => write!(f, "unexpected format of \"{}\"", input.lossy()),
            Self::Number { found, input } => {
                write!(f, "expected number at \"{}\" of \"{}\"", found.lossy(), input.lossy())
            },
            Self::Ambiguous { input } => write!(f, "ambiguous format of \"{}\"", input.lossy()),
            Self::Unimplemented { what, input } => {
                write!(f, "{what} not implemented: \"{}\"", input.lossy())
            },
            Self::Length { expected, found } => {
                write!(f, "unexpected binary length {found}, expected {expected}")
            },
        }
    }
}

impl std::fmt::Debug for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// An error when producing the postgres text form of a value.
pub struct ValueError {
    message: Cow<'static, str>,
}

impl ValueError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }

    /// Attach the index of the array element which failed.
    pub(crate) fn element(index: usize, error: ValueError) -> Self {
        Self::new(format!("array element {index}: {error}"))
    }
}

impl std::error::Error for ValueError {}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::fmt::Debug for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scan_error_display() {
        let err = ScanError::format(b"2001|02|03");
        assert_eq!(err.to_string(), "unexpected format of \"2001|02|03\"");

        let err = ScanError::number(b"4x", b"2001-02-03 04:05:4x");
        assert_eq!(err.to_string(), "expected number at \"4x\" of \"2001-02-03 04:05:4x\"");

        let err = ScanError::unsupported("bool", "Date");
        assert_eq!(err.to_string(), "cannot convert bool to Date");

        let err = ScanError::length(8, 4);
        assert_eq!(err.to_string(), "unexpected binary length 4, expected 8");
    }

    #[test]
    fn value_error_element_context() {
        let err = ValueError::element(2, ValueError::new("boom"));
        assert_eq!(err.to_string(), "array element 2: boom");
    }
}
