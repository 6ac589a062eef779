//! Extension traits.
use std::fmt;

/// Helper trait to [`Display`][fmt::Display] bytes.
pub(crate) trait FmtExt {
    /// Lossy [`Display`][fmt::Display] bytes.
    fn lossy(&self) -> LossyFmt<'_>;
}

impl FmtExt for [u8] {
    fn lossy(&self) -> LossyFmt<'_> {
        LossyFmt(self)
    }
}

/// Lossy [`Display`][fmt::Display] implementation for bytes.
///
/// Non printable bytes are written as `\xNN`.
pub(crate) struct LossyFmt<'a>(pub &'a [u8]);

impl fmt::Display for LossyFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if b.is_ascii_graphic() || b.is_ascii_whitespace() {
                fmt::Display::fmt(&(b as char), f)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LossyFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{self}\"")
    }
}
