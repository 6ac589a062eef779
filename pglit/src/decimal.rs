//! Fixed width decimal helpers.
//!
//! Date and time fields are fixed width zero padded decimals, so both
//! directions work on a caller provided window instead of going through
//! a general integer formatter.
use bytes::BytesMut;

use crate::ScanError;

/// Fill `window` right to left with the decimal digits of `v`.
///
/// Digits beyond the window width are truncated, the caller owns the
/// width.
pub(crate) fn write_decimal(window: &mut [u8], mut v: u32) {
    for slot in window.iter_mut().rev() {
        *slot = b'0' + (v % 10) as u8;
        v /= 10;
    }
}

/// Append `width` bytes to `buf` holding the decimal digits of `v`.
pub(crate) fn put_decimal(buf: &mut BytesMut, width: usize, v: u32) {
    let start = buf.len();
    buf.resize(start + width, 0);
    write_decimal(&mut buf[start..], v);
}

/// Parse a run of decimal digits.
///
/// Stops at the first non digit byte, reporting the run and the
/// enclosing `input` it came from. Signs are the caller's business and
/// overflow wraps, real inputs stay far below that.
pub(crate) fn read_decimal(src: &[u8], input: &[u8]) -> Result<i64, ScanError> {
    let mut v: i64 = 0;
    for &b in src {
        if !b.is_ascii_digit() {
            return Err(ScanError::number(src, input));
        }
        v = v.wrapping_mul(10).wrapping_add(i64::from(b - b'0'));
    }
    Ok(v)
}
