//! Array literal emission helpers.
use bytes::{BufMut, BytesMut};

use crate::bytea;

/// Append a quoted element, escaping `"` and `\`.
pub(crate) fn push_quoted(buf: &mut BytesMut, raw: &[u8]) {
    buf.put_u8(b'"');
    for &b in raw {
        if matches!(b, b'"' | b'\\') {
            buf.put_u8(b'\\');
        }
        buf.put_u8(b);
    }
    buf.put_u8(b'"');
}

/// Append a quoted bytea element in the hex form.
///
/// Hex is the one bytea spelling whose escapes survive the array
/// quoting layer unharmed, only the `\x` prefix needs one `\`.
pub(crate) fn push_quoted_bytea(buf: &mut BytesMut, raw: &[u8]) {
    push_quoted(buf, &bytea::encode_hex(raw));
}

/// Append the [`Display`][std::fmt::Display] form of a value.
pub(crate) fn push_display(buf: &mut BytesMut, value: impl std::fmt::Display) {
    buf.put_slice(value.to_string().as_bytes());
}
