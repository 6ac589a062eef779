//! The `bytea` text forms.
//!
//! Bytea values travel in one of two spellings: the `\x` prefixed hex
//! form which servers emit by default since `bytea_output` turned to
//! `hex`, and the older escape form where a backslash is `\\`, a non
//! printable byte is a three digit octal `\ooo`, and every other byte
//! stands for itself.
use memchr::memchr;

use crate::ScanError;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Decode either `bytea` text form, routed by the `\x` prefix.
pub fn decode(src: &[u8]) -> Result<Vec<u8>, ScanError> {
    if src.starts_with(b"\\x") {
        decode_hex(src)
    } else {
        decode_escape(src)
    }
}

/// Decode the `\x` prefixed hex form, accepting either digit case.
pub fn decode_hex(src: &[u8]) -> Result<Vec<u8>, ScanError> {
    let Some(digits) = src.strip_prefix(b"\\x") else {
        return Err(ScanError::format(src));
    };
    if digits.len() % 2 != 0 {
        return Err(ScanError::format(src));
    }
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        match (unhex(pair[0]), unhex(pair[1])) {
            (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
            _ => return Err(ScanError::format(src)),
        }
    }
    Ok(out)
}

/// Decode the escape form.
pub fn decode_escape(src: &[u8]) -> Result<Vec<u8>, ScanError> {
    let mut out = Vec::with_capacity(src.len());
    let mut rest = src;
    loop {
        // Verbatim run up to the next backslash.
        let Some(at) = memchr(b'\\', rest) else {
            out.extend_from_slice(rest);
            return Ok(out);
        };
        out.extend_from_slice(&rest[..at]);
        rest = &rest[at + 1..];
        match rest {
            [b'\\', tail @ ..] => {
                out.push(b'\\');
                rest = tail;
            },
            [hi @ b'0'..=b'3', mid @ b'0'..=b'7', lo @ b'0'..=b'7', tail @ ..] => {
                out.push((hi - b'0') << 6 | (mid - b'0') << 3 | (lo - b'0'));
                rest = tail;
            },
            _ => return Err(ScanError::format(src)),
        }
    }
}

/// Encode into the `\x` prefixed lowercase hex form.
pub fn encode_hex(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + src.len() * 2);
    out.extend_from_slice(b"\\x");
    for &b in src {
        out.push(HEX[usize::from(b >> 4)]);
        out.push(HEX[usize::from(b & 0xf)]);
    }
    out
}

/// Encode into the escape form.
pub fn encode_escape(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for &b in src {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x20..=0x7e => out.push(b),
            _ => out.extend_from_slice(&[b'\\', b'0' + (b >> 6), b'0' + (b >> 3 & 7), b'0' + (b & 7)]),
        }
    }
    out
}

fn unhex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
