//! The array literal tokenizer.
//!
//! Splits a `{…}` literal into flattened element tokens plus the size
//! of each nesting depth, leaving element decoding to the caller.
use crate::ScanError;
use crate::common::span;

/// One tokenized element, `None` for the unquoted `NULL` literal.
pub(crate) type ArrayToken = Option<Vec<u8>>;

/// Tokenize an array literal.
///
/// `dims` records the element count first seen at each depth, so a
/// flat `{a,b}` yields `[2]` and `{{a},{b}}` yields `[2,1]`. Quoted
/// tokens are unescaped. Every structural violation reports the whole
/// input as an unexpected format.
pub(crate) fn parse_array(
    src: &[u8],
    delimiter: u8,
) -> Result<(Vec<usize>, Vec<ArrayToken>), ScanError> {
    span!("parse_array");
    let mut dims = Vec::new();
    let mut tokens = Vec::new();
    let mut pos = 0;
    parse_level(src, delimiter, &mut pos, 0, &mut dims, &mut tokens)?;
    if pos != src.len() {
        return Err(ScanError::format(src));
    }
    Ok((dims, tokens))
}

fn parse_level(
    src: &[u8],
    delimiter: u8,
    pos: &mut usize,
    depth: usize,
    dims: &mut Vec<usize>,
    tokens: &mut Vec<ArrayToken>,
) -> Result<(), ScanError> {
    if src.get(*pos) != Some(&b'{') {
        return Err(ScanError::format(src));
    }
    *pos += 1;
    if dims.len() <= depth {
        dims.push(0);
    }
    let mut count = 0;
    if src.get(*pos) == Some(&b'}') {
        *pos += 1;
    } else {
        loop {
            match src.get(*pos) {
                Some(b'{') => parse_level(src, delimiter, pos, depth + 1, dims, tokens)?,
                Some(b'"') => tokens.push(Some(quoted(src, pos)?)),
                Some(_) => tokens.push(unquoted(src, pos, delimiter)?),
                None => return Err(ScanError::format(src)),
            }
            count += 1;
            match src.get(*pos) {
                Some(&b) if b == delimiter => *pos += 1,
                Some(b'}') => {
                    *pos += 1;
                    break;
                },
                _ => return Err(ScanError::format(src)),
            }
        }
    }
    if dims[depth] == 0 {
        dims[depth] = count;
    }
    Ok(())
}

/// A bare token, ending at the delimiter or the closing brace.
fn unquoted(src: &[u8], pos: &mut usize, delimiter: u8) -> Result<ArrayToken, ScanError> {
    let start = *pos;
    while let Some(&b) = src.get(*pos) {
        if b == delimiter || b == b'}' {
            break;
        }
        if matches!(b, b'{' | b'"' | b'\\') {
            return Err(ScanError::format(src));
        }
        *pos += 1;
    }
    let token = &src[start..*pos];
    if token.is_empty() {
        return Err(ScanError::format(src));
    }
    if token == b"NULL" {
        return Ok(None);
    }
    Ok(Some(token.to_vec()))
}

/// A `"`-delimited token, `\` escaping the byte after it.
fn quoted(src: &[u8], pos: &mut usize) -> Result<Vec<u8>, ScanError> {
    *pos += 1;
    let mut token = Vec::new();
    loop {
        match src.get(*pos) {
            Some(b'\\') => {
                let Some(&escaped) = src.get(*pos + 1) else {
                    return Err(ScanError::format(src));
                };
                token.push(escaped);
                *pos += 2;
            },
            Some(b'"') => {
                *pos += 1;
                return Ok(token);
            },
            Some(&b) => {
                token.push(b);
                *pos += 1;
            },
            None => return Err(ScanError::format(src)),
        }
    }
}
