//! ISO date and time text parsers.
//!
//! Parsers take the slice they consume plus the whole enclosing input,
//! so an error raised deep inside a timestamp still reports the full
//! literal. Component ranges are not checked here, the parsers read
//! exactly what the server sent.
use crate::{ScanError, decimal::read_decimal};

use super::{Clock, Date, Timestamp};

/// Split the `" BC"` era suffix off a date or timestamp literal.
pub(crate) fn split_bc(src: &[u8]) -> (&[u8], bool) {
    match src.strip_suffix(b" BC") {
        Some(head) => (head, true),
        None => (src, false),
    }
}

/// Parse `yyyy-mm-dd` at the head of `src`, `yyyy` being four or more
/// digits. `bc` folds the year into the proleptic form `1 - y`.
///
/// Returns the date and the unconsumed tail.
pub(crate) fn parse_date_iso<'a>(
    src: &'a [u8],
    bc: bool,
    input: &[u8],
) -> Result<(Date, &'a [u8]), ScanError> {
    if src.len() < 10 {
        return Err(ScanError::format(input));
    }
    let Some(sep) = src.iter().position(|b| *b == b'-') else {
        return Err(ScanError::format(input));
    };
    if src.len() < sep + 6 || src[sep + 3] != b'-' {
        return Err(ScanError::format(input));
    }
    let year = read_decimal(&src[..sep], input)?;
    let month = read_decimal(&src[sep + 1..sep + 3], input)? as u8;
    let day = read_decimal(&src[sep + 4..sep + 6], input)? as u8;
    let year = if bc { 1 - year } else { year };
    let date = Date { infinity: 0, year: year as i32, month, day };
    Ok((date, &src[sep + 6..]))
}

/// Parse `hh:mm:ss[.n…]`, the fraction carrying one to nine digits
/// scaled up to nanoseconds.
pub(crate) fn parse_time(src: &[u8], input: &[u8]) -> Result<Clock, ScanError> {
    if src.len() < 8 || src.len() > 18 || src[2] != b':' || src[5] != b':' {
        return Err(ScanError::format(input));
    }
    let hour = read_decimal(&src[..2], input)? as u8;
    let minute = read_decimal(&src[3..5], input)? as u8;
    let second = read_decimal(&src[6..8], input)? as u8;
    let mut nanosecond = 0;
    if src.len() > 8 {
        if src[8] != b'.' || src.len() == 9 {
            return Err(ScanError::format(input));
        }
        let fraction = &src[9..];
        nanosecond = read_decimal(fraction, input)? as u32;
        for _ in fraction.len()..9 {
            nanosecond *= 10;
        }
    }
    Ok(Clock { hour, minute, second, nanosecond })
}

/// Strip the `±hh[:mm[:ss]]` zone suffix off `src`, returning the head
/// and the offset in signed seconds.
///
/// The suffix is matched from the right: seconds only when a colon sits
/// at both `len - 6` and `len - 3`, minutes when one sits at `len - 3`,
/// and the sign always ends up at `len - 3` of what remains.
pub(crate) fn split_zone_offset<'a>(
    src: &'a [u8],
    input: &[u8],
) -> Result<(&'a [u8], i32), ScanError> {
    let mut rest = src;
    let mut offset = 0;
    let len = rest.len();
    if len > 6 && rest[len - 6] == b':' && rest[len - 3] == b':' {
        offset += read_decimal(&rest[len - 2..], input)?;
        rest = &rest[..len - 3];
    }
    let len = rest.len();
    if len > 3 && rest[len - 3] == b':' {
        offset += 60 * read_decimal(&rest[len - 2..], input)?;
        rest = &rest[..len - 3];
    }
    let len = rest.len();
    if len < 3 {
        return Err(ScanError::format(input));
    }
    offset += 3600 * read_decimal(&rest[len - 2..], input)?;
    match rest[len - 3] {
        b'+' => {},
        b'-' => offset = -offset,
        _ => return Err(ScanError::format(input)),
    }
    Ok((&rest[..len - 3], offset as i32))
}

/// Parse `<date> <time>[ BC]` in full.
pub(crate) fn parse_timestamp_iso(src: &[u8], input: &[u8]) -> Result<Timestamp, ScanError> {
    let (core, bc) = split_bc(src);
    let (date, rest) = parse_date_iso(core, bc, input)?;
    let Some(time) = rest.strip_prefix(b" ") else {
        return Err(ScanError::format(input));
    };
    let clock = parse_time(time, input)?;
    Ok(Timestamp { date, clock })
}

/// Parse `<date> <time>±hh[:mm[:ss]][ BC]` in full.
pub(crate) fn parse_timestamptz_iso(
    src: &[u8],
    input: &[u8],
) -> Result<(Date, Clock, i32), ScanError> {
    let (core, bc) = split_bc(src);
    let (core, offset) = split_zone_offset(core, input)?;
    let (date, rest) = parse_date_iso(core, bc, input)?;
    let Some(time) = rest.strip_prefix(b" ") else {
        return Err(ScanError::format(input));
    };
    let clock = parse_time(time, input)?;
    Ok((date, clock, offset))
}
