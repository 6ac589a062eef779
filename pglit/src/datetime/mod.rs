//! Date and time values.
//!
//! Covers the postgres `date`, `time`, `timestamp` and `timestamptz`
//! text forms in the `ISO` DateStyle, the `infinity` literals, and the
//! binary integer `timestamptz`. The `SQL` and `Postgres` styles cannot
//! be decoded without the session's day/month order and the `German`
//! style has no decoder, all three are detected and rejected with an
//! error naming the input.
mod binary;
mod format;
mod parse;

pub use binary::{decode_timestamp_float, decode_timestamp_integer, encode_timestamp_integer};
pub use format::{append_date_iso, append_time, append_timestamp_iso};

use bytes::{BufMut, Bytes, BytesMut};
use time::{Month, OffsetDateTime, UtcOffset};

use crate::{Scan, ScanError, ToValue, Value, ValueError, ValueRef, common::verbose};
use format::{push_date, push_zone_offset};
use parse::{parse_date_iso, parse_time, parse_timestamp_iso, parse_timestamptz_iso, split_bc};

// ===== Types =====

/// A `time` value, a wall clock time of day.
///
/// Components hold what the server sent: the parser does not range
/// check, so `24:00:00` and stranger readings scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

/// A `date` value.
///
/// `infinity` is `-1` or `1` when the value is one of the `-infinity`
/// and `infinity` literals, leaving the remaining fields meaningless.
/// BC years are stored proleptically as `1 - y`, so `0001-01-01 BC`
/// has year `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Date {
    pub infinity: i8,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A `timestamp` value, a [`Date`] and a [`Clock`] with no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub date: Date,
    pub clock: Clock,
}

/// A `timestamptz` value, an instant at some fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampTz {
    /// `-1` or `1` for the infinity literals, `0` for a finite instant.
    pub infinity: i8,
    /// The instant, meaningless when `infinity` is set.
    pub timestamp: OffsetDateTime,
}

impl TimestampTz {
    /// A finite instant.
    pub fn new(timestamp: OffsetDateTime) -> Self {
        Self { infinity: 0, timestamp }
    }

    /// The `infinity` sentinel.
    pub fn infinity() -> Self {
        Self { infinity: 1, timestamp: OffsetDateTime::UNIX_EPOCH }
    }

    /// The `-infinity` sentinel.
    pub fn negative_infinity() -> Self {
        Self { infinity: -1, timestamp: OffsetDateTime::UNIX_EPOCH }
    }
}

impl Default for TimestampTz {
    fn default() -> Self {
        Self::new(OffsetDateTime::UNIX_EPOCH)
    }
}

// ===== Style detection =====

/// Text date styles, discriminated by the byte at offset 2.
///
/// `1234-…` is ISO, `12.34…` German, `12/34…` SQL, and anything else,
/// `Thu Feb 03…` or a short input, lands on Postgres.
#[derive(Debug, Clone, Copy)]
enum DateStyle {
    NegativeInfinity,
    Infinity,
    Iso,
    German,
    Sql,
    Postgres,
}

fn date_style(src: &[u8]) -> DateStyle {
    let style = match src.get(2) {
        Some(b'n') if src == b"-infinity" => DateStyle::NegativeInfinity,
        Some(b'f') if src == b"infinity" => DateStyle::Infinity,
        Some(b'0'..=b'9') => DateStyle::Iso,
        Some(b'.') => DateStyle::German,
        Some(b'/') => DateStyle::Sql,
        _ => DateStyle::Postgres,
    };
    verbose!("date style {style:?}");
    style
}

// ===== Clock =====

impl Scan for Clock {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        match src {
            ValueRef::Bytes(src) => self.scan_bytes(src),
            ValueRef::Text(src) => self.scan_bytes(src.as_bytes()),
            ValueRef::Instant(t) => {
                *self = Clock {
                    hour: t.hour(),
                    minute: t.minute(),
                    second: t.second(),
                    nanosecond: t.nanosecond(),
                };
                Ok(())
            },
            other => Err(ScanError::unsupported(other.kind(), "Clock")),
        }
    }
}

impl Clock {
    fn scan_bytes(&mut self, src: &[u8]) -> Result<(), ScanError> {
        *self = parse_time(src, src)?;
        Ok(())
    }
}

impl ToValue for Clock {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut buf = BytesMut::with_capacity(18);
        append_time(&mut buf, self.hour, self.minute, self.second, self.nanosecond);
        Ok(Value::Bytes(buf.freeze()))
    }
}

// ===== Date =====

impl Scan for Date {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        match src {
            ValueRef::Bytes(src) => self.scan_bytes(src),
            ValueRef::Text(src) => self.scan_bytes(src.as_bytes()),
            ValueRef::Instant(t) => {
                *self = Date {
                    infinity: 0,
                    year: t.year(),
                    month: u8::from(t.month()),
                    day: t.day(),
                };
                Ok(())
            },
            other => Err(ScanError::unsupported(other.kind(), "Date")),
        }
    }
}

impl Date {
    fn scan_bytes(&mut self, src: &[u8]) -> Result<(), ScanError> {
        match date_style(src) {
            DateStyle::NegativeInfinity => {
                *self = Date { infinity: -1, ..Date::default() };
                Ok(())
            },
            DateStyle::Infinity => {
                *self = Date { infinity: 1, ..Date::default() };
                Ok(())
            },
            DateStyle::Iso => {
                let (core, bc) = split_bc(src);
                let (date, rest) = parse_date_iso(core, bc, src)?;
                if !rest.is_empty() {
                    return Err(ScanError::format(src));
                }
                *self = date;
                Ok(())
            },
            DateStyle::German => Err(ScanError::unimplemented("german date style", src)),
            // Day and month order depends on the session DateStyle.
            DateStyle::Sql | DateStyle::Postgres => Err(ScanError::ambiguous(src)),
        }
    }
}

impl ToValue for Date {
    fn to_value(&self) -> Result<Value, ValueError> {
        if self.infinity < 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"-infinity")));
        }
        if self.infinity > 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"infinity")));
        }
        let mut buf = BytesMut::with_capacity(13);
        append_date_iso(&mut buf, self.year, self.month, self.day);
        Ok(Value::Bytes(buf.freeze()))
    }
}

// ===== Timestamp =====

impl Scan for Timestamp {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        match src {
            ValueRef::Bytes(src) => self.scan_bytes(src),
            ValueRef::Text(src) => self.scan_bytes(src.as_bytes()),
            ValueRef::Instant(t) => {
                *self = Timestamp {
                    date: Date {
                        infinity: 0,
                        year: t.year(),
                        month: u8::from(t.month()),
                        day: t.day(),
                    },
                    clock: Clock {
                        hour: t.hour(),
                        minute: t.minute(),
                        second: t.second(),
                        nanosecond: t.nanosecond(),
                    },
                };
                Ok(())
            },
            other => Err(ScanError::unsupported(other.kind(), "Timestamp")),
        }
    }
}

impl Timestamp {
    fn scan_bytes(&mut self, src: &[u8]) -> Result<(), ScanError> {
        match date_style(src) {
            DateStyle::NegativeInfinity => {
                *self = Timestamp { date: Date { infinity: -1, ..Date::default() }, ..Timestamp::default() };
                Ok(())
            },
            DateStyle::Infinity => {
                *self = Timestamp { date: Date { infinity: 1, ..Date::default() }, ..Timestamp::default() };
                Ok(())
            },
            DateStyle::Iso => {
                *self = parse_timestamp_iso(src, src)?;
                Ok(())
            },
            DateStyle::German => Err(ScanError::unimplemented("german date style", src)),
            DateStyle::Sql => Err(ScanError::ambiguous(src)),
            DateStyle::Postgres => Err(ScanError::unimplemented("postgres date style", src)),
        }
    }
}

impl ToValue for Timestamp {
    fn to_value(&self) -> Result<Value, ValueError> {
        if self.date.infinity < 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"-infinity")));
        }
        if self.date.infinity > 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"infinity")));
        }
        let mut buf = BytesMut::with_capacity(30);
        append_timestamp_iso(
            &mut buf,
            self.date.year,
            self.date.month,
            self.date.day,
            self.clock.hour,
            self.clock.minute,
            self.clock.second,
            self.clock.nanosecond,
        );
        Ok(Value::Bytes(buf.freeze()))
    }
}

// ===== TimestampTz =====

impl Scan for TimestampTz {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        match src {
            ValueRef::Bytes(src) => self.scan_bytes(src),
            ValueRef::Text(src) => self.scan_bytes(src.as_bytes()),
            ValueRef::Instant(t) => {
                *self = TimestampTz::new(t);
                Ok(())
            },
            other => Err(ScanError::unsupported(other.kind(), "TimestampTz")),
        }
    }
}

impl TimestampTz {
    fn scan_bytes(&mut self, src: &[u8]) -> Result<(), ScanError> {
        match date_style(src) {
            DateStyle::NegativeInfinity => {
                *self = TimestampTz::negative_infinity();
                Ok(())
            },
            DateStyle::Infinity => {
                *self = TimestampTz::infinity();
                Ok(())
            },
            DateStyle::Iso => {
                let (date, clock, offset) = parse_timestamptz_iso(src, src)?;
                *self = TimestampTz::new(assemble(date, clock, offset, src)?);
                Ok(())
            },
            DateStyle::German => Err(ScanError::unimplemented("german date style", src)),
            DateStyle::Sql => Err(ScanError::ambiguous(src)),
            DateStyle::Postgres => Err(ScanError::unimplemented("postgres date style", src)),
        }
    }
}

/// Build the instant out of parsed components, which also performs the
/// range checking the text parsers skip.
fn assemble(date: Date, clock: Clock, offset: i32, input: &[u8]) -> Result<OffsetDateTime, ScanError> {
    let month = Month::try_from(date.month).map_err(|_| ScanError::format(input))?;
    let calendar = time::Date::from_calendar_date(date.year, month, date.day)
        .map_err(|_| ScanError::format(input))?;
    let wall = time::Time::from_hms_nano(clock.hour, clock.minute, clock.second, clock.nanosecond)
        .map_err(|_| ScanError::format(input))?;
    let zone = UtcOffset::from_whole_seconds(offset).map_err(|_| ScanError::format(input))?;
    Ok(OffsetDateTime::new_in_offset(calendar, wall, zone))
}

impl ToValue for TimestampTz {
    fn to_value(&self) -> Result<Value, ValueError> {
        if self.infinity < 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"-infinity")));
        }
        if self.infinity > 0 {
            return Ok(Value::Bytes(Bytes::from_static(b"infinity")));
        }
        let t = self.timestamp;
        let mut buf = BytesMut::with_capacity(40);
        let bc = push_date(&mut buf, t.year(), u8::from(t.month()), t.day());
        buf.put_u8(b' ');
        append_time(&mut buf, t.hour(), t.minute(), t.second(), t.nanosecond());
        push_zone_offset(&mut buf, t.offset().whole_seconds());
        if bc {
            buf.put_slice(b" BC");
        }
        Ok(Value::Bytes(buf.freeze()))
    }
}
