//! ISO date and time text formatters.
//!
//! Formatters append to a caller buffer so composite literals and array
//! elements build up without intermediate allocations.
use bytes::{BufMut, BytesMut};

use crate::decimal::put_decimal;

/// Append `yyyy-mm-dd[ BC]`, folding non positive years into the BC era.
pub fn append_date_iso(buf: &mut BytesMut, year: i32, month: u8, day: u8) {
    let bc = push_date(buf, year, month, day);
    if bc {
        buf.put_slice(b" BC");
    }
}

/// Append `hh:mm:ss`, with exactly nine fraction digits when
/// `nanosecond` is non zero.
pub fn append_time(buf: &mut BytesMut, hour: u8, minute: u8, second: u8, nanosecond: u32) {
    put_decimal(buf, 2, u32::from(hour));
    buf.put_u8(b':');
    put_decimal(buf, 2, u32::from(minute));
    buf.put_u8(b':');
    put_decimal(buf, 2, u32::from(second));
    if nanosecond != 0 {
        buf.put_u8(b'.');
        put_decimal(buf, 9, nanosecond);
    }
}

/// Append `<date> <time>[ BC]`.
#[allow(clippy::too_many_arguments)]
pub fn append_timestamp_iso(
    buf: &mut BytesMut,
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
) {
    let bc = push_date(buf, year, month, day);
    buf.put_u8(b' ');
    append_time(buf, hour, minute, second, nanosecond);
    if bc {
        buf.put_slice(b" BC");
    }
}

/// Date digits without the era suffix, reporting whether the year folded
/// into BC.
///
/// Years up to 9999 take the usual four digit window, wider years print
/// in full.
pub(crate) fn push_date(buf: &mut BytesMut, year: i32, month: u8, day: u8) -> bool {
    let (display, bc) = match i64::from(year) {
        y if y <= 0 => (1 - y, true),
        y => (y, false),
    };
    if display <= 9999 {
        put_decimal(buf, 4, display as u32);
    } else {
        buf.put_slice(itoa::Buffer::new().format(display).as_bytes());
    }
    buf.put_u8(b'-');
    put_decimal(buf, 2, u32::from(month));
    buf.put_u8(b'-');
    put_decimal(buf, 2, u32::from(day));
    bc
}

/// Append the minimal `±hh[:mm[:ss]]` zone suffix.
pub(crate) fn push_zone_offset(buf: &mut BytesMut, offset_seconds: i32) {
    let magnitude = match i64::from(offset_seconds) {
        s if s < 0 => {
            buf.put_u8(b'-');
            -s
        },
        s => {
            buf.put_u8(b'+');
            s
        },
    };
    let minutes = magnitude / 60 % 60;
    let seconds = magnitude % 60;
    put_decimal(buf, 2, (magnitude / 3600) as u32);
    if minutes != 0 || seconds != 0 {
        buf.put_u8(b':');
        put_decimal(buf, 2, minutes as u32);
    }
    if seconds != 0 {
        buf.put_u8(b':');
        put_decimal(buf, 2, seconds as u32);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(run: impl FnOnce(&mut BytesMut)) -> BytesMut {
        let mut buf = BytesMut::new();
        run(&mut buf);
        buf
    }

    #[test]
    fn date_era_and_width() {
        let buf = collect(|b| append_date_iso(b, 2001, 9, 28));
        assert_eq!(&buf[..], b"2001-09-28");

        let buf = collect(|b| append_date_iso(b, -3999, 5, 6));
        assert_eq!(&buf[..], b"4000-05-06 BC");

        let buf = collect(|b| append_date_iso(b, 0, 12, 31));
        assert_eq!(&buf[..], b"0001-12-31 BC");

        let buf = collect(|b| append_date_iso(b, 20010, 2, 3));
        assert_eq!(&buf[..], b"20010-02-03");

        let buf = collect(|b| append_date_iso(b, 4, 2, 3));
        assert_eq!(&buf[..], b"0004-02-03");
    }

    #[test]
    fn time_fraction_all_or_nothing() {
        let buf = collect(|b| append_time(b, 4, 5, 6, 0));
        assert_eq!(&buf[..], b"04:05:06");

        let buf = collect(|b| append_time(b, 4, 5, 6, 7_000_000));
        assert_eq!(&buf[..], b"04:05:06.007000000");

        let buf = collect(|b| append_time(b, 23, 59, 59, 999_999_999));
        assert_eq!(&buf[..], b"23:59:59.999999999");
    }

    #[test]
    fn timestamp_composes() {
        let buf = collect(|b| append_timestamp_iso(b, 2001, 2, 3, 4, 5, 6, 0));
        assert_eq!(&buf[..], b"2001-02-03 04:05:06");

        let buf = collect(|b| append_timestamp_iso(b, -3999, 2, 3, 4, 5, 6, 7));
        assert_eq!(&buf[..], b"4000-02-03 04:05:06.000000007 BC");
    }

    #[test]
    fn zone_offset_minimal_form() {
        let buf = collect(|b| push_zone_offset(b, 25_200));
        assert_eq!(&buf[..], b"+07");

        let buf = collect(|b| push_zone_offset(b, 27_000));
        assert_eq!(&buf[..], b"+07:30");

        let buf = collect(|b| push_zone_offset(b, 27_009));
        assert_eq!(&buf[..], b"+07:30:09");

        let buf = collect(|b| push_zone_offset(b, -29_350));
        assert_eq!(&buf[..], b"-08:09:10");

        let buf = collect(|b| push_zone_offset(b, 0));
        assert_eq!(&buf[..], b"+00");

        // Seconds force the minutes field even when zero.
        let buf = collect(|b| push_zone_offset(b, 3_609));
        assert_eq!(&buf[..], b"+01:00:09");
    }
}
