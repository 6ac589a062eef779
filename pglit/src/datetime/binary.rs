//! Binary `timestamptz` wire forms.
//!
//! Integer timestamps are the only supported binary form. Float
//! timestamps predate server 8.4 and report as not implemented, as does
//! the encode direction, which keeps parameters in text form.
use bytes::Bytes;
use time::OffsetDateTime;

use crate::{ScanError, ValueError, common::verbose};

use super::TimestampTz;

/// Microseconds from the Unix epoch to 2000-01-01T00:00:00Z, the
/// postgres timestamp epoch.
const PG_EPOCH_MICROS: i64 = 946_684_800 * 1_000_000;

/// Decode the 8 byte big endian integer `timestamptz`, a microsecond
/// count since 2000-01-01T00:00:00Z.
///
/// `i64::MIN` and `i64::MAX` are the `-infinity` and `infinity`
/// sentinels.
pub fn decode_timestamp_integer(src: &[u8]) -> Result<TimestampTz, ScanError> {
    let Ok(raw) = <[u8; 8]>::try_from(src) else {
        return Err(ScanError::length(8, src.len()));
    };
    match i64::from_be_bytes(raw) {
        i64::MIN => {
            verbose!("binary timestamp sentinel -infinity");
            Ok(TimestampTz::negative_infinity())
        },
        i64::MAX => {
            verbose!("binary timestamp sentinel infinity");
            Ok(TimestampTz::infinity())
        },
        micros => {
            let unix_nanos = (i128::from(micros) + i128::from(PG_EPOCH_MICROS)) * 1_000;
            let timestamp = OffsetDateTime::from_unix_timestamp_nanos(unix_nanos)
                .map_err(|_| ScanError::format(src))?;
            Ok(TimestampTz::new(timestamp))
        },
    }
}

/// Decode the 8 byte float `timestamptz`.
pub fn decode_timestamp_float(src: &[u8]) -> Result<TimestampTz, ScanError> {
    Err(ScanError::unimplemented("float binary timestamp", src))
}

/// Encode a [`TimestampTz`] into the binary integer form.
pub fn encode_timestamp_integer(_value: &TimestampTz) -> Result<Bytes, ValueError> {
    Err(ValueError::new("binary timestamp encode not implemented"))
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn integer_epoch() {
        let ts = decode_timestamp_integer(&[0; 8]).unwrap();
        assert_eq!(ts.infinity, 0);
        assert_eq!(ts.timestamp, datetime!(2000-01-01 00:00:00 UTC));
    }

    #[test]
    fn integer_micros_offset() {
        // One hour and one microsecond past the postgres epoch.
        let micros: i64 = 3_600_000_001;
        let ts = decode_timestamp_integer(&micros.to_be_bytes()).unwrap();
        assert_eq!(ts.timestamp, datetime!(2000-01-01 01:00:00.000001 UTC));

        let micros: i64 = -1;
        let ts = decode_timestamp_integer(&micros.to_be_bytes()).unwrap();
        assert_eq!(ts.timestamp, datetime!(1999-12-31 23:59:59.999999 UTC));
    }

    #[test]
    fn integer_sentinels() {
        let ts = decode_timestamp_integer(&i64::MAX.to_be_bytes()).unwrap();
        assert_eq!(ts.infinity, 1);

        let ts = decode_timestamp_integer(&i64::MIN.to_be_bytes()).unwrap();
        assert_eq!(ts.infinity, -1);
    }

    #[test]
    fn integer_length_check() {
        let err = decode_timestamp_integer(&[0; 4]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected binary length 4, expected 8");
    }

    #[test]
    fn float_form_unimplemented() {
        let err = decode_timestamp_float(&[0; 8]).unwrap_err();
        assert!(err.to_string().contains("not implemented"));
    }
}
