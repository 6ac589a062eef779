//! Postgres Text Codec
//!
//! Converts between in memory values and the text forms postgres puts
//! on the wire: `bytea` in both spellings, ISO dates, times and
//! timestamps, and array literals of any of them.
//!
//! # Examples
//!
//! Scanning wire text into typed targets:
//!
//! ```
//! use pglit::{Date, Scan, TimestampTz, ValueRef};
//!
//! let mut date = Date::default();
//! date.scan(ValueRef::Bytes(b"4000-05-06 BC"))?;
//! assert_eq!((date.year, date.month, date.day), (-3999, 5, 6));
//!
//! let mut ts = TimestampTz::default();
//! ts.scan(ValueRef::Bytes(b"2001-02-03 04:05:06.007-08:09:10"))?;
//! assert_eq!(ts.timestamp.offset().whole_seconds(), -29_350);
//! # Ok::<(), pglit::ScanError>(())
//! ```
//!
//! Producing wire text:
//!
//! ```
//! use pglit::{GenericArray, StringArray, ToValue};
//!
//! let value = StringArray(vec!["a".into(), "d,e".into()]).to_value()?;
//! assert_eq!(value.as_bytes(), Some(&b"{\"a\",\"d,e\"}"[..]));
//!
//! let value = GenericArray(vec![vec![1i64, 2], vec![3, 4]]).to_value()?;
//! assert_eq!(value.as_bytes(), Some(&b"{{1,2},{3,4}}"[..]));
//! # Ok::<(), pglit::ValueError>(())
//! ```

mod common;
mod ext;

// Primitives
mod decimal;
pub mod bytea;

// Values
mod error;
mod value;

// Codecs
mod array;
mod datetime;

pub use array::{
    ArrayElement, BoolArray, ByteaArray, Float64Array, GenericArray, Int64Array, StringArray,
};
pub use datetime::{
    Clock, Date, Timestamp, TimestampTz, append_date_iso, append_time, append_timestamp_iso,
    decode_timestamp_float, decode_timestamp_integer, encode_timestamp_integer,
};
pub use error::{ScanError, ValueError};
pub use value::{Scan, ToValue, Value, ValueRef};
