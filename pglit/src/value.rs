//! Driver values and the conversion traits.
use bytes::Bytes;
use time::OffsetDateTime;

use crate::{ScanError, ValueError, ext::FmtExt};

/// A borrowed driver value handed to a [`Scan`] target.
///
/// Values read off the wire arrive as [`Bytes`][ValueRef::Bytes] in the
/// postgres text format. The remaining variants cover values the
/// application already holds in memory.
#[derive(Clone, Copy)]
pub enum ValueRef<'a> {
    /// The SQL `NULL`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Raw value bytes in the postgres text format.
    Bytes(&'a [u8]),
    Text(&'a str),
    /// A host instant.
    Instant(OffsetDateTime),
}

impl ValueRef<'_> {
    /// Name of the value kind, as used by conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueRef::Null => "null",
            ValueRef::Bool(_) => "bool",
            ValueRef::Int(_) => "int",
            ValueRef::Float(_) => "float",
            ValueRef::Bytes(_) => "bytes",
            ValueRef::Text(_) => "text",
            ValueRef::Instant(_) => "instant",
        }
    }
}

impl std::fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueRef::Null => f.write_str("Null"),
            ValueRef::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            ValueRef::Int(v) => f.debug_tuple("Int").field(v).finish(),
            ValueRef::Float(v) => f.debug_tuple("Float").field(v).finish(),
            ValueRef::Bytes(v) => write!(f, "Bytes({:?})", v.lossy()),
            ValueRef::Text(v) => f.debug_tuple("Text").field(v).finish(),
            ValueRef::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
        }
    }
}

/// An owned driver value produced by a [`ToValue`] source.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// The SQL `NULL`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Value bytes in the postgres text format, ready for the wire.
    Bytes(Bytes),
    Text(String),
}

impl Value {
    /// Name of the value kind, as used by conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
        }
    }

    /// Borrow the textual payload of a `Bytes` or `Text` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Text(t) => Some(t.as_bytes()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Bytes(v) => write!(f, "Bytes({:?})", v.lossy()),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
        }
    }
}

/// Populate a typed target in place from a driver value.
///
/// A failed scan leaves the target exactly as it was.
pub trait Scan {
    /// Scan `src` into `self`.
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError>;
}

/// Produce the driver value of a typed source.
pub trait ToValue {
    /// Build the driver value.
    fn to_value(&self) -> Result<Value, ValueError>;
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value, ValueError> {
        match self {
            Some(value) => value.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value, ValueError> {
        T::to_value(self)
    }
}
