//! Array values.
//!
//! The typed wrappers scan and emit one dimensional arrays of the
//! common element types. [`GenericArray`] emits any nesting of
//! [`ArrayElement`]s, which covers user types as well since an element
//! appends its own literal and picks the delimiter its arrays use.
mod format;
mod parse;

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Scan, ScanError, ToValue, Value, ValueError, ValueRef, bytea};
use format::{push_display, push_quoted, push_quoted_bytea};
use parse::{ArrayToken, parse_array};

// ===== Typed arrays =====

/// A `bool[]` scan target and value source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoolArray(pub Vec<bool>);

/// A `bigint[]` scan target and value source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Int64Array(pub Vec<i64>);

/// A `double precision[]` scan target and value source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Float64Array(pub Vec<f64>);

/// A `text[]` scan target and value source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringArray(pub Vec<String>);

/// A `bytea[]` scan target and value source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteaArray(pub Vec<Vec<u8>>);

fn array_text<'a>(src: ValueRef<'a>, to: &'static str) -> Result<&'a [u8], ScanError> {
    match src {
        ValueRef::Bytes(src) => Ok(src),
        ValueRef::Text(src) => Ok(src.as_bytes()),
        other => Err(ScanError::unsupported(other.kind(), to)),
    }
}

/// Tokenize a one dimensional literal, the only shape the typed
/// wrappers accept.
fn linear_tokens(input: &[u8]) -> Result<Vec<ArrayToken>, ScanError> {
    let (dims, tokens) = parse_array(input, b',')?;
    if dims.len() > 1 {
        return Err(ScanError::format(input));
    }
    Ok(tokens)
}

impl Scan for BoolArray {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        let input = array_text(src, "BoolArray")?;
        let tokens = linear_tokens(input)?;
        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match token.as_deref() {
                Some(b"t") => out.push(true),
                Some(b"f") => out.push(false),
                _ => return Err(ScanError::format(input)),
            }
        }
        self.0 = out;
        Ok(())
    }
}

impl ToValue for BoolArray {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut buf = BytesMut::with_capacity(2 + self.0.len() * 2);
        buf.put_u8(b'{');
        for (i, &v) in self.0.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            buf.put_u8(if v { b't' } else { b'f' });
        }
        buf.put_u8(b'}');
        Ok(Value::Bytes(buf.freeze()))
    }
}

impl Scan for Int64Array {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        let input = array_text(src, "Int64Array")?;
        let tokens = linear_tokens(input)?;
        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let text = token.as_deref().and_then(|t| std::str::from_utf8(t).ok());
            let Some(value) = text.and_then(|t| t.parse().ok()) else {
                return Err(ScanError::format(input));
            };
            out.push(value);
        }
        self.0 = out;
        Ok(())
    }
}

impl ToValue for Int64Array {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut digits = itoa::Buffer::new();
        let mut buf = BytesMut::with_capacity(2 + self.0.len() * 4);
        buf.put_u8(b'{');
        for (i, &v) in self.0.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            buf.put_slice(digits.format(v).as_bytes());
        }
        buf.put_u8(b'}');
        Ok(Value::Bytes(buf.freeze()))
    }
}

impl Scan for Float64Array {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        let input = array_text(src, "Float64Array")?;
        let tokens = linear_tokens(input)?;
        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let text = token.as_deref().and_then(|t| std::str::from_utf8(t).ok());
            let Some(value) = text.and_then(|t| t.parse().ok()) else {
                return Err(ScanError::format(input));
            };
            out.push(value);
        }
        self.0 = out;
        Ok(())
    }
}

impl ToValue for Float64Array {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut buf = BytesMut::with_capacity(2 + self.0.len() * 4);
        buf.put_u8(b'{');
        for (i, &v) in self.0.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            push_display(&mut buf, v);
        }
        buf.put_u8(b'}');
        Ok(Value::Bytes(buf.freeze()))
    }
}

impl Scan for StringArray {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        let input = array_text(src, "StringArray")?;
        let tokens = linear_tokens(input)?;
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            let Some(token) = token else {
                return Err(ScanError::format(input));
            };
            let text = String::from_utf8(token).map_err(|_| ScanError::format(input))?;
            out.push(text);
        }
        self.0 = out;
        Ok(())
    }
}

impl ToValue for StringArray {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut buf = BytesMut::with_capacity(2 + self.0.len() * 8);
        buf.put_u8(b'{');
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            push_quoted(&mut buf, v.as_bytes());
        }
        buf.put_u8(b'}');
        Ok(Value::Bytes(buf.freeze()))
    }
}

impl Scan for ByteaArray {
    fn scan(&mut self, src: ValueRef<'_>) -> Result<(), ScanError> {
        let input = array_text(src, "ByteaArray")?;
        let tokens = linear_tokens(input)?;
        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let Some(token) = token.as_deref() else {
                return Err(ScanError::format(input));
            };
            let raw = bytea::decode(token).map_err(|_| ScanError::format(input))?;
            out.push(raw);
        }
        self.0 = out;
        Ok(())
    }
}

impl ToValue for ByteaArray {
    fn to_value(&self) -> Result<Value, ValueError> {
        let mut buf = BytesMut::with_capacity(2 + self.0.len() * 8);
        buf.put_u8(b'{');
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            push_quoted_bytea(&mut buf, v);
        }
        buf.put_u8(b'}');
        Ok(Value::Bytes(buf.freeze()))
    }
}

// ===== Generic arrays =====

/// An element of a [`GenericArray`].
pub trait ArrayElement {
    /// Delimiter between elements of this type.
    ///
    /// Almost every postgres type delimits with a comma, `box` is the
    /// known exception with a semicolon.
    const DELIMITER: u8 = b',';

    /// Append the element literal to an array body.
    ///
    /// Returns `false` when the element emits nothing. Only empty sub
    /// arrays do so, and the caller then drops the pending delimiter.
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError>;
}

impl ArrayElement for bool {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        buf.put_slice(if *self { b"true" } else { b"false" });
        Ok(true)
    }
}

macro_rules! int_element {
    ($($int:ty),* $(,)?) => {
        $(
            impl ArrayElement for $int {
                fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
                    buf.put_slice(itoa::Buffer::new().format(*self).as_bytes());
                    Ok(true)
                }
            }
        )*
    };
}

int_element!(i16, i32, i64);

macro_rules! float_element {
    ($($float:ty),* $(,)?) => {
        $(
            impl ArrayElement for $float {
                fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
                    push_display(buf, *self);
                    Ok(true)
                }
            }
        )*
    };
}

float_element!(f32, f64);

impl ArrayElement for String {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_quoted(buf, self.as_bytes());
        Ok(true)
    }
}

impl ArrayElement for &str {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_quoted(buf, self.as_bytes());
        Ok(true)
    }
}

/// Byte slices are one `bytea` element, not a nested array.
impl ArrayElement for Vec<u8> {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_quoted_bytea(buf, self);
        Ok(true)
    }
}

impl ArrayElement for &[u8] {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_quoted_bytea(buf, self);
        Ok(true)
    }
}

impl<T: ArrayElement> ArrayElement for Option<T> {
    const DELIMITER: u8 = T::DELIMITER;

    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        match self {
            Some(value) => value.append_element(buf),
            None => {
                buf.put_slice(b"NULL");
                Ok(true)
            },
        }
    }
}

// The nested impls stay coherent with the byte slice ones above
// because `u8` is not an `ArrayElement`.

impl<T: ArrayElement> ArrayElement for Vec<T> {
    const DELIMITER: u8 = T::DELIMITER;

    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_sub_array(self, buf)
    }
}

impl<T: ArrayElement> ArrayElement for &[T] {
    const DELIMITER: u8 = T::DELIMITER;

    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_sub_array(self, buf)
    }
}

impl<T: ArrayElement, const N: usize> ArrayElement for [T; N] {
    const DELIMITER: u8 = T::DELIMITER;

    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        push_sub_array(self, buf)
    }
}

/// An already built driver value as one element.
///
/// `Bytes` and `Text` payloads hold wire text and are quoted verbatim,
/// raw binary belongs in a [`Vec<u8>`] element instead.
impl ArrayElement for Value {
    fn append_element(&self, buf: &mut BytesMut) -> Result<bool, ValueError> {
        match self {
            Value::Null => buf.put_slice(b"NULL"),
            Value::Bool(v) => buf.put_slice(if *v { b"true" } else { b"false" }),
            Value::Int(v) => buf.put_slice(itoa::Buffer::new().format(*v).as_bytes()),
            Value::Float(v) => push_display(buf, *v),
            Value::Bytes(v) => push_quoted(buf, v),
            Value::Text(v) => push_quoted(buf, v.as_bytes()),
        }
        Ok(true)
    }
}

fn push_sub_array<T: ArrayElement>(elems: &[T], buf: &mut BytesMut) -> Result<bool, ValueError> {
    if elems.is_empty() {
        return Ok(false);
    }
    buf.put_u8(b'{');
    push_elements(elems, buf)?;
    buf.put_u8(b'}');
    Ok(true)
}

fn push_elements<T: ArrayElement>(elems: &[T], buf: &mut BytesMut) -> Result<(), ValueError> {
    let mut wrote = false;
    for (index, elem) in elems.iter().enumerate() {
        let mark = buf.len();
        if wrote {
            buf.put_u8(T::DELIMITER);
        }
        match elem.append_element(buf) {
            Ok(true) => wrote = true,
            Ok(false) => buf.truncate(mark),
            Err(err) => return Err(ValueError::element(index, err)),
        }
    }
    Ok(())
}

fn generic_value<T: ArrayElement>(elems: &[T]) -> Result<Value, ValueError> {
    if elems.is_empty() {
        return Ok(Value::Bytes(Bytes::from_static(b"{}")));
    }
    let mut buf = BytesMut::with_capacity(2 + elems.len() * 4);
    buf.put_u8(b'{');
    push_elements(elems, &mut buf)?;
    buf.put_u8(b'}');
    Ok(Value::Bytes(buf.freeze()))
}

/// Format any sequence of [`ArrayElement`]s as an array literal.
///
/// ```
/// use pglit::{GenericArray, ToValue};
///
/// let value = GenericArray(vec![vec![1i64, 2], vec![3, 4]]).to_value()?;
/// assert_eq!(value.as_bytes(), Some(&b"{{1,2},{3,4}}"[..]));
/// # Ok::<(), pglit::ValueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GenericArray<S>(pub S);

impl<T: ArrayElement> ToValue for GenericArray<Vec<T>> {
    fn to_value(&self) -> Result<Value, ValueError> {
        generic_value(&self.0)
    }
}

impl<T: ArrayElement> ToValue for GenericArray<&[T]> {
    fn to_value(&self) -> Result<Value, ValueError> {
        generic_value(self.0)
    }
}

impl<T: ArrayElement, const N: usize> ToValue for GenericArray<[T; N]> {
    fn to_value(&self) -> Result<Value, ValueError> {
        generic_value(&self.0)
    }
}

impl<T: ArrayElement> ToValue for GenericArray<Option<Vec<T>>> {
    fn to_value(&self) -> Result<Value, ValueError> {
        match &self.0 {
            Some(elems) => generic_value(elems),
            None => Ok(Value::Null),
        }
    }
}
