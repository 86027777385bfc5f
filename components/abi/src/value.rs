//! Tagged values and the single-value byte codec.
//!
//! A [`Value`] carries its payload in the native representation of its
//! kind, so encoding a constructed value cannot fail. The kind is only
//! checked at runtime where an untyped payload is lifted into a `Value`
//! ([`Value::from_native`], and the `TryFrom` conversions back out).
//!
//! Integers are encoded as their big-endian magnitude: the sign is not part
//! of the encoding, so a negative integer decodes as its absolute value.
//! Text is never validated: its bytes go out and come back unchanged.

use crate::{native, AbiError, AbiResult, Address, BigInt, Bytes, Native, NativeValue, Text, Type};
use num_bigint::BigUint;
use num_traits::Zero;
use std::any::Any;

/// A payload paired with its kind.
///
/// # Examples
///
/// ```
/// use abi::{Type, Value};
///
/// let value = Value::from("hi");
/// assert_eq!(value.ty(), Type::String);
/// assert_eq!(&value.encode()[..], b"hi");
/// assert_eq!(value.as_str(), Some("hi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Opaque address identifier
    Address(Address),
    /// Arbitrary-precision integer
    Integer(BigInt),
    /// Raw byte sequence
    Bytes(Bytes),
    /// Text, possibly not UTF-8
    String(Text),
}

impl Value {
    /// Kind of this value. Never [`Type::Invalid`].
    pub fn ty(&self) -> Type {
        match self {
            Value::Address(_) => Type::Address,
            Value::Integer(_) => Type::Integer,
            Value::Bytes(_) => Type::Bytes,
            Value::String(_) => Type::String,
        }
    }

    /// Encode the payload to its flat byte form.
    ///
    /// `Address`, `Bytes` and `String` payloads are returned without
    /// copying; the result shares their backing buffer.
    pub fn encode(&self) -> Bytes {
        match self {
            Value::Address(addr) => addr.to_bytes(),
            Value::Integer(n) => encode_integer(n),
            Value::Bytes(bytes) => bytes.clone(),
            Value::String(text) => text.to_bytes(),
        }
    }

    /// Decode `data` as a value of kind `ty`.
    ///
    /// Total over the input bytes for every valid kind: addresses are not
    /// validated, integers are read as unsigned magnitudes (empty input is
    /// zero), and text is kept byte for byte with no encoding validation,
    /// so malformed sequences pass through.
    ///
    /// # Errors
    ///
    /// [`AbiError::InvalidType`] when `ty` is [`Type::Invalid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use abi::{AbiError, Type, Value};
    ///
    /// let value = Value::decode(vec![1, 2, 3], Type::Bytes).unwrap();
    /// assert_eq!(value, Value::Bytes(vec![1, 2, 3].into()));
    ///
    /// assert_eq!(Value::decode(vec![1], Type::Invalid), Err(AbiError::InvalidType));
    /// ```
    pub fn decode(data: impl Into<Bytes>, ty: Type) -> AbiResult<Value> {
        let data = data.into();
        match ty {
            Type::Invalid => Err(AbiError::InvalidType),
            Type::Address => Ok(Value::Address(Address::from(data))),
            Type::Integer => Ok(Value::Integer(BigInt::from(BigUint::from_bytes_be(&data)))),
            Type::Bytes => Ok(Value::Bytes(data)),
            Type::String => Ok(Value::String(Text::from(data))),
        }
    }

    /// Lift an untyped payload into a value of kind `ty`.
    ///
    /// # Errors
    ///
    /// - [`AbiError::InvalidType`] when `ty` is [`Type::Invalid`]
    /// - [`AbiError::TypeMismatch`] when the payload's native type is not the
    ///   one registered for `ty`
    ///
    /// A payload that is itself a boxed [`NativeValue`] is unwrapped first.
    pub fn from_native(ty: Type, payload: NativeValue) -> AbiResult<Value> {
        match ty {
            Type::Invalid => Err(AbiError::InvalidType),
            Type::Address => take(ty, payload).map(Value::Address),
            Type::Integer => take(ty, payload).map(Value::Integer),
            Type::Bytes => take(ty, payload).map(Value::Bytes),
            Type::String => take(ty, payload).map(Value::String),
        }
    }

    /// Discard the tag, returning the payload as an untyped native value.
    pub fn into_native(self) -> NativeValue {
        match self {
            Value::Address(addr) => native(addr),
            Value::Integer(n) => native(n),
            Value::Bytes(bytes) => native(bytes),
            Value::String(text) => native(text),
        }
    }

    /// Borrow the payload as an untyped native value.
    pub fn as_native(&self) -> &dyn Native {
        match self {
            Value::Address(addr) => addr,
            Value::Integer(n) => n,
            Value::Bytes(bytes) => bytes,
            Value::String(text) => text,
        }
    }

    /// The address payload, if this is an `Address`.
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Value::Address(addr) => Some(addr),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// The byte payload, if this is `Bytes`.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The text payload, if this is a `String`.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// The text payload as `&str`, if this is a `String` holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_text().and_then(|text| text.as_str().ok())
    }
}

/// Big-endian magnitude, minimal length. Zero encodes as no bytes.
pub(crate) fn encode_integer(n: &BigInt) -> Bytes {
    if n.is_zero() {
        Bytes::new()
    } else {
        Bytes::from(n.magnitude().to_bytes_be())
    }
}

fn take<T: Any>(expected: Type, payload: NativeValue) -> AbiResult<T> {
    let actual = payload.native_type_name();
    payload
        .downcast::<T>()
        .map_err(|_| AbiError::TypeMismatch { expected, actual })
}

impl From<Address> for Value {
    fn from(addr: Address) -> Self {
        Value::Address(addr)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(bytes))
    }
}

impl From<Text> for Value {
    fn from(text: Text) -> Self {
        Value::String(text)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Text::from(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Text::from(s))
    }
}

// Unwrapping a value checks its kind at runtime, like lifting does.
macro_rules! impl_try_from_value {
    ($native:ty, $variant:ident) => {
        impl TryFrom<Value> for $native {
            type Error = AbiError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(AbiError::TypeMismatch {
                        expected: Type::$variant,
                        actual: other.as_native().native_type_name(),
                    }),
                }
            }
        }
    };
}

impl_try_from_value!(Address, Address);
impl_try_from_value!(BigInt, Integer);
impl_try_from_value!(Bytes, Bytes);
impl_try_from_value!(Text, String);
