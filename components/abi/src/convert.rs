//! Boundary entry points driven by raw tags and untyped payloads.
//!
//! Hosts hand over raw `u64` tags and heterogeneous lists of native values;
//! these functions lift them into [`Value`]s (or straight to bytes) and back.
//! Empty lists are normalized to `None` in both directions.

use crate::value::encode_integer;
use crate::{AbiError, AbiResult, Address, BigInt, Bytes, Native, NativeValue, Text, Type, Value};
use std::any::Any;
use tracing::trace;

/// Encode an untyped payload under a raw tag.
///
/// Produces the same bytes as [`Value::encode`] for a value of that kind.
/// A [`NativeValue`] may be passed by reference as it is.
///
/// # Errors
///
/// - [`AbiError::UnrecognizedType`] when `tag` names no kind
/// - [`AbiError::InvalidType`] when `tag` is [`Type::Invalid`]
/// - [`AbiError::TypeMismatch`] when the payload is not the native type
///   registered for the tag
///
/// # Examples
///
/// ```
/// use abi::{encode_native, AbiError, BigInt, Type};
///
/// let bytes = encode_native(Type::Integer.as_raw(), &BigInt::from(300)).unwrap();
/// assert_eq!(&bytes[..], &[0x01, 0x2c]);
///
/// assert_eq!(encode_native(0, &BigInt::from(1)), Err(AbiError::InvalidType));
/// assert_eq!(encode_native(9, &BigInt::from(1)), Err(AbiError::UnrecognizedType(9)));
///
/// let payload = abi::native(BigInt::from(300));
/// assert_eq!(&encode_native(2, &payload).unwrap()[..], &[0x01, 0x2c]);
/// ```
pub fn encode_native(tag: u64, payload: &dyn Native) -> AbiResult<Bytes> {
    let ty = Type::try_from(tag)?;
    match ty {
        Type::Invalid => Err(AbiError::InvalidType),
        Type::Address => borrow::<Address>(ty, payload).map(Address::to_bytes),
        Type::Integer => borrow::<BigInt>(ty, payload).map(encode_integer),
        Type::Bytes => borrow::<Bytes>(ty, payload).cloned(),
        Type::String => borrow::<Text>(ty, payload).map(Text::to_bytes),
    }
}

/// Decode `data` under a raw tag. See [`Value::decode`].
///
/// # Errors
///
/// - [`AbiError::UnrecognizedType`] when `tag` names no kind
/// - [`AbiError::InvalidType`] when `tag` is [`Type::Invalid`]
pub fn decode_raw(data: impl Into<Bytes>, tag: u64) -> AbiResult<Value> {
    Value::decode(data, Type::try_from(tag)?)
}

/// Tag each native value by its concrete type.
///
/// Order is preserved. An empty (or absent) input yields `Ok(None)`.
/// Conversion is all-or-nothing: the first element whose type maps to no
/// kind fails the whole call.
///
/// # Errors
///
/// [`AbiError::UnsupportedType`] naming the offending element's type.
///
/// # Examples
///
/// ```
/// use abi::{native, to_values, AbiError, Text, Type};
///
/// let values = to_values(vec![native(Text::from("hi"))]).unwrap().unwrap();
/// assert_eq!(values[0].ty(), Type::String);
///
/// assert_eq!(to_values(Vec::new()), Ok(None));
/// assert_eq!(to_values(vec![native(1.5f64)]), Err(AbiError::UnsupportedType("f64")));
/// ```
pub fn to_values(natives: impl Into<Option<Vec<NativeValue>>>) -> AbiResult<Option<Vec<Value>>> {
    let natives = match natives.into() {
        Some(natives) if !natives.is_empty() => natives,
        _ => {
            trace!("no native values to tag");
            return Ok(None);
        }
    };

    let count = natives.len();
    let mut values = Vec::with_capacity(count);
    for payload in natives {
        let Some(ty) = Type::of_native(&payload) else {
            return Err(AbiError::UnsupportedType(payload.native_type_name()));
        };
        values.push(Value::from_native(ty, payload)?);
    }

    trace!(count, "tagged native values");
    Ok(Some(values))
}

/// Strip tags, returning each value's native payload in order.
///
/// An empty (or absent) input yields `None`. Never fails.
pub fn from_values(values: impl Into<Option<Vec<Value>>>) -> Option<Vec<NativeValue>> {
    let values = values.into().filter(|values| !values.is_empty())?;
    let count = values.len();
    let natives = values.into_iter().map(Value::into_native).collect();
    trace!(count, "projected native values");
    Some(natives)
}

fn borrow<T: Any>(expected: Type, payload: &dyn Native) -> AbiResult<&T> {
    payload
        .downcast_ref::<T>()
        .ok_or_else(|| AbiError::TypeMismatch {
            expected,
            actual: payload.native_type_name(),
        })
}
