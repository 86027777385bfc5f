//! Typed values for a calling-convention boundary.
//!
//! This crate defines the closed set of value kinds that can be passed
//! between a virtual machine and native code, and converts losslessly
//! between native payloads and flat, untagged byte encodings.
//!
//! # Overview
//!
//! - [`Type`] - The tag identifying a value kind (raw `u64` at the boundary)
//! - [`Value`] - A payload statically paired with its kind
//! - [`Value::encode`] / [`Value::decode`] - Byte codec for a single value
//! - [`encode_native`] / [`decode_raw`] - The same codec driven by raw tags
//!   and untyped payloads
//! - [`to_values`] / [`from_values`] - Bulk conversion to and from a
//!   heterogeneous list of [`NativeValue`]s
//! - [`type_matches`] - Compatibility predicate against the type registry
//! - [`AbiError`] - Failure taxonomy
//!
//! # Encodings
//!
//! | Kind | Native type | Bytes |
//! |---|---|---|
//! | `Address` | [`Address`] | the address bytes |
//! | `Integer` | [`BigInt`] | big-endian magnitude, minimal length, sign dropped |
//! | `Bytes` | [`Bytes`] | unchanged |
//! | `String` | [`Text`] | the text bytes, unvalidated |
//!
//! # Examples
//!
//! ```
//! use abi::{from_values, native, to_values, BigInt, Text, Type, Value};
//!
//! let value = Value::from(BigInt::from(300));
//! assert_eq!(&value.encode()[..], &[0x01, 0x2c]);
//! assert_eq!(Value::decode(vec![0x01, 0x2c], Type::Integer).unwrap(), value);
//!
//! let values = to_values(vec![native(Text::from("hi")), native(BigInt::from(300))])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(values[0], Value::String(Text::from("hi")));
//! assert_eq!(values[1].ty(), Type::Integer);
//!
//! let natives = from_values(values).unwrap();
//! assert_eq!(natives[0].downcast_ref::<Text>().unwrap(), "hi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod convert;
mod error;
mod types;
mod value;

pub use convert::{decode_raw, encode_native, from_values, to_values};
pub use error::{AbiError, AbiResult};
pub use types::{type_matches, type_matches_raw, Type};
pub use value::Value;

pub use bytes::Bytes;
pub use core_types::{native, Address, Native, NativeValue, Text};
pub use num_bigint::BigInt;
