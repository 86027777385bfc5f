//! Boundary types shared across the ABI layer.
//!
//! This crate provides the native-side representations that cross a
//! calling-convention boundary, independent of how they are tagged or
//! encoded.
//!
//! # Overview
//!
//! - [`Address`] - Opaque, byte-backed account/actor identifier
//! - [`Text`] - Byte-preserving text, not validated as UTF-8
//! - [`Native`] - A dynamically typed native payload
//! - [`NativeValue`] - An owned, boxed [`Native`]
//!
//! # Examples
//!
//! ```
//! use core_types::{native, Address, NativeValue, Text};
//!
//! let addr = Address::from_static(b"\x01\x02");
//! assert_eq!(addr.as_bytes(), &[0x01, 0x02]);
//!
//! let payload: NativeValue = native(Text::from("hi"));
//! assert!(payload.is::<Text>());
//! assert_eq!(payload.downcast_ref::<Text>().map(Text::as_bytes), Some(&b"hi"[..]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod address;
mod native;
mod text;

pub use address::Address;
pub use native::{native, Native, NativeValue};
pub use text::Text;
