//! Value kind tags and the native type registry.
//!
//! A [`Type`] crosses the boundary as a small unsigned integer. Each valid
//! kind is associated with exactly one native representation; the mapping
//! is resolved statically by [`Type::registered_type_id`].

use crate::{AbiError, Address, BigInt, Bytes, Native, Text};
use std::any::{type_name, TypeId};
use std::fmt;

/// Name reported for raw tags outside the defined kinds.
const UNKNOWN_TYPE_NAME: &str = "<unknown type>";

/// Kind of a value passed across the boundary.
///
/// Ordinals are stable within a build only.
///
/// # Examples
///
/// ```
/// use abi::Type;
///
/// assert_eq!(Type::try_from(2u64).unwrap(), Type::Integer);
/// assert_eq!(Type::Integer.as_raw(), 2);
/// assert_eq!(Type::Integer.to_string(), "integer");
/// assert_eq!(Type::name_of(17), "<unknown type>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u64", try_from = "u64"))]
#[repr(u64)]
pub enum Type {
    /// Unset or erroneous tag; never encodable
    #[default]
    Invalid = 0,
    /// An [`Address`]
    Address = 1,
    /// An arbitrary-precision [`BigInt`]
    Integer = 2,
    /// A byte sequence ([`Bytes`])
    Bytes = 3,
    /// Text, carried as unvalidated bytes ([`Text`])
    String = 4,
}

impl Type {
    /// The encodable kinds, in ordinal order.
    pub const ALL: [Type; 4] = [Type::Address, Type::Integer, Type::Bytes, Type::String];

    /// Raw ordinal of this tag.
    pub const fn as_raw(self) -> u64 {
        self as u64
    }

    /// Tag for a raw ordinal, if it names one.
    pub const fn from_raw(raw: u64) -> Option<Type> {
        match raw {
            0 => Some(Type::Invalid),
            1 => Some(Type::Address),
            2 => Some(Type::Integer),
            3 => Some(Type::Bytes),
            4 => Some(Type::String),
            _ => None,
        }
    }

    /// Whether values of this kind can exist (everything but `Invalid`).
    pub const fn is_valid(self) -> bool {
        !matches!(self, Type::Invalid)
    }

    /// Human-readable name of this tag.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Invalid => "<invalid>",
            Type::Address => "address",
            Type::Integer => "integer",
            Type::Bytes => "bytes",
            Type::String => "string",
        }
    }

    /// Human-readable name of a raw tag.
    ///
    /// Never fails: unknown ordinals get a fixed fallback name.
    pub const fn name_of(raw: u64) -> &'static str {
        match Type::from_raw(raw) {
            Some(ty) => ty.name(),
            None => UNKNOWN_TYPE_NAME,
        }
    }

    /// [`TypeId`] of the native representation for this kind.
    ///
    /// `None` for `Invalid`.
    pub fn registered_type_id(self) -> Option<TypeId> {
        match self {
            Type::Invalid => None,
            Type::Address => Some(TypeId::of::<Address>()),
            Type::Integer => Some(TypeId::of::<BigInt>()),
            Type::Bytes => Some(TypeId::of::<Bytes>()),
            Type::String => Some(TypeId::of::<Text>()),
        }
    }

    /// Name of the native representation for this kind.
    pub fn registered_type_name(self) -> Option<&'static str> {
        match self {
            Type::Invalid => None,
            Type::Address => Some(type_name::<Address>()),
            Type::Integer => Some(type_name::<BigInt>()),
            Type::Bytes => Some(type_name::<Bytes>()),
            Type::String => Some(type_name::<Text>()),
        }
    }

    /// Kind whose native representation is the payload's concrete type.
    ///
    /// A boxed [`NativeValue`](crate::NativeValue) is looked through to its
    /// payload.
    pub fn of_native(payload: &dyn Native) -> Option<Type> {
        let actual = payload.native_type_id();
        Type::ALL
            .into_iter()
            .find(|&ty| ty.registered_type_id() == Some(actual))
    }
}

/// Whether `actual` is the native representation registered for `ty`.
///
/// Always false for [`Type::Invalid`].
///
/// # Examples
///
/// ```
/// use abi::{type_matches, Bytes, Type};
/// use std::any::TypeId;
///
/// assert!(type_matches(Type::Bytes, TypeId::of::<Bytes>()));
/// assert!(!type_matches(Type::Bytes, TypeId::of::<Vec<u8>>()));
/// ```
pub fn type_matches(ty: Type, actual: TypeId) -> bool {
    ty.registered_type_id() == Some(actual)
}

/// [`type_matches`] for a raw tag; false for unrecognized tags.
pub fn type_matches_raw(raw: u64, actual: TypeId) -> bool {
    Type::from_raw(raw).is_some_and(|ty| type_matches(ty, actual))
}

impl TryFrom<u64> for Type {
    type Error = AbiError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Type::from_raw(raw).ok_or(AbiError::UnrecognizedType(raw))
    }
}

impl From<Type> for u64 {
    fn from(ty: Type) -> Self {
        ty.as_raw()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
