//! Dynamically typed native payloads.
//!
//! Values handed across the boundary by a host arrive as a heterogeneous
//! list whose element types are only known at runtime. [`Native`] is the
//! object-safe view of such a value: it can report its concrete type and be
//! downcast back to it.

use std::any::{Any, TypeId};
use std::fmt;

/// A native value whose concrete type is discovered at runtime.
///
/// Implemented for every `'static + Debug + Send + Sync` type, so any such
/// value can be boxed into a [`NativeValue`].
///
/// A [`NativeValue`] is transparent: its methods report and downcast the
/// innermost payload, however many boxes it sits behind.
pub trait Native: Any + fmt::Debug + Send + Sync {
    /// [`TypeId`] of the concrete type.
    fn native_type_id(&self) -> TypeId;

    /// Name of the concrete type, for diagnostics.
    fn native_type_name(&self) -> &'static str;

    /// Borrow as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Convert into a boxed [`Any`] for owned downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<T: Any + fmt::Debug + Send + Sync> Native for T {
    fn native_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    fn native_type_name(&self) -> &'static str {
        match (self as &dyn Any).downcast_ref::<NativeValue>() {
            Some(inner) => (**inner).native_type_name(),
            None => std::any::type_name::<T>(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        match (self as &dyn Any).downcast_ref::<NativeValue>() {
            Some(inner) => (**inner).as_any(),
            None => self,
        }
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        let any: Box<dyn Any + Send + Sync> = self;
        match any.downcast::<NativeValue>() {
            Ok(inner) => (*inner).into_any(),
            Err(any) => any,
        }
    }
}

impl dyn Native {
    /// Whether the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the payload as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take the payload out as a `T`.
    ///
    /// On mismatch the payload is handed back as a boxed [`Any`].
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<T, Box<dyn Any + Send + Sync>> {
        self.into_any().downcast::<T>().map(|boxed| *boxed)
    }
}

/// An owned native payload.
pub type NativeValue = Box<dyn Native>;

/// Box a value as a [`NativeValue`].
///
/// # Examples
///
/// ```
/// use core_types::native;
///
/// let list = vec![native(7u8), native("seven".to_string())];
/// assert!(list[0].is::<u8>());
/// assert!(list[1].is::<String>());
/// ```
pub fn native<T: Native>(value: T) -> NativeValue {
    Box::new(value)
}
