//! Byte-backed address identifiers.
//!
//! An [`Address`] is opaque to this layer: its length and validity rules are
//! owned by whoever issues addresses. Here it is only ever wrapped and
//! projected back to bytes.

use bytes::Bytes;
use std::fmt;

/// Opaque identifier backed by a byte sequence.
///
/// Construction never validates the bytes. Cloning is cheap; clones share
/// the same backing buffer.
///
/// # Examples
///
/// ```
/// use core_types::Address;
///
/// let addr = Address::new(vec![0x00, 0xff]);
/// assert_eq!(addr.len(), 2);
/// assert_eq!(addr.to_string(), "00ff");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Bytes);

impl Address {
    /// Wrap the given bytes as an address, without validation.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Address(bytes.into())
    }

    /// Wrap a static byte slice without copying.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Address(Bytes::from_static(bytes))
    }

    /// The address's byte projection.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Shared handle to the backing bytes (no copy).
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Consume the address, returning its backing bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Number of bytes in the address.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the address has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Bytes> for Address {
    fn from(bytes: Bytes) -> Self {
        Address(bytes)
    }
}

impl From<Vec<u8>> for Address {
    fn from(bytes: Vec<u8>) -> Self {
        Address(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Address {
    fn from(bytes: &[u8]) -> Self {
        Address(Bytes::copy_from_slice(bytes))
    }
}

impl From<Address> for Bytes {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex, no prefix.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}
