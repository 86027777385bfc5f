//! Byte-preserving text.
//!
//! Text arriving from a host is whatever bytes the host sent. [`Text`] keeps
//! those bytes exactly and only interprets them as UTF-8 when asked, so
//! malformed input survives a decode/encode round trip unchanged.

use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

/// Text backed by an unvalidated byte sequence.
///
/// Usually UTF-8, but never checked on construction. Cloning is cheap; clones
/// share the same backing buffer.
///
/// # Examples
///
/// ```
/// use core_types::Text;
///
/// let text = Text::from("hi");
/// assert_eq!(text.as_str(), Ok("hi"));
///
/// let raw = Text::new(vec![0x68, 0xff, 0x69]);
/// assert!(raw.as_str().is_err());
/// assert_eq!(raw.as_bytes(), &[0x68, 0xff, 0x69]);
/// assert_eq!(raw.to_string_lossy(), "h\u{fffd}i");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(Bytes);

impl Text {
    /// Wrap the given bytes as text, without validation.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Text(bytes.into())
    }

    /// Wrap a static string without copying.
    pub const fn from_static(s: &'static str) -> Self {
        Text(Bytes::from_static(s.as_bytes()))
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Shared handle to the backing bytes (no copy).
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Consume the text, returning its backing bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow as `&str`.
    ///
    /// # Errors
    ///
    /// [`Utf8Error`] when the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Whether the bytes are valid UTF-8.
    pub fn is_utf8(&self) -> bool {
        self.as_str().is_ok()
    }

    /// UTF-8 view with malformed sequences replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text(Bytes::from(s))
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<Bytes> for Text {
    fn from(bytes: Bytes) -> Self {
        Text(bytes)
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Text(Bytes::from(bytes))
    }
}

impl From<Text> for Bytes {
    fn from(text: Text) -> Self {
        text.0
    }
}

impl TryFrom<Text> for String {
    type Error = Utf8Error;

    fn try_from(text: Text) -> Result<Self, Self::Error> {
        text.as_str().map(str::to_owned)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Lossy: malformed sequences print as U+FFFD.
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(s) => f.debug_tuple("Text").field(&s).finish(),
            Err(_) => f.debug_tuple("Text").field(&self.0).finish(),
        }
    }
}
