//! Owned, null-terminated text buffer backing `Str` values.
//!
//! An [`OwnedString`] owns at most one heap buffer holding the payload
//! followed by a single `'\0'` terminator.  There is no sharing: every clone
//! allocates a fresh buffer, and identity ([`OwnedString::is_same`]) means
//! "same allocation", never "same content".

use std::fmt;

/// A length-prefixed text buffer with deep-copy semantics.
///
/// `size()` counts the terminator, so `"ab"` has size 3.  The
/// default-constructed string owns no buffer and has size 0.
#[derive(Debug, Clone, Default)]
pub struct OwnedString {
    // payload + '\0'; `None` only for the unallocated empty string
    data: Option<Box<str>>,
}

impl OwnedString {
    /// Create an empty string that owns no buffer.
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Bytes owned, including the terminator (0 when unallocated).
    pub fn size(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Length of the payload in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.size().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload, without the terminator.
    pub fn as_str(&self) -> &str {
        match &self.data {
            Some(d) => &d[..d.len() - 1],
            None => "",
        }
    }

    /// The payload followed by its terminator (empty when unallocated).
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.data.as_deref().map(str::as_bytes).unwrap_or_default()
    }

    /// Address of the owned buffer, or null when unallocated.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_deref().map_or(std::ptr::null(), str::as_ptr)
    }

    /// Identity: same size and same buffer.
    ///
    /// Two strings with equal content but separate allocations are *not*
    /// the same; compare [`as_str`](Self::as_str) for content.
    pub fn is_same(&self, other: &OwnedString) -> bool {
        self.size() == other.size() && std::ptr::eq(self.as_ptr(), other.as_ptr())
    }

    /// Concatenate into a freshly allocated string.
    ///
    /// The two payloads share one terminator, so the result's size is
    /// `self.size() + other.size() - 1` when both are allocated.  An
    /// unallocated operand contributes nothing.
    pub fn concat(&self, other: &OwnedString) -> OwnedString {
        if self.data.is_none() && other.data.is_none() {
            return OwnedString::new();
        }
        let mut buf = String::with_capacity(self.len() + other.len() + 1);
        buf.push_str(self.as_str());
        buf.push_str(other.as_str());
        OwnedString::from(buf)
    }

    /// Release the buffer, leaving the unallocated empty string.
    pub fn clear(&mut self) {
        self.data = None;
    }
}

impl From<&str> for OwnedString {
    fn from(s: &str) -> Self {
        let mut buf = String::with_capacity(s.len() + 1);
        buf.push_str(s);
        OwnedString::from(buf)
    }
}

impl From<String> for OwnedString {
    fn from(mut s: String) -> Self {
        s.push('\0');
        Self {
            data: Some(s.into_boxed_str()),
        }
    }
}

impl fmt::Display for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
