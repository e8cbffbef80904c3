//! Secure memory handling for typed secrets
//!
//! Secrets typed at a prompt live in a `SecureString` until they are either
//! committed to a record or discarded; in both cases the buffer is wiped.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string type that zeros its contents on drop
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Create a new SecureString
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Append one character
    pub fn push(&mut self, c: char) {
        // Grow by hand so the old allocation is wiped instead of left behind
        if self.inner.len() == self.inner.capacity() {
            let mut grown = String::with_capacity((self.inner.capacity() * 2).max(16));
            grown.push_str(&self.inner);
            self.inner.zeroize();
            self.inner = grown;
        }
        self.inner.push(c);
    }

    /// Remove the last character
    pub fn pop(&mut self) -> Option<char> {
        let c = self.inner.chars().next_back()?;
        let mut shorter = String::with_capacity(self.inner.capacity());
        shorter.push_str(&self.inner[..self.inner.len() - c.len_utf8()]);
        self.inner.zeroize();
        self.inner = shorter;
        Some(c)
    }

    /// Wipe the contents
    pub fn clear(&mut self) {
        self.inner.zeroize();
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
