//! Version string sanitization and parsing

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Replacement for any client version that fails shape validation
pub const ZERO_VERSION: &str = "0.0.0.0";

/// Shape a client-reported version must match before it is trusted:
/// four numeric groups of 1-3 digits joined by literal dots.
static CLIENT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").unwrap()
});

/// Validate a client-reported version string, substituting `"0.0.0.0"` for
/// anything that does not match the expected shape. Malformed input is never
/// rejected with an error; it is normalized and compared as all-zero.
pub fn normalize_client(raw: &str) -> &str {
    if CLIENT_SHAPE.is_match(raw) {
        raw
    } else {
        ZERO_VERSION
    }
}

/// Sanitize a store-read reference version by stripping every character that
/// is not a digit or a dot. No shape validation beyond that.
pub fn sanitize_reference(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// An ordered `(major, minor, patch, build)` version, parsed once per request
/// and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTuple([u32; 4]);

impl VersionTuple {
    pub const ZERO: Self = Self([0; 4]);

    /// Parse a client-reported version, applying shape validation first.
    pub fn from_client(raw: &str) -> Self {
        Self::from_sanitized(normalize_client(raw))
    }

    /// Parse a reference version read from the store, applying character
    /// sanitization first.
    pub fn from_reference(raw: &str) -> Self {
        Self::from_sanitized(&sanitize_reference(raw))
    }

    /// Parse a dot-separated string already reduced to `[0-9.]`.
    ///
    /// Fewer than 4 components pads the tail with 0; surplus components are
    /// ignored. A component that fails to parse as a non-negative integer
    /// zeroes the whole tuple: the input is treated as garbage rather than
    /// partially trusted.
    fn from_sanitized(s: &str) -> Self {
        let mut components = [0u32; 4];
        for (slot, component) in components.iter_mut().zip(s.split('.')) {
            match component.parse::<u32>() {
                Ok(n) => *slot = n,
                Err(_) => return Self::ZERO,
            }
        }
        Self(components)
    }

    pub fn components(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.0;
        write!(f, "{major}.{minor}.{patch}.{build}")
    }
}
