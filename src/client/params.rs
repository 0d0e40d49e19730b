//! Query-string / form-body parameter codec
//!
//! Decoding follows the wire conventions of the existing pages: pairs are
//! `&`-joined, keys and values percent-decoded, and values additionally
//! un-escape `%3D`/`%26` sequences that survived the first decode so that
//! values which were themselves percent-encoded structured strings round-trip.

use std::collections::HashMap;

/// Decoded value of one parameter.
///
/// A decoded value literally equal to `"undefined"` is normalized to the
/// boolean flag rather than kept as a string, as is a pair with no `=` at all
/// (which decodes to the same thing on the wire). Unusual, but existing
/// callers depend on it; do not clean this up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Flag,
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Flag)
    }
}

/// Decoded form of a query string or form body. Keys are unique; insertion
/// order is irrelevant.
pub type ParameterMap = HashMap<String, ParamValue>;

/// Decode a query string into a [`ParameterMap`]. Empty input yields an
/// empty map. A single leading `?` is stripped if present; empty pairs
/// (`a=1&&b=2`) are skipped.
pub fn decode(query: &str) -> ParameterMap {
    let mut params = ParameterMap::new();
    if query.is_empty() {
        return params;
    }

    let stripped = query.strip_prefix('?').unwrap_or(query);
    for pair in stripped.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (percent_decode(key), Some(percent_decode(value))),
            None => (percent_decode(pair), None),
        };
        let value = match value {
            Some(value) => {
                // Second-level unescape for values that carried an encoded
                // `key=value` structure of their own.
                let value = value.replace("%3D", "=").replace("%26", "&");
                if value == "undefined" {
                    ParamValue::Flag
                } else {
                    ParamValue::Text(value)
                }
            }
            None => ParamValue::Flag,
        };
        params.insert(key, value);
    }

    params
}

/// Percent-encode a string for use as a single parameter value.
///
/// Matches the `encodeURIComponent` charset: ASCII alphanumerics and
/// `-_.!~*'()` pass through, everything else becomes uppercase `%XX` UTF-8
/// sequences.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unescaped(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Percent-decode a string. Malformed `%` sequences are kept literally
/// instead of failing the whole decode.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn is_unescaped(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
