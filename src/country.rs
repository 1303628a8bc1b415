//! Two-letter country codes as emitted by flag emoji.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset between an ASCII capital letter and its regional indicator symbol.
pub const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// An ISO 3166-1 alpha-2 code (or one of the few non-standard codes flag
/// emoji carry, such as `EU`).
///
/// Always exactly two ASCII uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a code, accepting only two ASCII uppercase letters.
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Some(Self([*a, *b])),
            _ => None,
        }
    }

    /// Build a code from two letters of either case.
    pub fn from_letters(a: char, b: char) -> Option<Self> {
        if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
            return None;
        }
        Some(Self([
            a.to_ascii_uppercase() as u8,
            b.to_ascii_uppercase() as u8,
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII uppercase by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Reconstruct the flag emoji from the two regional indicator symbols.
    pub fn flag(&self) -> String {
        self.0
            .iter()
            .filter_map(|&b| char::from_u32(b as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid country code '{}'", value))
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}
