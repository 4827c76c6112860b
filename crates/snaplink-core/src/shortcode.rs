use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// The 62 symbols a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated short codes unless a deployment configures otherwise.
pub const DEFAULT_LENGTH: usize = 6;

/// Upper bound on the length of any short code.
pub const MAX_LENGTH: usize = 32;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are 1-32 characters long and contain only characters from
/// [`ALPHABET`]. Generated codes have a fixed length, [`DEFAULT_LENGTH`]
/// unless configured otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators drawing from [`ALPHABET`]).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `c` is one of the 62 short code symbols.
    pub fn is_symbol(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    fn validate(code: &str) -> Result<()> {
        if code.is_empty() || code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(Self::is_symbol) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only ASCII letters and digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ShortCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_62_unique_symbols() {
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| ShortCode::is_symbol(*b as char)));
    }

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("a").is_ok());
        assert!(ShortCode::new("Ab3xY9").is_ok());
        assert!(ShortCode::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn empty_or_too_long() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc-de").is_err());
        assert!(ShortCode::new("abc_de").is_err());
        assert!(ShortCode::new("abc/de").is_err());
        assert!(ShortCode::new("héllo").is_err());
    }

    #[test]
    fn to_url_joins_with_single_slash() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("http://localhost:3000"), "http://localhost:3000/abc123");
        assert_eq!(code.to_url("https://snap.link/"), "https://snap.link/abc123");
    }

    #[test]
    fn deserialize_rejects_invalid_code() {
        let ok: ShortCode = serde_json::from_str("\"Xy12Zz\"").unwrap();
        assert_eq!(ok.as_str(), "Xy12Zz");

        assert!(serde_json::from_str::<ShortCode>("\"not valid\"").is_err());
    }
}
