use crate::error::StoreError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for link store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A stored association of a short code with its destination.
///
/// Records are created once by a [`LinkStore`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The short code identifying this record.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub destination_url: String,
    /// When the record was committed.
    pub created_at: Timestamp,
}

impl LinkRecord {
    pub fn new(short_code: ShortCode, destination_url: impl Into<String>) -> Self {
        Self {
            short_code,
            destination_url: destination_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Mapping from short code to [`LinkRecord`].
///
/// `try_insert` is the only mutating operation. For any number of concurrent
/// `try_insert` calls with the same code, exactly one returns `Ok(true)`.
/// `lookup` racing an insert on the same code observes either `None` or the
/// complete record.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts a record for `code` if and only if `code` is absent.
    ///
    /// Returns `true` if this call created the record, `false` if the code
    /// was already taken. The store stamps `created_at` at commit time.
    async fn try_insert(&self, code: &ShortCode, destination_url: &str) -> Result<bool>;

    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_rfc3339_timestamp() {
        let record = LinkRecord {
            short_code: ShortCode::new("abc123").unwrap(),
            destination_url: "https://example.com".to_string(),
            created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["short_code"], "abc123");
        assert_eq!(json["destination_url"], "https://example.com");
        assert_eq!(json["created_at"], "2026-01-01T00:00:00Z");

        let back: LinkRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
