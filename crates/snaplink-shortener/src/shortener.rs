use crate::error::Result;
use async_trait::async_trait;
use snaplink_core::{LinkRecord, ShortCode};

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Binds `destination_url` to a freshly committed short code.
    async fn shorten(&self, destination_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to its stored record.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}
