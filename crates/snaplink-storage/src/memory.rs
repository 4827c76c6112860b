use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snaplink_core::store::Result;
use snaplink_core::{LinkRecord, LinkStore, ShortCode};
use tracing::trace;

/// In-memory implementation of [`LinkStore`] using DashMap.
///
/// The existence check and the write in `try_insert` happen under the same
/// shard lock through the entry API, so two callers racing on one code can
/// never both win. Lookups on other shards proceed without blocking.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    storage: DashMap<String, LinkRecord>,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn try_insert(&self, code: &ShortCode, destination_url: &str) -> Result<bool> {
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "short code already taken");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                slot.insert(LinkRecord::new(code.clone(), destination_url));
                trace!(code = %code, "short code committed");
                Ok(true)
            }
        }
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }
}
