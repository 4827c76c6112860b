//! [`LinkStore`] backends.

pub mod memory;
pub mod redis;

pub use memory::InMemoryLinkStore;
pub use self::redis::RedisLinkStore;
pub use snaplink_core::{LinkRecord, LinkStore, StoreError};
