//! Core types and traits for the snaplink URL shortener.
//!
//! This crate provides the short code type, the stored link record and the
//! [`LinkStore`] contract shared by the generator, the storage backends,
//! the shortener service and the HTTP gateway.

pub mod error;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StoreError};
pub use shortcode::ShortCode;
pub use store::{LinkRecord, LinkStore};
