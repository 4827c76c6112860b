//! URL shortener service implementation.
//!
//! [`ShortenerService`] binds a [`Generator`](snaplink_generator::Generator)
//! to a [`LinkStore`](snaplink_core::LinkStore): it draws candidates and
//! commits the first free one, within the bounds of an [`AllocationPolicy`].

pub mod error;
pub mod policy;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use policy::AllocationPolicy;
pub use service::ShortenerService;
pub use shortener::Shortener;
