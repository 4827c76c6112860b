mod link;

pub use link::{ErrorResponse, HealthResponse, ShortenResponse};
