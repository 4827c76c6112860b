//! Short code generators.
//!
//! Generators only propose candidates. Uniqueness is decided by the
//! [`LinkStore`](snaplink_core::LinkStore) at commit time, so a generator
//! may legitimately return a code that is already taken.

pub mod error;
pub mod random;
pub mod seq;

pub use error::GeneratorError;
pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use snaplink_core::shortcode::MAX_LENGTH;
use snaplink_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next candidate short code.
    fn generate(&self) -> ShortCode;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self) -> ShortCode {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    fn generate(&self) -> ShortCode {
        (**self).generate()
    }
}

pub(crate) fn check_length(length: usize) -> error::Result<usize> {
    if length == 0 || length > MAX_LENGTH {
        return Err(GeneratorError::InvalidLength {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(length)
}
