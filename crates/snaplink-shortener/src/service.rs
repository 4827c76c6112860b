use crate::error::{Result, ShortenerError};
use crate::policy::AllocationPolicy;
use crate::shortener::Shortener;
use async_trait::async_trait;
use snaplink_core::{LinkRecord, LinkStore, ShortCode};
use snaplink_generator::Generator;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`LinkStore`] and a [`Generator`] to handle:
/// - URL validation
/// - Candidate generation with collision retry
/// - Bounding the retry loop by an [`AllocationPolicy`]
///
/// The generator only proposes codes. Uniqueness is enforced by the store's
/// atomic `try_insert`, so concurrent allocations never share a code.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    policy: AllocationPolicy,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            policy: self.policy.clone(),
        }
    }
}

impl<S: LinkStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with the default allocation policy.
    pub fn new(store: S, generator: G) -> Self {
        Self::from_shared(Arc::new(store), Arc::new(generator))
    }

    /// Creates a service over a store and generator that are shared elsewhere.
    pub fn from_shared(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            policy: AllocationPolicy::default(),
        }
    }

    /// Replaces the default allocation policy.
    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates that the URL is a non-blank string. Reachability is not checked.
    fn validate_url(url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Binds `destination_url` to a new short code using the service policy.
    pub async fn allocate(&self, destination_url: &str) -> Result<ShortCode> {
        self.allocate_with(destination_url, &self.policy).await
    }

    /// Binds `destination_url` to a new short code using a caller-supplied policy.
    ///
    /// Each candidate is committed with a single `try_insert`; a rejected
    /// candidate leaves the store untouched. Fails with
    /// [`ShortenerError::CapacityExhausted`] once `max_attempts` candidates
    /// collided, or [`ShortenerError::DeadlineExceeded`] if the deadline
    /// passes before a free code is found.
    pub async fn allocate_with(
        &self,
        destination_url: &str,
        policy: &AllocationPolicy,
    ) -> Result<ShortCode> {
        Self::validate_url(destination_url)?;

        let started = Instant::now();
        let max_attempts = policy.attempts();

        for attempt in 1..=max_attempts {
            if policy
                .deadline
                .is_some_and(|deadline| started.elapsed() >= deadline)
            {
                warn!(attempts = attempt - 1, "short code allocation deadline exceeded");
                return Err(ShortenerError::DeadlineExceeded {
                    attempts: attempt - 1,
                });
            }

            let candidate = self.generator.generate();
            if self.store.try_insert(&candidate, destination_url).await? {
                debug!(code = %candidate, attempt, "allocated short code");
                return Ok(candidate);
            }

            trace!(code = %candidate, attempt, "short code collision, retrying");
        }

        warn!(attempts = max_attempts, "short code space exhausted");
        Err(ShortenerError::CapacityExhausted {
            attempts: max_attempts,
        })
    }

    /// Looks up the record bound to `code`.
    pub async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.store.lookup(code).await?)
    }
}

#[async_trait]
impl<S: LinkStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, destination_url: &str) -> Result<ShortCode> {
        self.allocate(destination_url).await
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        self.lookup(code).await
    }
}
