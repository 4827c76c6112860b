use crate::error::Result;
use crate::{check_length, Generator};
use snaplink_core::shortcode::{ALPHABET, DEFAULT_LENGTH};
use snaplink_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A short code generator using a sequential counter.
///
/// The counter is rendered as a fixed-width base62 number over the short
/// code alphabet, so the first codes of a 6-character generator are
/// `aaaaaa`, `aaaaab`, `aaaaac`, ... The counter wraps around once the code
/// space is exhausted; the store then rejects the repeats as collisions.
///
/// For multi-node deployments, give each node a disjoint offset.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    length: usize,
    space: Option<u64>,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            length: self.length,
            space: self.space,
        }
    }
}

impl SeqGenerator {
    /// Creates a sequential generator of `length`-character codes starting at zero.
    pub fn new(length: usize) -> Result<Self> {
        Self::with_offset(length, 0)
    }

    /// Creates a sequential generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state or distributing counter
    /// ranges across nodes (e.g., node 1 starts at 0, node 2 at 1_000_000).
    pub fn with_offset(length: usize, offset: u64) -> Result<Self> {
        let length = check_length(length)?;
        Ok(Self {
            counter: AtomicU64::new(offset),
            length,
            space: (ALPHABET.len() as u64).checked_pow(length as u32),
        })
    }

    fn encode(&self, mut value: u64) -> String {
        if let Some(space) = self.space {
            value %= space;
        }

        let base = ALPHABET.len() as u64;
        let mut digits = vec![ALPHABET[0]; self.length];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(value % base) as usize];
            value /= base;
        }

        // digits are drawn from ALPHABET, which is ASCII
        digits.into_iter().map(char::from).collect()
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(0),
            length: DEFAULT_LENGTH,
            space: (ALPHABET.len() as u64).checked_pow(DEFAULT_LENGTH as u32),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(self.encode(count))
    }
}
