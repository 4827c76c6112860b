use crate::error::Result;
use crate::{check_length, Generator};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snaplink_core::shortcode::{ALPHABET, DEFAULT_LENGTH};
use snaplink_core::ShortCode;

/// Draws fixed-length codes uniformly from the 62-symbol alphabet.
///
/// The randomness is not cryptographically secure; short codes are
/// identifiers, not secrets.
#[derive(Debug)]
pub struct RandomGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl RandomGenerator {
    /// Creates a generator of `length`-character codes seeded from OS entropy.
    pub fn new(length: usize) -> Result<Self> {
        Ok(Self {
            length: check_length(length)?,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Creates a generator with a fixed seed, producing a reproducible sequence.
    pub fn with_seed(length: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            length: check_length(length)?,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = self.rng.lock();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratorError;

    #[test]
    fn default_generates_six_alphabet_characters() {
        let generator = RandomGenerator::default();

        for _ in 0..1_000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), DEFAULT_LENGTH);
            assert!(code.as_str().bytes().all(|b| ALPHABET.contains(&b)));
            // generated codes must pass the same validation as parsed ones
            assert!(ShortCode::new(code.as_str()).is_ok());
        }
    }

    #[test]
    fn honours_configured_length() {
        let generator = RandomGenerator::new(10).unwrap();
        assert_eq!(generator.length(), 10);
        assert_eq!(generator.generate().as_str().len(), 10);
    }

    #[test]
    fn rejects_out_of_range_length() {
        assert_eq!(
            RandomGenerator::new(0).unwrap_err(),
            GeneratorError::InvalidLength { length: 0, max: 32 }
        );
        assert!(RandomGenerator::new(33).is_err());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = RandomGenerator::with_seed(6, 42).unwrap();
        let b = RandomGenerator::with_seed(6, 42).unwrap();

        for _ in 0..16 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn draws_are_spread_across_the_alphabet() {
        let generator = RandomGenerator::with_seed(8, 7).unwrap();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.extend(generator.generate().as_str().bytes());
        }

        // 4000 uniform draws over 62 symbols hit every symbol
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
