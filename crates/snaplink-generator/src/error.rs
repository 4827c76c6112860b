use thiserror::Error;

/// Errors returned when constructing a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid code length {length}; expected 1..={max}")]
    InvalidLength { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
