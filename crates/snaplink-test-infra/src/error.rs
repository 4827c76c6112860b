use thiserror::Error;

/// Failures while bringing up a disposable test dependency.
#[derive(Debug, Error)]
pub enum TestInfraError {
    /// The container could not be started or inspected.
    #[error("container failure: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    /// The containerised Redis server refused every connection attempt.
    #[error("redis unreachable: {0}")]
    Redis(#[from] redis::RedisError),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;
