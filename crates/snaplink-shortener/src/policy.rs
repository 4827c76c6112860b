use std::time::Duration;
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Bounds on the candidate/commit loop of a single allocation.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct AllocationPolicy {
    /// Maximum number of candidates tried. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Wall-clock budget for the whole allocation, if any.
    #[builder(default, setter(strip_option))]
    pub deadline: Option<Duration>,
}

impl AllocationPolicy {
    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}
