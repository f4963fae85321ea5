use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

/// Default number of attempts, the first one included.
pub const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default pause between two attempts, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 2_000;

/// Fixed-count, constant-delay retry configuration.
///
/// `max_attempts` is non-zero so every invocation makes at least one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryPolicy {
    max_attempts: NonZeroU32,
    delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::defaults()
    }
}

impl RetryPolicy {
    /// Creates a policy, rejecting `max_attempts == 0`.
    pub fn new(max_attempts: u32, delay_ms: u64) -> Result<Self, BudgetError> {
        let max_attempts = NonZeroU32::new(max_attempts).ok_or_else(|| {
            BudgetError::InvalidPolicy("max_attempts must be at least 1".to_string())
        })?;
        Ok(Self {
            max_attempts,
            delay_ms,
        })
    }

    /// 3 attempts, 2 seconds apart.
    pub const fn defaults() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn max_attempts(&self) -> NonZeroU32 {
        self.max_attempts
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
