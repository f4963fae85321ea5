#[path = "retry/policy.rs"]
mod policy;

#[path = "retry/invoke.rs"]
mod invoke;

pub use invoke::invoke;
pub use policy::{RetryPolicy, DEFAULT_DELAY_MS, DEFAULT_MAX_ATTEMPTS};
