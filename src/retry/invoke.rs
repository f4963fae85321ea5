use std::fmt::Display;
use std::future::Future;

use tokio::time::sleep;

use super::policy::RetryPolicy;

/// Runs `op` until it succeeds or the policy's attempt budget is spent.
///
/// Attempts are strictly sequential. After a failed attempt that is not the
/// last one, the invoker sleeps for the policy's constant delay and calls
/// `op` again. A success returns immediately. The last failure is returned
/// unchanged; earlier failures are only logged.
pub async fn invoke<F, Fut, T, E>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts().get();
    let mut attempt = 1u32;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => {
                log::debug!("attempt {attempt}/{max_attempts} failed, giving up: {err}");
                return Err(err);
            }
            Err(err) => {
                log::warn!(
                    "attempt {attempt}/{max_attempts} failed, retrying in {}ms: {err}",
                    policy.delay_ms()
                );
                sleep(policy.delay()).await;
                attempt += 1;
            }
        }
    }
}
