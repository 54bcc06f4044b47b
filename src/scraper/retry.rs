//! Bounded retry wrapper for flaky navigation steps

use crate::Result;
use std::time::Duration;

/// Runs `op` up to `attempts` times with a fixed delay between attempts
///
/// Each failed attempt is logged with `operation` for context. The last
/// error is returned when all attempts are exhausted.
pub fn with_retries<T, F>(
    attempts: u32,
    delay: Duration,
    operation: &str,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    "Attempt {}/{} for {} failed: {}",
                    attempt,
                    attempts,
                    operation,
                    e
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
