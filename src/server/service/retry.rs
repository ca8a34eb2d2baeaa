use std::{future::Future, pin::Pin};

use crate::server::{
    config::RetryConfig,
    error::{retry::ErrorRetryStrategy, Error},
};

/// Future returned by a single attempt of a retried operation
pub type RetryFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'a>>;

/// Retry logic for requests that write to the store.
///
/// Only errors classified as [`ErrorRetryStrategy::Retry`] are attempted again; every other
/// error is returned immediately.
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff: std::time::Duration,
}

impl RetryContext {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: config.initial_backoff,
        }
    }

    /// Execute an operation with automatic retry logic
    ///
    /// Each attempt calls `operation` again, so the operation must rebuild any state it
    /// consumes (services, cloned inputs) inside the returned future.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "progress upsert")
    /// - `operation`: Function producing the future for one attempt
    pub async fn execute_with_retry<'a, R, F>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<'a, R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => return Err(e),
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count + 1,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
