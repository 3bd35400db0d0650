//! Bounded retry of transient transport failures.

use gridfeed_types::{ConfigError, GridfeedError, TimeRange};
use log::warn;
use std::time::Duration;

use crate::client::{HttpReply, TransportError};

/// Retry policy for a single chunk request: a fixed number of attempts
/// with a fixed delay in between.
///
/// Only transient transport failures are retried; everything else is the
/// classifier's business and returns on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a new policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroRetryAttempts`] when `attempts` is zero;
    /// a policy that never issues a request is a configuration mistake and
    /// is rejected here rather than at call time.
    pub const fn new(attempts: u32, delay: Duration) -> Result<Self, ConfigError> {
        if attempts == 0 {
            return Err(ConfigError::ZeroRetryAttempts);
        }
        Ok(Self { attempts, delay })
    }

    /// Creates a single-attempt policy with no delay.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// Returns the attempt bound.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Executes one chunk request, retrying transient failures up to the
    /// attempt bound with a blocking sleep in between.
    ///
    /// # Errors
    ///
    /// Returns [`GridfeedError::Transport`] carrying the last transient
    /// failure after exhausting all attempts, or
    /// [`GridfeedError::UnretryableTransport`] immediately on a
    /// non-transient one.
    pub fn run<F>(&self, range: TimeRange, mut op: F) -> Result<HttpReply, GridfeedError>
    where
        F: FnMut(TimeRange) -> Result<HttpReply, TransportError>,
    {
        let mut attempt = 1;
        loop {
            match op(range) {
                Ok(reply) => return Ok(reply),
                Err(error) if error.is_transient() => {
                    if attempt >= self.attempts {
                        return Err(GridfeedError::Transport {
                            attempts: self.attempts,
                            message: error.to_string(),
                        });
                    }
                    warn!(
                        "transient failure for {range} (attempt {attempt}/{}): {error}; \
                         retrying in {:?}",
                        self.attempts, self.delay
                    );
                    std::thread::sleep(self.delay);
                    attempt += 1;
                }
                Err(error) => {
                    return Err(GridfeedError::UnretryableTransport(error.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn any_range() -> TimeRange {
        TimeRange::new(
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn ok_reply() -> HttpReply {
        HttpReply {
            status: 200,
            body: "<doc/>".to_string(),
        }
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert_eq!(
            RetryPolicy::new(0, Duration::ZERO).unwrap_err(),
            ConfigError::ZeroRetryAttempts
        );
    }

    #[test]
    fn test_succeeds_after_transient_failures() {
        let policy = RetryPolicy::new(3, Duration::ZERO).unwrap();
        let mut calls = 0;
        let reply = policy
            .run(any_range(), |_| {
                calls += 1;
                if calls < 3 {
                    Err(TransportError::Connection("reset".to_string()))
                } else {
                    Ok(ok_reply())
                }
            })
            .unwrap();
        assert_eq!(calls, 3);
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn test_exhausts_attempts() {
        let policy = RetryPolicy::new(3, Duration::ZERO).unwrap();
        let mut calls = 0;
        let err = policy
            .run(any_range(), |_| {
                calls += 1;
                Err(TransportError::Connection("refused".to_string()))
            })
            .unwrap_err();
        assert_eq!(calls, 3);
        assert!(matches!(
            err,
            GridfeedError::Transport { attempts: 3, .. }
        ));
    }

    #[test]
    fn test_single_attempt_fails_immediately() {
        let policy = RetryPolicy::new(1, Duration::from_secs(60)).unwrap();
        let mut calls = 0;
        let start = std::time::Instant::now();
        let err = policy
            .run(any_range(), |_| {
                calls += 1;
                Err(TransportError::Connection("dns".to_string()))
            })
            .unwrap_err();
        // One attempt, no sleep: the 60s delay must never be observed.
        assert_eq!(calls, 1);
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(matches!(
            err,
            GridfeedError::Transport { attempts: 1, .. }
        ));
    }

    #[test]
    fn test_non_transient_not_retried() {
        let policy = RetryPolicy::new(5, Duration::ZERO).unwrap();
        let mut calls = 0;
        let err = policy
            .run(any_range(), |_| {
                calls += 1;
                Err(TransportError::Request("bad redirect".to_string()))
            })
            .unwrap_err();
        assert_eq!(calls, 1);
        // Distinct from retry exhaustion: the caller can tell this error
        // was never retryable.
        assert!(matches!(err, GridfeedError::UnretryableTransport(_)));
    }

    #[test]
    fn test_success_needs_no_retry() {
        let policy = RetryPolicy::single();
        let mut calls = 0;
        let reply = policy
            .run(any_range(), |_| {
                calls += 1;
                Ok(ok_reply())
            })
            .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(reply, ok_reply());
    }
}
