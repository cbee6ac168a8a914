//! Login Attempt Record Entity
//!
//! Per-username failure counter backing the login throttle.
//!
//! A record is created lazily on the first failed attempt, reset to
//! empty on a successful login, and never deleted. The first-failure
//! timestamp marks the start of the current lockout window, not the
//! most recent failure; once set it only changes on reset. An elapsed
//! window stops blocking but does not reset the counter.
//!
//! Invariant: `first_failure_at.is_some()` iff `failure_count > 0`.

use chrono::{DateTime, Utc};

/// Result of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The attempt may proceed to credential verification
    Allowed,
    /// The attempt is rejected without checking credentials
    Blocked {
        /// Seconds until the window elapses
        retry_after_secs: u64,
    },
}

/// Per-username login attempt record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Consecutive failures since the last success
    pub failure_count: u32,
    /// Start of the current lockout window
    pub first_failure_at: Option<DateTime<Utc>>,
}

impl AttemptRecord {
    /// Failures before admission is blocked
    pub const MAX_FAILURES: u32 = 5;
    /// Lockout window in seconds (15 minutes)
    pub const WINDOW_SECS: i64 = 900;

    /// Check whether a login attempt for this record may proceed.
    ///
    /// Blocked iff the failure count has reached [`Self::MAX_FAILURES`]
    /// and less than [`Self::WINDOW_SECS`] have passed since the first
    /// failure. Once the window has elapsed the attempt is admitted
    /// even though the counter is stale; only a success resets it.
    pub fn admission(&self, now: DateTime<Utc>) -> Admission {
        if self.failure_count >= Self::MAX_FAILURES {
            if let Some(first) = self.first_failure_at {
                let elapsed = (now - first).num_seconds();
                if elapsed < Self::WINDOW_SECS {
                    return Admission::Blocked {
                        retry_after_secs: (Self::WINDOW_SECS - elapsed).max(1) as u64,
                    };
                }
            }
        }
        Admission::Allowed
    }

    /// Record a failed attempt.
    ///
    /// The first failure opens the window; later failures increment the
    /// counter and leave the window start untouched.
    pub fn record_failure(&mut self, now: DateTime<Utc>) {
        if self.first_failure_at.is_none() {
            self.first_failure_at = Some(now);
        }
        self.failure_count += 1;
    }

    /// Reset to the empty record after a successful login.
    pub fn reset(&mut self) {
        self.failure_count = 0;
        self.first_failure_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn failed_n_times(n: u32, first_at: DateTime<Utc>) -> AttemptRecord {
        let mut record = AttemptRecord::default();
        for i in 0..n {
            record.record_failure(first_at + Duration::seconds(i as i64));
        }
        record
    }

    #[test]
    fn test_empty_record_is_allowed() {
        let record = AttemptRecord::default();
        assert_eq!(record.admission(Utc::now()), Admission::Allowed);
    }

    #[test]
    fn test_below_threshold_is_allowed() {
        let now = Utc::now();
        let record = failed_n_times(4, now);
        assert_eq!(record.admission(now), Admission::Allowed);
    }

    #[test]
    fn test_threshold_within_window_is_blocked() {
        let now = Utc::now();
        let record = failed_n_times(5, now);
        assert!(matches!(
            record.admission(now + Duration::seconds(10)),
            Admission::Blocked { .. }
        ));
    }

    #[test]
    fn test_retry_after_counts_down() {
        let now = Utc::now();
        let record = failed_n_times(5, now);

        match record.admission(now + Duration::seconds(300)) {
            Admission::Blocked { retry_after_secs } => assert_eq!(retry_after_secs, 600),
            Admission::Allowed => panic!("expected blocked"),
        }
    }

    #[test]
    fn test_elapsed_window_is_allowed() {
        let now = Utc::now();
        let record = failed_n_times(5, now);
        assert_eq!(
            record.admission(now + Duration::seconds(901)),
            Admission::Allowed
        );
    }

    #[test]
    fn test_elapsed_window_does_not_reset_counter() {
        let now = Utc::now();
        let mut record = failed_n_times(5, now);

        // Window elapses; a further failure increments the stale counter
        // without reopening the old window start.
        let later = now + Duration::seconds(1000);
        record.record_failure(later);

        assert_eq!(record.failure_count, 6);
        assert_eq!(record.first_failure_at, Some(now));
        // Still allowed: the window anchored at `now` has elapsed.
        assert_eq!(record.admission(later), Admission::Allowed);
    }

    #[test]
    fn test_first_failure_at_is_stable() {
        let now = Utc::now();
        let mut record = AttemptRecord::default();

        record.record_failure(now);
        record.record_failure(now + Duration::seconds(60));
        record.record_failure(now + Duration::seconds(120));

        assert_eq!(record.failure_count, 3);
        assert_eq!(record.first_failure_at, Some(now));
    }

    #[test]
    fn test_reset_starts_fresh_window() {
        let now = Utc::now();
        let mut record = failed_n_times(5, now);

        record.reset();
        assert_eq!(record.failure_count, 0);
        assert_eq!(record.first_failure_at, None);

        // A failure after a success opens a new window
        let later = now + Duration::seconds(500);
        record.record_failure(later);
        assert_eq!(record.failure_count, 1);
        assert_eq!(record.first_failure_at, Some(later));
    }

    #[test]
    fn test_invariant_timestamp_iff_failures() {
        let mut record = AttemptRecord::default();
        assert!(record.first_failure_at.is_none() && record.failure_count == 0);

        record.record_failure(Utc::now());
        assert!(record.first_failure_at.is_some() && record.failure_count > 0);

        record.reset();
        assert!(record.first_failure_at.is_none() && record.failure_count == 0);
    }
}
