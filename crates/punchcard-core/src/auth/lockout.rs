//! Lockout policy for repeated PIN failures
//!
//! The policy is flat: a fixed number of attempts followed by a fixed
//! cooldown. The cooldown does not escalate across repeated lockouts.

use std::time::Duration;

use crate::{LOCKOUT_DURATION_MS, MAX_ATTEMPTS};

/// Lockout policy applied after repeated failed PIN submissions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Failed submissions allowed before lockout
    pub max_attempts: u32,
    /// Cooldown once locked
    pub lockout_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            lockout_duration: Duration::from_millis(LOCKOUT_DURATION_MS),
        }
    }
}

impl LockoutPolicy {
    /// Check whether the given failure count triggers a lockout
    pub fn is_locked(&self, failed_attempts: u32) -> bool {
        failed_attempts >= self.max_attempts
    }

    /// Submissions left before lockout
    pub fn remaining_attempts(&self, failed_attempts: u32) -> u32 {
        self.max_attempts.saturating_sub(failed_attempts)
    }

    /// Cooldown length in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.lockout_duration.as_millis() as u64
    }

    /// Cooldown length in whole minutes, for user-facing messages
    pub fn duration_minutes(&self) -> u64 {
        self.lockout_duration.as_secs() / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_thresholds() {
        let policy = LockoutPolicy::default();
        assert!(!policy.is_locked(0));
        assert!(!policy.is_locked(2));
        assert!(policy.is_locked(3));
        assert!(policy.is_locked(10));
    }

    #[test]
    fn test_remaining_attempts() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.remaining_attempts(0), 3);
        assert_eq!(policy.remaining_attempts(2), 1);
        assert_eq!(policy.remaining_attempts(5), 0);
    }

    #[test]
    fn test_default_durations() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.duration_ms(), 300_000);
        assert_eq!(policy.duration_minutes(), 5);
    }
}
