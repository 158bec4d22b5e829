//! Interactive PIN entry session
//!
//! A session lives for the duration of one PIN prompt. It owns the digit
//! buffer, the failed-attempt counter, and the lockout countdown; the caller
//! owns the verification call and the timer that drives [`PinSession::tick`].
//!
//! All mutation happens through discrete events: digit input, submission,
//! verification outcome, timer tick, and cancellation. Submission hands the
//! caller a [`SubmitRequest`] to forward to the verification backend;
//! while that call is in flight the session rejects input and further
//! submissions, so two outstanding verification calls cannot exist.

use zeroize::Zeroizing;

use crate::error::AuthError;
use crate::types::{ClockAction, SiteId};
use crate::PIN_LENGTH;

use super::LockoutPolicy;

/// Phase of the PIN entry flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinPhase {
    /// Prompt open, buffer empty
    #[default]
    Idle,
    /// Digits in the buffer
    Entering,
    /// Verification call in flight
    Submitting,
    /// Too many failures; waiting out the cooldown
    Locked,
    /// Dismissed by the employee (terminal)
    Cancelled,
}

/// A verification request produced by [`PinSession::submit`]
///
/// The caller forwards this to the verification backend and reports the
/// outcome back via [`PinSession::resolve_success`] or
/// [`PinSession::resolve_failure`]. The PIN digits are zeroized on drop.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub pin: Zeroizing<String>,
    pub action: ClockAction,
    pub site: SiteId,
}

/// Interactive PIN entry session for one clock action
pub struct PinSession {
    phase: PinPhase,
    pin: Zeroizing<String>,
    attempt_count: u32,
    lockout_remaining_ms: u64,
    last_error: Option<AuthError>,
    focus_requested: bool,
    action: ClockAction,
    site: SiteId,
    policy: LockoutPolicy,
}

impl PinSession {
    /// Open a session for the given action and site with the default policy
    pub fn new(action: ClockAction, site: SiteId) -> Self {
        Self::with_policy(action, site, LockoutPolicy::default())
    }

    /// Open a session with a custom lockout policy
    pub fn with_policy(action: ClockAction, site: SiteId, policy: LockoutPolicy) -> Self {
        Self {
            phase: PinPhase::Idle,
            pin: Zeroizing::new(String::new()),
            attempt_count: 0,
            lockout_remaining_ms: 0,
            last_error: None,
            focus_requested: false,
            action,
            site,
            policy,
        }
    }

    /// Current phase
    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// Digits currently in the buffer
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Failed submissions so far
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Submissions left before lockout
    pub fn remaining_attempts(&self) -> u32 {
        self.policy.remaining_attempts(self.attempt_count)
    }

    /// Whether the session is in the lockout cooldown
    pub fn is_locked(&self) -> bool {
        self.phase == PinPhase::Locked
    }

    /// Milliseconds left in the lockout window
    pub fn lockout_remaining_ms(&self) -> u64 {
        self.lockout_remaining_ms
    }

    /// Seconds left in the lockout window, rounded up
    pub fn lockout_remaining_secs(&self) -> u64 {
        self.lockout_remaining_ms.div_ceil(1_000)
    }

    /// Full lockout window length, for countdown displays
    pub fn lockout_duration_ms(&self) -> u64 {
        self.policy.duration_ms()
    }

    /// Message for the most recent error, if any
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    /// The clock action this session authenticates
    pub fn action(&self) -> ClockAction {
        self.action
    }

    /// The site this session authenticates against
    pub fn site(&self) -> &SiteId {
        &self.site
    }

    /// Replace the digit buffer with `value`
    ///
    /// Only strings of at most four decimal digits are accepted; anything
    /// else leaves the session untouched. Accepted input clears the error
    /// line, and reaching four digits triggers submission automatically.
    /// Ignored while locked, while a verification call is in flight, and
    /// after cancellation.
    pub fn set_input(&mut self, value: &str) -> Option<SubmitRequest> {
        if !matches!(self.phase, PinPhase::Idle | PinPhase::Entering) {
            return None;
        }
        if !is_valid_input(value) {
            return None;
        }
        self.pin = Zeroizing::new(value.to_owned());
        self.last_error = None;
        if !self.pin.is_empty() {
            self.phase = PinPhase::Entering;
        }
        if self.pin.len() == PIN_LENGTH {
            self.submit()
        } else {
            None
        }
    }

    /// Append a single digit (keyboard-driven entry)
    pub fn push_digit(&mut self, digit: char) -> Option<SubmitRequest> {
        let mut next = String::with_capacity(PIN_LENGTH);
        next.push_str(&self.pin);
        next.push(digit);
        self.set_input(&next)
    }

    /// Remove the last digit from the buffer
    pub fn pop_digit(&mut self) {
        if self.pin.is_empty() {
            return;
        }
        let mut next = self.pin.to_string();
        next.pop();
        let _ = self.set_input(&next);
    }

    /// Submit the buffer for verification
    ///
    /// Auto-submission on the fourth digit funnels through here as well, so
    /// validation lives in exactly one place. Requires a full 4-digit buffer;
    /// a short buffer sets the length error and nothing is sent. Ignored
    /// while locked (the lockout message stays up), while a call is already
    /// in flight, and after cancellation.
    pub fn submit(&mut self) -> Option<SubmitRequest> {
        if !matches!(self.phase, PinPhase::Idle | PinPhase::Entering) {
            return None;
        }
        if self.pin.len() != PIN_LENGTH {
            self.last_error = Some(AuthError::InvalidPinLength(PIN_LENGTH));
            return None;
        }
        self.phase = PinPhase::Submitting;
        Some(SubmitRequest {
            pin: self.pin.clone(),
            action: self.action,
            site: self.site.clone(),
        })
    }

    /// Record a successful verification
    ///
    /// Clears the buffer and error, resets the attempt counter, and returns
    /// `true` exactly once per submission. The caller closes the prompt and
    /// proceeds with the clock action.
    pub fn resolve_success(&mut self) -> bool {
        if self.phase != PinPhase::Submitting {
            return false;
        }
        self.pin = Zeroizing::new(String::new());
        self.last_error = None;
        self.attempt_count = 0;
        self.phase = PinPhase::Idle;
        true
    }

    /// Record a failed verification
    ///
    /// Wrong-PIN responses and transport errors land here alike; each one
    /// consumes an attempt. Reaching the policy limit starts the lockout
    /// cooldown. The buffer is cleared and focus is requested back to the
    /// PIN input on both paths.
    pub fn resolve_failure(&mut self) {
        if self.phase != PinPhase::Submitting {
            return;
        }
        self.attempt_count += 1;
        self.pin = Zeroizing::new(String::new());
        self.focus_requested = true;
        if self.policy.is_locked(self.attempt_count) {
            self.lockout_remaining_ms = self.policy.duration_ms();
            self.last_error = Some(AuthError::LockedOut(self.policy.duration_minutes()));
            self.phase = PinPhase::Locked;
        } else {
            self.last_error = Some(AuthError::IncorrectPin(self.remaining_attempts()));
            self.phase = PinPhase::Entering;
        }
    }

    /// Advance the lockout countdown by `elapsed_ms`
    ///
    /// Driven by the caller's 1-second timer; has no effect outside lockout.
    /// When the countdown reaches zero the session unlocks, the attempt
    /// counter resets, and the error line clears.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.phase != PinPhase::Locked {
            return;
        }
        self.lockout_remaining_ms = self.lockout_remaining_ms.saturating_sub(elapsed_ms);
        if self.lockout_remaining_ms == 0 {
            self.phase = PinPhase::Idle;
            self.attempt_count = 0;
            self.last_error = None;
        }
    }

    /// Dismiss the prompt
    ///
    /// Returns `true` when the session transitioned to `Cancelled`. Ignored
    /// during lockout, so the cooldown cannot be skipped by closing and
    /// reopening the prompt.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, PinPhase::Locked | PinPhase::Cancelled) {
            return false;
        }
        self.pin = Zeroizing::new(String::new());
        self.last_error = None;
        self.phase = PinPhase::Cancelled;
        true
    }

    /// Consume the pending focus request raised by a failed attempt
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

/// Check `value` against the accepted buffer shape: zero to four ASCII digits
fn is_valid_input(value: &str) -> bool {
    value.len() <= PIN_LENGTH && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{LOCKOUT_DURATION_MS, LOCKOUT_TICK_MS};

    fn session() -> PinSession {
        PinSession::new(ClockAction::In, SiteId::new("site-9"))
    }

    /// Drive a session through one full failed submission
    fn fail_once(session: &mut PinSession) {
        let request = session.set_input("1111");
        assert!(request.is_some());
        session.resolve_failure();
    }

    #[rstest]
    #[case("", true)]
    #[case("1", true)]
    #[case("123", true)]
    #[case("1234", true)]
    #[case("12345", false)]
    #[case("12a4", false)]
    #[case("abcd", false)]
    #[case(" 123", false)]
    #[case("12.4", false)]
    #[case("１２３４", false)]
    fn input_is_validated(#[case] value: &str, #[case] accepted: bool) {
        let mut s = session();
        s.set_input(value);
        if accepted {
            assert_eq!(s.pin(), value);
        } else {
            assert_eq!(s.pin(), "");
            assert_eq!(s.phase(), PinPhase::Idle);
        }
    }

    #[test]
    fn rejected_input_leaves_error_untouched() {
        let mut s = session();
        s.set_input("123");
        s.submit();
        assert!(s.error_message().is_some());
        s.set_input("12x");
        assert_eq!(s.error_message().unwrap(), "PIN must be exactly 4 digits");
        assert_eq!(s.pin(), "123");
    }

    #[test]
    fn fourth_digit_auto_submits() {
        let mut s = session();
        assert!(s.set_input("123").is_none());
        assert_eq!(s.phase(), PinPhase::Entering);
        let request = s.push_digit('4').expect("fourth digit should submit");
        assert_eq!(request.pin.as_str(), "1234");
        assert_eq!(request.action, ClockAction::In);
        assert_eq!(request.site.as_str(), "site-9");
        assert_eq!(s.phase(), PinPhase::Submitting);
    }

    #[test]
    fn success_clears_state_and_signals_once() {
        let mut s = session();
        fail_once(&mut s);
        assert_eq!(s.attempt_count(), 1);

        s.set_input("1234");
        assert!(s.resolve_success());
        assert_eq!(s.pin(), "");
        assert!(s.error_message().is_none());
        assert_eq!(s.attempt_count(), 0);
        assert_eq!(s.phase(), PinPhase::Idle);

        // A second resolution must not signal again
        assert!(!s.resolve_success());
    }

    #[test]
    fn short_buffer_sets_length_error_without_submitting() {
        let mut s = session();
        s.set_input("123");
        assert!(s.submit().is_none());
        assert_eq!(s.error_message().unwrap(), "PIN must be exactly 4 digits");
        assert_eq!(s.phase(), PinPhase::Entering);
        assert_eq!(s.attempt_count(), 0);
    }

    #[test]
    fn second_failure_reports_one_remaining_attempt() {
        let mut s = session();
        fail_once(&mut s);
        fail_once(&mut s);
        assert_eq!(s.attempt_count(), 2);
        assert!(!s.is_locked());
        let message = s.error_message().unwrap();
        assert!(message.contains('1'), "unexpected message: {message}");
        assert_eq!(s.pin(), "");
    }

    #[test]
    fn third_failure_locks_for_five_minutes() {
        let mut s = session();
        for _ in 0..3 {
            fail_once(&mut s);
        }
        assert!(s.is_locked());
        assert_eq!(s.lockout_remaining_ms(), LOCKOUT_DURATION_MS);
        assert_eq!(s.pin(), "");
        let message = s.error_message().unwrap();
        assert!(message.contains("5 minutes"), "unexpected message: {message}");
    }

    #[test]
    fn locked_session_ignores_input_and_submit() {
        let mut s = session();
        for _ in 0..3 {
            fail_once(&mut s);
        }
        assert!(s.set_input("9").is_none());
        assert_eq!(s.pin(), "");
        assert!(s.submit().is_none());
        // The lockout message must survive the ignored submit
        assert!(s.error_message().unwrap().contains("Locked"));
    }

    #[test]
    fn cancel_is_noop_while_locked() {
        let mut s = session();
        for _ in 0..3 {
            fail_once(&mut s);
        }
        let remaining_before = s.lockout_remaining_ms();
        assert!(!s.cancel());
        assert!(s.is_locked());
        assert_eq!(s.lockout_remaining_ms(), remaining_before);
        assert_eq!(s.attempt_count(), 3);
    }

    #[test]
    fn cancel_is_terminal_otherwise() {
        let mut s = session();
        s.set_input("12");
        assert!(s.cancel());
        assert_eq!(s.phase(), PinPhase::Cancelled);
        assert_eq!(s.pin(), "");
        assert!(!s.cancel());
        assert!(s.set_input("1").is_none());
    }

    #[test]
    fn lockout_expires_after_300_ticks() {
        let mut s = session();
        for _ in 0..3 {
            fail_once(&mut s);
        }
        for _ in 0..299 {
            s.tick(LOCKOUT_TICK_MS);
            assert!(s.is_locked());
        }
        s.tick(LOCKOUT_TICK_MS);
        assert!(!s.is_locked());
        assert_eq!(s.phase(), PinPhase::Idle);
        assert_eq!(s.attempt_count(), 0);
        assert!(s.error_message().is_none());
    }

    #[test]
    fn tick_is_noop_while_unlocked() {
        let mut s = session();
        s.set_input("12");
        s.tick(LOCKOUT_TICK_MS);
        assert_eq!(s.pin(), "12");
        assert_eq!(s.phase(), PinPhase::Entering);
        assert_eq!(s.lockout_remaining_ms(), 0);
    }

    #[test]
    fn no_second_submission_while_one_is_in_flight() {
        let mut s = session();
        let first = s.set_input("1234");
        assert!(first.is_some());
        // Both the explicit entry point and new input are rejected mid-flight
        assert!(s.submit().is_none());
        assert!(s.set_input("9999").is_none());
        assert_eq!(s.phase(), PinPhase::Submitting);
    }

    #[test]
    fn failure_requests_focus_once() {
        let mut s = session();
        fail_once(&mut s);
        assert!(s.take_focus_request());
        assert!(!s.take_focus_request());
    }

    #[test]
    fn cancel_during_flight_discards_late_outcome() {
        let mut s = session();
        s.set_input("1234");
        assert!(s.cancel());
        // The in-flight verification resolves after dismissal; nothing moves
        assert!(!s.resolve_success());
        s.resolve_failure();
        assert_eq!(s.attempt_count(), 0);
        assert_eq!(s.phase(), PinPhase::Cancelled);
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut s = session();
        s.set_input("123");
        s.pop_digit();
        assert_eq!(s.pin(), "12");
        s.pop_digit();
        s.pop_digit();
        assert_eq!(s.pin(), "");
        // Popping an empty buffer stays put
        s.pop_digit();
        assert_eq!(s.pin(), "");
    }
}
