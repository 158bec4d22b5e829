//! Error types for the PIN authentication flow

use thiserror::Error;

/// Errors surfaced to the employee during PIN entry
///
/// All of these are recoverable: input validation errors cost nothing,
/// incorrect PINs consume an attempt, and a lockout expires on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Submission attempted with a short or empty buffer
    #[error("PIN must be exactly {0} digits")]
    InvalidPinLength(usize),

    /// Verification rejected the PIN (or the call failed; the two are not
    /// distinguished at this level)
    #[error("Incorrect PIN ({0} attempts remaining)")]
    IncorrectPin(u32),

    /// Too many failures; submissions are rejected until the wait elapses
    #[error("Too many failed attempts. Locked for {0} minutes")]
    LockedOut(u64),
}
