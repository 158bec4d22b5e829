//! Punchcard Core - Shared types and the PIN clock-authentication flow
//!
//! This crate provides the foundational types for the Punchcard time-clock
//! terminal: site and employee identifiers, clock actions and time entries,
//! and the interactive PIN entry session with its lockout policy.
//!
//! Everything here is synchronous and I/O-free. Network calls and timers are
//! owned by the caller, which feeds their outcomes back into the session as
//! discrete events.

pub mod auth;
pub mod error;
pub mod types;

pub use auth::{LockoutPolicy, PinPhase, PinSession, SubmitRequest};
pub use error::AuthError;
pub use types::{
    ClockAction, Coordinates, Employee, EmployeeId, PayPeriod, ReportRow, SiteId, TimeEntry,
};

/// Required PIN length in digits
pub const PIN_LENGTH: usize = 4;

/// Failed submissions allowed before lockout
pub const MAX_ATTEMPTS: u32 = 3;

/// Lockout duration in milliseconds (5 minutes)
pub const LOCKOUT_DURATION_MS: u64 = 300_000;

/// Interval of the lockout countdown timer in milliseconds
pub const LOCKOUT_TICK_MS: u64 = 1_000;
