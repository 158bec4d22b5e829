//! PIN authentication flow for clock actions
//!
//! One [`PinSession`] backs one open PIN prompt. The session is a pure state
//! machine: the caller performs the verification call, drives the 1-second
//! lockout timer, and reports outcomes back into the session.

mod lockout;
mod session;

pub use lockout::LockoutPolicy;
pub use session::{PinPhase, PinSession, SubmitRequest};
