//! Punchcard API - REST client for the time-clock server
//!
//! Implements the server-side contracts the terminal consumes: PIN
//! verification, clock registration, pay report retrieval, and profile
//! picture management, plus best-effort geolocation for clock events.
//!
//! The client never interprets PIN policy; attempt counting and lockout are
//! the session's business. Any error from here is a plain failure to the
//! caller.

pub mod client;
pub mod error;
pub mod geo;
pub mod models;

pub use client::{ApiClient, ClockService, PinVerifier};
pub use error::{ApiError, Result};
pub use geo::{CachedLocator, LocationProvider, StaticLocation};
pub use models::ClockOutcome;
