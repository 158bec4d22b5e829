//! Screen modules for different views

pub mod dashboard;
pub mod help;
pub mod lockout;
pub mod pin_entry;
pub mod profile;
pub mod reports;
pub mod settings;
pub mod splash;
