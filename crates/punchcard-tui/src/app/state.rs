//! Application state

use chrono::{Duration, Local};
use punchcard_core::{
    ClockAction, Employee, PayPeriod, PinSession, ReportRow, SubmitRequest, TimeEntry,
};

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Splash/welcome screen
    #[default]
    Splash,

    /// Main menu with clock status
    Dashboard,

    /// PIN prompt for the pending clock action
    PinEntry,

    /// Lockout countdown after repeated PIN failures
    Lockout,

    /// Pay-period report view
    Reports,

    /// Employee profile view
    Profile,

    /// Server and site settings
    Settings,

    /// Help screen
    Help,
}

/// Application state
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Dashboard menu selection index
    pub menu_index: usize,

    /// Action the next successful PIN entry will register
    pub next_action: ClockAction,

    /// Open PIN prompt, if any
    pub pin_session: Option<PinSession>,

    /// Verification in flight; the PIN is retained for the follow-up
    /// clock registration
    pub pending_submit: Option<SubmitRequest>,

    /// Identity from the most recent successful verification
    pub employee: Option<Employee>,

    /// Most recent registered clock event
    pub last_entry: Option<TimeEntry>,

    /// Whether a clock registration is in flight
    pub clock_in_flight: bool,

    /// Period the report view covers
    pub report_period: PayPeriod,

    /// Fetched report rows
    pub report_rows: Option<Vec<ReportRow>>,

    /// Whether a report fetch is in flight
    pub report_loading: bool,

    /// Report view scroll offset
    pub report_scroll: usize,

    /// Fetched profile
    pub profile: Option<Employee>,

    /// Recent clock events for the profile view
    pub profile_entries: Vec<TimeEntry>,

    /// Whether a profile fetch is in flight
    pub profile_loading: bool,

    /// Path input buffer while picking a picture to upload
    pub picture_input: Option<String>,

    /// Settings row selection index
    pub settings_index: usize,

    /// Edit buffer for the selected settings row
    pub settings_input: Option<String>,

    /// Status line shown in the footer
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Splash,
            menu_index: 0,
            next_action: ClockAction::In,
            pin_session: None,
            pending_submit: None,
            employee: None,
            last_entry: None,
            clock_in_flight: false,
            report_period: current_period(),
            report_rows: None,
            report_loading: false,
            report_scroll: 0,
            profile: None,
            profile_entries: Vec::new(),
            profile_loading: false,
            picture_input: None,
            settings_index: 0,
            settings_input: None,
            status_message: None,
        }
    }
}

/// The default report window: the last fourteen days, today inclusive
pub fn current_period() -> PayPeriod {
    let today = Local::now().date_naive();
    PayPeriod::new(today - Duration::days(13), today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert_eq!(state.current_screen, Screen::Splash);
        assert_eq!(state.next_action, ClockAction::In);
        assert!(state.pin_session.is_none());
        assert!(!state.clock_in_flight);
    }

    #[test]
    fn test_current_period_spans_two_weeks() {
        assert_eq!(current_period().days(), 14);
    }
}
