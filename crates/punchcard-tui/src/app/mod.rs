//! Application state and event handling
//!
//! [`App`] is the flow controller: it owns the PIN session while the prompt
//! is open, the lockout ticker while a session is locked, and the spawned
//! API tasks. Every mutation runs on the main loop in response to one event.

mod config;
mod events;
mod state;

pub use config::{ConfigError, ReportFormatConfig, TuiConfig};
pub use events::{Event, EventHandler, LockoutTicker, ProfileData};
pub use state::{AppState, Screen};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use punchcard_api::{ApiClient, CachedLocator, ClockOutcome, ClockService, PinVerifier, StaticLocation};
use punchcard_core::{Employee, PinSession, SiteId, SubmitRequest, LOCKOUT_TICK_MS};

use crate::reports;
use crate::ui;
use crate::ui::components::notification::{Notification, NotificationManager};
use crate::ui::Theme;

/// UI animation tick rate
const TICK_RATE: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Persisted terminal settings
    pub config: TuiConfig,

    /// Visual theme
    pub theme: Theme,

    /// Active toast notifications
    pub notifications: NotificationManager,

    /// Tick counter for animations
    pub tick: u64,

    api: Arc<ApiClient>,
    locator: Arc<CachedLocator<StaticLocation>>,
    events: EventHandler,
    lockout_ticker: Option<LockoutTicker>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load();
        let api = Arc::new(ApiClient::new(config.server_url.clone())?);
        let locator = Arc::new(CachedLocator::new(StaticLocation(config.coordinates)));

        Ok(Self {
            state: AppState::new(),
            config,
            theme: Theme::default(),
            notifications: NotificationManager::new(),
            tick: 0,
            api,
            locator,
            events: EventHandler::new(TICK_RATE),
            lockout_ticker: None,
            should_quit: false,
        })
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match self.events.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.notifications.tick();
            }
            Event::LockoutTick => self.handle_lockout_tick(),
            Event::Verification(result) => self.handle_verification(result),
            Event::Clock(result) => self.handle_clock(result),
            Event::Report(result) => self.handle_report(result),
            Event::Profile(result) => self.handle_profile(result),
            Event::Picture(result) => self.handle_picture(result),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Delegate to screen-specific handlers
        match self.state.current_screen {
            Screen::Splash => self.handle_splash_key(key.code),
            Screen::Dashboard => self.handle_dashboard_key(key.code),
            Screen::PinEntry => self.handle_pin_entry_key(key.code),
            Screen::Lockout => self.handle_lockout_key(key.code),
            Screen::Reports => self.handle_reports_key(key.code),
            Screen::Profile => self.handle_profile_key(key.code),
            Screen::Settings => self.handle_settings_key(key.code),
            Screen::Help => self.handle_help_key(key.code),
        }
    }

    // ----- PIN flow -----

    /// Open the PIN prompt for the pending clock action
    fn open_pin_prompt(&mut self) {
        if self.state.clock_in_flight {
            self.notifications
                .push(Notification::warning("A clock registration is still running"));
            return;
        }
        let Some(site) = self.config.site_id.clone() else {
            self.notifications
                .push(Notification::warning("Set a site in Settings before clocking"));
            return;
        };
        self.state.pin_session = Some(PinSession::new(self.state.next_action, SiteId::new(site)));
        self.state.current_screen = Screen::PinEntry;
    }

    /// Dismiss the PIN prompt; refused while locked
    fn close_pin_prompt(&mut self) {
        let cancelled = self
            .state
            .pin_session
            .as_mut()
            .map(|s| s.cancel())
            .unwrap_or(false);
        if cancelled {
            self.state.pin_session = None;
            self.state.pending_submit = None;
            self.state.current_screen = Screen::Dashboard;
        }
    }

    /// Hand a submission to the verification endpoint
    fn start_verification(&mut self, request: SubmitRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.events.sender();
        let pin = request.pin.clone();
        let site = request.site.clone();
        let action = request.action;
        self.state.pending_submit = Some(request);
        tokio::spawn(async move {
            let result = api
                .verify_pin(&pin, &site, action)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Event::Verification(result));
        });
    }

    fn handle_verification(&mut self, result: Result<Employee, String>) {
        match result {
            Ok(employee) => {
                let resolved = self
                    .state
                    .pin_session
                    .as_mut()
                    .map(|s| s.resolve_success())
                    .unwrap_or(false);
                if resolved {
                    // Prompt closes; the clock action proceeds with the
                    // verified PIN
                    self.state.pin_session = None;
                    self.state.employee = Some(employee.clone());
                    self.state.current_screen = Screen::Dashboard;
                    self.start_clock_action(employee);
                } else {
                    // The prompt was cancelled while the call was in flight
                    self.state.pending_submit = None;
                }
            }
            Err(message) => {
                // Wrong PIN and transport trouble are the same to the
                // session; the distinction only matters in the logs
                tracing::warn!("PIN verification failed: {message}");
                self.state.pending_submit = None;
                let Some(session) = self.state.pin_session.as_mut() else {
                    return;
                };
                session.resolve_failure();
                let locked = session.is_locked();
                let focus = session.take_focus_request();
                if locked {
                    self.state.current_screen = Screen::Lockout;
                    self.lockout_ticker = Some(LockoutTicker::spawn(self.events.sender()));
                } else if focus {
                    self.state.current_screen = Screen::PinEntry;
                }
            }
        }
    }

    fn handle_lockout_tick(&mut self) {
        let Some(session) = self.state.pin_session.as_mut() else {
            self.lockout_ticker = None;
            return;
        };
        session.tick(LOCKOUT_TICK_MS);
        if !session.is_locked() {
            // Countdown finished; stop the timer and reopen the prompt
            self.lockout_ticker = None;
            if self.state.current_screen == Screen::Lockout {
                self.state.current_screen = Screen::PinEntry;
            }
        }
    }

    // ----- Clock registration -----

    /// Register the clock event once the PIN has been verified
    fn start_clock_action(&mut self, employee: Employee) {
        let Some(request) = self.state.pending_submit.take() else {
            tracing::warn!("verified PIN without a pending clock request");
            return;
        };
        self.state.clock_in_flight = true;
        self.state.status_message = Some(format!(
            "Registering {} for {}...",
            request.action.label(),
            employee.name
        ));
        let api = Arc::clone(&self.api);
        let locator = Arc::clone(&self.locator);
        let tx = self.events.sender();
        tokio::spawn(async move {
            // Position is best-effort; a missing fix never blocks the punch
            let coordinates = locator.locate().await;
            let result = api
                .perform_clock_action(&request.pin, &request.site, request.action, coordinates)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Event::Clock(result));
        });
    }

    fn handle_clock(&mut self, result: Result<ClockOutcome, String>) {
        self.state.clock_in_flight = false;
        self.state.status_message = None;
        match result {
            Ok(outcome) => {
                self.state.next_action = outcome.entry.action.toggled();
                self.notifications.push(Notification::success(format!(
                    "{} recorded for {}",
                    outcome.entry.action.label(),
                    outcome.employee.name
                )));
                self.state.employee = Some(outcome.employee);
                self.state.last_entry = Some(outcome.entry);
            }
            Err(message) => {
                tracing::warn!("clock registration failed: {message}");
                self.notifications
                    .push(Notification::error(format!("Clock action failed: {message}")));
            }
        }
    }

    // ----- Reports -----

    fn open_reports(&mut self) {
        self.state.current_screen = Screen::Reports;
        if self.state.report_rows.is_none() {
            self.refresh_report();
        }
    }

    fn refresh_report(&mut self) {
        if self.state.report_loading {
            return;
        }
        let Some(site) = self.config.site_id.clone() else {
            self.notifications
                .push(Notification::warning("Set a site in Settings to load reports"));
            return;
        };
        self.state.report_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.events.sender();
        let period = self.state.report_period;
        tokio::spawn(async move {
            let result = api
                .pay_report(&SiteId::new(site), period)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Event::Report(result));
        });
    }

    fn handle_report(&mut self, result: Result<Vec<punchcard_core::ReportRow>, String>) {
        self.state.report_loading = false;
        match result {
            Ok(rows) => {
                self.state.report_scroll = 0;
                self.state.report_rows = Some(rows);
            }
            Err(message) => {
                tracing::warn!("pay report fetch failed: {message}");
                self.notifications
                    .push(Notification::error(format!("Report fetch failed: {message}")));
            }
        }
    }

    fn export_report(&mut self) {
        let Some(rows) = self.state.report_rows.as_deref() else {
            self.notifications
                .push(Notification::warning("Nothing to export yet"));
            return;
        };
        let format = reports::ReportFormat::from(self.config.report_format);
        let dir = std::env::current_dir().unwrap_or_default();
        match reports::export(rows, self.state.report_period, format, &dir) {
            Ok(path) => self
                .notifications
                .push(Notification::success(format!("Exported {}", path.display()))),
            Err(e) => self
                .notifications
                .push(Notification::error(format!("Export failed: {e}"))),
        }
    }

    // ----- Profile -----

    fn open_profile(&mut self) {
        self.state.current_screen = Screen::Profile;
        self.refresh_profile();
    }

    fn refresh_profile(&mut self) {
        if self.state.profile_loading {
            return;
        }
        // Without a verified employee the screen just shows a hint
        let Some(employee) = self.state.employee.clone() else {
            return;
        };
        self.state.profile_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.events.sender();
        let period = self.state.report_period;
        tokio::spawn(async move {
            let profile = api.employee_profile(&employee.id).await;
            let entries = api.time_entries(&employee.id, period).await;
            let result = match (profile, entries) {
                (Ok(employee), Ok(entries)) => Ok(ProfileData { employee, entries }),
                (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
            };
            let _ = tx.send(Event::Profile(result));
        });
    }

    fn handle_profile(&mut self, result: Result<ProfileData, String>) {
        self.state.profile_loading = false;
        match result {
            Ok(data) => {
                self.state.profile = Some(data.employee);
                self.state.profile_entries = data.entries;
            }
            Err(message) => {
                tracing::warn!("profile fetch failed: {message}");
                self.notifications
                    .push(Notification::error(format!("Profile fetch failed: {message}")));
            }
        }
    }

    fn start_picture_upload(&mut self, path: String) {
        let Some(employee) = self.state.employee.clone() else {
            return;
        };
        let bytes = match std::fs::read(Path::new(&path)) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.notifications
                    .push(Notification::error(format!("Cannot read {path}: {e}")));
                return;
            }
        };
        let filename = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "picture".to_string());
        let api = Arc::clone(&self.api);
        let tx = self.events.sender();
        tokio::spawn(async move {
            let result = api
                .upload_profile_picture(&employee.id, bytes, filename)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Event::Picture(result));
        });
    }

    fn start_picture_delete(&mut self) {
        let Some(employee) = self.state.employee.clone() else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.events.sender();
        tokio::spawn(async move {
            let result = match api.delete_profile_picture(&employee.id).await {
                Ok(()) => api.employee_profile(&employee.id).await,
                Err(e) => Err(e),
            }
            .map_err(|e| e.to_string());
            let _ = tx.send(Event::Picture(result));
        });
    }

    fn handle_picture(&mut self, result: Result<Employee, String>) {
        match result {
            Ok(employee) => {
                self.notifications
                    .push(Notification::success("Profile picture updated"));
                self.state.profile = Some(employee.clone());
                self.state.employee = Some(employee);
            }
            Err(message) => {
                tracing::warn!("profile picture change failed: {message}");
                self.notifications
                    .push(Notification::error(format!("Picture update failed: {message}")));
            }
        }
    }

    // ----- Settings -----

    /// Apply a committed settings edit and persist the config
    fn commit_setting(&mut self, value: String) {
        match self.state.settings_index {
            0 => {
                match ApiClient::new(value.clone()) {
                    Ok(client) => {
                        self.api = Arc::new(client);
                        self.config.server_url = value;
                    }
                    Err(e) => {
                        self.notifications
                            .push(Notification::error(format!("Invalid server URL: {e}")));
                        return;
                    }
                }
            }
            1 => {
                self.config.site_id = if value.is_empty() { None } else { Some(value) };
            }
            _ => {}
        }
        self.save_config();
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            self.notifications
                .push(Notification::error(format!("Failed to save config: {e}")));
        }
    }

    // ----- Key handlers -----

    fn handle_splash_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.current_screen = Screen::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.menu_index > 0 {
                    self.state.menu_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.menu_index < 5 {
                    self.state.menu_index += 1;
                }
            }
            KeyCode::Enter => match self.state.menu_index {
                0 => self.open_pin_prompt(),
                1 => self.open_reports(),
                2 => self.open_profile(),
                3 => self.state.current_screen = Screen::Settings,
                4 => self.state.current_screen = Screen::Help,
                5 => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char('?') => {
                self.state.current_screen = Screen::Help;
            }
            _ => {}
        }
    }

    fn handle_pin_entry_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let request = self
                    .state
                    .pin_session
                    .as_mut()
                    .and_then(|s| s.push_digit(c));
                if let Some(request) = request {
                    self.start_verification(request);
                }
            }
            KeyCode::Backspace => {
                if let Some(session) = self.state.pin_session.as_mut() {
                    session.pop_digit();
                }
            }
            KeyCode::Enter => {
                let request = self.state.pin_session.as_mut().and_then(|s| s.submit());
                if let Some(request) = request {
                    self.start_verification(request);
                }
            }
            KeyCode::Esc => self.close_pin_prompt(),
            _ => {}
        }
    }

    fn handle_lockout_key(&mut self, _key: KeyCode) {
        // Cancellation is disabled while locked; the countdown decides
        // when the prompt comes back
    }

    fn handle_reports_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.state.current_screen = Screen::Dashboard;
            }
            KeyCode::Char('r') => self.refresh_report(),
            KeyCode::Char('e') => self.export_report(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.report_scroll = self.state.report_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.state.report_rows.as_ref().map(Vec::len).unwrap_or(0);
                if self.state.report_scroll + 1 < len {
                    self.state.report_scroll += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyCode) {
        // Path entry mode for picture upload
        if self.state.picture_input.is_some() {
            match key {
                KeyCode::Esc => self.state.picture_input = None,
                KeyCode::Enter => {
                    let path = self.state.picture_input.take().unwrap_or_default();
                    if !path.is_empty() {
                        self.start_picture_upload(path);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.state.picture_input.as_mut() {
                        input.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.state.picture_input.as_mut() {
                        input.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.state.current_screen = Screen::Dashboard;
            }
            KeyCode::Char('r') => self.refresh_profile(),
            KeyCode::Char('u') => {
                if self.state.employee.is_some() {
                    self.state.picture_input = Some(String::new());
                }
            }
            KeyCode::Char('d') => self.start_picture_delete(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode) {
        // Edit mode for the selected row
        if self.state.settings_input.is_some() {
            match key {
                KeyCode::Esc => self.state.settings_input = None,
                KeyCode::Enter => {
                    let value = self.state.settings_input.take().unwrap_or_default();
                    self.commit_setting(value);
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.state.settings_input.as_mut() {
                        input.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.state.settings_input.as_mut() {
                        input.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.state.current_screen = Screen::Dashboard;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.settings_index > 0 {
                    self.state.settings_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.settings_index < 2 {
                    self.state.settings_index += 1;
                }
            }
            KeyCode::Enter => match self.state.settings_index {
                0 => self.state.settings_input = Some(self.config.server_url.clone()),
                1 => {
                    self.state.settings_input =
                        Some(self.config.site_id.clone().unwrap_or_default())
                }
                2 => {
                    self.config.report_format = self.config.report_format.toggled();
                    self.save_config();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.state.current_screen = Screen::Dashboard;
            }
            _ => {}
        }
    }
}
