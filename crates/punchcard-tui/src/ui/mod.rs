//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - delegates to the appropriate screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_screen {
        Screen::Splash => screens::splash::draw(frame, app),
        Screen::Dashboard => screens::dashboard::draw(frame, app),
        Screen::PinEntry => screens::pin_entry::draw(frame, app),
        Screen::Lockout => screens::lockout::draw(frame, app),
        Screen::Reports => screens::reports::draw(frame, app),
        Screen::Profile => screens::profile::draw(frame, app),
        Screen::Settings => screens::settings::draw(frame, app),
        Screen::Help => screens::help::draw(frame, app),
    }

    // Toasts draw above whatever screen is active
    app.notifications.render(frame, area, &app.theme);
}
