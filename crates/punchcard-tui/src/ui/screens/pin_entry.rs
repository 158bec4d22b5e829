//! PIN entry screen for clock authentication

use punchcard_core::{PinPhase, PIN_LENGTH};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout::centered_rect;

/// Draw the PIN prompt
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let Some(session) = app.state.pin_session.as_ref() else {
        return;
    };

    // Center the PIN entry dialog
    let dialog = centered_rect(50, 50, frame.area());

    let block = Block::default()
        .title(format!(" {} ", session.action().label()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Site
            Constraint::Length(2), // Instructions
            Constraint::Length(3), // PIN display
            Constraint::Length(2), // Error / busy line
            Constraint::Length(2), // Attempts warning
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let site = Paragraph::new(format!("Site: {}", session.site()))
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(site, chunks[0]);

    let instructions = Paragraph::new("Enter your 4-digit PIN")
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[1]);

    // PIN display (masked dots; the fourth digit submits on its own)
    let pin_len = session.pin().len();
    let mut spans = vec![Span::styled("[ ", theme.text_muted())];
    for i in 0..PIN_LENGTH {
        if i < pin_len {
            spans.push(Span::styled("\u{25CF}", theme.pin_dot()));
        } else {
            spans.push(Span::styled("\u{25CB}", theme.pin_placeholder()));
        }
        if i < PIN_LENGTH - 1 {
            spans.push(Span::raw("  "));
        }
    }
    spans.push(Span::styled(" ]", theme.text_muted()));
    let pin_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(pin_widget, chunks[2]);

    // Error line, or the in-flight notice while verification runs
    if session.phase() == PinPhase::Submitting {
        let busy = Paragraph::new("Verifying...")
            .style(theme.info())
            .alignment(Alignment::Center);
        frame.render_widget(busy, chunks[3]);
    } else if let Some(error) = session.error_message() {
        let error_widget = Paragraph::new(error)
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    // Attempts remaining warning
    let remaining = session.remaining_attempts();
    if session.attempt_count() > 0 && remaining > 0 {
        let warning = format!(
            "\u{26A0} {} attempt{} remaining before lockout",
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
        let warning_widget = Paragraph::new(warning)
            .style(theme.warning())
            .alignment(Alignment::Center);
        frame.render_widget(warning_widget, chunks[4]);
    }

    // Help text
    let help = if session.phase() == PinPhase::Submitting {
        "Verifying, please wait"
    } else {
        "[0-9] Digits    [Enter] Submit    [Esc] Cancel"
    };
    let help_widget = Paragraph::new(help)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help_widget, chunks[6]);
}
