//! Lockout screen displayed when too many PIN attempts fail

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout::centered_rect;
use crate::utils;

/// Draw the lockout screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let Some(session) = app.state.pin_session.as_ref() else {
        return;
    };

    // Center the lockout dialog
    let dialog = centered_rect(50, 50, frame.area());

    let block = Block::default()
        .title(" Terminal Locked ")
        .title_style(theme.danger())
        .borders(Borders::ALL)
        .border_style(theme.danger());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Warning icon
            Constraint::Length(3), // Message
            Constraint::Length(2), // Countdown
            Constraint::Length(1), // Progress bar
            Constraint::Min(0),    // Spacer
            Constraint::Length(2), // Help
        ])
        .split(inner);

    let icon = Paragraph::new("\u{26A0}  LOCKED  \u{26A0}")
        .style(theme.danger())
        .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    let message =
        Paragraph::new("Too many failed PIN attempts.\nPlease wait before trying again.")
            .style(theme.text())
            .alignment(Alignment::Center);
    frame.render_widget(message, chunks[1]);

    let countdown = format!(
        "Time remaining: {}",
        utils::format_countdown(session.lockout_remaining_secs())
    );
    let countdown_widget = Paragraph::new(countdown)
        .style(theme.warning())
        .alignment(Alignment::Center);
    frame.render_widget(countdown_widget, chunks[2]);

    // Progress bar: share of the cooldown already served
    let total = session.lockout_duration_ms().max(1) as f64;
    let progress = 1.0 - (session.lockout_remaining_ms() as f64 / total);
    let width = chunks[3].width.saturating_sub(4) as usize;
    let filled = (progress * width as f64) as usize;
    let bar = Line::from(vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(theme.progress_filled),
        ),
        Span::styled(
            "\u{2591}".repeat(width.saturating_sub(filled)),
            Style::default().fg(theme.progress_empty),
        ),
    ]);
    let bar_widget = Paragraph::new(bar).alignment(Alignment::Center);
    frame.render_widget(bar_widget, chunks[3]);

    let help = Paragraph::new("Cancel is disabled until the timer expires")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}
