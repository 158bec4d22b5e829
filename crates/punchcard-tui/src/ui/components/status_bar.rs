//! Footer status bar shared by the main screens

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::utils;

/// Render the status line: site and server on the left, the last punch in
/// the middle, in-flight work on the right
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ])
        .split(inner);

    // Left: site indicator
    let (site_indicator, site_style, site_label) = match &app.config.site_id {
        Some(site) => ("\u{25CF}", theme.success(), utils::truncate(site, 18)),
        None => ("\u{25CB}", theme.text_muted(), "no site".to_string()),
    };
    let left = Line::from(vec![
        Span::styled(format!("{} ", site_indicator), site_style),
        Span::styled(site_label, theme.text_secondary()),
    ]);
    frame.render_widget(Paragraph::new(left), chunks[0]);

    // Center: last punch
    if let Some(entry) = &app.state.last_entry {
        let center = format!(
            "Last: {} {}",
            entry.action.label(),
            utils::format_relative_time(entry.at)
        );
        frame.render_widget(
            Paragraph::new(center)
                .style(theme.text_secondary())
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    // Right: in-flight work or the pending status line
    let right_text = if app.state.clock_in_flight {
        Some("registering...".to_string())
    } else {
        app.state.status_message.clone()
    };
    if let Some(text) = right_text {
        frame.render_widget(
            Paragraph::new(text)
                .style(theme.warning())
                .alignment(Alignment::Right),
            chunks[2],
        );
    }
}
