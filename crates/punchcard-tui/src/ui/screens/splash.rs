//! Splash/welcome screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::centered_rect;

/// Draw the splash screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 50, frame.area());

    let lines = vec![
        Line::from(""),
        Line::styled("\u{25D4}  P U N C H C A R D", theme.title()),
        Line::from(""),
        Line::styled("Employee Time Clock", theme.text_secondary()),
        Line::from(""),
        Line::from(""),
        Line::styled("Press [Enter] to begin", theme.text_muted()),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
