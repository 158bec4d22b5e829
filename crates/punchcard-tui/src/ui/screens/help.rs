//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::{render_header, render_hints, section_block, ScreenLayout};

/// Draw the help screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, "Help", theme);

    let lines = vec![
        Line::styled("Clocking in and out", theme.text_highlight()),
        Line::from(""),
        Line::styled(
            "  Pick the clock action from the menu and enter your 4-digit PIN.",
            theme.text(),
        ),
        Line::styled(
            "  The fourth digit submits on its own; Enter also works.",
            theme.text(),
        ),
        Line::styled(
            "  Three wrong PINs lock the terminal for 5 minutes.",
            theme.text(),
        ),
        Line::styled(
            "  The lockout cannot be dismissed; the countdown runs on its own.",
            theme.text(),
        ),
        Line::from(""),
        Line::styled("Keys", theme.text_highlight()),
        Line::from(""),
        Line::styled("  \u{2191}/\u{2193} or j/k   Navigate menus and lists", theme.text()),
        Line::styled("  Enter          Select / submit", theme.text()),
        Line::styled("  Esc            Back / cancel", theme.text()),
        Line::styled("  r              Refresh the current view", theme.text()),
        Line::styled("  e              Export the loaded report", theme.text()),
        Line::styled("  q              Quit (from the dashboard)", theme.text()),
    ];

    let panel = Paragraph::new(lines).block(section_block("Punchcard", theme));
    frame.render_widget(panel, layout.content);

    let (_, hints_area) = layout.footer_rows();
    render_hints(frame, hints_area, &[("Esc", "Back")], theme);
}
