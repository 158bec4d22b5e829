//! Server and site settings screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::{render_header, render_hints, section_block, ScreenLayout};

/// Draw the settings screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, "Settings", theme);

    let rows: [(&str, String); 3] = [
        ("Server URL", app.config.server_url.clone()),
        (
            "Site",
            app.config
                .site_id
                .clone()
                .unwrap_or_else(|| "not configured".to_string()),
        ),
        ("Report format", app.config.report_format.label().to_string()),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        let selected = i == app.state.settings_index;
        let shown = match (&app.state.settings_input, selected) {
            // The row being edited shows the live buffer with a cursor
            (Some(input), true) => format!("{}_", input),
            _ => value.clone(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", label), theme.menu_item(selected)),
            Span::styled(shown, if selected { theme.input(true) } else { theme.text_secondary() }),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Terminal coordinates can be pinned in the config file",
        theme.text_muted(),
    ));

    let panel = Paragraph::new(lines).block(section_block("Terminal", theme));
    frame.render_widget(panel, layout.content);

    let (_, hints_area) = layout.footer_rows();
    let hints: &[(&str, &str)] = if app.state.settings_input.is_some() {
        &[("Enter", "Save"), ("Esc", "Discard")]
    } else {
        &[
            ("\u{2191}/\u{2193}", "Navigate"),
            ("Enter", "Edit/Toggle"),
            ("Esc", "Back"),
        ]
    };
    render_hints(frame, hints_area, hints, theme);
}
