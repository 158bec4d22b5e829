//! Main dashboard with menu and clock status

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::App;
use crate::ui::components::status_bar::render_status_bar;
use crate::ui::layout::{render_header, render_hints, section_block, ScreenLayout};
use crate::utils;

/// Draw the dashboard screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, "Dashboard", theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout.content);

    // Menu
    let entries = [
        app.state.next_action.label(),
        "Pay Reports",
        "My Profile",
        "Settings",
        "Help",
        "Quit",
    ];
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, label)| {
            ListItem::new(format!("  {}", label))
                .style(theme.menu_item(i == app.state.menu_index))
        })
        .collect();
    let menu = List::new(items).block(section_block("Menu", theme));
    frame.render_widget(menu, columns[0]);

    // Status panel
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Next action   ", theme.text_muted()),
            Span::styled(app.state.next_action.label(), theme.text_highlight()),
        ]),
        Line::from(vec![
            Span::styled("Server        ", theme.text_muted()),
            Span::styled(app.config.server_url.as_str(), theme.text()),
        ]),
    ];
    match &app.config.site_id {
        Some(site) => lines.push(Line::from(vec![
            Span::styled("Site          ", theme.text_muted()),
            Span::styled(site.as_str(), theme.text()),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled("Site          ", theme.text_muted()),
            Span::styled("not configured", theme.warning()),
        ])),
    }
    if let Some(employee) = &app.state.employee {
        lines.push(Line::from(vec![
            Span::styled("Employee      ", theme.text_muted()),
            Span::styled(employee.name.as_str(), theme.text()),
        ]));
    }
    if let Some(entry) = &app.state.last_entry {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Last punch    ", theme.text_muted()),
            Span::styled(
                format!(
                    "{}, {}",
                    entry.action.label(),
                    utils::format_relative_time(entry.at)
                ),
                theme.success(),
            ),
        ]));
    }
    let panel = Paragraph::new(lines).block(section_block("Status", theme));
    frame.render_widget(panel, columns[1]);

    // Footer
    let (status_area, hints_area) = layout.footer_rows();
    render_status_bar(frame, status_area, app);
    render_hints(
        frame,
        hints_area,
        &[
            ("\u{2191}/\u{2193}", "Navigate"),
            ("Enter", "Select"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        theme,
    );
}
