//! Employee profile view

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::App;
use crate::ui::components::status_bar::render_status_bar;
use crate::ui::layout::{render_header, render_hints, section_block, ScreenLayout};
use crate::utils;

/// Draw the profile screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, "My Profile", theme);

    if app.state.employee.is_none() {
        let hint = Paragraph::new("Clock in to load your profile")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, layout.content);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(layout.content);

        draw_details(frame, columns[0], app);
        draw_recent_entries(frame, columns[1], app);
    }

    let (status_area, hints_area) = layout.footer_rows();
    render_status_bar(frame, status_area, app);
    let hints: &[(&str, &str)] = if app.state.picture_input.is_some() {
        &[("Enter", "Upload"), ("Esc", "Discard")]
    } else {
        &[
            ("u", "Upload picture"),
            ("d", "Remove picture"),
            ("r", "Refresh"),
            ("Esc", "Back"),
        ]
    };
    render_hints(frame, hints_area, hints, theme);
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    // The fetched profile wins over the verification snapshot
    let employee = app.state.profile.as_ref().or(app.state.employee.as_ref());

    let mut lines: Vec<Line> = Vec::new();
    if app.state.profile_loading {
        lines.push(Line::styled("Loading...", theme.text_muted()));
    }
    if let Some(employee) = employee {
        lines.push(Line::from(vec![
            Span::styled("Name     ", theme.text_muted()),
            Span::styled(employee.name.as_str(), theme.text()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("ID       ", theme.text_muted()),
            Span::styled(employee.id.as_str(), theme.text_secondary()),
        ]));
        match &employee.picture_url {
            Some(url) => lines.push(Line::from(vec![
                Span::styled("Picture  ", theme.text_muted()),
                Span::styled(utils::truncate(url, 32), theme.text_secondary()),
            ])),
            None => lines.push(Line::from(vec![
                Span::styled("Picture  ", theme.text_muted()),
                Span::styled("none", theme.text_muted()),
            ])),
        }
    }

    // Path prompt while picking a picture to upload
    if let Some(input) = &app.state.picture_input {
        lines.push(Line::from(""));
        lines.push(Line::styled("Path to image file:", theme.text_secondary()));
        lines.push(Line::styled(format!("{}_", input), theme.input(true)));
    }

    let panel = Paragraph::new(lines).block(section_block("Employee", theme));
    frame.render_widget(panel, area);
}

fn draw_recent_entries(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = section_block("Recent Punches", theme);

    if app.state.profile_entries.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No punches in this period")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .profile_entries
        .iter()
        .map(|entry| {
            let style = match entry.action {
                punchcard_core::ClockAction::In => theme.success(),
                punchcard_core::ClockAction::Out => theme.text_secondary(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", entry.action.label()), style),
                Span::styled(utils::format_timestamp(entry.at), theme.text_muted()),
            ]))
        })
        .collect();
    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
