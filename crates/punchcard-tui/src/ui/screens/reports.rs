//! Pay-period report view

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::app::App;
use crate::ui::components::status_bar::render_status_bar;
use crate::ui::layout::{render_header, render_hints, section_block, ScreenLayout};
use crate::utils;

/// Draw the reports screen
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, "Pay Reports", theme);

    let title = format!("Pay period {}", app.state.report_period);
    let block = section_block(&title, theme);
    let inner = block.inner(layout.content);
    frame.render_widget(block, layout.content);

    if app.state.report_loading {
        let loading = Paragraph::new("Loading report...")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
    } else if let Some(rows) = &app.state.report_rows {
        if rows.is_empty() {
            let empty = Paragraph::new("No hours recorded in this period")
                .style(theme.text_muted())
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
        } else {
            let header = Row::new(vec!["Employee", "Regular", "Overtime", "Total"])
                .style(theme.text_highlight());
            let table_rows: Vec<Row> = rows
                .iter()
                .enumerate()
                .skip(app.state.report_scroll)
                .map(|(i, row)| {
                    Row::new(vec![
                        Cell::from(utils::truncate(&row.employee_name, 24)),
                        Cell::from(utils::format_hours(row.regular_hours)),
                        Cell::from(utils::format_hours(row.overtime_hours)),
                        Cell::from(utils::format_hours(row.total_hours())),
                    ])
                    .style(theme.menu_item(i == app.state.report_scroll))
                })
                .collect();
            let table = Table::new(
                table_rows,
                [
                    Constraint::Percentage(40),
                    Constraint::Percentage(20),
                    Constraint::Percentage(20),
                    Constraint::Percentage(20),
                ],
            )
            .header(header);
            frame.render_widget(table, inner);
        }
    } else {
        let hint = Paragraph::new("Press [r] to load the report")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
    }

    let (status_area, hints_area) = layout.footer_rows();
    render_status_bar(frame, status_area, app);
    render_hints(
        frame,
        hints_area,
        &[
            ("r", "Refresh"),
            ("e", "Export"),
            ("j/k", "Scroll"),
            ("Esc", "Back"),
        ],
        theme,
    );
}
