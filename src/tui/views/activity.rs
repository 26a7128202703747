use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table};
use ratatui::Frame;

use super::super::draw::{intensity_bar, intensity_color};
use super::super::layout::visible_window;
use super::super::state::TuiState;
use super::{header_cell, selected_style};
use crate::activity::ActivitySummary;
use crate::model::DailyCommit;

/// Render the commit line chart over the window, a per-day table and a summary.
pub fn draw_activity_view(f: &mut Frame, area: Rect, daily: &[DailyCommit], state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_commit_chart(f, chunks[0], daily);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_day_table(f, bottom[0], daily, state);
    draw_summary(f, bottom[1], daily, state);
}

fn draw_commit_chart(f: &mut Frame, area: Rect, daily: &[DailyCommit]) {
    let points: Vec<(f64, f64)> = daily
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, d.count as f64))
        .collect();
    let max = daily.iter().map(|d| d.count).max().unwrap_or(0).max(1);
    let x_max = daily.len().saturating_sub(1).max(1) as f64;

    let label = |i: usize| {
        daily
            .get(i)
            .map(|d| d.date.format("%m-%d").to_string())
            .unwrap_or_default()
    };
    let x_labels = vec![
        Span::raw(label(0)),
        Span::raw(label(daily.len() / 2)),
        Span::raw(label(daily.len().saturating_sub(1))),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", max / 2)),
        Span::raw(format!("{max}")),
    ];

    let datasets = vec![Dataset::default()
        .name("Commits")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!("Commit Activity (last {} days)", daily.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Commits")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max as f64])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn draw_day_table(f: &mut Frame, area: Rect, daily: &[DailyCommit], state: &TuiState) {
    let max = daily.iter().map(|d| d.count).max().unwrap_or(0);
    let indices: Vec<usize> = (0..daily.len()).collect();
    let height = area.height.saturating_sub(3) as usize;

    let rows: Vec<Row> = visible_window(&indices, state.day_selected, height)
        .iter()
        .map(|&i| {
            let day = &daily[i];
            let is_selected = i == state.day_selected;
            let date = day.date.format("%Y-%m-%d (%a)").to_string();
            let date_cell = if is_selected {
                Cell::from(format!("{date} ◄")).style(selected_style())
            } else {
                Cell::from(date).style(Style::default().fg(Color::White))
            };
            let count_cell = Cell::from(format!("{:>3} {}", day.count, intensity_bar(day.count, max)))
                .style(intensity_color(day.count, max));
            Row::new(vec![date_cell, count_cell])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Length(10)])
        .header(Row::new([
            header_cell("Day", Color::Yellow),
            header_cell("Commits", Color::Green),
        ]))
        .block(Block::default().title("Daily Commits").borders(Borders::ALL));

    f.render_widget(table, area);
}

fn draw_summary(f: &mut Frame, area: Rect, daily: &[DailyCommit], state: &TuiState) {
    let summary = ActivitySummary::from_daily(daily);
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::White));

    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Window Summary",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            label("Total commits: "),
            Span::styled(summary.total.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            label("Active days: "),
            Span::styled(
                format!("{}/{}", summary.active_days, daily.len()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            label("Average per day: "),
            Span::styled(format!("{:.1}", summary.average), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let busiest = match summary.busiest {
        Some(day) => format!("{} ({})", day.date.format("%Y-%m-%d"), day.count),
        None => "-".to_string(),
    };
    lines.push(Line::from(vec![
        label("Busiest day: "),
        Span::styled(busiest, Style::default().fg(Color::Red)),
    ]));

    if let Some(day) = daily.get(state.day_selected) {
        let vs_avg = day.count as f64 - summary.average;
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Selected: "),
            Span::styled(day.date.format("%Y-%m-%d").to_string(), selected_style()),
        ]));
        lines.push(Line::from(vec![
            label("vs average: "),
            Span::styled(
                format!("{vs_avg:+.1}"),
                if vs_avg >= 0.0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                },
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(Block::default().title("Summary").borders(Borders::ALL));
    f.render_widget(panel, area);
}
