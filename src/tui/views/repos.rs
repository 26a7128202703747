use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::super::layout::visible_window;
use super::super::state::TuiState;
use super::{header_cell, selected_style};
use crate::model::Repo;
use crate::util::truncate;

/// Render the repository table with a detail panel for the selected entry.
pub fn draw_repos_view(f: &mut Frame, area: Rect, repos: &[Repo], state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    // borders plus header row
    let height = chunks[0].height.saturating_sub(3) as usize;
    let visible = visible_window(&state.filtered_indices, state.selected, height);

    let rows: Vec<Row> = visible
        .iter()
        .filter_map(|&i| repos.get(i).map(|repo| (i, repo)))
        .map(|(i, repo)| {
            let is_selected = i == state.selected;
            let name = if is_selected {
                format!("{} ◄", repo.name)
            } else {
                repo.name.clone()
            };
            let name_cell = if is_selected {
                Cell::from(name).style(selected_style())
            } else {
                Cell::from(name).style(Style::default().fg(Color::White))
            };

            Row::new(vec![
                name_cell,
                Cell::from(repo.stargazers_count.to_string()).style(Style::default().fg(Color::Yellow)),
                Cell::from(repo.forks_count.to_string()).style(Style::default().fg(Color::Magenta)),
                Cell::from(repo.language.clone().unwrap_or_default()).style(Style::default().fg(Color::Cyan)),
                Cell::from(truncate(repo.description(), 60)),
            ])
        })
        .collect();

    let title = if state.search_mode {
        format!("Repositories | Search: {} | Press Esc to cancel", state.search_query)
    } else if !state.search_query.is_empty() {
        format!(
            "Repositories | Filtered: '{}' ({} of {})",
            state.search_query,
            state.filtered_indices.len(),
            repos.len()
        )
    } else {
        format!("Repositories ({}) | Press 'h' for help, '/' to search", repos.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(28),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Percentage(100),
        ],
    )
    .header(Row::new([
        header_cell("Name", Color::Yellow),
        header_cell("Stars", Color::Yellow),
        header_cell("Forks", Color::Magenta),
        header_cell("Language", Color::Cyan),
        header_cell("Description", Color::White),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(table, chunks[0]);
    draw_repo_detail_panel(f, chunks[1], repos, state);
}

pub fn draw_repo_detail_panel(f: &mut Frame, area: Rect, repos: &[Repo], state: &TuiState) {
    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let repo = match repos.get(state.selected) {
        Some(repo) if !state.filtered_indices.is_empty() => repo,
        _ => {
            f.render_widget(Paragraph::new("No repository selected").block(block), area);
            return;
        }
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::White));

    let mut lines = vec![
        Line::from(vec![Span::styled(
            repo.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            label("Stars: "),
            Span::styled(repo.stargazers_count.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            label("Forks: "),
            Span::styled(repo.forks_count.to_string(), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            label("Language: "),
            Span::styled(
                repo.language.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    if repo.fork {
        lines.push(Line::from(Span::styled("Fork", Style::default().fg(Color::DarkGray))));
    }
    lines.push(Line::from(""));
    if !repo.description().is_empty() {
        lines.push(Line::from(repo.description().to_string()));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        repo.html_url.clone(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
    )));
    lines.push(Line::from(Span::styled(
        "y: copy URL",
        Style::default().fg(Color::Gray),
    )));

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
