use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Cell;

mod activity;
mod help;
mod repos;

pub use activity::draw_activity_view;
pub use help::draw_help_overlay;
pub use repos::{draw_repo_detail_panel, draw_repos_view};

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}
