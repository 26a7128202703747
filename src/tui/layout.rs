use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Slice of `indices` that fits in `height` rows while keeping `selected` in view.
pub fn visible_window(indices: &[usize], selected: usize, height: usize) -> &[usize] {
    if indices.is_empty() || height == 0 {
        return &[];
    }

    let selected_pos = indices.iter().position(|&i| i == selected).unwrap_or(0);
    let start = selected_pos
        .saturating_sub(height / 2)
        .min(indices.len().saturating_sub(height));
    let end = (start + height).min(indices.len());
    &indices[start..end]
}
