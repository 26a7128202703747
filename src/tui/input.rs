use super::TuiState;
use crate::model::Repo;

pub fn apply_search_filter(repos: &[Repo], state: &mut TuiState) {
    if state.search_query.is_empty() {
        state.filtered_indices = (0..repos.len()).collect();
    } else {
        let query = state.search_query.to_lowercase();
        state.filtered_indices = repos
            .iter()
            .enumerate()
            .filter(|(_, repo)| {
                repo.name.to_lowercase().contains(&query)
                    || repo.description().to_lowercase().contains(&query)
                    || repo
                        .language
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&query))
            })
            .map(|(i, _)| i)
            .collect();
    }

    ensure_selection_in_filtered(state);
}

pub fn ensure_selection_in_filtered(state: &mut TuiState) {
    if state.filtered_indices.is_empty() {
        return;
    }

    if !state.filtered_indices.contains(&state.selected) {
        state.selected = state.filtered_indices[0];
    }
}

/// Move the repository selection by `delta` positions within the filtered list.
pub fn move_selection(state: &mut TuiState, delta: isize) {
    if state.filtered_indices.is_empty() {
        return;
    }
    let current = state
        .filtered_indices
        .iter()
        .position(|&i| i == state.selected)
        .unwrap_or(0) as isize;
    let last = state.filtered_indices.len() as isize - 1;
    let target = (current + delta).clamp(0, last) as usize;
    state.selected = state.filtered_indices[target];
}

pub fn move_day(state: &mut TuiState, delta: isize, day_count: usize) {
    if day_count == 0 {
        return;
    }
    let last = day_count as isize - 1;
    state.day_selected = (state.day_selected as isize + delta).clamp(0, last) as usize;
}

pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
