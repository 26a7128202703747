use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::input::{apply_search_filter, copy_to_clipboard, move_day, move_selection};
use super::state::{TuiState, ViewMode};
use crate::model::ProfileReport;

const PAGE: isize = 10;

/// Handle a keyboard event, mutating TUI state and returning `true` if the loop should exit.
pub fn handle_key_event(key_event: KeyEvent, state: &mut TuiState, report: &ProfileReport) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    if state.search_mode {
        handle_search_input(key_event.code, state, report);
        return false;
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return matches!(key_event.code, KeyCode::Char('q'));
    }

    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Char('/') => {
            state.search_mode = true;
            state.search_query.clear();
            state.tab_index = 0;
            state.view_mode = ViewMode::Repositories;
        }
        KeyCode::Char('y') => copy_selected_url(state, report),
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.previous_tab(),
        KeyCode::Up | KeyCode::Char('k') => move_by(state, report, -1),
        KeyCode::Down | KeyCode::Char('j') => move_by(state, report, 1),
        KeyCode::PageUp => move_by(state, report, -PAGE),
        KeyCode::PageDown => move_by(state, report, PAGE),
        KeyCode::Home | KeyCode::Char('g') => move_by(state, report, isize::MIN / 2),
        KeyCode::End | KeyCode::Char('G') => move_by(state, report, isize::MAX / 2),
        _ => {}
    }

    false
}

fn move_by(state: &mut TuiState, report: &ProfileReport, delta: isize) {
    match state.view_mode {
        ViewMode::Repositories => move_selection(state, delta),
        ViewMode::Activity => move_day(state, delta, report.daily_commits.len()),
    }
}

/// Handle repository search keystrokes, applying filters on every change.
fn handle_search_input(code: KeyCode, state: &mut TuiState, report: &ProfileReport) {
    match code {
        KeyCode::Esc => {
            state.search_mode = false;
            state.search_query.clear();
            apply_search_filter(&report.repositories, state);
        }
        KeyCode::Enter => {
            state.search_mode = false;
            apply_search_filter(&report.repositories, state);
        }
        KeyCode::Backspace => {
            state.search_query.pop();
            apply_search_filter(&report.repositories, state);
        }
        KeyCode::Char(c) => {
            state.search_query.push(c);
            apply_search_filter(&report.repositories, state);
        }
        _ => {}
    }
}

/// Copy the selected repository URL, surfacing clipboard errors in status.
fn copy_selected_url(state: &mut TuiState, report: &ProfileReport) {
    if state.filtered_indices.is_empty() {
        return;
    }
    if let Some(repo) = report.repositories.get(state.selected) {
        match copy_to_clipboard(&repo.html_url) {
            Ok(_) => state.set_status(format!("Copied: {}", repo.html_url)),
            Err(err) => state.set_status(format!("Clipboard error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DailyCommit, Repo};
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn report() -> ProfileReport {
        let repo = |name: &str| Repo {
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{name}"),
            description: None,
            stargazers_count: 1,
            forks_count: 0,
            language: None,
            fork: false,
        };
        ProfileReport {
            username: "octocat".to_string(),
            repositories: vec![repo("alpha"), repo("beta"), repo("gamma")],
            daily_commits: (1..=5)
                .map(|d| DailyCommit {
                    date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    count: d,
                })
                .collect(),
        }
    }

    #[test]
    fn q_quits_and_navigation_follows_view() {
        let report = report();
        let mut state = TuiState::new(3, 5);

        assert!(!handle_key_event(key(KeyCode::Char('j')), &mut state, &report));
        assert_eq!(state.selected, 1);

        handle_key_event(key(KeyCode::Tab), &mut state, &report);
        assert_eq!(state.view_mode, ViewMode::Activity);
        handle_key_event(key(KeyCode::Char('g')), &mut state, &report);
        assert_eq!(state.day_selected, 0);
        assert_eq!(state.selected, 1);

        assert!(handle_key_event(key(KeyCode::Char('q')), &mut state, &report));
    }

    #[test]
    fn search_mode_captures_keys() {
        let report = report();
        let mut state = TuiState::new(3, 5);

        handle_key_event(key(KeyCode::Char('/')), &mut state, &report);
        for c in "gam".chars() {
            // 'g' is plain text while searching
            assert!(!handle_key_event(key(KeyCode::Char(c)), &mut state, &report));
        }
        handle_key_event(key(KeyCode::Enter), &mut state, &report);

        assert!(!state.search_mode);
        assert_eq!(state.filtered_indices, vec![2]);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn help_overlay_swallows_navigation() {
        let report = report();
        let mut state = TuiState::new(3, 5);

        handle_key_event(key(KeyCode::Char('h')), &mut state, &report);
        assert!(state.show_help);
        handle_key_event(key(KeyCode::Char('j')), &mut state, &report);
        assert_eq!(state.selected, 0);
        handle_key_event(key(KeyCode::Esc), &mut state, &report);
        assert!(!state.show_help);
    }
}
