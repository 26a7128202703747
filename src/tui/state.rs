use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewMode {
    Repositories,
    Activity,
}

impl ViewMode {
    pub const TITLES: [&'static str; 2] = ["Repositories", "Activity"];

    pub fn from_tab(index: usize) -> Self {
        match index {
            1 => ViewMode::Activity,
            _ => ViewMode::Repositories,
        }
    }
}

pub struct TuiState {
    pub selected: usize,
    pub day_selected: usize,
    pub view_mode: ViewMode,
    pub tab_index: usize,
    pub show_help: bool,
    pub search_query: String,
    pub search_mode: bool,
    pub filtered_indices: Vec<usize>,
    pub status_message: Option<(String, Instant)>,
}

impl TuiState {
    pub fn new(repo_count: usize, day_count: usize) -> Self {
        Self {
            filtered_indices: (0..repo_count).collect(),
            // focus starts on the most recent day
            day_selected: day_count.saturating_sub(1),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn active_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % ViewMode::TITLES.len();
        self.view_mode = ViewMode::from_tab(self.tab_index);
    }

    pub fn previous_tab(&mut self) {
        self.tab_index = if self.tab_index == 0 {
            ViewMode::TITLES.len() - 1
        } else {
            self.tab_index - 1
        };
        self.view_mode = ViewMode::from_tab(self.tab_index);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            selected: 0,
            day_selected: 0,
            view_mode: ViewMode::Repositories,
            tab_index: 0,
            show_help: false,
            search_query: String::new(),
            search_mode: false,
            filtered_indices: Vec::new(),
            status_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_wrap_both_ways() {
        let mut state = TuiState::new(3, 14);
        assert_eq!(state.day_selected, 13);
        state.previous_tab();
        assert_eq!(state.view_mode, ViewMode::Activity);
        state.next_tab();
        assert_eq!(state.view_mode, ViewMode::Repositories);
    }

    #[test]
    fn status_message_is_visible_when_fresh() {
        let mut state = TuiState::default();
        assert!(state.active_status().is_none());
        state.set_status("Copied");
        assert_eq!(state.active_status(), Some("Copied"));
    }
}
