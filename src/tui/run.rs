use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Terminal;
use tracing::warn;

use super::events::handle_key_event;
use super::state::{TuiState, ViewMode};
use super::views::{draw_activity_view, draw_help_overlay, draw_repos_view};
use crate::model::ProfileReport;

type Backend = CrosstermBackend<io::Stdout>;

/// Runs its closure on drop, so every exit path after setup restores the terminal.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

pub fn run(report: &ProfileReport) -> io::Result<()> {
    enable_raw_mode()?;
    let _raw_mode = RestoreGuard::new(|| {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    });

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, report);
    let cleared = terminal.clear();
    result.and(cleared)
}

fn event_loop(terminal: &mut Terminal<Backend>, report: &ProfileReport) -> io::Result<()> {
    let mut state = TuiState::new(report.repositories.len(), report.daily_commits.len());

    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(size);

            let tabs = Tabs::new(ViewMode::TITLES.to_vec())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("ghprofile: {}", report.username)),
                )
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .select(state.tab_index);
            f.render_widget(tabs, chunks[0]);

            match state.view_mode {
                ViewMode::Repositories => draw_repos_view(f, chunks[1], &report.repositories, &state),
                ViewMode::Activity => draw_activity_view(f, chunks[1], &report.daily_commits, &state),
            }

            let status = match state.active_status() {
                Some(msg) => msg.to_string(),
                None => "q quit | Tab switch view | j/k move | / search | y copy URL | h help".to_string(),
            };
            f.render_widget(
                Paragraph::new(status).style(Style::default().fg(Color::Gray)),
                chunks[2],
            );

            if state.show_help {
                draw_help_overlay(f, size);
            }
        });

        if let Err(e) = draw_result {
            warn!(error = %e, "TUI draw error");
        }

        if poll(Duration::from_millis(200))? {
            if let Event::Key(key_event) = read()? {
                if handle_key_event(key_event, &mut state, report) {
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<u32>) -> io::Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        let setup: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no terminal"));
        setup?;
        Ok(())
    }

    #[test]
    fn restore_runs_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn restore_runs_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
