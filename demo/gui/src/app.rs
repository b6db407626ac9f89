//! TUI Application state and event handling.
//!
//! [`Dashboard`] holds everything the screens render and turns key presses
//! into [`DashboardAction`]s. [`TuiApp`] owns the terminal and runs the loop.

use crate::screens;
use anyhow::Result;
use coverage_core::prelude::*;
use coverage_core::types::{OVERDRAFT_LIMIT_RANGE, PREFERRED_BUFFER_RANGE, SCENARIO_AMOUNT_RANGE};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use overdraft_inputs::prelude::*;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Coverage controls, channels and scenario planner
    Coverage,
    /// Alerts, recent activity and checklist
    Activity,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Coverage => "Coverage",
            Self::Activity => "Alerts & Activity",
        }
    }
}

/// Map a key press to a state transition.
///
/// Slider keys step from the current value; `selected` is the channel the
/// cursor is on.
pub fn action_for_key(
    state: &DashboardState,
    selected: usize,
    key: KeyCode,
) -> Option<DashboardAction> {
    match key {
        KeyCode::Char('c') => Some(DashboardAction::ToggleCoverage),
        KeyCode::Char('a') => Some(DashboardAction::ToggleAutoTransfer),
        KeyCode::Char(']') => Some(DashboardAction::SetOverdraftLimit(
            OVERDRAFT_LIMIT_RANGE.nudge(state.overdraft_limit, 1),
        )),
        KeyCode::Char('[') => Some(DashboardAction::SetOverdraftLimit(
            OVERDRAFT_LIMIT_RANGE.nudge(state.overdraft_limit, -1),
        )),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(DashboardAction::SetScenarioAmount(
            SCENARIO_AMOUNT_RANGE.nudge(state.scenario_amount, 1),
        )),
        KeyCode::Char('-') => Some(DashboardAction::SetScenarioAmount(
            SCENARIO_AMOUNT_RANGE.nudge(state.scenario_amount, -1),
        )),
        KeyCode::Char('B') => Some(DashboardAction::SetPreferredBuffer(
            PREFERRED_BUFFER_RANGE.nudge(state.preferred_buffer, 1),
        )),
        KeyCode::Char('b') => Some(DashboardAction::SetPreferredBuffer(
            PREFERRED_BUFFER_RANGE.nudge(state.preferred_buffer, -1),
        )),
        KeyCode::Char(' ') | KeyCode::Enter => state
            .channels
            .get(selected)
            .map(|channel| DashboardAction::ToggleChannel(channel.id.clone())),
        KeyCode::Char('p') => Some(DashboardAction::ToggleAlert(AlertChannel::Push)),
        KeyCode::Char('s') => Some(DashboardAction::ToggleAlert(AlertChannel::Sms)),
        KeyCode::Char('e') => Some(DashboardAction::ToggleAlert(AlertChannel::Email)),
        _ => None,
    }
}

/// Everything the screens render.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Current screen
    pub screen: Screen,
    /// User-controlled settings
    pub state: DashboardState,
    /// Channel under the cursor
    pub selected_channel: usize,
    /// Account snapshot from the provider
    pub account: AccountSnapshot,
    /// Masked card number
    pub card: String,
    /// Recent activity from the feed
    pub activities: Vec<ActivityRecord>,
    /// Exit flag
    pub should_quit: bool,
}

impl Dashboard {
    /// Create a dashboard from a starting state and the fixture collaborators
    pub fn new(
        state: DashboardState,
        provider: &dyn AccountDataProvider,
        feed: &dyn ActivityFeed,
    ) -> Self {
        Self {
            screen: Screen::Coverage,
            state,
            selected_channel: 0,
            account: provider.snapshot(),
            card: provider.masked_card_number(),
            activities: feed.recent(),
            should_quit: false,
        }
    }

    /// Derived coverage figures for the current state
    pub fn summary(&self) -> CoverageSummary {
        self.state.summary(self.account.available_credit)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.screen = Screen::Coverage,
            KeyCode::Char('2') => self.screen = Screen::Activity,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_channel = self.selected_channel.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_channel < self.state.channels.len().saturating_sub(1) {
                    self.selected_channel += 1;
                }
            }
            other => {
                if let Some(action) = action_for_key(&self.state, self.selected_channel, other) {
                    self.state = update(&self.state, &action);
                }
            }
        }
    }
}

/// TUI Application: a [`Dashboard`] bound to a terminal
pub struct TuiApp {
    dashboard: Dashboard,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Take over the terminal and wrap `dashboard`
    pub fn new(dashboard: Dashboard) -> Result<Self> {
        enable_raw_mode()?;
        // No TuiApp exists yet, so Drop will not restore the terminal.
        let terminal = cleanup_on_error(Self::enter_terminal(), leave_terminal)?;

        Ok(Self {
            dashboard,
            terminal,
        })
    }

    fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    /// Run the TUI event loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            let dashboard = &self.dashboard;
            self.terminal.draw(|frame| screens::draw(frame, dashboard))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.dashboard.handle_key(key.code);
                    }
                }
            }

            if self.dashboard.should_quit {
                tracing::info!("dashboard closed");
                break;
            }
        }

        Ok(())
    }
}

/// Run `cleanup` if `result` is an error, then pass `result` through
fn cleanup_on_error<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

fn leave_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            DashboardState::default(),
            &CrescendoFixture::new(),
            &FixtureActivityFeed::new(),
        )
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Coverage.title(), "Coverage");
        assert_eq!(Screen::Activity.title(), "Alerts & Activity");
    }

    #[test]
    fn test_initial_summary() {
        let summary = dashboard().summary();
        assert_eq!(summary.potential_coverage, 1200.0);
        assert_eq!(summary.uncovered, 0.0);
    }

    #[test]
    fn test_slider_keys_step() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.state.overdraft_limit, 1250.0);
        app.handle_key(KeyCode::Char('['));
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state.overdraft_limit, 1150.0);

        app.handle_key(KeyCode::Char('b'));
        assert_eq!(app.state.preferred_buffer, 225.0);
    }

    #[test]
    fn test_scenario_key_snaps_off_grid_start() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.state.scenario_amount, 600.0);
    }

    #[test]
    fn test_channel_cursor_and_toggle() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_channel, 2);

        app.handle_key(KeyCode::Char(' '));
        assert!(app.state.channels[2].enabled);
        assert_eq!(app.summary().channel_capacity, 4500.0);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert!(!app.state.channels[1].enabled);
    }

    #[test]
    fn test_coverage_toggle_zeroes_coverage() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Char('c'));
        let summary = app.summary();
        assert_eq!(summary.potential_coverage, 0.0);
        assert_eq!(summary.ratio_percent, 0.0);
    }

    #[test]
    fn test_alert_keys() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Char('e'));
        assert!(app.state.alerts.email);
        app.handle_key(KeyCode::Char('p'));
        app.handle_key(KeyCode::Char('s'));
        assert!(!app.state.alerts.has_realtime());
    }

    #[test]
    fn test_screen_switch_and_quit() {
        let mut app = dashboard();
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Activity);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unmapped_key_leaves_state() {
        let mut app = dashboard();
        let before = app.state.clone();
        app.handle_key(KeyCode::Char('z'));
        assert_eq!(app.state, before);
    }

    #[test]
    fn test_cleanup_runs_only_on_error() {
        let mut restored = false;
        let result: Result<()> = cleanup_on_error(Err(anyhow::anyhow!("no tty")), || restored = true);
        assert!(result.is_err());
        assert!(restored);

        let mut restored = false;
        let value = cleanup_on_error(Ok(7), || restored = true).unwrap();
        assert_eq!(value, 7);
        assert!(!restored);
    }

    #[test]
    fn test_toggle_with_no_channels() {
        let state = DashboardState {
            channels: Vec::new(),
            ..DashboardState::default()
        };
        assert_eq!(action_for_key(&state, 0, KeyCode::Enter), None);
    }
}
