//! Main TUI application state and logic

use crate::playback::PlaybackTrace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Timeline,
    State,
    Explain,
    Info,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: timeline -> state -> explain -> info)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Timeline => FocusedPane::State,
            FocusedPane::State => FocusedPane::Explain,
            FocusedPane::Explain => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Timeline,
        }
    }
}

/// Autoplay speeds, slowest to fastest.
const PLAY_INTERVALS: [Duration; 4] = [
    Duration::from_millis(2000),
    Duration::from_millis(1000),
    Duration::from_millis(400),
    Duration::from_millis(150),
];

/// The main application state
pub struct App {
    /// The trace being played back
    pub trace: PlaybackTrace,

    /// Index of the step currently displayed
    pub position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub timeline_scroll: usize,
    pub state_scroll: usize,
    pub explain_scroll: usize,
    pub info_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Index into PLAY_INTERVALS
    pub speed: usize,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Whether the deep explanation variant is shown
    pub deep_explain: bool,
}

impl App {
    /// Create a new app over the given playback trace
    pub fn new(trace: PlaybackTrace) -> Self {
        App {
            trace,
            position: 0,
            focused_pane: FocusedPane::Timeline,
            timeline_scroll: 0,
            state_scroll: 0,
            explain_scroll: 0,
            info_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            speed: 1,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            deep_explain: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= PLAY_INTERVALS[self.speed] {
                    if self.step_forward() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        // Left column: Timeline (top) | Info (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: State (top) | Explanation (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        super::panes::render_timeline_pane(
            frame,
            left_rows[0],
            &self.trace,
            self.position,
            self.focused_pane == FocusedPane::Timeline,
            &mut self.timeline_scroll,
        );

        super::panes::render_info_pane(
            frame,
            left_rows[1],
            &self.trace,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_state_pane(
            frame,
            right_rows[0],
            &self.trace,
            self.position,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        super::panes::render_explain_pane(
            frame,
            right_rows[1],
            &self.trace,
            self.position,
            self.deep_explain,
            self.focused_pane == FocusedPane::Explain,
            &mut self.explain_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.position,
            self.trace.len(),
            self.is_playing,
            self.speed,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVALS[self.speed])
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.speed + 1 < PLAY_INTERVALS.len() {
                    self.speed += 1;
                }
                self.status_message = format!("Speed {}/{}", self.speed + 1, PLAY_INTERVALS.len());
            }
            KeyCode::Char('-') => {
                self.speed = self.speed.saturating_sub(1);
                self.status_message = format!("Speed {}/{}", self.speed + 1, PLAY_INTERVALS.len());
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.deep_explain = !self.deep_explain;
                self.status_message = if self.deep_explain {
                    "Deep explanations on".to_string()
                } else {
                    "Deep explanations off".to_string()
                };
            }
            KeyCode::Enter => {
                // Jump to end of the trace
                self.is_playing = false;
                if !self.trace.is_empty() {
                    self.position = self.trace.len() - 1;
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump to start of the trace
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Timeline => &mut self.timeline_scroll,
            FocusedPane::State => &mut self.state_scroll,
            FocusedPane::Explain => &mut self.explain_scroll,
            FocusedPane::Info => &mut self.info_scroll,
        }
    }

    /// Advance one step; false at the end of the trace
    fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.trace.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; false at the start of the trace
    fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternKey;
    use crate::playback::demo_trace;

    #[test]
    fn stepping_is_clamped_to_the_trace() {
        let mut app = App::new(demo_trace(PatternKey::BinarySearch));
        assert!(!app.step_backward());
        while app.step_forward() {}
        assert_eq!(app.position, app.trace.len() - 1);
        assert!(!app.step_forward());
    }

    #[test]
    fn seeking_jumps_both_ways() {
        let mut app = App::new(demo_trace(PatternKey::SlidingWindow));
        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.position, app.trace.len() - 1);
        app.handle_key_event(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.position, 0);
    }

    #[test]
    fn speed_stays_in_range() {
        let mut app = App::new(demo_trace(PatternKey::HashDuplicate));
        for _ in 0..10 {
            app.handle_key_event(KeyEvent::from(KeyCode::Char('+')));
        }
        assert!(app.speed < PLAY_INTERVALS.len());
        for _ in 0..10 {
            app.handle_key_event(KeyEvent::from(KeyCode::Char('-')));
        }
        assert_eq!(app.speed, 0);
    }
}
