//! Main TUI application state and logic

use crate::errors::{Severity, VizError};
use crate::layout;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The session being visualized
    pub session: Session,

    /// First visible row of the step list
    pub steps_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Severity of the status message when it reports a rejection
    pub status_severity: Option<Severity>,

    /// Command being typed; `Some` while the prompt is open
    pub input: Option<String>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            steps_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready! Press : to enter a command"),
            status_severity: None,
            input: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive auto-play from the host clock
            if self.session.tick(Instant::now()) && !self.session.playback().is_playing() {
                self.set_status("Playback complete");
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Structure (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[0]);

        let kind = self.session.kind();
        let (scene, title) = match self.session.current_step() {
            Some(step) => {
                let algorithm = self
                    .session
                    .run()
                    .map(|run| run.algorithm().to_string())
                    .unwrap_or_default();
                (layout::project(step), format!("{}: {}", kind, algorithm))
            }
            None => (
                layout::project_snapshot(&self.session.structure().snapshot(), &[], &[]),
                kind.to_string(),
            ),
        };
        super::panes::render_structure_pane(frame, left_rows[0], &scene, &title);

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            &super::panes::NarrationRenderData {
                step: self.session.current_step(),
                last_operation: self.session.last_operation(),
            },
        );

        super::panes::render_steps_pane(
            frame,
            columns[1],
            self.session.run(),
            self.session.cursor(),
            &mut self.steps_scroll,
        );

        match &self.input {
            Some(input) => super::panes::render_input_line(frame, main_chunks[1], input),
            None => super::panes::render_status_bar(
                frame,
                main_chunks[1],
                &super::panes::StatusRenderData {
                    message: &self.status_message,
                    severity: self.status_severity,
                    cursor: self.session.cursor(),
                    total_steps: self.session.playback().len(),
                    state: self.session.state(),
                    speed: self.session.playback().speed(),
                    kind,
                },
            ),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_severity = None;
    }

    fn report(&mut self, err: &VizError) {
        self.status_message = err.to_string();
        self.status_severity = Some(err.severity());
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(':') | KeyCode::Char('/') => {
                self.input = Some(String::new());
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let target = self.session.cursor() + n;
                match self.session.jump_to(target) {
                    Ok(()) => self.set_status(format!("Jumped to step {}", self.session.cursor())),
                    Err(err) => self.report(&err),
                }
            }
            KeyCode::Tab => {
                let next = self.session.kind().next();
                self.session.switch_kind(next);
                self.steps_scroll = 0;
                self.set_status(format!("Switched to {}", next));
            }
            KeyCode::Left => match self.session.step_backward() {
                Ok(()) => self.set_status("Stepped backward"),
                Err(err) => self.report(&err),
            },
            KeyCode::Right => match self.session.step_forward() {
                Ok(()) => self.set_status("Stepped forward"),
                Err(err) => self.report(&err),
            },
            KeyCode::Up => {
                self.steps_scroll = self.steps_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.steps_scroll = self.steps_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if now.saturating_duration_since(self.last_space_press) >= Duration::from_millis(200)
                {
                    self.last_space_press = now;
                    match self.session.toggle(now) {
                        Ok(()) if self.session.playback().is_playing() => {
                            self.set_status("Playing...")
                        }
                        Ok(()) => self.set_status("Paused"),
                        Err(err) => self.report(&err),
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.playback().speed().faster();
                self.session.set_speed(speed, now);
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let speed = self.session.playback().speed().slower();
                self.session.set_speed(speed, now);
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.steps_scroll = 0;
                self.set_status("Reset");
            }
            KeyCode::Enter => match self.session.jump_to_end() {
                Ok(()) => self.set_status("Jumped to end"),
                Err(err) => self.report(&err),
            },
            KeyCode::Backspace => match self.session.rewind() {
                Ok(()) => self.set_status("Jumped to start"),
                Err(err) => self.report(&err),
            },
            _ => {}
        }
    }

    /// Keys while the command prompt is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.input = None;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            KeyCode::Enter => {
                let line = self.input.take().unwrap_or_default();
                if line.trim().is_empty() {
                    return;
                }
                match self.session.execute(&line) {
                    Ok(_) => {
                        self.steps_scroll = 0;
                        let message = self.session.last_operation().unwrap_or("Done").to_string();
                        self.set_status(message);
                    }
                    Err(err) => self.report(&err),
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::playback::PlaybackState;
    use crate::structures::{Structure, StructureKind};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Session::new(
            Structure::sample(StructureKind::Array),
            Settings::default(),
        ))
    }

    fn type_command(app: &mut App, text: &str, now: Instant) {
        app.handle_key_event(key(KeyCode::Char(':')), now);
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)), now);
        }
        app.handle_key_event(key(KeyCode::Enter), now);
    }

    #[test]
    fn test_command_prompt_runs_algorithm() {
        let mut app = app();
        let now = Instant::now();
        type_command(&mut app, "bubble", now);
        assert!(app.input.is_none());
        assert_eq!(app.session.state(), PlaybackState::Ready);
        assert_eq!(app.status_severity, None);

        app.handle_key_event(key(KeyCode::Right), now);
        assert_eq!(app.session.cursor(), 1);
        app.handle_key_event(key(KeyCode::Enter), now);
        assert_eq!(app.session.state(), PlaybackState::Complete);
    }

    #[test]
    fn test_rejection_sets_severity() {
        let mut app = app();
        let now = Instant::now();
        type_command(&mut app, "append x", now);
        assert_eq!(app.status_severity, Some(Severity::Warning));
        app.handle_key_event(key(KeyCode::Right), now);
        assert_eq!(app.status_severity, Some(Severity::Error));
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char(':')), now);
        app.handle_key_event(key(KeyCode::Char('q')), now);
        app.handle_key_event(key(KeyCode::Esc), now);
        assert!(app.input.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_space_toggles_play() {
        let mut app = app();
        let now = Instant::now();
        type_command(&mut app, "merge", now);
        app.handle_key_event(key(KeyCode::Char(' ')), now);
        assert!(app.session.playback().is_playing());
        // Debounced
        app.handle_key_event(key(KeyCode::Char(' ')), now + Duration::from_millis(50));
        assert!(app.session.playback().is_playing());
        app.handle_key_event(key(KeyCode::Char(' ')), now + Duration::from_millis(300));
        assert_eq!(app.session.state(), PlaybackState::Paused);
    }
}
