//! Main TUI application loop.
//!
//! Handles:
//! - Screen navigation (form / result)
//! - Input event handling
//! - Submission workflow integration
//! - Async prediction via background worker

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::{PredictionWorkflow, SubmissionState};
use crate::ports::{Notifier, Predictor};

use super::ui::{form::FormState, form::render_form, render_disclaimer, result::render_result};
use super::worker::{PredictionWorker, PredictionWorkerHandle};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Form,
    Result,
}

/// Main application state
pub struct App<N: Notifier> {
    screen: Screen,
    should_quit: bool,

    /// Remote classification port, shared with worker threads
    predictor: Arc<dyn Predictor>,

    /// Submission state machine (single source of truth for the result area)
    workflow: PredictionWorkflow<N>,

    /// Patient form state
    form: FormState,

    /// Pending prediction worker (one in-flight request at most)
    pending_worker: Option<PredictionWorkerHandle>,

    /// Scroll offset of the suggestion list; reset on every new result
    result_scroll: u16,

    /// When the current result arrived, for display
    result_received_at: Option<String>,
}

impl<N: Notifier> App<N> {
    /// Create the application with injected ports (composition root pattern).
    pub fn new(predictor: Arc<dyn Predictor>, notifier: N) -> Self {
        Self {
            screen: Screen::Form,
            should_quit: false,
            predictor,
            workflow: PredictionWorkflow::new(notifier),
            form: FormState::default(),
            pending_worker: None,
            result_scroll: 0,
            result_received_at: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Poll the pending worker for a completed request
            self.poll_worker();

            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(2)])
                    .split(area);

                match self.screen {
                    Screen::Form => render_form(
                        f,
                        chunks[0],
                        &self.form,
                        self.workflow.is_submitting(),
                    ),
                    Screen::Result => render_result(
                        f,
                        chunks[0],
                        self.workflow.state(),
                        self.result_scroll,
                        self.result_received_at.as_deref(),
                    ),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply the worker outcome, if any, and run the on-success hook.
    fn poll_worker(&mut self) {
        let Some(outcome) = self
            .pending_worker
            .as_ref()
            .and_then(PredictionWorkerHandle::try_recv)
        else {
            return;
        };

        self.pending_worker = None;
        let newly_succeeded = self.workflow.complete(outcome.request, outcome.result);

        if newly_succeeded {
            // Explicit bring-into-view hook: switch to the result view and
            // reset the scroll so the classification headline is visible.
            self.screen = Screen::Result;
            self.result_scroll = 0;
            self.result_received_at =
                Some(chrono::Local::now().format("%H:%M:%S").to_string());
        } else if matches!(self.workflow.state(), SubmissionState::Failed { .. }) {
            self.screen = Screen::Result;
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.form.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form.next_field();
            }
            KeyCode::Left => {
                self.form.cycle_option(false);
            }
            KeyCode::Right => {
                self.form.cycle_option(true);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.form.reset_defaults();
            }
            KeyCode::Char(c) => {
                self.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.form.delete_char();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match self.workflow.state() {
            SubmissionState::Succeeded(_) => match key {
                KeyCode::Up => {
                    self.result_scroll = self.result_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.result_scroll = self.result_scroll.saturating_add(1);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.screen = Screen::Form;
                }
                _ => {}
            },
            SubmissionState::Failed { .. } => match key {
                // The form stays editable and resubmittable immediately.
                KeyCode::Enter | KeyCode::Esc => {
                    self.screen = Screen::Form;
                }
                _ => {}
            },
            _ => {
                // Submitting: allow peeking back at the (disabled) form.
                if key == KeyCode::Esc {
                    self.screen = Screen::Form;
                }
            }
        }
    }

    /// Validate, encode and start one prediction request.
    fn submit(&mut self) {
        // Gate: one in-flight request at a time; further submits are no-ops.
        if self.workflow.is_submitting() {
            return;
        }

        if let Err(message) = self.form.validate() {
            self.form.error_message = Some(message);
            return;
        }

        let intake = match self.form.to_intake() {
            Ok(intake) => intake,
            Err(message) => {
                self.form.error_message = Some(message);
                return;
            }
        };
        let payload = match intake.encode() {
            Ok(payload) => payload,
            Err(e) => {
                self.form.error_message = Some(e.to_string());
                return;
            }
        };

        let Some(request) = self.workflow.begin_submit() else {
            return;
        };

        self.pending_worker = Some(PredictionWorker::spawn(
            self.predictor.clone(),
            payload,
            request,
        ));
        self.form.error_message = None;
        self.screen = Screen::Result;
    }
}
