//! # quiz-text
//!
//! Turns generated quiz text into structured questions and runs them as a
//! terminal quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_text::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load "Question N:" formatted text from a file
//!     let quiz = Quiz::from_text("quiz.txt")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Parsing alone needs no terminal:
//!
//! ```rust
//! let questions = quiz_text::parse_quiz_text(
//!     "Question 1:\nWhat color is the sky?\nA) Blue\nB) Green\nC) Red\nD) Yellow\nExplanation: Rayleigh scattering.",
//! );
//! assert_eq!(questions[0].options[0].text, "Blue");
//! ```

mod app;
pub mod config;
mod data;
pub mod logging;
mod models;
pub mod parser;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::App;
pub use config::{QuizConfig, SourceFormat};
pub use data::{LoadError, load_questions, load_questions_from_json, load_questions_from_text};
pub use models::{AppState, QuizOption, QuizQuestion, QuizResults};
pub use parser::{QuizTextParser, format_quiz_text, parse_quiz_text};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
    /// Error serializing questions.
    Json(serde_json::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::Json(e) => write!(f, "Failed to serialize questions: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::Json(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Json(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Create a quiz straight from generated quiz text.
    ///
    /// Never fails; text without any "Question N:" marker gives an empty quiz.
    pub fn parse(raw: &str) -> Self {
        Self::new(parse_quiz_text(raw))
    }

    /// Load a quiz from a file of generated quiz text.
    pub fn from_text<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_text(path)?;
        Ok(Self::new(questions))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_text::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Load the quiz described by `config`.
    pub fn from_config(config: &QuizConfig) -> Result<Self, QuizError> {
        let questions = load_questions(&config.questions, config.format)?;
        Ok(Self {
            app: App::with_questions(questions).with_title(config.title.as_str()),
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        self.app.questions()
    }

    /// Pretty JSON of the loaded questions.
    pub fn to_json(&self) -> Result<String, QuizError> {
        Ok(serde_json::to_string_pretty(self.questions())?)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(questions = self.app.total_questions(), "starting quiz");
        let mut term = terminal::TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
