mod question;

pub use question::{QuizOption, QuizQuestion, QuizResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
