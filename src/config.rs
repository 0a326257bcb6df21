use std::path::PathBuf;

use clap::ValueEnum;

pub const DEFAULT_TITLE: &str = "QUIZ";

/// How the question file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceFormat {
    /// Generated quiz text with "Question N:" markers.
    #[default]
    Text,
    /// A JSON array of already structured questions.
    Json,
}

/// Settings for one run, built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub questions: PathBuf,
    pub format: SourceFormat,
    pub title: String,
    pub dump: bool,
    pub log_file: Option<PathBuf>,
}

impl QuizConfig {
    pub fn new(questions: impl Into<PathBuf>) -> Self {
        Self {
            questions: questions.into(),
            format: SourceFormat::default(),
            title: DEFAULT_TITLE.to_string(),
            dump: false,
            log_file: None,
        }
    }
}
