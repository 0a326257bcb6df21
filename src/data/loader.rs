use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::SourceFormat;
use crate::models::QuizQuestion;
use crate::parser::parse_quiz_text;

/// Error type for reading a question file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not a JSON array of questions.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file was read but held no questions.
    Empty { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::Empty { path } => {
                write!(f, "{} must contain at least one question", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
            LoadError::Empty { .. } => None,
        }
    }
}

pub fn load_questions<P: AsRef<Path>>(
    path: P,
    format: SourceFormat,
) -> Result<Vec<QuizQuestion>, LoadError> {
    match format {
        SourceFormat::Text => load_questions_from_text(path),
        SourceFormat::Json => load_questions_from_json(path),
    }
}

/// Reads generated quiz text and parses it.
pub fn load_questions_from_text<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let questions = parse_quiz_text(&raw);
    ensure_not_empty(path, questions)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let questions: Vec<QuizQuestion> =
        serde_json::from_str(&raw).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    ensure_not_empty(path, questions)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_not_empty(
    path: &Path,
    questions: Vec<QuizQuestion>,
) -> Result<Vec<QuizQuestion>, LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_text_file() {
        let file = file_with(
            "Question 1:\nWhat is VFR?\nA) Visual Flight Rules\nB) Variable Flight Range\nC) Verified Flight Route\nD) Virtual Flying Regulations\nExplanation: Weather clear enough to see.\n",
        );

        let questions = load_questions(file.path(), SourceFormat::Text).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "What is VFR?");
        assert_eq!(questions[0].options[0].text, "Visual Flight Rules");
    }

    #[test]
    fn loads_json_with_camel_case_flags() {
        let file = file_with(
            r#"[{
                "text": "What is the purpose of an altimeter?",
                "options": [
                    {"text": "To measure airspeed.", "isCorrect": false},
                    {"text": "To indicate altitude.", "isCorrect": true},
                    {"text": "To display engine RPM.", "isCorrect": false},
                    {"text": "To calculate wind speed.", "isCorrect": false}
                ],
                "explanation": "It shows height above sea level."
            }]"#,
        );

        let questions = load_questions(file.path(), SourceFormat::Json).unwrap();

        assert_eq!(questions[0].correct_index(), Some(1));
        assert_eq!(questions[0].explanation, "It shows height above sea level.");
    }

    #[test]
    fn text_without_markers_is_empty() {
        let file = file_with("The service returned an apology instead of a quiz.");

        let err = load_questions_from_text(file.path()).unwrap_err();

        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn json_empty_array_is_empty() {
        let file = file_with("[]");

        let err = load_questions_from_json(file.path()).unwrap_err();

        assert!(matches!(err, LoadError::Empty { .. }));
        assert!(err.to_string().ends_with("must contain at least one question"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = file_with("{ not json");

        let err = load_questions_from_json(file.path()).unwrap_err();

        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_questions_from_text("/definitely/not/here.txt").unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }
}
