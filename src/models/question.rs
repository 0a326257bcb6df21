use serde::{Deserialize, Serialize};

/// One quiz item: a stem, its lettered options and an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    /// Set on the first option of each parsed question. Generated quiz text
    /// does not promise the right answer comes first, so for parsed input
    /// this is a placeholder rather than a checked answer key.
    pub is_correct: bool,
}

impl QuizQuestion {
    /// Index of the option marked correct, if any.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }
}

/// Final score of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResults {
    /// Percentage of questions answered correctly, 0 to 100.
    pub score: f64,
    pub advice: &'static str,
}
