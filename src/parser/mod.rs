//! Parsing of generated quiz text into [`QuizQuestion`] records.
//!
//! The expected layout is a repetition of
//!
//! ```text
//! Question 1:
//! What color is the sky?
//! A) Blue
//! B) Green
//! C) Red
//! D) Yellow
//! Explanation: Rayleigh scattering.
//! ```
//!
//! Nothing about the input is trusted. Missing pieces leave the matching
//! field empty instead of failing the whole parse.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::{QuizOption, QuizQuestion};

pub const OPTIONS_PER_QUESTION: usize = 4;

const FIRST_OPTION_TOKEN: &str = "A)";
const EXPLANATION_TOKEN: &str = "Explanation:";

static DEFAULT_PARSER: LazyLock<QuizTextParser> = LazyLock::new(QuizTextParser::new);

/// Parses `input` with a shared [`QuizTextParser`].
pub fn parse_quiz_text(input: &str) -> Vec<QuizQuestion> {
    DEFAULT_PARSER.parse(input)
}

/// Renders questions back into the layout [`QuizTextParser`] reads,
/// numbering them from 1 and lettering options from `A`.
pub fn format_quiz_text(questions: &[QuizQuestion]) -> String {
    let mut lines = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        lines.push(format!("Question {}:", index + 1));
        lines.push(question.text.clone());
        for (letter, option) in ('A'..='Z').zip(&question.options) {
            lines.push(format!("{}) {}", letter, option.text));
        }
        lines.push(format!("{} {}", EXPLANATION_TOKEN, question.explanation));
    }

    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

pub struct QuizTextParser {
    re_marker: Regex,
    re_option: Regex,
    re_marker_fragment: Regex,
}

impl Default for QuizTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizTextParser {
    pub fn new() -> Self {
        Self {
            re_marker: Regex::new(r"Question\s*\d+\s*:").expect("marker pattern"),
            re_option: Regex::new(r"[A-Z]\)[ \t]*([^\n]*)").expect("option pattern"),
            re_marker_fragment: Regex::new(r"stion\s*\d+\s*:").expect("fragment pattern"),
        }
    }

    /// Splits `input` on "Question N:" markers and parses each window.
    /// Text before the first marker is ignored.
    pub fn parse(&self, input: &str) -> Vec<QuizQuestion> {
        let markers: Vec<(usize, usize)> = self
            .re_marker
            .find_iter(input)
            .map(|found| (found.start(), found.end()))
            .collect();

        let questions: Vec<QuizQuestion> = markers
            .iter()
            .enumerate()
            .map(|(index, &(_, body_start))| {
                let window_end = markers
                    .get(index + 1)
                    .map_or(input.len(), |&(next_start, _)| next_start);
                self.parse_item(&input[body_start..window_end], index + 1)
            })
            .collect();

        debug!(questions = questions.len(), "parsed quiz text");
        questions
    }

    /// `body` is one window with its marker already cut off.
    fn parse_item(&self, body: &str, position: usize) -> QuizQuestion {
        let explanation_at = body.find(EXPLANATION_TOKEN);
        let answers_end = explanation_at.unwrap_or(body.len());
        let options_at = body[..answers_end].find(FIRST_OPTION_TOKEN);

        let stem_end = options_at.unwrap_or(answers_end);
        let text = self.clean_stem(&body[..stem_end]);

        let options = match options_at {
            Some(start) => self.parse_options(&body[start..answers_end]),
            None => Vec::new(),
        };

        let explanation = explanation_at
            .map(|at| body[at + EXPLANATION_TOKEN.len()..].trim().to_string())
            .unwrap_or_default();

        if text.is_empty() || options.len() < OPTIONS_PER_QUESTION {
            warn!(
                question = position,
                options = options.len(),
                empty_stem = text.is_empty(),
                "degraded quiz item"
            );
        }

        QuizQuestion {
            text,
            options,
            explanation,
        }
    }

    fn parse_options(&self, region: &str) -> Vec<QuizOption> {
        self.re_option
            .captures_iter(region)
            .take(OPTIONS_PER_QUESTION)
            .enumerate()
            .map(|(index, captures)| QuizOption {
                text: captures[1].trim().to_string(),
                is_correct: index == 0,
            })
            .collect()
    }

    /// Drops leftover "stion N:" fragments and markdown asterisks.
    fn clean_stem(&self, raw: &str) -> String {
        let without_fragments = self.re_marker_fragment.replace_all(raw.trim(), "");
        without_fragments.replace('*', "").trim().to_string()
    }
}
