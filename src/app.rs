use tracing::debug;

use crate::config::DEFAULT_TITLE;
use crate::models::{AppState, QuizQuestion, QuizResults};

const ADVICE_PERFECT: &str = "Excellent! You have a perfect understanding of the material.";
const ADVICE_GREAT: &str = "Great job! Review a few areas to perfect your knowledge.";
const ADVICE_GOOD: &str = "Good effort! Focus on reviewing the topics you missed.";
const ADVICE_WEAK: &str = "Needs improvement. Consider studying the material thoroughly.";

pub struct App {
    pub state: AppState,
    title: String,
    questions: Vec<QuizQuestion>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    revealed: bool,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        let num_questions = questions.len();

        Self {
            state: AppState::Welcome,
            title: DEFAULT_TITLE.to_string(),
            questions,
            current_question_index: 0,
            selected_option: 0,
            answers: vec![None; num_questions],
            revealed: false,
            result_scroll: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// The option picked for the current question, once it has been checked.
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current_question_index).copied().flatten()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn current_option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_option_count();
        if count == 0 || self.revealed {
            return;
        }
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_option_count();
        if count == 0 || self.revealed {
            return;
        }
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.questions.is_empty() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    /// Records `index` as the answer to the current question and reveals the
    /// correct option. Returns whether the pick was correct, or `None` if the
    /// question was already checked or has no such option.
    pub fn check_answer(&mut self, index: usize) -> Option<bool> {
        if self.revealed {
            return None;
        }
        let question = self.current_question()?;
        let is_correct = question.options.get(index)?.is_correct;

        self.answers[self.current_question_index] = Some(index);
        self.selected_option = index;
        self.revealed = true;
        debug!(
            question = self.current_question_number(),
            answer = index,
            is_correct,
            "answer checked"
        );
        Some(is_correct)
    }

    pub fn next_or_finish(&mut self) {
        if self.current_question_index + 1 < self.questions.len() {
            self.current_question_index += 1;
            self.selected_option = 0;
            self.revealed = false;
        } else {
            self.state = AppState::Result;
        }
    }

    /// Checks the highlighted option, or moves on if it was already checked.
    pub fn submit_answer(&mut self) {
        if self.revealed || self.current_option_count() == 0 {
            self.next_or_finish();
        } else {
            self.check_answer(self.selected_option);
        }
    }

    pub fn is_answer_correct(&self, question_index: usize) -> bool {
        let answer = self.answers.get(question_index).copied().flatten();
        match (answer, self.questions.get(question_index)) {
            (Some(answer), Some(question)) => question
                .options
                .get(answer)
                .is_some_and(|option| option.is_correct),
            _ => false,
        }
    }

    pub fn calculate_score(&self) -> usize {
        (0..self.questions.len())
            .filter(|&index| self.is_answer_correct(index))
            .count()
    }

    pub fn results(&self) -> QuizResults {
        let total = self.questions.len();
        let score = if total > 0 {
            (self.calculate_score() as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        QuizResults {
            score,
            advice: advice_for(score),
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.questions.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.revealed = false;
        self.result_scroll = 0;
        self.answers = vec![None; self.questions.len()];
    }
}

fn advice_for(score: f64) -> &'static str {
    if score >= 100.0 {
        ADVICE_PERFECT
    } else if score >= 75.0 {
        ADVICE_GREAT
    } else if score >= 50.0 {
        ADVICE_GOOD
    } else {
        ADVICE_WEAK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizOption;
    use pretty_assertions::assert_eq;

    fn question(text: &str, correct: usize, count: usize) -> QuizQuestion {
        QuizQuestion {
            text: text.to_string(),
            options: (0..count)
                .map(|i| QuizOption {
                    text: format!("option {i}"),
                    is_correct: i == correct,
                })
                .collect(),
            explanation: format!("because {text}"),
        }
    }

    fn four_questions() -> App {
        App::with_questions(vec![
            question("one", 0, 4),
            question("two", 1, 4),
            question("three", 2, 4),
            question("four", 3, 4),
        ])
    }

    #[test]
    fn check_answer_reveals_once() {
        let mut app = four_questions();
        app.start_quiz();

        assert_eq!(app.check_answer(0), Some(true));
        assert!(app.is_revealed());
        assert_eq!(app.current_answer(), Some(0));
        assert_eq!(app.check_answer(1), None);
        assert_eq!(app.calculate_score(), 1);
    }

    #[test]
    fn check_answer_guards_missing_options() {
        let mut app = App::with_questions(vec![question("empty", 0, 0)]);
        app.start_quiz();

        assert_eq!(app.check_answer(0), None);
        assert!(!app.is_revealed());

        app.select_next_option();
        assert_eq!(app.selected_option(), 0);

        app.submit_answer();
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.results().score, 0.0);
    }

    #[test]
    fn selection_wraps_within_option_count() {
        let mut app = App::with_questions(vec![question("short", 0, 2)]);
        app.start_quiz();

        app.select_next_option();
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);

        app.select_previous_option();
        assert_eq!(app.selected_option(), 1);
    }

    #[test]
    fn submit_checks_then_advances() {
        let mut app = four_questions();
        app.start_quiz();

        app.submit_answer();
        assert!(app.is_revealed());
        assert_eq!(app.current_question_number(), 1);

        app.submit_answer();
        assert!(!app.is_revealed());
        assert_eq!(app.current_question_number(), 2);
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn results_follow_advice_thresholds() {
        let mut app = four_questions();
        app.start_quiz();

        // right, right, right, wrong
        for pick in [0, 1, 2, 0] {
            app.check_answer(pick);
            app.next_or_finish();
        }

        assert_eq!(app.state, AppState::Result);
        let results = app.results();
        assert_eq!(results.score, 75.0);
        assert_eq!(results.advice, ADVICE_GREAT);
    }

    #[test]
    fn advice_bands() {
        assert_eq!(advice_for(100.0), ADVICE_PERFECT);
        assert_eq!(advice_for(75.0), ADVICE_GREAT);
        assert_eq!(advice_for(50.0), ADVICE_GOOD);
        assert_eq!(advice_for(49.9), ADVICE_WEAK);
    }

    #[test]
    fn empty_quiz_goes_straight_to_results() {
        let mut app = App::with_questions(Vec::new());
        app.start_quiz();

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.results().score, 0.0);
        assert_eq!(app.results().advice, ADVICE_WEAK);
        assert!(app.current_question().is_none());
    }

    #[test]
    fn restart_clears_answers() {
        let mut app = four_questions();
        app.start_quiz();
        app.check_answer(0);
        app.next_or_finish();
        app.scroll_results_down();

        app.restart();

        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.current_question_number(), 1);
        assert!(app.answers().iter().all(Option::is_none));
        assert_eq!(app.result_scroll(), 0);
        assert!(!app.is_revealed());
    }
}
