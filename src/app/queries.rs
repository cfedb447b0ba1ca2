use super::*;
use crate::model::QuizPhase;

impl QuizApp {
    pub fn phase(&self) -> QuizPhase {
        if self.is_loading {
            QuizPhase::Loading
        } else if self.questions.is_empty() {
            QuizPhase::Empty
        } else if self.show_results {
            QuizPhase::Results
        } else {
            QuizPhase::Active
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_finished(&self) -> bool {
        self.has_finished
    }

    /// Recomputed on every call so it can never drift from `questions`.
    pub fn all_answered(&self) -> bool {
        self.questions.iter().all(Question::is_answered)
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.is_answered_correctly())
            .count()
    }

    /// Only true while the results are on screen.
    pub fn is_passed(&self) -> bool {
        self.phase() == QuizPhase::Results && self.score() >= self.config.pass_threshold
    }
}
