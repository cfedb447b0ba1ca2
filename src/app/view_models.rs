use super::*;
use crate::model::{Answer, QuizPhase};

impl QuizApp {
    pub fn question_views(&self) -> Vec<QuestionView> {
        self.questions
            .iter()
            .map(|q| QuestionView {
                id: q.id.clone(),
                text: q.text.clone(),
                answers: q
                    .answers
                    .iter()
                    .map(|a| AnswerView {
                        question_id: q.id.clone(),
                        answer_id: a.id.clone(),
                        text: a.text.clone(),
                        selected: a.is_selected,
                        mark: self.mark_for(a),
                    })
                    .collect(),
            })
            .collect()
    }

    fn mark_for(&self, answer: &Answer) -> AnswerMark {
        if !self.show_results {
            return if answer.is_selected {
                AnswerMark::Selected
            } else {
                AnswerMark::Idle
            };
        }
        if answer.is_correct {
            AnswerMark::Correct
        } else if answer.is_selected {
            AnswerMark::Incorrect
        } else {
            AnswerMark::Locked
        }
    }

    pub fn results_info(&self) -> Option<ResultsInfo> {
        if self.phase() != QuizPhase::Results {
            return None;
        }
        Some(ResultsInfo {
            score: self.score(),
            total: self.questions.len(),
            passed: self.is_passed(),
        })
    }

    pub fn primary_action_label(&self) -> &'static str {
        if self.show_results {
            "Play Again"
        } else {
            "Check answers"
        }
    }

    pub fn primary_action_enabled(&self) -> bool {
        self.all_answered()
    }

    pub fn start_button_label(&self) -> &'static str {
        if self.is_loading { "Loading..." } else { "Start quiz" }
    }
}
