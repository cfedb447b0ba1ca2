// src/view_models.rs

/// How an answer button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMark {
    Idle,
    Selected,
    /// Results only: the right answer, picked or not.
    Correct,
    /// Results only: picked, but wrong.
    Incorrect,
    /// Results only: neither picked nor right.
    Locked,
}

#[derive(Clone, Debug)]
pub struct AnswerView {
    pub question_id: String,
    pub answer_id: String,
    pub text: String,
    pub selected: bool,
    pub mark: AnswerMark,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub answers: Vec<AnswerView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultsInfo {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

impl AnswerView {
    pub fn is_locked(&self) -> bool {
        matches!(
            self.mark,
            AnswerMark::Correct | AnswerMark::Incorrect | AnswerMark::Locked
        )
    }

    /// Text for hover and screen readers.
    pub fn accessible_label(&self) -> String {
        match self.mark {
            AnswerMark::Correct => format!("{} (Correct answer)", self.text),
            AnswerMark::Incorrect => format!("{} (Incorrect answer)", self.text),
            _ => self.text.clone(),
        }
    }
}

impl ResultsInfo {
    pub fn label(&self) -> String {
        format!("You scored {}/{} correct answers", self.score, self.total)
    }
}
