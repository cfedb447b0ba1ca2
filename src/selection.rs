use crate::model::Question;

/// Marks `answer_id` as the only selected answer of `question_id`.
///
/// Picking the answer that is already selected leaves it selected; there is
/// no deselect. Unknown ids leave everything as it was.
pub fn select_answer(questions: &[Question], question_id: &str, answer_id: &str) -> Vec<Question> {
    questions
        .iter()
        .map(|question| {
            if question.id != question_id {
                return question.clone();
            }
            // No matching answer: keep the current selection
            if !question.answers.iter().any(|a| a.id == answer_id) {
                return question.clone();
            }
            let mut updated = question.clone();
            for answer in &mut updated.answers {
                answer.is_selected = answer.id == answer_id;
            }
            updated
        })
        .collect()
}
