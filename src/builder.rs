// src/builder.rs

use crate::model::{Answer, Question, RawQuestion};
use html_escape::decode_html_entities;
use rand::Rng;

/// Chooses where the correct answer goes: given `n` incorrect answers it must
/// return an index in `0..=n`.
pub type IndexPicker = fn(usize) -> usize;

pub fn random_index(incorrect_count: usize) -> usize {
    rand::thread_rng().gen_range(0..=incorrect_count)
}

fn new_id() -> String {
    nanoid::nanoid!()
}

pub fn create_answer(text: &str, is_correct: bool) -> Answer {
    Answer {
        id: new_id(),
        text: decode_html_entities(text).into_owned(),
        is_correct,
        is_selected: false,
    }
}

/// Builds the answer list with the correct answer spliced in at `pick(n)`.
pub fn create_answers(
    incorrect_answers: &[String],
    correct_answer: &str,
    pick: IndexPicker,
) -> Vec<Answer> {
    let mut answers: Vec<Answer> = incorrect_answers
        .iter()
        .map(|text| create_answer(text, false))
        .collect();
    // Clamp so a bad picker cannot make insert panic
    let index = pick(answers.len()).min(answers.len());
    answers.insert(index, create_answer(correct_answer, true));
    answers
}

pub fn create_question(
    text: &str,
    incorrect_answers: &[String],
    correct_answer: &str,
    pick: IndexPicker,
) -> Question {
    Question {
        id: new_id(),
        text: decode_html_entities(text).into_owned(),
        answers: create_answers(incorrect_answers, correct_answer, pick),
    }
}

/// Maps the API records to questions, keeping their order.
pub fn build_questions(raw: &[RawQuestion], pick: IndexPicker) -> Vec<Question> {
    raw.iter()
        .map(|rq| create_question(&rq.question, &rq.incorrect_answers, &rq.correct_answer, pick))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{first, last, raw_question, raw_quiz};
    use super::*;
    use std::collections::HashSet;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_answer_decodes_entities_and_starts_unselected() {
        let answer = create_answer("Tom &amp; Jerry&#039;s", true);
        assert_eq!(answer.text, "Tom & Jerry's");
        assert!(answer.is_correct);
        assert!(!answer.is_selected);
        assert!(!answer.id.is_empty());
    }

    #[test]
    fn malformed_entities_pass_through() {
        let answer = create_answer("Fish &bogus; & more", false);
        assert_eq!(answer.text, "Fish &bogus; & more");
    }

    #[test]
    fn ids_are_unique() {
        let question = create_question("Q", &strings(&["a", "b", "c"]), "d", random_index);
        let mut ids: HashSet<&str> = question.answers.iter().map(|a| a.id.as_str()).collect();
        ids.insert(question.id.as_str());
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn correct_answer_lands_where_the_picker_says() {
        fn second(_: usize) -> usize {
            1
        }
        let incorrect = strings(&["a", "b", "c"]);

        let at_start = create_answers(&incorrect, "ok", first);
        assert!(at_start[0].is_correct);

        let at_end = create_answers(&incorrect, "ok", last);
        assert!(at_end[3].is_correct);

        let in_middle = create_answers(&incorrect, "ok", second);
        let texts: Vec<&str> = in_middle.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "ok", "b", "c"]);
    }

    #[test]
    fn out_of_range_picker_is_clamped() {
        fn too_far(n: usize) -> usize {
            n + 10
        }
        let answers = create_answers(&strings(&["a"]), "ok", too_far);
        assert_eq!(answers.len(), 2);
        assert!(answers[1].is_correct);
    }

    #[test]
    fn answer_count_is_incorrect_plus_one_with_single_correct() {
        for n in 0..6 {
            let incorrect: Vec<String> = (0..n).map(|i| format!("wrong {i}")).collect();
            let question = create_question("Q", &incorrect, "right", random_index);
            assert_eq!(question.answers.len(), n + 1);
            assert_eq!(question.answers.iter().filter(|a| a.is_correct).count(), 1);
        }
    }

    #[test]
    fn random_index_is_roughly_uniform() {
        let n = 3;
        let runs = 8_000;
        let mut counts = [0usize; 4];
        for _ in 0..runs {
            let answers = create_answers(&strings(&["a", "b", "c"]), "ok", random_index);
            let pos = answers.iter().position(|a| a.is_correct).unwrap();
            counts[pos] += 1;
        }
        let expected = runs / (n + 1);
        for count in counts {
            // 2000 expected per slot, ten standard deviations of slack
            assert!(count > expected * 8 / 10 && count < expected * 12 / 10, "{counts:?}");
        }
    }

    #[test]
    fn build_questions_keeps_order_and_decodes_text() {
        let questions = build_questions(&raw_quiz(), random_index);
        assert_eq!(questions.len(), 5);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.text, format!("Question {} \"quoted\"?", i + 1));
            assert_eq!(q.answers.len(), 4);
            assert!(q.answers.iter().all(|a| !a.is_selected));
        }
    }

    #[test]
    fn build_questions_of_nothing_is_empty() {
        assert!(build_questions(&[], random_index).is_empty());
        let single = build_questions(&[raw_question(9)], first);
        assert_eq!(single[0].answers[0].text, "Right 9");
    }
}
