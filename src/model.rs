use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub id: String,
    pub text: String, // already decoded
    pub is_correct: bool,
    pub is_selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Exactly one correct answer; order is fixed once built.
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn selected_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_selected)
    }

    pub fn is_answered(&self) -> bool {
        self.selected_answer().is_some()
    }

    pub fn is_answered_correctly(&self) -> bool {
        self.selected_answer().is_some_and(|a| a.is_correct)
    }
}

/// A question record as delivered by the trivia API, text still HTML-encoded.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub incorrect_answers: Vec<String>,
    pub correct_answer: String,
}

#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Empty,
    Loading,
    Active,
    Results,
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuizPhase::Empty => "empty",
            QuizPhase::Loading => "loading",
            QuizPhase::Active => "active",
            QuizPhase::Results => "results",
        };
        f.write_str(name)
    }
}
