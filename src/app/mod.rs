use crate::builder::{IndexPicker, random_index};
use crate::config::QuizConfig;
use crate::error::FetchError;
use crate::model::{Question, RawQuestion};
use std::sync::mpsc::Receiver;

pub mod actions;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{AnswerMark, AnswerView, QuestionView, ResultsInfo};

/// Identifies one `start_quiz` attempt. Results carrying an older ticket are
/// dropped instead of being applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

pub type FetchOutcome = (FetchTicket, Result<Vec<RawQuestion>, FetchError>);

/// Owns the whole quiz session. The UI reads it through the query methods and
/// changes it only through the transitions in `actions` and `resets`.
pub struct QuizApp {
    pub config: QuizConfig,
    questions: Vec<Question>,
    show_results: bool,
    is_loading: bool,
    error: Option<String>,
    has_finished: bool,
    generation: u64,
    fetch_rx: Option<Receiver<FetchOutcome>>,
    pick_index: IndexPicker,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_config(QuizConfig::default())
    }

    pub fn with_config(config: QuizConfig) -> Self {
        Self {
            config,
            questions: Vec::new(),
            show_results: false,
            is_loading: false,
            error: None,
            has_finished: false,
            generation: 0,
            fetch_rx: None,
            pick_index: random_index,
        }
    }

    /// Replaces the source of the correct answer's position.
    pub fn with_index_picker(mut self, pick: IndexPicker) -> Self {
        self.pick_index = pick;
        self
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
