use super::*;
use crate::builder::build_questions;
use crate::error::TransitionError;
use crate::fetch::fetch_questions;
use crate::model::QuizPhase;
use crate::selection;
use log::{debug, info, warn};
use std::sync::mpsc::{self, TryRecvError};

impl QuizApp {
    pub(crate) fn reject(&self, action: &'static str) -> TransitionError {
        let err = TransitionError::NotAllowed {
            action,
            phase: self.phase(),
        };
        debug!("{err}");
        err
    }

    /// Enters `Loading` without starting any request. Only valid from `Empty`.
    pub fn begin_loading(&mut self) -> Result<FetchTicket, TransitionError> {
        if self.phase() != QuizPhase::Empty {
            return Err(self.reject("start a quiz"));
        }
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        Ok(FetchTicket {
            generation: self.generation,
        })
    }

    /// Starts loading a new quiz in the background; `poll_fetch` picks up the result.
    pub fn start_quiz(&mut self) -> Result<(), TransitionError> {
        let ticket = self.begin_loading()?;
        let endpoint = self.config.endpoint.clone();
        let (tx, rx) = mpsc::channel::<FetchOutcome>();
        self.fetch_rx = Some(rx);
        info!("fetching quiz from {endpoint}");

        // If the app is gone the send fails and is ignored
        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = fetch_questions(&endpoint);
            let _ = tx.send((ticket, result));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_questions(&endpoint).await;
            let _ = tx.send((ticket, result));
        });

        Ok(())
    }

    /// Applies a finished fetch, if any. Returns true when the state changed.
    pub fn poll_fetch(&mut self) -> bool {
        let received = match self.fetch_rx.as_ref() {
            Some(rx) => rx.try_recv(),
            None => return false,
        };

        match received {
            Ok((ticket, result)) => self.apply_fetch_result(ticket, result),
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                let ticket = FetchTicket {
                    generation: self.generation,
                };
                self.apply_fetch_result(
                    ticket,
                    Err(FetchError::FetchFailed("fetch worker stopped without answering".into())),
                )
            }
        }
    }

    /// Installs the questions (or the error) for the outstanding fetch.
    ///
    /// Results for an older attempt, or arriving when nothing is loading, are
    /// discarded and false is returned.
    pub fn apply_fetch_result(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RawQuestion>, FetchError>,
    ) -> bool {
        if !self.is_loading || ticket.generation != self.generation {
            debug!(
                "discarding stale fetch result (ticket {}, current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.fetch_rx = None;
        self.is_loading = false;
        match result {
            Ok(raw) => {
                let questions = build_questions(&raw, self.pick_index);
                info!("quiz loaded with {} questions", questions.len());
                self.questions = questions;
            }
            Err(err) => {
                warn!("could not load quiz: {}", err.detail());
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn select_answer(&mut self, question_id: &str, answer_id: &str) -> Result<(), TransitionError> {
        if self.phase() != QuizPhase::Active {
            return Err(self.reject("select an answer"));
        }
        self.questions = selection::select_answer(&self.questions, question_id, answer_id);
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), TransitionError> {
        if self.phase() != QuizPhase::Active {
            return Err(self.reject("check answers"));
        }
        if !self.all_answered() {
            debug!("finish rejected: unanswered questions left");
            return Err(TransitionError::Unanswered);
        }
        self.show_results = true;
        self.has_finished = true;
        info!("quiz finished: {}/{}", self.score(), self.questions.len());
        Ok(())
    }

    /// The footer button: checks the answers the first time, restarts after.
    pub fn primary_action(&mut self) -> Result<(), TransitionError> {
        if self.has_finished {
            self.restart()
        } else {
            self.finish()
        }
    }
}
