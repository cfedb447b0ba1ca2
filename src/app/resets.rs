use super::*;
use crate::error::TransitionError;
use crate::model::QuizPhase;
use log::info;

impl QuizApp {
    /// Leaves the results screen and goes back to the start screen.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        if self.phase() != QuizPhase::Results {
            return Err(self.reject("restart"));
        }
        self.reset_session();
        info!("quiz restarted");
        Ok(())
    }

    fn reset_session(&mut self) {
        self.questions.clear();
        self.show_results = false;
        self.has_finished = false;
        self.is_loading = false;
        self.error = None;
        self.fetch_rx = None;
    }
}
