mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::QuizPhase;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

/// How often the UI wakes up to check on an outstanding fetch.
const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.poll_fetch() {
            ctx.request_repaint();
        } else if self.is_loading() {
            ctx.request_repaint_after(FETCH_POLL_INTERVAL);
        }

        // BOTTOM PANEL: dark / light theme
        bottom_panel(ctx);

        match self.phase() {
            QuizPhase::Empty => views::welcome::ui_welcome(self, ctx),
            QuizPhase::Loading => views::pending::ui_loading(ctx),
            QuizPhase::Active | QuizPhase::Results => views::quiz::ui_quiz(self, ctx),
        }

        if self.is_passed() {
            views::celebration::paint_confetti(ctx);
        }
    }
}
