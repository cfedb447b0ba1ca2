use crate::QuizApp;
use crate::ui::helpers::{answer_button, big_button};
use crate::ui::layout::simple_panel;
use egui::{Context, RichText, ScrollArea};
use log::debug;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 720.0, egui::Margin::symmetric(24, 20), |ui| {
        let mut clicked: Option<(String, String)> = None;

        ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height((ui.available_height() - 90.0).max(120.0))
            .show(ui, |ui| {
                for question in app.question_views() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&question.text).strong().size(16.0));
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for answer in &question.answers {
                            if answer_button(ui, answer) {
                                clicked = Some((answer.question_id.clone(), answer.answer_id.clone()));
                            }
                        }
                    });
                    ui.add_space(8.0);
                    ui.separator();
                }
            });

        if let Some((question_id, answer_id)) = clicked {
            if let Err(err) = app.select_answer(&question_id, &answer_id) {
                debug!("click ignored: {err}");
            }
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if let Some(results) = app.results_info() {
                ui.label(RichText::new(results.label()).strong().size(18.0));
                ui.add_space(8.0);
            }

            let enabled = app.primary_action_enabled();
            let action = big_button(ui, app.primary_action_label(), 200.0, 40.0, enabled)
                .on_disabled_hover_text("Please answer all questions before checking your answers");
            if action.clicked() {
                if let Err(err) = app.primary_action() {
                    debug!("footer action ignored: {err}");
                }
            }

            if !enabled {
                ui.add_space(4.0);
                ui.weak("Please answer all questions before checking your answers");
            }
        });
    });
}
