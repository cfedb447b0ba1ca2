use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};
use log::debug;

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Quizzical").heading().strong().size(32.0));
            ui.add_space(6.0);
            ui.label("Take a general knowledge quiz");
            ui.add_space(24.0);

            let start = big_button(ui, app.start_button_label(), 200.0, 44.0, !app.is_loading())
                .on_hover_text("Click to start a 5-question general knowledge quiz");
            if start.clicked() {
                start_quiz(app);
            }

            if let Some(error) = app.error().map(str::to_owned) {
                ui.add_space(20.0);
                ui.label(
                    RichText::new(format!("Error: {error}"))
                        .color(Color32::from_rgb(0xD9, 0x3F, 0x3F))
                        .strong(),
                );
                ui.add_space(8.0);
                if big_button(ui, "Try Again", 140.0, 32.0, true).clicked() {
                    start_quiz(app);
                }
            }
        });
    });
}

fn start_quiz(app: &mut QuizApp) {
    if let Err(err) = app.start_quiz() {
        debug!("start ignored: {err}");
    }
}
