use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Loading Quiz...").heading());
            ui.add_space(20.0);
            ui.add(Spinner::new().size(32.0))
                .on_hover_text("Please wait while we load your quiz questions");
        });
    });
}
