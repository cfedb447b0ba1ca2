// src/ui/helpers.rs
use crate::view_models::{AnswerMark, AnswerView};
use egui::{Button, Color32, RichText, Ui, Vec2};

const SELECTED_FILL: Color32 = Color32::from_rgb(0xD6, 0xDB, 0xF5);
const CORRECT_FILL: Color32 = Color32::from_rgb(0x94, 0xD7, 0xA2);
const INCORRECT_FILL: Color32 = Color32::from_rgb(0xF8, 0xBC, 0xBC);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> egui::Response {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
}

/// Draws one answer as a pill-shaped button. Returns true when clicked.
pub fn answer_button(ui: &mut Ui, answer: &AnswerView) -> bool {
    let fill = match answer.mark {
        AnswerMark::Idle | AnswerMark::Locked => None,
        AnswerMark::Selected => Some(SELECTED_FILL),
        AnswerMark::Correct => Some(CORRECT_FILL),
        AnswerMark::Incorrect => Some(INCORRECT_FILL),
    };

    let mut text = RichText::new(&answer.text);
    if fill.is_some() {
        // light fills need dark text, dark mode included
        text = text.color(Color32::from_rgb(0x29, 0x32, 0x64));
    }

    let mut button = Button::new(text)
        .corner_radius(12.0)
        .min_size(Vec2::new(64.0, 28.0))
        .selected(answer.selected);
    if let Some(fill) = fill {
        button = button.fill(fill);
    }

    let response = if answer.is_locked() {
        // not clickable, but keeps its colours
        ui.add(button.sense(egui::Sense::hover()))
    } else {
        ui.add(button)
    };

    response.on_hover_text(answer.accessible_label()).clicked()
}
