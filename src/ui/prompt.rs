use egui::{Stroke, Ui};

use crate::model::Question;
use crate::theme::QuizTheme;
use crate::ui::content::ContentRenderer;

pub fn prompt_heading(index: usize) -> String {
    format!("Question {}", index + 1)
}

/// Quoted block with the question number and its prompt.
pub fn question_prompt(
    ui: &mut Ui,
    renderer: &mut ContentRenderer,
    theme: &QuizTheme,
    question: &Question,
    index: usize,
) {
    let block = theme.quote_frame(ui.visuals()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.heading(prompt_heading(index));
        ui.add_space(theme.spacing(1.0));
        renderer.show(ui, ("prompt", index), &question.prompt, false);
    });

    let rule = Stroke::new(3.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let rect = block.response.rect;
    ui.painter().vline(rect.left(), rect.y_range(), rule);
    ui.add_space(theme.spacing(2.0));
}
