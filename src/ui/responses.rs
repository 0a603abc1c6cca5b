use egui::{Button, Ui};

use crate::model::Question;
use crate::state::ResponsesState;
use crate::theme::QuizTheme;
use crate::ui::choice::{ChoiceGroup, ChoiceStyle};
use crate::ui::content::ContentRenderer;

/// Option list plus Submit for the question at `index`.
///
/// `state` is keyed by question index: if it belongs to another question it
/// is replaced by an empty one before anything is drawn.
/// Returns `true` when Submit was clicked.
pub fn question_responses(
    ui: &mut Ui,
    renderer: &mut ContentRenderer,
    theme: &QuizTheme,
    question: &Question,
    index: usize,
    state: &mut ResponsesState,
) -> bool {
    if state.question() != index {
        *state = ResponsesState::for_question(index);
    }

    let options = question.responses();
    let style = ChoiceStyle {
        full_width_labels: true,
        row_spacing: theme.spacing(1.0),
        bottom_margin: theme.spacing(2.0),
    };

    let changed = ChoiceGroup::new(
        ("responses", index),
        question.allows_multiple(),
        state.selection_mut(),
        &options,
    )
    .style(style)
    .show(ui, |ui, option| {
        renderer.show(ui, ("option", index, option.key), option.label, true);
    });
    if changed {
        log::debug!("question {} selection: {:?}", index + 1, state.selection());
    }

    ui.add(Button::new("Submit")).clicked()
}
