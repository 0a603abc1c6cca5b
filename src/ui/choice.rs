//! Radio / checkbox group over a list of keyed options.

use egui::{Id, Sense, Ui, WidgetInfo, WidgetType};

use crate::model::ChoiceOption;

/// Styling handed through to every option row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoiceStyle {
    /// Let the label take the rest of the row, so the whole row is clickable.
    pub full_width_labels: bool,
    pub row_spacing: f32,
    pub bottom_margin: f32,
}

impl Default for ChoiceStyle {
    fn default() -> Self {
        Self {
            full_width_labels: false,
            row_spacing: 4.0,
            bottom_margin: 0.0,
        }
    }
}

/// Applies one click on `key`. Single mode replaces the selection (clicking
/// the chosen option again keeps it); multi mode toggles membership and keeps
/// the order options were first picked in. Returns whether anything changed.
pub fn toggle_choice(selection: &mut Vec<String>, key: &str, multiple: bool) -> bool {
    if multiple {
        match selection.iter().position(|k| k == key) {
            Some(pos) => {
                selection.remove(pos);
            }
            None => selection.push(key.to_owned()),
        }
        return true;
    }

    if selection.len() == 1 && selection[0] == key {
        return false;
    }
    selection.clear();
    selection.push(key.to_owned());
    true
}

pub struct ChoiceGroup<'a, 'o> {
    id: Id,
    multiple: bool,
    selection: &'a mut Vec<String>,
    options: &'a [ChoiceOption<'o>],
    style: ChoiceStyle,
}

impl<'a, 'o> ChoiceGroup<'a, 'o> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        multiple: bool,
        selection: &'a mut Vec<String>,
        options: &'a [ChoiceOption<'o>],
    ) -> Self {
        Self {
            id: Id::new(id_salt),
            multiple,
            selection,
            options,
            style: ChoiceStyle::default(),
        }
    }

    pub fn style(mut self, style: ChoiceStyle) -> Self {
        self.style = style;
        self
    }

    /// Draws one row per option; `label` renders the option text. Returns
    /// whether the selection changed this frame.
    pub fn show(self, ui: &mut Ui, mut label: impl FnMut(&mut Ui, &ChoiceOption<'o>)) -> bool {
        let Self {
            id,
            multiple,
            selection,
            options,
            style,
        } = self;
        let mut changed = false;

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = style.row_spacing;
            for option in options {
                let checked = selection.iter().any(|k| k == option.key);
                let clicked = ui
                    .horizontal_top(|ui| {
                        let (indicator, kind) = if multiple {
                            let mut value = checked;
                            (ui.checkbox(&mut value, ""), WidgetType::Checkbox)
                        } else {
                            (ui.radio(checked, ""), WidgetType::RadioButton)
                        };
                        // The visible label is rich content; name the control by its key.
                        indicator.widget_info(|| {
                            WidgetInfo::selected(kind, ui.is_enabled(), checked, option.key)
                        });
                        let text = ui.vertical(|ui| {
                            if style.full_width_labels {
                                ui.set_width(ui.available_width());
                            }
                            label(ui, option);
                        });
                        let text_clicked = ui
                            .interact(text.response.rect, id.with(option.key), Sense::click())
                            .clicked();
                        indicator.clicked() || text_clicked
                    })
                    .inner;

                if clicked {
                    changed |= toggle_choice(selection, option.key, multiple);
                }
            }
            ui.add_space(style.bottom_margin);
        });

        changed
    }
}
