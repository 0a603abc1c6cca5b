use egui::{Align, InnerResponse, Layout, Ui, WidgetText};

use crate::theme::QuizTheme;

/// Bordered "Quiz" card with an optional right-aligned header.
/// Used by the summary card and by the question card inside the modal.
pub struct QuizBox<'t> {
    theme: &'t QuizTheme,
    header: Option<WidgetText>,
}

impl<'t> QuizBox<'t> {
    pub fn new(theme: &'t QuizTheme) -> Self {
        Self {
            theme,
            header: None,
        }
    }

    pub fn header(mut self, header: impl Into<WidgetText>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        let Self { theme, header } = self;
        theme.panel_frame(ui.visuals()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading("Quiz");
                if let Some(header) = header {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(header);
                    });
                }
            });
            ui.add_space(theme.spacing(2.0));
            add_contents(ui)
        })
    }
}
