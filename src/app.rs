use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::state::QuizEvent;
use crate::ui::view::QuizView;

/// Host application around one [`QuizView`].
///
/// Only the theme preference is persisted; the quiz itself is decoded again
/// on every start and its answers are never stored.
#[derive(Serialize, Deserialize)]
pub struct QuizApp {
    pub dark_mode: bool,
    #[serde(skip)]
    pub view: Option<QuizView>,
    #[serde(skip)]
    pub message: String,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            dark_mode: true,
            view: None,
            message: String::new(),
        }
    }
}

impl QuizApp {
    pub fn new(view: QuizView) -> Self {
        Self {
            view: Some(view),
            ..Self::default()
        }
    }

    /// Restores the stored preferences, if any, around `view`.
    pub fn restore(cc: &eframe::CreationContext<'_>, view: QuizView) -> Self {
        let mut app: QuizApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.view = Some(view);
        app.apply_visuals(&cc.egui_ctx);
        app
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.apply_visuals(ctx);
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Host-side reaction to quiz events. Submissions are only acknowledged.
    pub fn handle_event(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Opened => self.message.clear(),
            QuizEvent::Closed | QuizEvent::Navigated { .. } => {}
            QuizEvent::Submitted {
                question_key,
                selection,
            } => {
                self.message = if selection.is_empty() {
                    format!("Submitted `{question_key}` without an answer")
                } else {
                    format!("Submitted `{question_key}`: {}", selection.join(", "))
                };
            }
        }
    }
}
