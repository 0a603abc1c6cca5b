pub mod choice;
pub mod content;
pub mod layout;
pub mod modal;
pub mod prompt;
pub mod quiz_box;
pub mod responses;
pub mod view;

use crate::app::QuizApp;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, RichText};
use layout::{bottom_panel, centered_panel};

const PAGE_WIDTH: f32 = 720.0;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        bottom_panel(self, ctx);

        let mut event = None;
        centered_panel(ctx, PAGE_WIDTH, |ui| match self.view.as_mut() {
            Some(view) => event = view.show(ui),
            None => {
                ui.label(RichText::new("No quiz loaded.").weak());
            }
        });

        if let Some(event) = event {
            log::debug!("quiz event: {event:?}");
            self.handle_event(event);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
