use std::hash::Hash;

use egui::Ui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::model::RichContent;

/// Markdown renderer shared by every prompt and option of a quiz.
#[derive(Default)]
pub struct ContentRenderer {
    cache: CommonMarkCache,
}

impl ContentRenderer {
    /// `remove_margin` drops the trailing paragraph spacing, for labels that
    /// sit inline next to a radio button or checkbox.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: impl Hash,
        content: &RichContent,
        remove_margin: bool,
    ) {
        ui.push_id(id_salt, |ui| {
            if remove_margin {
                ui.spacing_mut().item_spacing.y = 0.0;
                CommonMarkViewer::new().show(ui, &mut self.cache, content.as_str().trim_end());
            } else {
                CommonMarkViewer::new().show(ui, &mut self.cache, content.as_str());
            }
        });
    }
}
