use egui::{CentralPanel, Context, Frame, ScrollArea, Ui};

use crate::QuizApp;

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button("☀ Light mode").clicked() {
                app.set_dark_mode(ctx, false);
            }
            if !app.message.is_empty() {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    ui.label(&app.message);
                });
            }
        });
    });
}

/// Page column of at most `max_width`, horizontally centered and scrollable.
pub fn centered_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            let extra = ((ui.available_width() - w) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(extra);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.vertical(inner);
                    });
            });
        });
    });
}
