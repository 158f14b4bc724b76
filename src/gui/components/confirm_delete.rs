// src/gui/components/confirm_delete.rs
//
// Modal-ish confirmation shown while a delete is pending.

use eframe::egui;
use crate::{dashboard::Action, gui::app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(parcel_no) = app.view.pending_delete.clone() else { return };

    let address = app
        .dash
        .records()
        .get(&parcel_no)
        .map(|r| r.address.clone())
        .unwrap_or_default();

    let mut answer: Option<Action> = None;
    egui::Window::new("Confirm delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Delete property {}?", parcel_no));
            if !address.is_empty() {
                ui.small(address.as_str());
            }
            ui.label("This cannot be undone.");
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let red = egui::Color32::from_rgb(220, 30, 30);
                if ui.add(egui::Button::new(egui::RichText::new("Delete").strong()).fill(red)).clicked() {
                    answer = Some(Action::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(Action::CancelDelete);
                }
            });
        });

    if let Some(a) = answer {
        logd!("UI: Delete {} → {}", parcel_no, a.name());
        app.queue(a);
    }
}
