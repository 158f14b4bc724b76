// src/gui/components/stats.rs
use eframe::egui::{self, RichText};
use crate::gui::app::App;

fn stat_box(ui: &mut egui::Ui, value: &str, label: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).heading().strong());
            ui.small(label);
        });
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let st = &app.view.stats;
    ui.horizontal(|ui| {
        stat_box(ui, &st.stats.count.to_string(), "Properties");
        stat_box(ui, &st.avg_text, "Avg. Bid");
        stat_box(ui, &st.total_text, "Total Value");
        stat_box(ui, &st.stats.available.to_string(), "Available");
    });
    if app.view.matched != app.view.total {
        ui.small(format!("Filtered: {} of {} properties", app.view.matched, app.view.total));
    }
}
