// src/gui/pages/add.rs
use eframe::egui;

use super::{Page, PageKind};
use crate::{
    dashboard::Action,
    gui::{app::App, components::record_form},
};

pub struct AddPage;
pub static PAGE: AddPage = AddPage;

impl Page for AddPage {
    fn title(&self) -> &'static str { "Add Property" }
    fn kind(&self) -> PageKind { PageKind::Add }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Add New Property");
        ui.label("Fields marked * are required.");
        ui.add_space(6.0);

        record_form::draw(ui, "add_form", &mut app.add_form, &app.view.choices.sale_dates);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Add Property").clicked() {
                logd!("UI: Add {}", app.add_form.parcel_no);
                let form = app.add_form.clone();
                app.queue(Action::Add(form));
            }
            if ui.button("Clear").clicked() {
                app.add_form = Default::default();
            }
        });
    }
}
