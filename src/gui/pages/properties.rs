// src/gui/pages/properties.rs
//
// The list: stats, export controls, one page of property rows, pager.
use eframe::egui;

use super::{Page, PageKind};
use crate::gui::{app::App, components};

pub struct PropertiesPage;
pub static PAGE: PropertiesPage = PropertiesPage;

impl Page for PropertiesPage {
    fn title(&self) -> &'static str { "View Properties" }
    fn kind(&self) -> PageKind { PageKind::View }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        components::stats::draw(ui, app);
        ui.separator();
        components::export_bar::draw(ui, app);
        ui.separator();
        components::pager::draw(ui, app);
        ui.separator();
        components::property_table::draw(ui, app);
    }
}
