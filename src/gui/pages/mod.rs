// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod add;
pub mod edit;
pub mod import;
pub mod properties;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    View,
    Edit,
    Add,
    Import,
}

/// One tab of the central panel. Pages read `app.view` and queue actions;
/// they never dispatch directly.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
