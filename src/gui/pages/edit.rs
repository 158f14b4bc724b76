// src/gui/pages/edit.rs
//
// Left: searchable pick list over the whole set. Right: the edit form.
use eframe::egui;

use super::{Page, PageKind};
use crate::{
    dashboard::{Action, RecordPatch},
    gui::{app::App, components::record_form},
};

pub struct EditPage;
pub static PAGE: EditPage = EditPage;

impl Page for EditPage {
    fn title(&self) -> &'static str { "Edit Properties" }
    fn kind(&self) -> PageKind { PageKind::Edit }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.columns(2, |cols| {
            pick_list(&mut cols[0], app);
            edit_form(&mut cols[1], app);
        });
    }

    fn on_enter(&self, app: &mut App) {
        // drop a stale buffer whose record is gone
        if let Some((p, _)) = &app.edit_form {
            if !app.dash.records().contains(p) {
                app.edit_form = None;
            }
        }
    }
}

fn pick_list(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Find a property");
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut app.state.gui.edit_search);
    });
    ui.separator();

    let needle = app.state.gui.edit_search.trim().to_lowercase();
    let current = app.edit_form.as_ref().map(|(p, _)| p.clone());
    let mut picked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("edit_pick_scroll")
        .show(ui, |ui| {
            for rec in app.dash.records().records().iter().filter(|r| r.matches_search(&needle)) {
                let label = format!("{}  {}", rec.parcel_no, rec.address);
                let is_sel = current.as_deref() == Some(rec.parcel_no.as_str());
                if ui.selectable_label(is_sel, label).clicked() {
                    picked = Some(rec.parcel_no.clone());
                }
            }
        });

    if let Some(p) = picked {
        app.begin_edit(&p);
    }
}

fn edit_form(ui: &mut egui::Ui, app: &mut App) {
    let Some((parcel_no, form)) = app.edit_form.as_mut() else {
        ui.label("Select a property to edit.");
        return;
    };

    ui.heading(format!("Editing {}", parcel_no));
    ui.add_space(6.0);
    record_form::draw(ui, "edit_form", form, &app.view.choices.sale_dates);
    ui.add_space(6.0);

    let mut queued: Option<Action> = None;
    let mut error: Option<String> = None;
    ui.horizontal(|ui| {
        if ui.button("Save Changes").clicked() {
            match RecordPatch::from_form(form) {
                Ok(patch) => queued = Some(Action::Update { parcel_no: parcel_no.clone(), patch }),
                Err(e) => error = Some(format!("Error: {}", e)),
            }
        }
        if ui.button("Delete").clicked() {
            queued = Some(Action::RequestDelete(parcel_no.clone()));
        }
        if ui.button("Cancel").clicked() {
            queued = Some(Action::ClearSelection);
        }
    });

    if matches!(queued, Some(Action::ClearSelection)) {
        app.edit_form = None;
    }
    if let Some(a) = queued {
        app.queue(a);
    }
    if let Some(msg) = error {
        app.status(msg);
    }
}
