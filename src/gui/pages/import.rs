// src/gui/pages/import.rs
//
// Run the extractor from the GUI. Replaces the whole record set.
use std::path::PathBuf;

use eframe::egui;

use super::{Page, PageKind};
use crate::{dashboard::Action, gui::app::App};

pub struct ImportPage;
pub static PAGE: ImportPage = ImportPage;

impl Page for ImportPage {
    fn title(&self) -> &'static str { "Import Spreadsheet" }
    fn kind(&self) -> PageKind { PageKind::Import }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Import from county spreadsheet");
        ui.label("Reads .xlsx / .xls / .ods / .csv / .tsv and replaces every current record.");
        ui.add_space(6.0);

        let gui = &mut app.state.gui;
        let ex = &mut app.state.options.extract;

        egui::Grid::new("import_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Spreadsheet:");
                ui.add(egui::TextEdit::singleline(&mut gui.import_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(360.0));
                ui.end_row();

                ui.label("Sheet (blank = first):");
                ui.text_edit_singleline(&mut gui.import_sheet_text);
                ui.end_row();

                ui.label("Header marker:");
                ui.text_edit_singleline(&mut ex.header_marker);
                ui.end_row();

                ui.label("Second sale date from row:");
                ui.text_edit_singleline(&mut gui.import_split_row_text);
                ui.end_row();

                ui.label("First sale date:");
                ui.text_edit_singleline(&mut ex.sale_date.before);
                ui.end_row();

                ui.label("Second sale date:");
                ui.text_edit_singleline(&mut ex.sale_date.after);
                ui.end_row();
            });

        ui.add_space(6.0);
        if ui.button("Import").clicked() {
            match build_action(app) {
                Ok(a) => app.queue(a),
                Err(msg) => app.status(msg),
            }
        }
    }
}

fn build_action(app: &mut App) -> Result<Action, String> {
    let gui = &app.state.gui;
    let path = gui.import_path_text.trim();
    if path.is_empty() {
        return Err(s!("Choose a spreadsheet first"));
    }

    let split: usize = gui
        .import_split_row_text
        .trim()
        .parse()
        .map_err(|_| format!("Row must be a number, got {:?}", gui.import_split_row_text))?;

    let sheet = gui.import_sheet_text.trim();
    let mut options = app.state.options.extract.clone();
    options.sale_date.split_row = split;
    options.sheet = (!sheet.is_empty()).then(|| s!(sheet));

    Ok(Action::Import { input: PathBuf::from(path), options })
}
