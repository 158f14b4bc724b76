// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{ExportFormat, ExportScope},
    dashboard::Action,
    file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("directory/ or file path"))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    let mut scope: Option<ExportScope> = None;
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            if app.view.matched == 0 {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                let view = app.dash.filtered();
                logf!("Copy: rows={}, headers={}", view.len(), app.state.options.export.include_headers);
                let txt = file::to_export_string(&view, &app.state.options.export);
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            }
        }

        if ui.button(format!("Export filtered ({})", app.view.matched)).clicked() {
            scope = Some(ExportScope::Filtered);
        }
        if ui.button(format!("Export all ({})", app.view.total)).clicked() {
            scope = Some(ExportScope::All);
        }
    });

    if let Some(scope) = scope {
        if app.out_path_dirty {
            app.state.options.export.set_path(&app.state.gui.out_path_text);
            logf!("Export: Out path set → {}", app.state.gui.out_path_text);
            app.out_path_dirty = false;
        }
        let options = app.state.options.export.clone();
        app.queue(Action::Export { scope, options });
    }
}
