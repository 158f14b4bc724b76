// src/gui/components/filter_panel.rs
//
// Left panel: filters and sort. Reads the current query from `app.view`
// and queues one action per changed widget.

use eframe::egui;

use crate::{
    core::sanitize::format_currency,
    dashboard::Action,
    data::{BidRange, SortKey},
    gui::app::App,
    model::Status,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let q = app.view.query.clone();
    let choices = app.view.choices.clone();
    let mut out: Vec<Action> = Vec::new();

    // --- Search ---
    ui.label("Search (address, parcel, defendant):");
    let mut search = q.filter.search.clone();
    if ui.text_edit_singleline(&mut search).changed() {
        out.push(Action::SetSearch(search));
    }
    ui.add_space(6.0);

    // --- Sale date ---
    ui.label("Sale date:");
    let mut date = q.filter.sale_date.clone();
    egui::ComboBox::from_id_salt("filter_sale_date")
        .selected_text(date.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut date, None, "All");
            for d in &choices.sale_dates {
                ui.selectable_value(&mut date, Some(d.clone()), d.as_str());
            }
        });
    if date != q.filter.sale_date {
        out.push(Action::SetSaleDate(date));
    }

    // --- Status ---
    ui.label("Status:");
    let mut status = q.filter.status;
    egui::ComboBox::from_id_salt("filter_status")
        .selected_text(status.map(Status::as_str).unwrap_or("All"))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut status, None, "All");
            for s in Status::ALL {
                ui.selectable_value(&mut status, Some(s), s.as_str());
            }
        });
    if status != q.filter.status {
        out.push(Action::SetStatus(status));
    }

    // --- Property type ---
    ui.label("Property type:");
    let mut ptype = q.filter.property_type.clone();
    egui::ComboBox::from_id_salt("filter_property_type")
        .selected_text(ptype.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut ptype, None, "All");
            for t in &choices.property_types {
                ui.selectable_value(&mut ptype, Some(t.clone()), t.as_str());
            }
        });
    if ptype != q.filter.property_type {
        out.push(Action::SetPropertyType(ptype));
    }
    ui.add_space(6.0);

    // --- Opening bid range ---
    if let Some((lo_bound, hi_bound)) = choices.bid_bounds {
        ui.label("Opening bid range:");
        let (mut lo, mut hi) = app.state.gui.bid_range.unwrap_or((lo_bound, hi_bound));
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Min");
            changed |= ui
                .add(egui::DragValue::new(&mut lo).range(lo_bound..=hi_bound).speed(100.0).prefix("$"))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label("Max");
            changed |= ui
                .add(egui::DragValue::new(&mut hi).range(lo_bound..=hi_bound).speed(100.0).prefix("$"))
                .changed();
        });
        if changed {
            app.state.gui.bid_range = Some((lo, hi));
            out.push(Action::SetBidRange(Some(BidRange::new(lo, hi))));
        }
        if let Some(b) = q.filter.bid_range {
            ui.small(format!("{} – {}", format_currency(b.min), format_currency(b.max)));
        }
    }

    ui.add_space(6.0);
    if ui.button("Clear filters").clicked() {
        app.state.gui.bid_range = None;
        out.push(Action::ClearFilters);
    }

    ui.separator();

    // --- Sort ---
    ui.heading("Sort");
    let mut key = q.sort.key;
    egui::ComboBox::from_id_salt("sort_key")
        .selected_text(key.label())
        .show_ui(ui, |ui| {
            for k in SortKey::ALL {
                ui.selectable_value(&mut key, k, k.label());
            }
        });
    if key != q.sort.key {
        logf!("UI: Sort → {}", key);
        out.push(Action::SetSort(key));
    }
    let mut desc = q.sort.descending;
    if ui.checkbox(&mut desc, "Descending").changed() {
        out.push(Action::SetDescending(desc));
    }

    ui.separator();
    if ui.button("Reload from disk").clicked() {
        out.push(Action::Reload);
    }
    ui.small(app.dash.data_path().display().to_string());

    app.pending.extend(out);
}
