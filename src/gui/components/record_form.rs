// src/gui/components/record_form.rs
//
// Shared field grid for the Add and Edit pages.

use eframe::egui;

use crate::{dashboard::NewRecord, model::Status};

pub fn draw(ui: &mut egui::Ui, id: &str, form: &mut NewRecord, sale_dates: &[String]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            text_row(ui, "Parcel Number *", &mut form.parcel_no);
            text_row(ui, "Address *", &mut form.address);
            text_row(ui, "Case Number *", &mut form.case_no);
            text_row(ui, "Defendant *", &mut form.defendant);
            text_row(ui, "Opening Bid ($)", &mut form.opening_bid);
            text_row(ui, "Property Type", &mut form.property_type);

            ui.label("Sale Date");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut form.sale_date).desired_width(200.0));
                egui::ComboBox::from_id_salt((id, "sale_date_pick"))
                    .selected_text("Pick")
                    .show_ui(ui, |ui| {
                        for d in sale_dates {
                            ui.selectable_value(&mut form.sale_date, d.clone(), d.as_str());
                        }
                    });
            });
            ui.end_row();

            ui.label("Status");
            ui.horizontal(|ui| {
                for s in Status::ALL {
                    ui.selectable_value(&mut form.status, s, s.as_str());
                }
            });
            ui.end_row();
        });
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(320.0));
    ui.end_row();
}
