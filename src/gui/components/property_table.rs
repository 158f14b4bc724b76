// src/gui/components/property_table.rs
//
// Draws the current page as a table, one row per property card.
// Purely a view; row buttons only queue actions.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    dashboard::{Action, CardView},
    gui::app::App,
    model::Status,
};

const HEADERS: [&str; 9] = [
    "Parcel", "Address", "Case", "Defendant", "Opening Bid", "Type", "Sale Date", "Status", "",
];

fn status_color(s: Status) -> Color32 {
    match s {
        Status::Available => Color32::from_rgb(0x28, 0xA7, 0x45),
        Status::Sold => Color32::from_rgb(0xDC, 0x35, 0x45),
        Status::Pending => Color32::from_rgb(0xF0, 0xAD, 0x4E),
    }
}

enum RowAction {
    Edit(String),
    Delete(String),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.is_empty() {
        ui.label("No properties match the current filters.");
        return;
    }

    // Match the scroll bar look of the side panel
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let clicked = inner_table(ui, &app.view.cards, app.view.generation);

    match clicked {
        Some(RowAction::Edit(p)) => app.begin_edit(&p),
        Some(RowAction::Delete(p)) => app.queue(Action::RequestDelete(p)),
        None => {}
    }
}

fn inner_table(ui: &mut egui::Ui, cards: &[CardView], generation: u64) -> Option<RowAction> {
    let mut clicked = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("property_table", generation));
    for (ci, _) in HEADERS.iter().enumerate() {
        let col = match ci {
            1 | 3 => Column::initial(220.0).resizable(true).clip(true).at_least(60.0),
            8 => Column::remainder().at_least(110.0),
            _ => Column::auto().resizable(true).at_least(40.0),
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(22.0, cards.len(), |mut row| {
                let Some(c) = cards.get(row.index()) else { return };
                row.set_selected(c.selected);

                let cells = [
                    &c.parcel_no, &c.address, &c.case_no, &c.defendant,
                ];
                for cell in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell.as_str());
                    });
                }
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(c.bid_text.as_str()).monospace());
                    });
                });
                row.col(|ui| { ui.label(c.property_type.as_str()); });
                row.col(|ui| { ui.label(c.sale_date.as_str()); });
                row.col(|ui| {
                    ui.label(RichText::new(c.status.as_str()).color(status_color(c.status)).strong());
                });
                row.col(|ui| {
                    if ui.small_button("Edit").clicked() {
                        clicked = Some(RowAction::Edit(c.parcel_no.clone()));
                    }
                    let del = if c.pending_delete { "Deleting…" } else { "Delete" };
                    if ui.small_button(del).clicked() {
                        clicked = Some(RowAction::Delete(c.parcel_no.clone()));
                    }
                });
            });
        });

    clicked
}
