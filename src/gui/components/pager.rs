// src/gui/components/pager.rs
use eframe::egui;
use crate::{dashboard::Action, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (page, total) = (app.view.page, app.view.total_pages);
    let mut goto: Option<usize> = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("◀ Prev")).clicked() {
            goto = Some(page - 1);
        }

        let mut n = page;
        ui.label("Page");
        if ui.add(egui::DragValue::new(&mut n).range(1..=total)).changed() {
            goto = Some(n);
        }
        ui.label(format!("of {}", total));

        if ui.add_enabled(page < total, egui::Button::new("Next ▶")).clicked() {
            goto = Some(page + 1);
        }

        ui.separator();
        ui.label(app.view.range_text());
    });

    if let Some(n) = goto {
        app.queue(Action::GoToPage(n));
    }
}
