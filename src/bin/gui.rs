// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use deed_desk::{config::state::GuiState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(deed_desk::config::consts::LOG_FILE);

    // Optional first argument: record file
    let data_file = std::env::args_os().nth(1).map(PathBuf::from);

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Tax Deed Properties")
            .with_inner_size([gs.window_w as f32, gs.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, data_file) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
