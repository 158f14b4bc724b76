// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    dashboard::{Action, Dashboard, ListView, NewRecord, Notice},
    data::Query,
    store::RecordStore,
};

use super::{
    components,
    pages::{Page, PageKind},
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions, data_file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    if let Some(p) = data_file {
        state.options.dashboard.data_file = p;
    }
    eframe::run_native(
        "Tax Deed Properties",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // widget state + options (UI thread only)
    pub state: AppState,

    // single source of truth for records and the query
    pub dash: Dashboard,

    // render-step output; rebuilt after every dispatch
    pub view: ListView,

    // actions collected while drawing, dispatched at the end of the frame
    pub pending: Vec<Action>,

    // form buffers
    pub add_form: NewRecord,
    /// (parcel being edited, buffer)
    pub edit_form: Option<(String, NewRecord)>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let opts = state.options.dashboard.clone();

        let (dash, status) = match Dashboard::open(&opts) {
            Ok(d) => {
                let n = d.records().len();
                (d, format!("Loaded {} properties from {}", n, opts.data_file.display()))
            }
            Err(e) => {
                loge!("Init: {}", e);
                let query = Query { page_size: opts.page_size.max(1), ..Query::default() };
                let d = Dashboard::unloaded(RecordStore::new(&opts.data_file), query, e.to_string());
                (d, format!("Error: {} (changes are disabled until Reload succeeds)", e))
            }
        };

        // directory hint → timestamped file names
        state.gui.out_path_text = format!("{}/", state.options.export.out_dir.display());

        logf!("Init: data={}, records={}", opts.data_file.display(), dash.records().len());

        let view = dash.view();
        Self {
            state,
            dash,
            view,
            pending: Vec::new(),
            add_form: NewRecord::default(),
            edit_form: None,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn queue(&mut self, action: Action) {
        self.pending.push(action);
    }

    /// Open `parcel_no` in the edit form and switch to the Edit tab.
    pub fn begin_edit(&mut self, parcel_no: &str) {
        if let Some(rec) = self.dash.records().get(parcel_no) {
            self.edit_form = Some((s!(parcel_no), NewRecord::from_record(rec)));
            self.queue(Action::Select(s!(parcel_no)));
            router::switch_to(self, PageKind::Edit);
        }
    }

    /// Dispatch everything queued this frame, then rebuild the view once.
    pub fn flush(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        for action in std::mem::take(&mut self.pending) {
            let res = match action {
                Action::Import { input, options } => {
                    logf!("Import: Begin {}", input.display());
                    let mut progress = GuiProgress::new(self.status.clone());
                    self.dash.import(&input, &options, Some(&mut progress))
                }
                other => self.dash.dispatch(other),
            };

            match res {
                Ok(Notice::Quiet) => {}
                Ok(notice) => {
                    self.after_notice(&notice);
                    self.status(notice.to_string());
                }
                Err(e) => self.status(format!("Error: {}", e)),
            }
        }

        self.view = self.dash.view();
        true
    }

    fn after_notice(&mut self, notice: &Notice) {
        match notice {
            Notice::Added(_) => self.add_form = NewRecord::default(),
            Notice::Updated(p) => {
                if let Some(rec) = self.dash.records().get(p) {
                    self.edit_form = Some((p.clone(), NewRecord::from_record(rec)));
                }
            }
            Notice::Deleted(p) => {
                if self.edit_form.as_ref().is_some_and(|(k, _)| k == p) {
                    self.edit_form = None;
                }
            }
            Notice::Reloaded(_) | Notice::Imported { .. } => {
                self.edit_form = None;
                self.state.gui.bid_range = None;
            }
            _ => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = self.status.lock().unwrap().clone();
            ui.label(format!("Status: {status}"));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        components::confirm_delete::draw(ctx, self);

        if self.flush() {
            ctx.request_repaint();
        }
    }
}
