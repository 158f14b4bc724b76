// src/dashboard/mod.rs
//! # Dashboard
//!
//! Explicit application state for the property list, independent of any UI.
//!
//! A frontend does two things per interaction:
//! 1. **Render**: `Dashboard::view()` → `ListView`. Read-only.
//! 2. **Act**: `Dashboard::dispatch(Action)` → `Notice` or `DeedError`.
//!
//! The GUI collects actions while drawing a frame and dispatches them after;
//! the CLI dispatches one action per invocation.
//!
//! ## Mutations
//! Add / Update / ConfirmDelete / Import run against a copy of the set, the
//! copy is saved wholesale, and only a successful save swaps it in. A failed
//! save returns `PersistenceFailure` with memory and disk both unchanged.
//! Every committed change or reload bumps `generation`.

pub mod forms;
pub mod view;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    config::options::{DashboardOptions, ExportOptions, ExportScope, ExtractOptions},
    data::{BidRange, FilterChoices, Query, QueryView, RecordSet, SortKey},
    error::{DeedError, Result},
    extract::{self, ExtractReport},
    file,
    model::{PropertyRecord, Status},
    progress::Progress,
    store::RecordStore,
};

pub use forms::{NewRecord, RecordPatch};
pub use view::{CardView, ListView, StatsView};

/// Every user interaction the dashboard understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetSaleDate(Option<String>),
    SetStatus(Option<Status>),
    SetPropertyType(Option<String>),
    SetBidRange(Option<BidRange>),
    SetSearch(String),
    ClearFilters,

    SetSort(SortKey),
    SetDescending(bool),

    GoToPage(usize),

    Select(String),
    ClearSelection,
    Update { parcel_no: String, patch: RecordPatch },

    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,

    Add(NewRecord),
    Reload,
    Export { scope: ExportScope, options: ExportOptions },
    Import { input: PathBuf, options: ExtractOptions },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetSaleDate(_) => "SetSaleDate",
            Action::SetStatus(_) => "SetStatus",
            Action::SetPropertyType(_) => "SetPropertyType",
            Action::SetBidRange(_) => "SetBidRange",
            Action::SetSearch(_) => "SetSearch",
            Action::ClearFilters => "ClearFilters",
            Action::SetSort(_) => "SetSort",
            Action::SetDescending(_) => "SetDescending",
            Action::GoToPage(_) => "GoToPage",
            Action::Select(_) => "Select",
            Action::ClearSelection => "ClearSelection",
            Action::Update { .. } => "Update",
            Action::RequestDelete(_) => "RequestDelete",
            Action::ConfirmDelete => "ConfirmDelete",
            Action::CancelDelete => "CancelDelete",
            Action::Add(_) => "Add",
            Action::Reload => "Reload",
            Action::Export { .. } => "Export",
            Action::Import { .. } => "Import",
        }
    }
}

/// What a successful dispatch has to say.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// View-only change; nothing to report
    Quiet,
    Added(String),
    Updated(String),
    Deleted(String),
    DeletePending(String),
    Reloaded(usize),
    Exported { path: PathBuf, rows: usize },
    Imported { report: ExtractReport, records: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Quiet => Ok(()),
            Notice::Added(p) => write!(f, "Added property {}", p),
            Notice::Updated(p) => write!(f, "Updated property {}", p),
            Notice::Deleted(p) => write!(f, "Deleted property {}", p),
            Notice::DeletePending(p) => write!(f, "Confirm deletion of {}", p),
            Notice::Reloaded(n) => write!(f, "Loaded {} propert{}", n, if *n == 1 { "y" } else { "ies" }),
            Notice::Exported { path, rows } => write!(f, "Exported {} row(s) → {}", rows, path.display()),
            Notice::Imported { report, records } => write!(
                f,
                "Imported {} propert{} ({} invalid, {} duplicate row(s) skipped)",
                records,
                if *records == 1 { "y" } else { "ies" },
                report.invalid,
                report.duplicates
            ),
        }
    }
}

/// The dashboard's whole state. Single owner, no interior mutability.
#[derive(Debug)]
pub struct Dashboard {
    store: RecordStore,
    set: RecordSet,
    query: Query,
    selected: Option<String>,
    pending_delete: Option<String>,
    generation: u64,
    /// Set when the record file could not be read; mutations stay refused
    /// until a Reload or Import replaces the set.
    load_error: Option<String>,
}

impl Dashboard {
    /// Load the record file named by `opts` (missing → empty).
    pub fn open(opts: &DashboardOptions) -> Result<Self> {
        let store = RecordStore::new(&opts.data_file);
        let set = store.load()?;
        let query = Query { page_size: opts.page_size.max(1), ..Query::default() };
        Ok(Self::with_set(store, set, query))
    }

    pub fn with_set(store: RecordStore, set: RecordSet, query: Query) -> Self {
        Self {
            store,
            set,
            query,
            selected: None,
            pending_delete: None,
            generation: 0,
            load_error: None,
        }
    }

    /// Empty dashboard over a record file that failed to load. Nothing is
    /// written to it until a Reload succeeds.
    pub fn unloaded(store: RecordStore, query: Query, reason: String) -> Self {
        Self { load_error: Some(reason), ..Self::with_set(store, RecordSet::default(), query) }
    }

    pub fn records(&self) -> &RecordSet { &self.set }
    pub fn query(&self) -> &Query { &self.query }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn data_path(&self) -> &Path { self.store.path() }
    pub fn pending_delete(&self) -> Option<&str> { self.pending_delete.as_deref() }
    pub fn load_error(&self) -> Option<&str> { self.load_error.as_deref() }

    pub fn selected(&self) -> Option<&PropertyRecord> {
        self.selected.as_deref().and_then(|p| self.set.get(p))
    }

    /// Current filter + sort over the whole set.
    pub fn filtered(&self) -> QueryView<'_> {
        QueryView::from_query(&self.set, &self.query)
    }

    /* ---------- render ---------- */

    pub fn view(&self) -> ListView {
        let qv = self.filtered();
        let total_pages = qv.total_pages(self.query.page_size);
        let page = self.query.page.clamp(1, total_pages);

        let sel = self.selected.as_deref();
        let pend = self.pending_delete.as_deref();
        let cards = qv
            .page(page, self.query.page_size)
            .into_iter()
            .map(|r| CardView::from_record(r, sel, pend))
            .collect();

        ListView {
            stats: qv.stats().into(),
            cards,
            page,
            total_pages,
            matched: qv.len(),
            total: self.set.len(),
            choices: FilterChoices::from_set(&self.set),
            query: self.query.clone(),
            selected: self.selected().cloned(),
            pending_delete: self.pending_delete.clone(),
            generation: self.generation,
        }
    }

    /* ---------- act ---------- */

    pub fn dispatch(&mut self, action: Action) -> Result<Notice> {
        logd!("Dashboard: {} (gen={})", action.name(), self.generation);

        let res = self.apply(action);
        if let Err(e) = &res {
            loge!("Dashboard: {}", e);
        }
        res
    }

    fn apply(&mut self, action: Action) -> Result<Notice> {
        match action {
            Action::SetSaleDate(v) => self.filter_changed(|q| q.filter.sale_date = v),
            Action::SetStatus(v) => self.filter_changed(|q| q.filter.status = v),
            Action::SetPropertyType(v) => self.filter_changed(|q| q.filter.property_type = v),
            Action::SetBidRange(v) => self.filter_changed(|q| q.filter.bid_range = v),
            Action::SetSearch(v) => self.filter_changed(|q| q.filter.search = v),
            Action::ClearFilters => self.filter_changed(|q| q.filter = Default::default()),

            Action::SetSort(key) => {
                self.query.sort.key = key;
                Ok(Notice::Quiet)
            }
            Action::SetDescending(desc) => {
                self.query.sort.descending = desc;
                Ok(Notice::Quiet)
            }

            Action::GoToPage(n) => {
                let last = self.filtered().total_pages(self.query.page_size);
                self.query.page = n.clamp(1, last);
                Ok(Notice::Quiet)
            }

            Action::Select(parcel_no) => {
                self.require(&parcel_no)?;
                self.selected = Some(parcel_no);
                Ok(Notice::Quiet)
            }
            Action::ClearSelection => {
                self.selected = None;
                Ok(Notice::Quiet)
            }
            Action::Update { parcel_no, patch } => {
                let rec = patch.apply(self.require(&parcel_no)?)?;
                let new_key = rec.parcel_no.clone();
                self.commit(|set| set.update(&parcel_no, rec))?;
                if self.selected.as_deref() == Some(parcel_no.as_str()) {
                    self.selected = Some(new_key.clone());
                }
                if self.pending_delete.as_deref() == Some(parcel_no.as_str()) {
                    self.pending_delete = Some(new_key.clone());
                }
                logf!("Dashboard: Updated {} → {}", parcel_no, new_key);
                Ok(Notice::Updated(new_key))
            }

            Action::RequestDelete(parcel_no) => {
                self.require(&parcel_no)?;
                self.pending_delete = Some(parcel_no.clone());
                Ok(Notice::DeletePending(parcel_no))
            }
            Action::ConfirmDelete => {
                let parcel_no = self.pending_delete.clone().ok_or(DeedError::NoPendingDelete)?;
                self.commit(|set| set.remove(&parcel_no))?;
                self.pending_delete = None;
                if self.selected.as_deref() == Some(parcel_no.as_str()) {
                    self.selected = None;
                }
                logf!("Dashboard: Deleted {}", parcel_no);
                Ok(Notice::Deleted(parcel_no))
            }
            Action::CancelDelete => {
                self.pending_delete = None;
                Ok(Notice::Quiet)
            }

            Action::Add(form) => {
                let rec = form.validate()?;
                let parcel_no = rec.parcel_no.clone();
                self.commit(|set| set.insert(rec))?;
                logf!("Dashboard: Added {}", parcel_no);
                Ok(Notice::Added(parcel_no))
            }

            Action::Reload => {
                let set = self.store.load()?;
                let n = set.len();
                self.replace_set(set);
                Ok(Notice::Reloaded(n))
            }

            Action::Export { scope, options } => {
                let view = match scope {
                    ExportScope::Filtered => self.filtered(),
                    ExportScope::All => QueryView::all(&self.set),
                };
                let path = file::write_export(&view, &options, scope)?;
                logf!("Export: OK {} row(s) → {}", view.len(), path.display());
                Ok(Notice::Exported { rows: view.len(), path })
            }

            Action::Import { input, options } => self.import(&input, &options, None),
        }
    }

    /// Run the extractor on `input` and replace the whole set with its output.
    /// The record file is rewritten first; on any failure nothing changes.
    pub fn import(
        &mut self,
        input: &Path,
        opts: &ExtractOptions,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Notice> {
        let (extracted, _) = extract::run(input, None, opts, progress)?;
        let set = RecordSet::from_records(extracted.records);
        self.store.save(&set)?;
        let records = set.len();
        self.replace_set(set);
        logf!("Dashboard: Imported {} record(s) from {}", records, input.display());
        Ok(Notice::Imported { report: extracted.report, records })
    }

    /* ---------- helpers ---------- */

    fn require(&self, parcel_no: &str) -> Result<&PropertyRecord> {
        self.set.get(parcel_no).ok_or_else(|| DeedError::NotFound(s!(parcel_no)))
    }

    fn filter_changed(&mut self, f: impl FnOnce(&mut Query)) -> Result<Notice> {
        f(&mut self.query);
        self.query.page = 1;
        Ok(Notice::Quiet)
    }

    /// Mutate a copy, save it, then swap it in.
    fn commit<R>(&mut self, f: impl FnOnce(&mut RecordSet) -> Result<R>) -> Result<R> {
        if let Some(reason) = &self.load_error {
            return Err(DeedError::NotLoaded {
                path: self.store.path().to_path_buf(),
                reason: reason.clone(),
            });
        }
        let mut next = self.set.clone();
        let out = f(&mut next)?;
        self.store.save(&next)?;
        self.set = next;
        self.after_change();
        Ok(out)
    }

    fn replace_set(&mut self, set: RecordSet) {
        self.set = set;
        self.load_error = None;
        if self.selected.as_deref().is_some_and(|p| !self.set.contains(p)) {
            self.selected = None;
        }
        if self.pending_delete.as_deref().is_some_and(|p| !self.set.contains(p)) {
            self.pending_delete = None;
        }
        self.after_change();
    }

    fn after_change(&mut self) {
        self.generation += 1;
        let last = self.filtered().total_pages(self.query.page_size);
        self.query.page = self.query.page.clamp(1, last);
    }
}
