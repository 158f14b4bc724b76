// src/cli.rs
//
// Command-line frontend. One subcommand = one dashboard action (or one
// extractor run). Everything ends up in `Dashboard::dispatch`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{
        consts::{DEFAULT_DATA_FILE, LOG_FILE, PAGE_SIZE},
        options::{ColumnMap, DashboardOptions, ExportFormat, ExportOptions, ExportScope, ExtractOptions},
    },
    core::sanitize::format_currency,
    dashboard::{forms::parse_bid, Action, Dashboard, ListView, NewRecord, Notice, RecordPatch},
    data::{BidRange, SortKey},
    error::Result,
    extract,
    model::Status,
    progress::StderrProgress,
};

#[derive(Parser, Debug)]
#[command(name = "deed_desk", version, about = "Tax-deed auction list: extract, browse, edit, export")]
pub struct Cli {
    /// Record file
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Debug log file
    #[arg(long, global = true, default_value = LOG_FILE)]
    pub log: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract property records from the county spreadsheet
    Extract {
        /// .xlsx / .xls / .ods / .csv / .tsv
        input: PathBuf,
        /// Output record file (default: --data)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Worksheet name (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,
        /// Text in the first cell of the header row
        #[arg(long)]
        header_marker: Option<String>,
        /// Skip rows whose first cell contains this (repeatable; replaces the default)
        #[arg(long = "section-marker")]
        section_markers: Vec<String>,
        /// Column overrides, e.g. "address=1,opening_bid=5"
        #[arg(long)]
        columns: Option<ColumnMap>,
        /// First frame row (0 = row under the first non-empty row) that gets --after-date
        #[arg(long)]
        split_row: Option<usize>,
        #[arg(long)]
        before_date: Option<String>,
        #[arg(long)]
        after_date: Option<String>,
    },
    /// Show one page of properties
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        sort: SortArgs,
        /// 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = PAGE_SIZE)]
        page_size: usize,
    },
    /// Add a property
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit a property (only the given fields change)
    Edit {
        parcel: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a property
    Delete {
        parcel: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Export properties to CSV/TSV
    Export {
        /// Every record instead of the filtered list
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        sort: SortArgs,
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        #[arg(long)]
        no_headers: bool,
        /// File, or directory for a timestamped file
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub sale_date: Option<String>,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub property_type: Option<String>,
    #[arg(long)]
    pub min_bid: Option<f64>,
    #[arg(long)]
    pub max_bid: Option<f64>,
    /// Address, parcel number or defendant (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    fn actions(&self) -> Vec<Action> {
        let mut out = vec![
            Action::SetSaleDate(self.sale_date.clone()),
            Action::SetStatus(self.status),
            Action::SetPropertyType(self.property_type.clone()),
            Action::SetSearch(self.search.clone().unwrap_or_default()),
        ];
        if self.min_bid.is_some() || self.max_bid.is_some() {
            let range = BidRange::new(self.min_bid.unwrap_or(0.0), self.max_bid.unwrap_or(f64::MAX));
            out.push(Action::SetBidRange(Some(range)));
        }
        out
    }
}

#[derive(Args, Debug)]
pub struct SortArgs {
    #[arg(long, default_value = "opening_bid")]
    pub sort: SortKey,
    /// Ascending (default is descending)
    #[arg(long)]
    pub asc: bool,
}

impl SortArgs {
    fn actions(&self) -> [Action; 2] {
        [Action::SetSort(self.sort), Action::SetDescending(!self.asc)]
    }
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Also the new key when editing
    #[arg(long)]
    pub parcel_no: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub case_no: Option<String>,
    #[arg(long)]
    pub defendant: Option<String>,
    #[arg(long)]
    pub opening_bid: Option<String>,
    #[arg(long)]
    pub property_type: Option<String>,
    #[arg(long)]
    pub sale_date: Option<String>,
    #[arg(long)]
    pub status: Option<Status>,
}

impl FieldArgs {
    fn into_new_record(self) -> NewRecord {
        let d = NewRecord::default();
        NewRecord {
            parcel_no: self.parcel_no.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            case_no: self.case_no.unwrap_or_default(),
            defendant: self.defendant.unwrap_or_default(),
            opening_bid: self.opening_bid.unwrap_or_default(),
            property_type: self.property_type.unwrap_or(d.property_type),
            sale_date: self.sale_date.unwrap_or_default(),
            status: self.status.unwrap_or(d.status),
        }
    }

    fn into_patch(self) -> Result<RecordPatch> {
        Ok(RecordPatch {
            opening_bid: self.opening_bid.as_deref().map(parse_bid).transpose()?,
            parcel_no: self.parcel_no,
            address: self.address,
            case_no: self.case_no,
            defendant: self.defendant,
            property_type: self.property_type,
            sale_date: self.sale_date,
            status: self.status,
        })
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    crate::log::init(&cli.log);
    logf!("CLI: {:?}", cli.command);

    let opts = DashboardOptions { data_file: cli.data.clone(), ..DashboardOptions::default() };

    match cli.command {
        Commands::Extract {
            input, out, sheet, header_marker, section_markers,
            columns, split_row, before_date, after_date,
        } => {
            let mut ex = ExtractOptions { sheet, ..ExtractOptions::default() };
            if let Some(m) = header_marker { ex.header_marker = m; }
            if !section_markers.is_empty() { ex.section_markers = section_markers; }
            if let Some(c) = columns { ex.columns = c; }
            if let Some(r) = split_row { ex.sale_date.split_row = r; }
            if let Some(d) = before_date { ex.sale_date.before = d; }
            if let Some(d) = after_date { ex.sale_date.after = d; }

            let out = out.unwrap_or(cli.data);
            let mut progress = StderrProgress::new();
            let (extracted, written) = extract::run(&input, Some(&out), &ex, Some(&mut progress))?;

            let r = &extracted.report;
            println!("Header found at row {}", r.header_row);
            println!(
                "Rows scanned: {} (blank {}, section/header {}, invalid {}, duplicate {})",
                r.scanned, r.skipped_blank, r.skipped_marker, r.invalid, r.duplicates
            );
            if let Some(p) = written {
                println!("Extracted {} properties → {}", r.kept, p.display());
            }
            for rec in extracted.records.iter().take(5) {
                println!("  {}  {}  {}", rec.parcel_no, format_currency(rec.opening_bid), rec.address);
            }
            Ok(())
        }

        Commands::List { filter, sort, page, page_size } => {
            let mut dash = Dashboard::open(&DashboardOptions { page_size, ..opts })?;
            for a in filter.actions().into_iter().chain(sort.actions()) {
                dash.dispatch(a)?;
            }
            dash.dispatch(Action::GoToPage(page))?;
            print_list(&dash.view());
            Ok(())
        }

        Commands::Add { fields } => {
            let mut dash = Dashboard::open(&opts)?;
            report(dash.dispatch(Action::Add(fields.into_new_record()))?);
            Ok(())
        }

        Commands::Edit { parcel, fields } => {
            let mut dash = Dashboard::open(&opts)?;
            let patch = fields.into_patch()?;
            if patch.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            report(dash.dispatch(Action::Update { parcel_no: parcel, patch })?);
            Ok(())
        }

        Commands::Delete { parcel, yes } => {
            let mut dash = Dashboard::open(&opts)?;
            let pending = dash.dispatch(Action::RequestDelete(parcel))?;
            if !yes {
                println!("{} (re-run with --yes)", pending);
                return Ok(());
            }
            report(dash.dispatch(Action::ConfirmDelete)?);
            Ok(())
        }

        Commands::Export { all, filter, sort, format, no_headers, out } => {
            let mut dash = Dashboard::open(&opts)?;
            for a in filter.actions().into_iter().chain(sort.actions()) {
                dash.dispatch(a)?;
            }
            let mut export = ExportOptions { format, include_headers: !no_headers, ..ExportOptions::default() };
            if let Some(o) = out { export.set_path(&o); }
            let scope = if all { ExportScope::All } else { ExportScope::Filtered };
            report(dash.dispatch(Action::Export { scope, options: export })?);
            Ok(())
        }
    }
}

fn report(n: Notice) {
    if n != Notice::Quiet {
        println!("{}", n);
    }
}

fn print_list(v: &ListView) {
    let st = &v.stats;
    println!(
        "{} properties | avg {} | total {} | {} available",
        st.stats.count, st.avg_text, st.total_text, st.stats.available
    );
    println!("{}", "-".repeat(100));
    for c in &v.cards {
        println!(
            "{:<14} {:>14}  {:<9} {:<18} {:<10} {}",
            c.parcel_no, c.bid_text, c.status.as_str(), c.sale_date, c.property_type, c.address
        );
        println!("{:<14} case {}  defendant {}", "", c.case_no, c.defendant);
    }
    println!("{}", "-".repeat(100));
    println!("{} | page {}/{}", v.range_text(), v.page, v.total_pages);
}
