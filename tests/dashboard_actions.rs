// tests/dashboard_actions.rs
//
// Dispatch actions against a Dashboard backed by a real record file.
//
use std::fs;
use std::path::PathBuf;

use deed_desk::config::options::{DashboardOptions, ExportOptions, ExportScope, ExtractOptions};
use deed_desk::dashboard::{Action, Dashboard, NewRecord, Notice, RecordPatch};
use deed_desk::data::{BidRange, Query};
use deed_desk::error::DeedError;
use deed_desk::model::{PropertyRecord, Status};
use deed_desk::store::{self, RecordStore};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("deed_dash_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(parcel: &str, bid: f64) -> PropertyRecord {
    PropertyRecord {
        parcel_no: parcel.into(),
        address: format!("{} MAIN ST", &parcel[8..]),
        case_no: "CV1".into(),
        defendant: "DOE".into(),
        opening_bid: bid,
        property_type: "land".into(),
        sale_date: "September 3, 2025".into(),
        status: Status::Available,
    }
}

/// Three records on disk, dashboard opened over them.
fn seeded(name: &str) -> (PathBuf, Dashboard) {
    let dir = tmp_dir(name);
    let data = dir.join("tax_deed_properties.csv");
    store::save_records(
        &data,
        &[rec("100-00-001", 100.0), rec("100-00-002", 200.0), rec("100-00-003", 300.0)],
    )
    .unwrap();
    let opts = DashboardOptions { data_file: data.clone(), ..DashboardOptions::default() };
    (data, Dashboard::open(&opts).unwrap())
}

fn form(parcel: &str) -> NewRecord {
    NewRecord {
        parcel_no: parcel.into(),
        address: "9 NEW ST".into(),
        case_no: "CV9".into(),
        defendant: "NEW OWNER".into(),
        opening_bid: "$900".into(),
        ..NewRecord::default()
    }
}

#[test]
fn missing_file_opens_empty_and_first_add_creates_it() {
    let dir = tmp_dir("fresh");
    let data = dir.join("new.csv");
    let opts = DashboardOptions { data_file: data.clone(), ..DashboardOptions::default() };

    let mut d = Dashboard::open(&opts).unwrap();
    assert!(d.records().is_empty());
    assert_eq!(d.view().total_pages, 1);
    assert!(!data.exists());

    let n = d.dispatch(Action::Add(form("200-00-001"))).unwrap();
    assert_eq!(n, Notice::Added("200-00-001".into()));
    assert_eq!(store::load_records(&data).unwrap().len(), 1);
}

#[test]
fn duplicate_add_is_rejected_and_file_untouched() {
    let (data, mut d) = seeded("dup");
    let before = fs::read(&data).unwrap();

    let err = d.dispatch(Action::Add(form("100-00-002"))).unwrap_err();
    assert!(matches!(err, DeedError::DuplicateKey(ref p) if p == "100-00-002"));
    assert_eq!(fs::read(&data).unwrap(), before);
    assert_eq!(d.records().len(), 3);
}

#[test]
fn invalid_add_never_reaches_disk() {
    let (data, mut d) = seeded("invalid");
    let before = fs::read(&data).unwrap();

    let mut f = form("200-00-001");
    f.case_no = "  ".into();
    assert!(matches!(d.dispatch(Action::Add(f)), Err(DeedError::MissingField("case_no"))));

    let f = form("2000001");
    assert!(matches!(d.dispatch(Action::Add(f)), Err(DeedError::InvalidField { .. })));
    assert_eq!(fs::read(&data).unwrap(), before);
}

#[test]
fn confirmed_delete_persists_one_fewer() {
    let (data, mut d) = seeded("delete");

    d.dispatch(Action::RequestDelete("100-00-002".into())).unwrap();
    assert_eq!(store::load_records(&data).unwrap().len(), 3);

    let n = d.dispatch(Action::ConfirmDelete).unwrap();
    assert_eq!(n, Notice::Deleted("100-00-002".into()));

    let on_disk = store::load_records(&data).unwrap();
    assert_eq!(on_disk.len(), 2);
    assert!(on_disk.iter().all(|r| r.parcel_no != "100-00-002"));
    assert_eq!(d.records().len(), 2);

    assert!(matches!(
        d.dispatch(Action::RequestDelete("100-00-002".into())),
        Err(DeedError::NotFound(_))
    ));
}

#[test]
fn update_persists_and_can_rename() {
    let (data, mut d) = seeded("update");

    let patch = RecordPatch {
        parcel_no: Some("100-00-009".into()),
        status: Some(Status::Sold),
        opening_bid: Some(1234.5),
        ..RecordPatch::default()
    };
    d.dispatch(Action::Update { parcel_no: "100-00-001".into(), patch }).unwrap();

    let loaded = RecordStore::new(&data).load().unwrap();
    assert!(!loaded.contains("100-00-001"));
    let r = loaded.get("100-00-009").unwrap();
    assert_eq!(r.status, Status::Sold);
    assert_eq!(r.opening_bid, 1234.5);
    assert_eq!(r.address, "001 MAIN ST");

    // renaming onto an existing parcel is refused
    let clash = RecordPatch { parcel_no: Some("100-00-003".into()), ..RecordPatch::default() };
    let err = d.dispatch(Action::Update { parcel_no: "100-00-002".into(), patch: clash }).unwrap_err();
    assert!(matches!(err, DeedError::DuplicateKey(_)));
}

#[test]
fn view_reflects_filters_and_generation() {
    let (_data, mut d) = seeded("view");
    let g0 = d.view().generation;

    d.dispatch(Action::SetBidRange(Some(BidRange::new(150.0, 300.0)))).unwrap();
    let v = d.view();
    assert_eq!(v.matched, 2);
    assert_eq!(v.total, 3);
    assert_eq!(v.cards[0].parcel_no, "100-00-003");
    assert_eq!(v.cards[0].bid_text, "$300.00");
    assert_eq!(v.stats.avg_text, "$250.00");
    assert_eq!(v.generation, g0);

    d.dispatch(Action::Add(form("200-00-001"))).unwrap();
    assert_eq!(d.view().generation, g0 + 1);

    d.dispatch(Action::ClearFilters).unwrap();
    assert_eq!(d.view().matched, 4);
}

#[test]
fn reload_picks_up_external_edits() {
    let (data, mut d) = seeded("reload");
    store::save_records(&data, &[rec("300-00-001", 1.0)]).unwrap();

    assert_eq!(d.records().len(), 3);
    assert_eq!(d.dispatch(Action::Reload).unwrap(), Notice::Reloaded(1));
    assert!(d.records().contains("300-00-001"));
}

#[test]
fn export_filtered_and_all() {
    let (data, mut d) = seeded("export");
    let out_dir = data.parent().unwrap().join("out");

    d.dispatch(Action::SetSearch("00-003".into())).unwrap();

    let options = ExportOptions { out_file: Some(out_dir.join("filtered.csv")), ..ExportOptions::default() };
    match d.dispatch(Action::Export { scope: ExportScope::Filtered, options }).unwrap() {
        Notice::Exported { rows, path } => {
            assert_eq!(rows, 1);
            assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 2);
        }
        other => panic!("unexpected notice {:?}", other),
    }

    let options = ExportOptions { out_dir: out_dir.clone(), ..ExportOptions::default() };
    match d.dispatch(Action::Export { scope: ExportScope::All, options }).unwrap() {
        Notice::Exported { rows, path } => {
            assert_eq!(rows, 3);
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with("tax_deed_properties_all_"));
            assert!(name.ends_with(".csv"));
        }
        other => panic!("unexpected notice {:?}", other),
    }
}

#[test]
fn import_replaces_the_set() {
    let (data, mut d) = seeded("import");
    let input = data.parent().unwrap().join("sheet.csv");
    fs::write(
        &input,
        "PARCEL NO.,ADDRESS,CASE NO.,DEFENDANT,,OPENING BID,,TYPE\n\
         105-20-013,8215 ST CLAIR AVE,CV948061,BOB NANCE,,212204.35,,land\n\
         JUNK,,,,,,,\n",
    )
    .unwrap();

    let n = d
        .dispatch(Action::Import { input, options: ExtractOptions::default() })
        .unwrap();
    match n {
        Notice::Imported { records, report } => {
            assert_eq!(records, 1);
            assert_eq!(report.invalid, 1);
        }
        other => panic!("unexpected notice {:?}", other),
    }
    assert_eq!(d.records().len(), 1);
    assert_eq!(store::load_records(&data).unwrap()[0].parcel_no, "105-20-013");
}

#[test]
fn blank_property_type_is_stored_as_land() {
    let (data, mut d) = seeded("ptype");

    let mut f = form("200-00-001");
    f.property_type = "   ".into();
    d.dispatch(Action::Add(f)).unwrap();

    let patch = RecordPatch { property_type: Some("".into()), ..RecordPatch::default() };
    d.dispatch(Action::Update { parcel_no: "100-00-002".into(), patch }).unwrap();

    let loaded = RecordStore::new(&data).load().unwrap();
    assert_eq!(loaded.get("200-00-001").unwrap().property_type, "land");
    assert_eq!(loaded.get("100-00-002").unwrap().property_type, "land");
}

#[test]
fn unreadable_file_blocks_changes_until_reload() {
    let dir = tmp_dir("unloaded");
    let data = dir.join("records.csv");
    fs::write(&data, "parcel_no,address\n100-00-001,A\n").unwrap();
    let before = fs::read(&data).unwrap();

    let reason = store::load_records(&data).unwrap_err().to_string();
    let mut d = Dashboard::unloaded(RecordStore::new(&data), Query::default(), reason);
    assert!(d.load_error().is_some());

    let err = d.dispatch(Action::Add(form("200-00-001"))).unwrap_err();
    assert!(matches!(err, DeedError::NotLoaded { .. }));
    assert_eq!(fs::read(&data).unwrap(), before);

    // still broken: reload fails and the lock stays
    assert!(d.dispatch(Action::Reload).is_err());
    assert!(d.dispatch(Action::Add(form("200-00-001"))).is_err());
    assert_eq!(fs::read(&data).unwrap(), before);

    store::save_records(&data, &[rec("100-00-001", 1.0)]).unwrap();
    assert_eq!(d.dispatch(Action::Reload).unwrap(), Notice::Reloaded(1));
    assert!(d.load_error().is_none());

    d.dispatch(Action::Add(form("200-00-001"))).unwrap();
    assert_eq!(store::load_records(&data).unwrap().len(), 2);
}
