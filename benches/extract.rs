// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use deed_desk::{
    config::options::ExtractOptions,
    data::{Filter, QueryView, RecordSet, Sort},
    extract::{self, Grid},
};

/// Auction-sheet shaped grid: title, header, then `n` rows with a section
/// marker every 500 rows and the odd blank continuation line.
fn synthetic_sheet(n: usize) -> Grid {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["FORFEITED LAND SALE".into()],
        ["PARCEL NO.", "ADDRESS", "CASE NO.", "DEFENDANT", "", "OPENING BID", "", "TYPE"]
            .iter().map(|s| s.to_string()).collect(),
    ];
    for i in 0..n {
        if i % 500 == 0 {
            rows.push(vec!["THE FOLLOWING PARCELS WILL BE OFFERED".into()]);
        }
        if i % 37 == 0 {
            rows.push(vec!["".into(), "CONTINUED\nnan".into()]);
        }
        rows.push(vec![
            format!("{:03}-{:02}-{:03}", 100 + i / 10_000, (i / 1000) % 100, i % 1000),
            format!("{} ST CLAIR AVE\nCLEVELAND", 1000 + i),
            format!("CV{}", 900_000 + i),
            format!("OWNER {}, ET AL", i),
            "".into(),
            format!("${},{:03}.{:02}", i % 300, i % 1000, i % 100),
            "".into(),
            if i % 3 == 0 { "structure".into() } else { "".into() },
        ]);
    }
    extract::grid_from_rows(&rows)
}

fn bench_extract(c: &mut Criterion) {
    let grid = synthetic_sheet(5_000);
    let opts = ExtractOptions::default();

    c.bench_function("extract_records_5k", |b| {
        b.iter(|| {
            let out = extract::extract_records(black_box(&grid), &opts, None).unwrap();
            black_box(out.records.len())
        })
    });

    let set = RecordSet::from_records(
        extract::extract_records(&grid, &opts, None).unwrap().records,
    );
    let filter = Filter { search: "clair".into(), ..Filter::default() };

    c.bench_function("query_view_5k", |b| {
        b.iter(|| {
            let view = QueryView::new(black_box(&set), &filter, Sort::default());
            black_box(view.stats().count)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
