// tests/query_view.rs
//
// Filter/sort/paginate over a RecordSet without any UI.
//
use deed_desk::data::{BidRange, Filter, QueryView, RecordSet, Sort, SortKey};
use deed_desk::model::{PropertyRecord, Status};

fn rec(parcel: &str, address: &str, defendant: &str, bid: f64, status: Status) -> PropertyRecord {
    PropertyRecord {
        parcel_no: parcel.into(),
        address: address.into(),
        case_no: "CV1".into(),
        defendant: defendant.into(),
        opening_bid: bid,
        property_type: "land".into(),
        sale_date: "September 3, 2025".into(),
        status,
    }
}

fn sample() -> RecordSet {
    RecordSet::from_records(vec![
        rec("100-00-001", "1 MAIN ST CLEVELAND", "ROE", 5_000.0, Status::Available),
        rec("100-00-002", "2 MAIN ST CLEVELAND", "DOE", 25_000.0, Status::Available),
        rec("100-00-003", "3 MAIN ST CLEVELAND", "POE", 500.0, Status::Sold),
        rec("100-00-004", "4 OAK AVE PARMA", "CLEVELAND LAND BANK", 10_000.0, Status::Available),
        rec("100-00-005", "5 OAK AVE PARMA", "SMITH", 0.0, Status::Available),
        rec("100-00-006", "6 ELM ST LAKEWOOD", "JONES", 10_000.01, Status::Available),
    ])
}

#[test]
fn all_predicates_are_conjunctive() {
    let set = sample();
    let filter = Filter {
        status: Some(Status::Available),
        bid_range: Some(BidRange::new(0.0, 10_000.0)),
        search: "CLEVELAND".into(),
        ..Filter::default()
    };
    let view = QueryView::new(&set, &filter, Sort::default());

    let parcels: Vec<_> = view.iter().map(|r| r.parcel_no.as_str()).collect();
    // 002 is over the range, 003 is sold, 005/006 do not mention Cleveland
    assert_eq!(parcels, ["100-00-004", "100-00-001"]);
    for r in view.iter() {
        assert!(filter.matches(r));
    }
}

#[test]
fn search_is_case_insensitive_over_three_fields() {
    let set = sample();
    let by = |needle: &str| {
        let f = Filter { search: needle.into(), ..Filter::default() };
        QueryView::new(&set, &f, Sort { key: SortKey::ParcelNo, descending: false }).len()
    };
    assert_eq!(by("oak ave"), 2); // address
    assert_eq!(by("00-006"), 1); // parcel
    assert_eq!(by("smith"), 1); // defendant
    assert_eq!(by("cv1"), 0); // case number is not searched
    assert_eq!(by(""), 6);
}

#[test]
fn bid_range_is_inclusive() {
    let set = sample();
    let f = Filter { bid_range: Some(BidRange::new(500.0, 10_000.0)), ..Filter::default() };
    let v = QueryView::new(&set, &f, Sort { key: SortKey::OpeningBid, descending: false });
    let bids: Vec<f64> = v.iter().map(|r| r.opening_bid).collect();
    assert_eq!(bids, [500.0, 5_000.0, 10_000.0]);
}

#[test]
fn default_sort_is_bid_descending_and_stats_follow_filter() {
    let set = sample();
    let v = QueryView::new(&set, &Filter::default(), Sort::default());
    assert_eq!(v.get(0).unwrap().parcel_no, "100-00-002");
    assert_eq!(v.get(5).unwrap().parcel_no, "100-00-005");

    let f = Filter { status: Some(Status::Sold), ..Filter::default() };
    let st = QueryView::new(&set, &f, Sort::default()).stats();
    assert_eq!(st.count, 1);
    assert_eq!(st.total_bid, 500.0);
    assert_eq!(st.available, 0);
}

#[test]
fn text_sort_ignores_case() {
    let set = RecordSet::from_records(vec![
        rec("100-00-001", "b street", "x", 0.0, Status::Available),
        rec("100-00-002", "A STREET", "x", 0.0, Status::Available),
        rec("100-00-003", "c street", "x", 0.0, Status::Available),
    ]);
    let v = QueryView::new(&set, &Filter::default(), Sort { key: SortKey::Address, descending: false });
    let order: Vec<_> = v.iter().map(|r| r.address.as_str()).collect();
    assert_eq!(order, ["A STREET", "b street", "c street"]);
}
