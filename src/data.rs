// src/data.rs
//
// Canonical and view-layer record data.
//
// - RecordSet: the authoritative list of records, unique by parcel number.
//              Mutators return errors instead of silently merging.
// - QueryView: derived view produced from a RecordSet by applying a Filter
//              and a Sort. Holds indexes into the set, never copies.
//
// Pagination and summary stats work on a QueryView.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    config::consts::{PAGE_SIZE, SALE_DATE_FMT},
    error::{DeedError, Result},
    model::{PropertyRecord, Status},
};

/// Authoritative record list. Order is load/insert order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<PropertyRecord>,
}

impl RecordSet {
    /// Build from loaded records; a repeated parcel keeps its first occurrence.
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        let mut set = Self { records: Vec::with_capacity(records.len()) };
        for rec in records {
            if set.contains(&rec.parcel_no) {
                logd!("RecordSet: dropping duplicate parcel {}", rec.parcel_no);
                continue;
            }
            set.records.push(rec);
        }
        set
    }

    pub fn records(&self) -> &[PropertyRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn position(&self, parcel_no: &str) -> Option<usize> {
        self.records.iter().position(|r| r.parcel_no == parcel_no)
    }

    pub fn get(&self, parcel_no: &str) -> Option<&PropertyRecord> {
        self.position(parcel_no).map(|i| &self.records[i])
    }

    pub fn contains(&self, parcel_no: &str) -> bool {
        self.position(parcel_no).is_some()
    }

    pub fn insert(&mut self, rec: PropertyRecord) -> Result<()> {
        if self.contains(&rec.parcel_no) {
            return Err(DeedError::DuplicateKey(rec.parcel_no));
        }
        self.records.push(rec);
        Ok(())
    }

    /// Replace the record keyed by `parcel_no`. The replacement may carry a
    /// new parcel number as long as no other record already uses it.
    pub fn update(&mut self, parcel_no: &str, rec: PropertyRecord) -> Result<()> {
        let ix = self
            .position(parcel_no)
            .ok_or_else(|| DeedError::NotFound(s!(parcel_no)))?;
        if rec.parcel_no != parcel_no && self.contains(&rec.parcel_no) {
            return Err(DeedError::DuplicateKey(rec.parcel_no));
        }
        self.records[ix] = rec;
        Ok(())
    }

    pub fn remove(&mut self, parcel_no: &str) -> Result<PropertyRecord> {
        let ix = self
            .position(parcel_no)
            .ok_or_else(|| DeedError::NotFound(s!(parcel_no)))?;
        Ok(self.records.remove(ix))
    }
}

/* ---------------- Filter ---------------- */

/// Inclusive opening-bid bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BidRange {
    pub min: f64,
    pub max: f64,
}

impl BidRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    pub fn contains(&self, bid: f64) -> bool {
        bid >= self.min && bid <= self.max
    }
}

/// All predicates are ANDed; `None` / empty search means "All".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    pub sale_date: Option<String>,
    pub status: Option<Status>,
    pub property_type: Option<String>,
    pub bid_range: Option<BidRange>,
    pub search: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        *self == Filter::default()
    }

    /// Predicate with a pre-lowercased search needle.
    fn matcher(&self) -> impl Fn(&PropertyRecord) -> bool + '_ {
        let needle = self.search.trim().to_lowercase();
        move |r: &PropertyRecord| {
            self.sale_date.as_ref().map_or(true, |d| &r.sale_date == d)
                && self.status.map_or(true, |s| r.status == s)
                && self.property_type.as_ref().map_or(true, |t| &r.property_type == t)
                && self.bid_range.map_or(true, |b| b.contains(r.opening_bid))
                && r.matches_search(&needle)
        }
    }

    pub fn matches(&self, rec: &PropertyRecord) -> bool {
        (self.matcher())(rec)
    }
}

/* ---------------- Sort ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    OpeningBid,
    ParcelNo,
    Address,
    SaleDate,
    CaseNo,
    Defendant,
    Status,
    PropertyType,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::OpeningBid,
        SortKey::ParcelNo,
        SortKey::Address,
        SortKey::SaleDate,
        SortKey::CaseNo,
        SortKey::Defendant,
        SortKey::Status,
        SortKey::PropertyType,
    ];

    /// Field name as used in the record file header.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::OpeningBid => "opening_bid",
            SortKey::ParcelNo => "parcel_no",
            SortKey::Address => "address",
            SortKey::SaleDate => "sale_date",
            SortKey::CaseNo => "case_no",
            SortKey::Defendant => "defendant",
            SortKey::Status => "status",
            SortKey::PropertyType => "property_type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::OpeningBid => "Opening Bid",
            SortKey::ParcelNo => "Parcel Number",
            SortKey::Address => "Address",
            SortKey::SaleDate => "Sale Date",
            SortKey::CaseNo => "Case Number",
            SortKey::Defendant => "Defendant",
            SortKey::Status => "Status",
            SortKey::PropertyType => "Property Type",
        }
    }

    fn compare(self, a: &PropertyRecord, b: &PropertyRecord) -> Ordering {
        match self {
            SortKey::OpeningBid => a.opening_bid.total_cmp(&b.opening_bid),
            SortKey::ParcelNo => cmp_text(&a.parcel_no, &b.parcel_no),
            SortKey::Address => cmp_text(&a.address, &b.address),
            SortKey::SaleDate => cmp_sale_date(&a.sale_date, &b.sale_date),
            SortKey::CaseNo => cmp_text(&a.case_no, &b.case_no),
            SortKey::Defendant => cmp_text(&a.defendant, &b.defendant),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::PropertyType => cmp_text(&a.property_type, &b.property_type),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown sort key: {}", s))
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn parse_sale_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SALE_DATE_FMT).ok()
}

/// Calendar order when both parse; dated labels sort before free text.
fn cmp_sale_date(a: &str, b: &str) -> Ordering {
    match (parse_sale_date(a), parse_sale_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => cmp_text(a, b),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub descending: bool,
}

impl Default for Sort {
    fn default() -> Self {
        Self { key: SortKey::OpeningBid, descending: true }
    }
}

/* ---------------- Query ---------------- */

/// Filter + sort + 1-based page.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub filter: Filter,
    pub sort: Sort,
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            sort: Sort::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// At least one page, even when empty.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Zero-copy filtered + sorted projection of a RecordSet.
#[derive(Clone, Debug)]
pub struct QueryView<'a> {
    /// Positions of kept records in the set, in display order
    pub row_ix: Vec<usize>,
    set: &'a RecordSet,
}

impl<'a> QueryView<'a> {
    pub fn new(set: &'a RecordSet, filter: &Filter, sort: Sort) -> Self {
        let keep = filter.matcher();
        let recs = set.records();
        let mut row_ix: Vec<usize> = (0..recs.len()).filter(|&i| keep(&recs[i])).collect();

        // sort_by is stable; flipping the comparator keeps ties in set order
        row_ix.sort_by(|&a, &b| {
            let ord = sort.key.compare(&recs[a], &recs[b]);
            if sort.descending { ord.reverse() } else { ord }
        });

        Self { row_ix, set }
    }

    pub fn from_query(set: &'a RecordSet, q: &Query) -> Self {
        Self::new(set, &q.filter, q.sort)
    }

    /// Every record in the set, set order.
    pub fn all(set: &'a RecordSet) -> Self {
        Self { row_ix: (0..set.len()).collect(), set }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn get(&self, i: usize) -> Option<&'a PropertyRecord> {
        let set = self.set;
        self.row_ix.get(i).map(|&ix| &set.records()[ix])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PropertyRecord> + '_ {
        let set = self.set;
        self.row_ix.iter().map(move |&ix| &set.records()[ix])
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(self.len(), page_size)
    }

    /// Records on 1-based `page`; out-of-range pages clamp to the last one.
    pub fn page(&self, page: usize, page_size: usize) -> Vec<&'a PropertyRecord> {
        let size = page_size.max(1);
        let page = page.clamp(1, self.total_pages(size));
        self.iter().skip((page - 1) * size).take(size).collect()
    }

    /// Materialize owned rows in `FIELD_NAMES` order (export boundary).
    pub fn to_owned_rows(&self) -> Vec<Vec<String>> {
        self.iter().map(PropertyRecord::to_row).collect()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_records(self.iter())
    }
}

/* ---------------- Summary ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub total_bid: f64,
    /// 0 when there are no records
    pub avg_bid: f64,
    pub available: usize,
}

impl Stats {
    pub fn from_records<'r>(recs: impl IntoIterator<Item = &'r PropertyRecord>) -> Self {
        let mut st = Stats::default();
        for r in recs {
            st.count += 1;
            st.total_bid += r.opening_bid;
            if r.status == Status::Available {
                st.available += 1;
            }
        }
        if st.count > 0 {
            st.avg_bid = st.total_bid / st.count as f64;
        }
        st
    }
}

/// Values offered by the filter widgets, first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterChoices {
    pub sale_dates: Vec<String>,
    pub statuses: Vec<Status>,
    pub property_types: Vec<String>,
    /// (min, max) opening bid over the whole set
    pub bid_bounds: Option<(f64, f64)>,
}

impl FilterChoices {
    pub fn from_set(set: &RecordSet) -> Self {
        let mut out = FilterChoices::default();
        for r in set.records() {
            if !r.sale_date.is_empty() && !out.sale_dates.contains(&r.sale_date) {
                out.sale_dates.push(r.sale_date.clone());
            }
            if !out.statuses.contains(&r.status) {
                out.statuses.push(r.status);
            }
            if !r.property_type.is_empty() && !out.property_types.contains(&r.property_type) {
                out.property_types.push(r.property_type.clone());
            }
            out.bid_bounds = Some(match out.bid_bounds {
                None => (r.opening_bid, r.opening_bid),
                Some((lo, hi)) => (lo.min(r.opening_bid), hi.max(r.opening_bid)),
            });
        }
        out
    }
}
