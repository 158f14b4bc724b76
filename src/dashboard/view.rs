// src/dashboard/view.rs
//
// Render-step output. Built from a `&Dashboard`, owns everything it shows,
// so a frontend can draw it while queuing actions against the dashboard.

use crate::{
    core::sanitize::format_currency,
    data::{FilterChoices, Query, Stats},
    model::{PropertyRecord, Status},
};

/// One property card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub parcel_no: String,
    pub address: String,
    pub case_no: String,
    pub defendant: String,
    /// Raw amount (sorting, sliders)
    pub opening_bid: f64,
    /// `$1,234.56`
    pub bid_text: String,
    pub property_type: String,
    pub sale_date: String,
    pub status: Status,
    pub selected: bool,
    pub pending_delete: bool,
}

impl CardView {
    pub fn from_record(r: &PropertyRecord, selected: Option<&str>, pending: Option<&str>) -> Self {
        Self {
            parcel_no: r.parcel_no.clone(),
            address: r.address.clone(),
            case_no: r.case_no.clone(),
            defendant: r.defendant.clone(),
            opening_bid: r.opening_bid,
            bid_text: format_currency(r.opening_bid),
            property_type: r.property_type.clone(),
            sale_date: r.sale_date.clone(),
            status: r.status,
            selected: selected == Some(r.parcel_no.as_str()),
            pending_delete: pending == Some(r.parcel_no.as_str()),
        }
    }
}

/// Stats box text.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub stats: Stats,
    pub avg_text: String,
    pub total_text: String,
}

impl From<Stats> for StatsView {
    fn from(stats: Stats) -> Self {
        Self {
            avg_text: format_currency(stats.avg_bid),
            total_text: format_currency(stats.total_bid),
            stats,
        }
    }
}

/// Everything one frame of the list page needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    /// Over the filtered records, all pages
    pub stats: StatsView,
    pub cards: Vec<CardView>,
    /// 1-based, already clamped
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the filter / records in the set
    pub matched: usize,
    pub total: usize,
    pub choices: FilterChoices,
    pub query: Query,
    pub selected: Option<PropertyRecord>,
    pub pending_delete: Option<String>,
    /// Bumped on every committed mutation or reload
    pub generation: u64,
}

impl ListView {
    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    /// `Showing 21–40 of 57`
    pub fn range_text(&self) -> String {
        if self.matched == 0 {
            return s!("No properties match");
        }
        let first = (self.page - 1) * self.query.page_size.max(1) + 1;
        let last = first + self.cards.len() - 1;
        format!("Showing {}–{} of {}", first, last, self.matched)
    }
}
