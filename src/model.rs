// src/model.rs
//
// The one entity: a property on the auction list.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::PARCEL_PATTERN;

/// Column order of the persisted record file and of every export.
pub const FIELD_NAMES: [&str; 8] = [
    "parcel_no",
    "address",
    "case_no",
    "defendant",
    "opening_bid",
    "property_type",
    "sale_date",
    "status",
];

static PARCEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PARCEL_PATTERN).expect("parcel pattern compiles")
});

/// `DDD-DD-DDD`, anything may follow.
pub fn is_valid_parcel(s: &str) -> bool {
    PARCEL_RE.is_match(s)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Available,
    Sold,
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Available, Status::Sold, Status::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Sold => "Sold",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "sold" => Ok(Status::Sold),
            "pending" => Ok(Status::Pending),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRecord {
    pub parcel_no: String,
    pub address: String,
    pub case_no: String,
    pub defendant: String,
    /// Always finite and >= 0
    pub opening_bid: f64,
    pub property_type: String,
    pub sale_date: String,
    pub status: Status,
}

impl PropertyRecord {
    /// Field values in `FIELD_NAMES` order; bid as plain decimal.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.parcel_no.clone(),
            self.address.clone(),
            self.case_no.clone(),
            self.defendant.clone(),
            self.opening_bid.to_string(),
            self.property_type.clone(),
            self.sale_date.clone(),
            s!(self.status.as_str()),
        ]
    }

    /// Case-insensitive substring match on address, parcel or defendant.
    /// `needle_lc` must already be lowercase.
    pub fn matches_search(&self, needle_lc: &str) -> bool {
        needle_lc.is_empty()
            || self.address.to_lowercase().contains(needle_lc)
            || self.parcel_no.to_lowercase().contains(needle_lc)
            || self.defendant.to_lowercase().contains(needle_lc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parcel_pattern_allows_suffix() {
        assert!(is_valid_parcel("105-20-013"));
        assert!(is_valid_parcel("105-20-013A (PART)"));
        assert!(!is_valid_parcel("105-2-013"));
        assert!(!is_valid_parcel("PARCEL NO."));
        assert!(!is_valid_parcel(" 105-20-013"));
    }

    #[test]
    fn status_parses_loosely_and_prints_canonically() {
        assert_eq!("sold".parse::<Status>().unwrap(), Status::Sold);
        assert_eq!(" Pending ".parse::<Status>().unwrap().to_string(), "Pending");
        assert!("gone".parse::<Status>().is_err());
    }

    #[test]
    fn bid_is_written_as_plain_decimal() {
        let rec = PropertyRecord {
            parcel_no: s!("105-20-013"),
            address: s!(),
            case_no: s!(),
            defendant: s!(),
            opening_bid: 212204.35,
            property_type: s!("land"),
            sale_date: s!(),
            status: Status::Available,
        };
        assert_eq!(rec.to_row()[4], "212204.35");
        assert_eq!(rec.to_row()[7], "Available");
    }
}
