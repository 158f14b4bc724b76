// src/dashboard/forms.rs
//
// Text-in, record-out. Both the GUI form buffers and the CLI flags land here
// so add/edit validation is the same everywhere.

use crate::{
    config::consts::DEFAULT_PROPERTY_TYPE,
    core::sanitize::{parse_amount, property_type_or_default},
    error::{DeedError, Result},
    model::{is_valid_parcel, PropertyRecord, Status},
};

/// Field-by-field text of a record, as typed by a user.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRecord {
    pub parcel_no: String,
    pub address: String,
    pub case_no: String,
    pub defendant: String,
    /// Blank → 0
    pub opening_bid: String,
    pub property_type: String,
    pub sale_date: String,
    pub status: Status,
}

impl Default for NewRecord {
    fn default() -> Self {
        Self {
            parcel_no: s!(),
            address: s!(),
            case_no: s!(),
            defendant: s!(),
            opening_bid: s!(),
            property_type: s!(DEFAULT_PROPERTY_TYPE),
            sale_date: s!(),
            status: Status::Available,
        }
    }
}

impl NewRecord {
    /// Prefill from an existing record (edit form).
    pub fn from_record(r: &PropertyRecord) -> Self {
        Self {
            parcel_no: r.parcel_no.clone(),
            address: r.address.clone(),
            case_no: r.case_no.clone(),
            defendant: r.defendant.clone(),
            opening_bid: r.opening_bid.to_string(),
            property_type: r.property_type.clone(),
            sale_date: r.sale_date.clone(),
            status: r.status,
        }
    }

    pub fn validate(&self) -> Result<PropertyRecord> {
        let rec = PropertyRecord {
            parcel_no: required("parcel_no", &self.parcel_no)?,
            address: required("address", &self.address)?,
            case_no: required("case_no", &self.case_no)?,
            defendant: required("defendant", &self.defendant)?,
            opening_bid: parse_bid(&self.opening_bid)?,
            property_type: property_type_or_default(&self.property_type),
            sale_date: s!(self.sale_date.trim()),
            status: self.status,
        };
        check_parcel(&rec.parcel_no)?;
        Ok(rec)
    }
}

/// Partial update; `None` leaves the field as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordPatch {
    pub parcel_no: Option<String>,
    pub address: Option<String>,
    pub case_no: Option<String>,
    pub defendant: Option<String>,
    pub opening_bid: Option<f64>,
    pub property_type: Option<String>,
    pub sale_date: Option<String>,
    pub status: Option<Status>,
}

impl RecordPatch {
    /// Full replacement from a form buffer. Bid text is parsed here.
    pub fn from_form(form: &NewRecord) -> Result<Self> {
        Ok(Self {
            parcel_no: Some(form.parcel_no.clone()),
            address: Some(form.address.clone()),
            case_no: Some(form.case_no.clone()),
            defendant: Some(form.defendant.clone()),
            opening_bid: Some(parse_bid(&form.opening_bid)?),
            property_type: Some(form.property_type.clone()),
            sale_date: Some(form.sale_date.clone()),
            status: Some(form.status),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }

    /// Apply onto `base` and validate the result. Uniqueness is the set's job.
    pub fn apply(&self, base: &PropertyRecord) -> Result<PropertyRecord> {
        let pick = |new: &Option<String>, old: &str| match new {
            Some(v) => s!(v.trim()),
            None => s!(old),
        };

        let rec = PropertyRecord {
            parcel_no: pick(&self.parcel_no, &base.parcel_no),
            address: pick(&self.address, &base.address),
            case_no: pick(&self.case_no, &base.case_no),
            defendant: pick(&self.defendant, &base.defendant),
            opening_bid: self.opening_bid.unwrap_or(base.opening_bid),
            property_type: property_type_or_default(&pick(&self.property_type, &base.property_type)),
            sale_date: pick(&self.sale_date, &base.sale_date),
            status: self.status.unwrap_or(base.status),
        };

        for (name, value) in [
            ("parcel_no", &rec.parcel_no),
            ("address", &rec.address),
            ("case_no", &rec.case_no),
            ("defendant", &rec.defendant),
        ] {
            if value.is_empty() {
                return Err(DeedError::MissingField(name));
            }
        }
        check_parcel(&rec.parcel_no)?;
        if !rec.opening_bid.is_finite() || rec.opening_bid < 0.0 {
            return Err(DeedError::InvalidField {
                field: "opening_bid",
                reason: format!("{} is not a non-negative amount", rec.opening_bid),
            });
        }
        Ok(rec)
    }
}

fn required(field: &'static str, v: &str) -> Result<String> {
    let v = v.trim();
    if v.is_empty() { Err(DeedError::MissingField(field)) } else { Ok(s!(v)) }
}

fn check_parcel(p: &str) -> Result<()> {
    if is_valid_parcel(p) {
        Ok(())
    } else {
        Err(DeedError::InvalidField {
            field: "parcel_no",
            reason: format!("{:?} does not match DDD-DD-DDD", p),
        })
    }
}

/// Form bid text → amount. Blank is 0; junk or negatives are rejected
/// (unlike the extractor, a person typed this).
pub fn parse_bid(text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    parse_amount(text).ok_or_else(|| DeedError::InvalidField {
        field: "opening_bid",
        reason: format!("{:?} is not a non-negative amount", text.trim()),
    })
}
