//! Bin record codec.
//!
//! A bin map cell holds four fields joined by line breaks, in the order
//! bin label, material, date, vendor. Fields are not escaped, so a field that
//! itself contains a line break is rejected by [`encode`].

use crate::cell::CellValue;
use crate::error::{Result, TableError};

const SEPARATOR: &str = "\n";

/// The decoded content of one bin map cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinRecord {
    pub bin_name: String,
    pub item: String,
    pub date: String,
    pub vendor: String,
    /// The undecoded cell text; None for an empty bin.
    pub raw: Option<String>,
}

impl BinRecord {
    /// The record of a cell with no text in it.
    pub fn empty() -> BinRecord {
        BinRecord::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }
}

/// Pack the four bin fields into one cell value.
pub fn encode(bin_label: &str, material_input: &str, date: &str, vendor_name: &str) -> Result<String> {
    let fields = [
        ("binLabel", bin_label),
        ("materialInput", material_input),
        ("date", date),
        ("vendorName", vendor_name),
    ];
    for (field, value) in fields {
        if value.contains(['\n', '\r']) {
            return Err(TableError::EncodingOverflow { field });
        }
    }
    Ok([bin_label, material_input, date, vendor_name].join(SEPARATOR))
}

/// Unpack a cell into a bin record. Empty and non-text cells are empty bins.
pub fn decode(cell: &CellValue) -> BinRecord {
    let Some(raw) = cell.as_text().filter(|s| !s.is_empty()) else {
        return BinRecord::empty();
    };

    let mut segments = raw
        .split(SEPARATOR)
        .map(|s| s.strip_suffix('\r').unwrap_or(s).to_string());
    let mut next = || segments.next().unwrap_or_default();

    BinRecord {
        bin_name: next(),
        item: next(),
        date: next(),
        vendor: next(),
        raw: Some(raw.to_string()),
    }
}
