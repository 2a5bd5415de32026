//! The bin map: one sheet where each cell is a storage bin.

use crate::error::Result;
use crate::workbook::{cell_value, read_table, set_text};
use millstore_tables::{BinRecord, Position, decode, encode};
use serde::Serialize;
use umya_spreadsheet::Worksheet;

/// One cell of the bin map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinEntry {
    pub position_name: String,
    pub bin_name: String,
    pub item: String,
    pub date: String,
    pub vendor: String,
    /// The cell text as stored; empty for an empty bin.
    pub bin_value: String,
}

impl BinEntry {
    fn new(position: Position, record: BinRecord) -> BinEntry {
        BinEntry {
            position_name: position.to_string(),
            bin_name: record.bin_name,
            item: record.item,
            date: record.date,
            vendor: record.vendor,
            bin_value: record.raw.unwrap_or_default(),
        }
    }
}

/// Every position in the used extent, row by row, including empty bins.
pub fn read_all(ws: &Worksheet) -> Vec<BinEntry> {
    let table = read_table(ws);
    let mut entries = Vec::with_capacity(table.rows.len() * table.width());
    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let position = Position {
                col: c as u32 + 1,
                row: r as u32 + 1,
            };
            entries.push(BinEntry::new(position, decode(cell)));
        }
    }
    entries
}

/// Check a write before anything is mutated: returns the parsed position and
/// the encoded cell text.
pub fn prepare_write(
    position_name: &str,
    bin_label: &str,
    material_input: &str,
    date: &str,
    vendor_name: &str,
) -> Result<(Position, String)> {
    let position: Position = position_name.parse()?;
    let raw = encode(bin_label, material_input, date, vendor_name)?;
    Ok((position, raw))
}

/// Encode a bin record into the cell at `position_name`.
pub fn write_cell(
    ws: &mut Worksheet,
    position_name: &str,
    bin_label: &str,
    material_input: &str,
    date: &str,
    vendor_name: &str,
) -> Result<Position> {
    let (position, raw) = prepare_write(position_name, bin_label, material_input, date, vendor_name)?;
    put(ws, position, &raw);
    Ok(position)
}

/// Store already-encoded cell text.
pub(crate) fn put(ws: &mut Worksheet, position: Position, raw: &str) {
    set_text(ws, position.col, position.row, raw);
}

/// Decode a single position; out-of-extent positions are empty bins.
pub fn read_cell(ws: &Worksheet, position: Position) -> BinRecord {
    decode(&cell_value(ws, position.col, position.row))
}
