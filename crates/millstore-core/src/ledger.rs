//! Append-only intake ledger.
//!
//! One row per submission, written below the last used row. Rows are never
//! rewritten or removed, and identical submissions are separate rows.

use crate::workbook::{read_table, set_text, used_extent};
use chrono::{Local, NaiveDateTime};
use umya_spreadsheet::Worksheet;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One intake submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeTransaction {
    /// Filled with the local time on append when None.
    pub received_at: Option<NaiveDateTime>,
    pub date: String,
    pub material_input: String,
    pub vendor_name: String,
    pub dryness: String,
    pub grade: String,
    pub bin_label: String,
    pub total_weight: String,
    pub capacity: String,
    pub estimated_mill_rate: String,
    pub note: String,
}

impl IntakeTransaction {
    /// The row as written, `received_at` first.
    fn columns(&self, received_at: NaiveDateTime) -> [String; 11] {
        [
            received_at.format(TIMESTAMP_FORMAT).to_string(),
            self.date.clone(),
            self.material_input.clone(),
            self.vendor_name.clone(),
            self.dryness.clone(),
            self.grade.clone(),
            self.bin_label.clone(),
            self.total_weight.clone(),
            self.capacity.clone(),
            self.estimated_mill_rate.clone(),
            self.note.clone(),
        ]
    }
}

/// Append `tx` as a new last row. Returns the row number written.
pub fn append(ws: &mut Worksheet, tx: &IntakeTransaction) -> u32 {
    let received_at = tx.received_at.unwrap_or_else(|| Local::now().naive_local());
    let (_, last_row) = used_extent(ws);
    let row = last_row + 1;
    for (i, value) in tx.columns(received_at).iter().enumerate() {
        set_text(ws, i as u32 + 1, row, value);
    }
    row
}

/// All ledger rows as display strings, oldest first.
pub fn rows(ws: &Worksheet) -> Vec<Vec<String>> {
    read_table(ws)
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_text()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::fixtures::book_with;
    use crate::workbook::require_sheet_mut;
    use chrono::NaiveDate;

    fn sample() -> IntakeTransaction {
        IntakeTransaction {
            received_at: NaiveDate::from_ymd_opt(2024, 10, 1)
                .and_then(|d| d.and_hms_opt(8, 30, 0)),
            date: "2024-10-01".into(),
            material_input: "糙米".into(),
            vendor_name: "王記".into(),
            dryness: "14%".into(),
            grade: "A".into(),
            bin_label: "C-07".into(),
            total_weight: "1200".into(),
            capacity: "2000".into(),
            estimated_mill_rate: "0.68".into(),
            note: String::new(),
        }
    }

    #[test]
    fn test_append_writes_fixed_column_order() {
        let mut book = book_with(&["test"]);
        let ws = require_sheet_mut(&mut book, "test").unwrap();
        assert_eq!(append(ws, &sample()), 1);

        let rows = rows(ws);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            [
                "2024-10-01 08:30:00",
                "2024-10-01",
                "糙米",
                "王記",
                "14%",
                "A",
                "C-07",
                "1200",
                "2000",
                "0.68",
            ]
        );
    }

    #[test]
    fn test_identical_appends_are_kept() {
        let mut book = book_with(&["test"]);
        let ws = require_sheet_mut(&mut book, "test").unwrap();
        append(ws, &sample());
        assert_eq!(append(ws, &sample()), 2);
        let rows = rows(ws);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn test_append_goes_below_existing_rows() {
        let mut book = book_with(&["test"]);
        let ws = require_sheet_mut(&mut book, "test").unwrap();
        set_text(ws, 1, 1, "收件時間");
        set_text(ws, 2, 4, "stray");
        assert_eq!(append(ws, &sample()), 5);
    }

    #[test]
    fn test_missing_timestamp_uses_now() {
        let mut book = book_with(&["test"]);
        let ws = require_sheet_mut(&mut book, "test").unwrap();
        let before = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
        append(
            ws,
            &IntakeTransaction {
                bin_label: "A".into(),
                ..Default::default()
            },
        );
        let stamp = &rows(ws)[0][0];
        let parsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
        assert!(stamp.as_str() >= before.as_str());
        assert!(parsed <= Local::now().naive_local());
    }
}
