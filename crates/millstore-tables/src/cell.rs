//! Cell values as read from a sheet, and rectangular header + rows tables.
//!
//! Sheet cells are loosely typed. [`CellValue`] is the only shape a cell takes
//! once it leaves the workbook backend; nothing downstream sees the backend's
//! own cell types.

/// The content of one sheet cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> CellValue {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to a display string. Integral numbers print without a fraction.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Coerce to a trimmed display string.
    pub fn to_trimmed(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            other => other.to_text(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Format a number the way the sheet shows it.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// A rectangular table: the first row is the header, the rest are data rows.
///
/// Rows may be ragged; reads past the end of a row see [`CellValue::Empty`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Table {
        Table { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> &[CellValue] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of columns in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_drop_fraction() {
        assert_eq!(CellValue::Number(42.0).to_text(), "42");
        assert_eq!(CellValue::Number(-3.0).to_text(), "-3");
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
    }

    #[test]
    fn bools_print_upper_case() {
        assert_eq!(CellValue::Bool(true).to_text(), "TRUE");
        assert_eq!(CellValue::Bool(false).to_text(), "FALSE");
    }

    #[test]
    fn trimmed_only_touches_text() {
        assert_eq!(CellValue::text("  kg ").to_trimmed(), "kg");
        assert_eq!(CellValue::Empty.to_trimmed(), "");
    }

    #[test]
    fn header_and_rows_split() {
        let table = Table::new(vec![
            vec!["a".into(), "b".into()],
            vec!["1".into()],
            vec![],
        ]);
        assert_eq!(table.header().len(), 2);
        assert_eq!(table.data_rows().len(), 2);
        assert_eq!(table.width(), 2);

        let empty = Table::default();
        assert!(empty.header().is_empty());
        assert!(empty.data_rows().is_empty());
    }
}
