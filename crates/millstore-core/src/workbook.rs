//! The xlsx file behind the store.
//!
//! Reads always load the whole file into memory before anything is decoded.
//! Writes serialize the whole workbook into a temporary file next to the
//! target and rename it into place, so readers see the old file or the new
//! one and never a half-written mix.

use crate::error::{Result, StoreError};
use millstore_tables::{CellValue, Table};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use umya_spreadsheet::{CellRawValue, Spreadsheet, Worksheet};

/// Location of the backing workbook.
#[derive(Clone, Debug)]
pub struct WorkbookFile {
    path: PathBuf,
}

impl WorkbookFile {
    pub fn new(path: impl Into<PathBuf>) -> WorkbookFile {
        WorkbookFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load a complete in-memory copy of the workbook.
    pub fn snapshot(&self) -> Result<Spreadsheet> {
        umya_spreadsheet::reader::xlsx::read(&self.path).map_err(|e| StoreError::StorageUnreadable {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Serialize `book` next to the target without touching the target yet.
    pub fn stage(&self, book: &Spreadsheet) -> Result<StagedWrite> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        umya_spreadsheet::writer::xlsx::write_writer(book, tmp.as_file_mut()).map_err(|e| {
            StoreError::StorageUnreadable {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        tmp.as_file().sync_all()?;
        Ok(StagedWrite {
            tmp,
            target: self.path.clone(),
        })
    }

    /// Stage and commit in one step.
    pub fn save(&self, book: &Spreadsheet) -> Result<()> {
        self.stage(book)?.commit()
    }

    /// Create the workbook with the given empty sheets if the file is absent.
    /// Returns whether a file was created.
    pub fn create_if_missing(&self, sheet_names: &[&str]) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        for name in sheet_names {
            book.new_sheet(*name).map_err(|e| StoreError::StorageUnreadable {
                path: self.path.clone(),
                message: format!("cannot create sheet {name:?}: {e}"),
            })?;
        }
        self.save(&book)?;
        Ok(true)
    }
}

/// A fully written temporary copy of the workbook waiting to replace the target.
///
/// Dropping it without calling [`StagedWrite::commit`] discards the write and
/// leaves the target as it was.
#[derive(Debug)]
pub struct StagedWrite {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedWrite {
    pub fn commit(self) -> Result<()> {
        self.tmp.persist(&self.target).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

pub fn require_sheet<'a>(book: &'a Spreadsheet, name: &str) -> Result<&'a Worksheet> {
    book.get_sheet_by_name(name)
        .ok_or_else(|| StoreError::MissingTable(name.to_string()))
}

pub fn require_sheet_mut<'a>(book: &'a mut Spreadsheet, name: &str) -> Result<&'a mut Worksheet> {
    book.get_sheet_by_name_mut(name)
        .ok_or_else(|| StoreError::MissingTable(name.to_string()))
}

/// Highest populated `(col, row)`, 1-indexed; `(0, 0)` for a sheet with no cells.
pub fn used_extent(ws: &Worksheet) -> (u32, u32) {
    ws.get_cell_collection()
        .iter()
        .fold((0u32, 0u32), |(max_c, max_r), cell| {
            let coord = cell.get_coordinate();
            (max_c.max(*coord.get_col_num()), max_r.max(*coord.get_row_num()))
        })
}

/// Read the used extent of a sheet as a dense table (row 1 is the header).
pub fn read_table(ws: &Worksheet) -> Table {
    let (max_col, max_row) = used_extent(ws);
    let mut rows = vec![vec![CellValue::Empty; max_col as usize]; max_row as usize];
    for cell in ws.get_cell_collection() {
        let coord = cell.get_coordinate();
        let col = *coord.get_col_num() as usize;
        let row = *coord.get_row_num() as usize;
        if col == 0 || row == 0 {
            continue;
        }
        rows[row - 1][col - 1] = convert_cell(cell.get_cell_value());
    }
    Table::new(rows)
}

/// One cell as a [`CellValue`]; cells that were never written are empty.
pub fn cell_value(ws: &Worksheet, col: u32, row: u32) -> CellValue {
    ws.get_cell((col, row))
        .map(|c| convert_cell(c.get_cell_value()))
        .unwrap_or_default()
}

fn convert_cell(cv: &umya_spreadsheet::CellValue) -> CellValue {
    let raw = cv.get_raw_value();
    if raw.is_empty() {
        return CellValue::Empty;
    }
    match raw {
        CellRawValue::Numeric(n) => CellValue::Number(*n),
        CellRawValue::Bool(b) => CellValue::Bool(*b),
        CellRawValue::String(s) => text_or_empty(s.to_string()),
        CellRawValue::RichText(rt) => text_or_empty(rt.get_text().to_string()),
        CellRawValue::Lazy(s) => text_or_empty(s.to_string()),
        CellRawValue::Error(_) => CellValue::Text(cv.get_value().to_string()),
        CellRawValue::Empty => CellValue::Empty,
    }
}

fn text_or_empty(s: String) -> CellValue {
    if s.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(s)
    }
}

/// Write a text cell. Empty text leaves the cell untouched.
pub fn set_text(ws: &mut Worksheet, col: u32, row: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    ws.get_cell_mut((col, row)).set_value_string(value);
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_create_if_missing_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = WorkbookFile::new(dir.path().join("w.xlsx"));
        assert!(file.create_if_missing(&["map", "test"]).unwrap());
        assert!(!file.create_if_missing(&["map", "test"]).unwrap());

        let book = file.snapshot().unwrap();
        assert!(require_sheet(&book, "map").is_ok());
        assert!(require_sheet(&book, "test").is_ok());
        assert!(matches!(
            require_sheet(&book, "goods_sheet"),
            Err(StoreError::MissingTable(name)) if name == "goods_sheet"
        ));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let file = WorkbookFile::new(dir.path().join("absent.xlsx"));
        let err = file.snapshot().unwrap_err();
        assert_eq!(err.kind(), "StorageUnreadable");
    }

    #[test]
    fn test_corrupt_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();
        let err = WorkbookFile::new(&path).snapshot().unwrap_err();
        assert!(matches!(err, StoreError::StorageUnreadable { .. }));
    }

    #[test]
    fn test_read_table_is_dense_and_typed() {
        let mut book = book_with(&["t"]);
        let ws = book.get_sheet_by_name_mut("t").unwrap();
        fill(ws, &[&["h1", "h2"], &["a"]]);
        ws.get_cell_mut((3, 3)).set_value_number(4.0);

        let table = read_table(require_sheet(&book, "t").unwrap());
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows.iter().all(|r| r.len() == 3));
        assert_eq!(table.rows[0][0], CellValue::text("h1"));
        assert_eq!(table.rows[1][1], CellValue::Empty);
        assert_eq!(table.rows[2][2], CellValue::Number(4.0));
    }

    #[test]
    fn test_empty_sheet_has_no_extent() {
        let book = book_with(&["t"]);
        let ws = require_sheet(&book, "t").unwrap();
        assert_eq!(used_extent(ws), (0, 0));
        assert!(read_table(ws).is_empty());
    }

    #[test]
    fn test_uncommitted_stage_leaves_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let file = WorkbookFile::new(dir.path().join("w.xlsx"));
        file.create_if_missing(&["t"]).unwrap();

        let mut book = file.snapshot().unwrap();
        set_text(require_sheet_mut(&mut book, "t").unwrap(), 1, 1, "changed");
        let staged = file.stage(&book).unwrap();
        drop(staged);

        let reread = file.snapshot().unwrap();
        assert!(read_table(require_sheet(&reread, "t").unwrap()).is_empty());

        file.stage(&book).unwrap().commit().unwrap();
        let reread = file.snapshot().unwrap();
        let table = read_table(require_sheet(&reread, "t").unwrap());
        assert_eq!(table.rows[0][0], CellValue::text("changed"));
    }

    #[test]
    fn test_stage_leaves_no_stray_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = WorkbookFile::new(dir.path().join("w.xlsx"));
        file.create_if_missing(&["t"]).unwrap();
        drop(file.stage(&file.snapshot().unwrap()).unwrap());
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
