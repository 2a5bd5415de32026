//! millstore_tables - storage-free table algorithms for the warehouse workbook.
//!
//! - [`CellValue`], [`Table`] - loosely typed sheet cells and header + rows tables
//! - [`Position`] - `"<col>-<row>"` addressing of the bin map
//! - [`codec`] - one bin record packed into one cell
//! - [`lookup`] - deduplicated dropdown vocabularies
//! - [`reference`] - header-bound reference tables and prefix search

pub mod cell;
pub mod codec;
pub mod error;
pub mod lookup;
pub mod position;
pub mod reference;

pub use cell::{CellValue, Table};
pub use codec::{BinRecord, decode, encode};
pub use error::{Result, TableError};
pub use lookup::{LookupTable, extract_keyed, extract_unkeyed};
pub use position::{MAX_COL, MAX_ROW, Position};
pub use reference::{
    BoundSchema, CUSTOMER_SCHEMA, Customer, CustomerQuery, GOODS_SCHEMA, Goods, ReferenceEntity,
    ReferenceSchema, filter,
};
