//! millstore-core - the warehouse workbook store.
//!
//! One xlsx file holds the bin map, the intake ledger, the customer and goods
//! tables and the dropdown vocabularies. [`Store`] is the only entry point the
//! boundary layer needs.

pub mod config;
pub mod error;
pub mod grid;
pub mod ledger;
pub mod store;
pub mod workbook;

pub use config::{SheetNames, StoreConfig};
pub use error::{Result, StoreError};
pub use grid::BinEntry;
pub use ledger::IntakeTransaction;
pub use store::{
    BinMapResponse, ErrorResponse, IntakeForm, SALES_VOCABULARY, SalesLookupsResponse, Store,
    SubmitResponse,
};

pub use millstore_tables::{Customer, CustomerQuery, Goods, LookupTable, Position};
