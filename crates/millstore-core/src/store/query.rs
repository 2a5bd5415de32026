use super::{BinMapResponse, SalesLookupsResponse, Store};
use crate::error::{Result, StoreError};
use crate::grid;
use crate::ledger;
use crate::workbook::{read_table, require_sheet};
use millstore_tables::{
    BoundSchema, CUSTOMER_SCHEMA, Customer, CustomerQuery, GOODS_SCHEMA, Goods, LookupTable,
    ReferenceSchema, Table, extract_keyed, extract_unkeyed, filter,
};
use tracing::{debug, warn};

/// Sales page dropdown headers and the keys they are reported under.
pub const SALES_VOCABULARY: &[(&str, &str)] = &[
    ("計價單位", "pricingUnits"),
    ("銷售方式", "salesMethods"),
    ("製單人員", "creatorNames"),
    ("送貨員", "deliveryPeople"),
    ("車號", "carNumbers"),
];

/// Bind a reference schema, reporting every absent header. The fields of
/// absent headers read as empty.
fn bind_reference(sheet: &str, schema: &ReferenceSchema, table: &Table) -> BoundSchema {
    let bound = schema.bind(table.header());
    for header in &bound.missing {
        let err = StoreError::MissingField {
            table: sheet.to_string(),
            header: header.to_string(),
        };
        warn!(kind = err.kind(), "{err}");
    }
    bound
}

impl Store {
    /// Dropdown options plus the full bin map.
    pub fn get_bin_map(&self) -> Result<BinMapResponse> {
        let book = self.file.snapshot()?;
        let options = require_sheet(&book, &self.sheets.options)?;
        let map = require_sheet(&book, &self.sheets.map)?;

        let dropdown_options = extract_unkeyed(&read_table(options));
        let bin_map_data = grid::read_all(map);
        debug!(
            bins = bin_map_data.len(),
            dropdowns = dropdown_options.len(),
            "bin map read"
        );
        Ok(BinMapResponse {
            dropdown_options,
            bin_map_data,
        })
    }

    /// The generic dropdown options alone, keyed by header text.
    pub fn get_dropdown_options(&self) -> Result<LookupTable> {
        let book = self.file.snapshot()?;
        let options = require_sheet(&book, &self.sheets.options)?;
        Ok(extract_unkeyed(&read_table(options)))
    }

    /// The sales page vocabulary, keyed by [`SALES_VOCABULARY`].
    pub fn get_sales_lookups(&self) -> Result<SalesLookupsResponse> {
        let book = self.file.snapshot()?;
        let sheet = require_sheet(&book, &self.sheets.sales_options)?;
        let lookup_data = extract_keyed(&read_table(sheet), SALES_VOCABULARY);
        debug!(keys = lookup_data.len(), "sales lookups read");
        Ok(SalesLookupsResponse { lookup_data })
    }

    /// Customers whose id, name, phone or address starts with the matching
    /// query. An all-blank query returns nothing without reading the file.
    pub fn search_customers(&self, query: &CustomerQuery) -> Result<Vec<Customer>> {
        if query.is_blank() {
            return Ok(Vec::new());
        }
        let book = self.file.snapshot()?;
        let sheet = require_sheet(&book, &self.sheets.customers)?;
        let table = read_table(sheet);
        let entities = bind_reference(&self.sheets.customers, &CUSTOMER_SCHEMA, &table).scan(&table);
        let found: Vec<Customer> = filter(&entities, &query.prefixes())
            .into_iter()
            .map(Customer::from)
            .collect();
        debug!(scanned = entities.len(), matched = found.len(), "customer search");
        Ok(found)
    }

    /// Every goods row, blank rows included.
    pub fn get_goods(&self) -> Result<Vec<Goods>> {
        let book = self.file.snapshot()?;
        let sheet = require_sheet(&book, &self.sheets.goods)?;
        let table = read_table(sheet);
        let goods: Vec<Goods> = bind_reference(&self.sheets.goods, &GOODS_SCHEMA, &table)
            .scan(&table)
            .iter()
            .map(Goods::from)
            .collect();
        Ok(goods)
    }

    /// The intake ledger as display strings, oldest first.
    pub fn ledger_rows(&self) -> Result<Vec<Vec<String>>> {
        let book = self.file.snapshot()?;
        let sheet = require_sheet(&book, &self.sheets.ledger)?;
        Ok(ledger::rows(sheet))
    }
}
