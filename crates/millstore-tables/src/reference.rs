//! Reference tables (customers, goods) and prefix search over them.
//!
//! A [`ReferenceSchema`] is a fixed list of header labels, one per field. It is
//! bound against a table's header row once, when the table is opened; headers
//! that cannot be found are reported in [`BoundSchema::missing`] and the field
//! reads as empty on every row.

use crate::cell::{CellValue, Table};
use serde::Serialize;

/// Header labels, in field order.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceSchema {
    pub headers: &'static [&'static str],
}

pub const CUSTOMER_ID: usize = 0;
pub const CUSTOMER_NAME: usize = 1;
pub const CUSTOMER_PHONE: usize = 2;
pub const CUSTOMER_ADDRESS: usize = 3;

pub const CUSTOMER_SCHEMA: ReferenceSchema = ReferenceSchema {
    headers: &["客戶編號", "客戶名稱", "客戶電話", "送貨地址"],
};

pub const GOODS_NAME: usize = 0;
pub const GOODS_SPEC: usize = 1;
pub const GOODS_STOCK: usize = 2;

pub const GOODS_SCHEMA: ReferenceSchema = ReferenceSchema {
    headers: &["品名", "規格", "庫存"],
};

/// A schema resolved against one header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundSchema {
    /// Column index per field; None when the header is absent.
    pub columns: Vec<Option<usize>>,
    /// Header labels that were not found.
    pub missing: Vec<&'static str>,
}

impl ReferenceSchema {
    pub fn bind(&self, header: &[CellValue]) -> BoundSchema {
        let labels: Vec<String> = header.iter().map(CellValue::to_trimmed).collect();
        let mut columns = Vec::with_capacity(self.headers.len());
        let mut missing = Vec::new();
        for &wanted in self.headers {
            let col = labels.iter().position(|l| l == wanted);
            if col.is_none() {
                missing.push(wanted);
            }
            columns.push(col);
        }
        BoundSchema { columns, missing }
    }
}

/// One row of a reference table, as trimmed strings in schema field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub fields: Vec<String>,
}

impl ReferenceEntity {
    pub fn get(&self, field: usize) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }
}

impl BoundSchema {
    /// Turn every data row into an entity. Rows are kept even when blank.
    pub fn scan(&self, table: &Table) -> Vec<ReferenceEntity> {
        table
            .data_rows()
            .iter()
            .map(|row| ReferenceEntity {
                fields: self
                    .columns
                    .iter()
                    .map(|col| {
                        col.and_then(|c| row.get(c))
                            .map(CellValue::to_trimmed)
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Keep the entities where at least one non-empty query prefixes its field.
///
/// Queries are `(field, prefix)` pairs checked in the order given. Both sides
/// are trimmed and lower-cased. If every query is empty nothing matches.
pub fn filter<'a>(
    entities: &'a [ReferenceEntity],
    queries: &[(usize, &str)],
) -> Vec<&'a ReferenceEntity> {
    let queries: Vec<(usize, String)> = queries
        .iter()
        .map(|(field, q)| (*field, q.trim().to_lowercase()))
        .filter(|(_, q)| !q.is_empty())
        .collect();
    if queries.is_empty() {
        return Vec::new();
    }

    entities
        .iter()
        .filter(|entity| {
            queries.iter().any(|(field, prefix)| {
                let value = entity.get(*field).trim().to_lowercase();
                !value.is_empty() && value.starts_with(prefix.as_str())
            })
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl From<&ReferenceEntity> for Customer {
    fn from(e: &ReferenceEntity) -> Self {
        Customer {
            id: e.get(CUSTOMER_ID).to_string(),
            name: e.get(CUSTOMER_NAME).to_string(),
            phone: e.get(CUSTOMER_PHONE).to_string(),
            address: e.get(CUSTOMER_ADDRESS).to_string(),
        }
    }
}

/// Prefix queries for customer search. Any of them may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerQuery {
    pub fn is_blank(&self) -> bool {
        self.prefixes().iter().all(|(_, q)| q.trim().is_empty())
    }

    /// The queries in match priority order.
    pub fn prefixes(&self) -> [(usize, &str); 4] {
        [
            (CUSTOMER_ID, self.id.as_str()),
            (CUSTOMER_NAME, self.name.as_str()),
            (CUSTOMER_PHONE, self.phone.as_str()),
            (CUSTOMER_ADDRESS, self.address.as_str()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Goods {
    pub name: String,
    pub spec: String,
    pub stock: String,
}

impl From<&ReferenceEntity> for Goods {
    fn from(e: &ReferenceEntity) -> Self {
        Goods {
            name: e.get(GOODS_NAME).to_string(),
            spec: e.get(GOODS_SPEC).to_string(),
            stock: e.get(GOODS_STOCK).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Table {
        Table::new(vec![
            vec!["客戶編號".into(), "客戶名稱".into(), "客戶電話".into(), "送貨地址".into()],
            vec!["C100".into(), "Acme Corp".into(), "555".into(), "1 Main St".into()],
            vec!["C200".into(), " beta ltd ".into(), CellValue::Number(5551234.0), "2 Side Rd".into()],
            vec![CellValue::Empty, CellValue::Empty],
        ])
    }

    fn search(query: &CustomerQuery) -> Vec<Customer> {
        let table = customers();
        let entities = CUSTOMER_SCHEMA.bind(table.header()).scan(&table);
        filter(&entities, &query.prefixes())
            .into_iter()
            .map(Customer::from)
            .collect()
    }

    #[test]
    fn test_scan_keeps_blank_rows() {
        let table = customers();
        let bound = CUSTOMER_SCHEMA.bind(table.header());
        assert!(bound.missing.is_empty());
        let entities = bound.scan(&table);
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[1].get(CUSTOMER_NAME), "beta ltd");
        assert_eq!(entities[1].get(CUSTOMER_PHONE), "5551234");
        assert_eq!(entities[2].fields, vec!["", "", "", ""]);
    }

    #[test]
    fn test_case_insensitive_prefix_match() {
        let query = CustomerQuery {
            name: "acme".into(),
            ..Default::default()
        };
        let found = search(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0],
            Customer {
                id: "C100".into(),
                name: "Acme Corp".into(),
                phone: "555".into(),
                address: "1 Main St".into(),
            }
        );
    }

    #[test]
    fn test_prefix_not_substring() {
        let query = CustomerQuery {
            name: "cme".into(),
            ..Default::default()
        };
        assert!(search(&query).is_empty());
    }

    #[test]
    fn test_any_field_matches() {
        let query = CustomerQuery {
            id: "zzz".into(),
            phone: "555".into(),
            ..Default::default()
        };
        let ids: Vec<String> = search(&query).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["C100", "C200"]);
    }

    #[test]
    fn test_all_empty_queries_match_nothing() {
        let query = CustomerQuery {
            id: "  ".into(),
            ..Default::default()
        };
        assert!(query.is_blank());
        assert!(search(&query).is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = CustomerQuery {
            address: "  2 SIDE ".into(),
            ..Default::default()
        };
        let found = search(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "C200");
    }

    #[test]
    fn test_missing_header_reads_empty() {
        let table = Table::new(vec![
            vec!["品名".into(), "庫存".into()],
            vec!["糙米".into(), CellValue::Number(12.0)],
        ]);
        let bound = GOODS_SCHEMA.bind(table.header());
        assert_eq!(bound.missing, vec!["規格"]);
        let goods: Vec<Goods> = bound.scan(&table).iter().map(Goods::from).collect();
        assert_eq!(
            goods,
            vec![Goods {
                name: "糙米".into(),
                spec: String::new(),
                stock: "12".into(),
            }]
        );
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let table = Table::new(vec![
            vec!["品名".into(), "規格".into(), "庫存".into()],
            vec!["白米".into()],
        ]);
        let entities = GOODS_SCHEMA.bind(table.header()).scan(&table);
        assert_eq!(entities[0].fields, vec!["白米", "", ""]);
    }
}
