use crate::error::StoreError;
use crate::grid::BinEntry;
use millstore_tables::LookupTable;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinMapResponse {
    pub dropdown_options: LookupTable,
    pub bin_map_data: Vec<BinEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
}

impl SubmitResponse {
    pub fn success() -> Self {
        SubmitResponse { status: "success" }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLookupsResponse {
    pub lookup_data: LookupTable,
}

/// A failed operation as reported to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl From<&StoreError> for ErrorResponse {
    fn from(err: &StoreError) -> Self {
        ErrorResponse {
            status: "error",
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
