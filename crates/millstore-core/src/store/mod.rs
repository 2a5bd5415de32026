//! The store facade: the operations the boundary layer calls.

mod form;
mod query;
mod response;
mod state;
mod submit;

pub use form::IntakeForm;
pub use query::SALES_VOCABULARY;
pub use response::{BinMapResponse, ErrorResponse, SalesLookupsResponse, SubmitResponse};
pub use state::Store;
