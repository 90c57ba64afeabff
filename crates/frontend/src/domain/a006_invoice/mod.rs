pub mod api;
pub mod filter;

pub use filter::{InvoiceFilter, InvoiceFilterAction};
