pub mod api;
pub mod filter;

pub use filter::{SupplierFilter, SupplierFilterAction, SupplierQuickFilter};
