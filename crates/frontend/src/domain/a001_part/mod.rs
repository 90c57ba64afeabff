pub mod api;
pub mod filter;

pub use filter::{PartFilter, PartFilterAction, PartQuickFilter};
