pub mod api;
pub mod filter;

pub use filter::{StockMovementFilter, StockMovementFilterAction};
