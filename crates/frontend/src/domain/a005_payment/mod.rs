pub mod api;
pub mod filter;

pub use filter::{PaymentFilter, PaymentFilterAction, PaymentQuickFilter};
