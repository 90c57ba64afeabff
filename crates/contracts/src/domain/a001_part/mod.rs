pub mod aggregate;
pub mod margin;
pub mod stock_status;

pub use aggregate::{DefineLocationRequest, Part, PartId, PartListQuery, PartRequest};
pub use margin::{margin_percent, MarginStatus};
pub use stock_status::StockStatus;
