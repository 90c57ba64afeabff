pub mod aggregate;

pub use aggregate::{
    Invoice, InvoiceCancelRequest, InvoiceId, InvoiceKind, InvoiceListQuery, InvoiceRequest,
    InvoiceStatus,
};
