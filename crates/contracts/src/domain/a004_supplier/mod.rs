pub mod aggregate;

pub use aggregate::{
    format_document, Address, Supplier, SupplierId, SupplierListQuery, SupplierRequest,
    SupplierType,
};
