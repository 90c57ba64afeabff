pub mod a001_part;
pub mod a002_storage_location;
pub mod a003_stock_movement;
pub mod a004_supplier;
pub mod a005_payment;
pub mod a006_invoice;
pub mod a007_subscription;
