pub mod aggregate;

pub use aggregate::{
    StorageLocation, StorageLocationId, StorageLocationListQuery, StorageLocationRequest,
    StorageLocationSummary, StorageLocationType,
};
