//! Tipos e traits comuns a todos os agregados

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;
pub mod references;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use entity_metadata::EntityMetadata;
pub use references::{CustomerId, WorkOrderId};
