pub mod aggregate;
pub mod movement_type;

pub use aggregate::{
    StockAdjustmentRequest, StockEntryRequest, StockExitRequest, StockMovement, StockMovementId,
    StockMovementListQuery,
};
pub use movement_type::{MovementSign, MovementType};
