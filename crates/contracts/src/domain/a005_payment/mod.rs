pub mod aggregate;

pub use aggregate::{
    Payment, PaymentId, PaymentListQuery, PaymentMethod, PaymentRequest, PaymentStatus,
};
