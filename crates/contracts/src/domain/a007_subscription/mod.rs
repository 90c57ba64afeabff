pub mod aggregate;
pub mod billing_invoice;

pub use aggregate::{
    monthly_recurring_revenue, Periodicity, Subscription, SubscriptionId, SubscriptionListQuery,
    SubscriptionRequest, SubscriptionStatus,
};
pub use billing_invoice::{BillingInvoice, BillingInvoiceId, BillingInvoiceStatus};
