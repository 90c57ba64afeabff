pub mod badge;
pub mod lifecycle;
pub mod page;
pub mod pagination;

pub use badge::{BadgeVariant, StatusDisplay};
pub use lifecycle::{ActiveState, Lifecycle, LifecycleAction, TransitionError};
pub use page::Page;
pub use pagination::{PageRequest, SortDirection, SortOrder};
