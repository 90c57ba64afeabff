pub mod api_utils;
pub mod config;
pub mod errors;
pub mod filters;
pub mod list_state;
pub mod notifications;
pub mod query_cache;
pub mod state;
