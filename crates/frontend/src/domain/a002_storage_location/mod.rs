pub mod api;
pub mod filter;
pub mod tree;

pub use filter::{StorageLocationFilter, StorageLocationFilterAction};
pub use tree::{build_tree, eligible_parents, filter_tree, TreeNode};
