//! Core non-UI logic split into modular submodules.

pub mod filter;
pub mod selection;
pub mod sort;

// Re-export public APIs to preserve existing import paths (crate::logic::...)
pub use filter::{filter_by_status, matches_status};
pub use selection::{move_selection, restore_selection};
pub use sort::sort_by_views;
