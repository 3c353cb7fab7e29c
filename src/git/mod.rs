//! Git operations using system git commands for maximum compatibility
//!
//! - [`status`]: working tree inspection
//!   - `changed_paths()` - Paths that differ from the committed state
//!   - `has_changes()` - Whether any such path exists
//!   - `diff_stat()` - Short summary of tracked changes for logs

pub mod status;

pub use status::{changed_paths, diff_stat, has_changes};
