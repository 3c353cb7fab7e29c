//! Utility modules for common functionality

pub mod exit_codes;
pub mod logger;

// Re-export commonly used items
pub use exit_codes::{describe_status, get_exit_code_description};
pub use logger::Logger;
