//! GitHub Actions runner integration
//!
//! - [`event`]: reading the triggering event payload
//! - [`outputs`]: publishing step outputs

pub mod event;
pub mod outputs;

pub use event::{EventPayload, event_pull_request_number, load_event};
pub use outputs::OutputWriter;
