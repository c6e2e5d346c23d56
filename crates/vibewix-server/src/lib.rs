//! Local studio server for vibewix.
//!
//! Holds the brief being edited and re-derives its draft on every request.

pub mod handlers;
pub mod server;

pub use handlers::{DraftResponse, StudioState};
pub use server::{router, ServerError, StudioServer, StudioServerConfig};
