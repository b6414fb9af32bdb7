//! Client for the daemon API
//!
//! Uses newline-delimited JSON over TCP. Every call opens its own
//! connection, so a single [`DaemonClient`] can be shared for the whole
//! process.

mod client;

pub use client::DaemonClient;

// Re-export protocol types from rpki_core
pub use rpki_core::ipc::{
    ApiRequest, ApiResponse, ControlRequest, Operation, RoaEntry, SessionStatus, StreamFrame,
    RPKI_CONTROL_PORT,
};
pub use rpki_core::{RecordStream, RpkiApi};
