//! rpki-core: Core abstractions and configuration for the rpki CLI
//!
//! This crate provides the wire protocol spoken with the BGP daemon's API,
//! the route family selector, the collaborator trait the command handlers
//! are written against, and shared configuration and error types.

pub mod config;
pub mod error;
pub mod family;
pub mod ipc;
pub mod time;
pub mod traits;

pub use error::{ClientError, ConfigError, FamilyError};
pub use family::{Afi, RouteFamily, Safi};
pub use traits::{RecordStream, RpkiApi};
