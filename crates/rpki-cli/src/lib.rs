//! rpki-cli: Command-line interface for RPKI validator sessions
//!
//! Provides the `rpki` CLI for showing validator session health and the
//! ROA table, and for resetting or enabling validator sessions on a
//! running BGP daemon.

pub mod commands;
pub mod error;
pub mod ipc;
pub mod output;
