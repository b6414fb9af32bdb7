//! CLI command implementations

mod server;
mod table;

#[cfg(test)]
mod fake;

pub use server::{parse_control_request, server_command, show_sessions, ServerInvocation};
pub use table::table_command;
