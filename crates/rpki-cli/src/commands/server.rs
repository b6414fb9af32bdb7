//! Server command implementation
//!
//! `rpki server` shows every validator session; `rpki server <ip> <op>`
//! resets, soft-resets or enables one of them.

use std::io::Write;
use std::net::IpAddr;

use futures::TryStreamExt;

use rpki_core::ipc::{ControlRequest, Operation, UnknownOperation};
use rpki_core::time::current_time_secs;
use rpki_core::RpkiApi;

use crate::error::{CliError, UsageError};
use crate::output::{format_session_header, format_session_row};

/// What a `server` invocation asks for, decided from its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerInvocation<'a> {
    /// No arguments: show all sessions
    Show,
    /// `<address> <operation>`, not yet validated
    Control { address: &'a str, operation: &'a str },
    /// Any other argument count
    Invalid,
}

impl<'a> ServerInvocation<'a> {
    pub fn classify(args: &'a [String]) -> Self {
        match args {
            [] => Self::Show,
            [address, operation] => Self::Control { address, operation },
            _ => Self::Invalid,
        }
    }
}

/// Validate the target address and operation token
///
/// The address is sent in its canonical form, not as typed.
pub fn parse_control_request(address: &str, operation: &str) -> Result<ControlRequest, UsageError> {
    let ip: IpAddr = address
        .parse()
        .map_err(|_| UsageError::InvalidAddress(address.to_string()))?;
    let operation: Operation = operation
        .parse()
        .map_err(|UnknownOperation(token)| UsageError::UnknownOperation(token))?;

    Ok(ControlRequest::new(operation, ip.to_string()))
}

/// Execute the server command
pub async fn server_command<W: Write>(
    api: &dyn RpkiApi,
    args: &[String],
    out: &mut W,
) -> Result<(), CliError> {
    match ServerInvocation::classify(args) {
        ServerInvocation::Show => show_sessions(api, out, current_time_secs()).await,
        ServerInvocation::Control { address, operation } => {
            let request = parse_control_request(address, operation)?;
            tracing::debug!(
                operation = %request.operation,
                address = %request.address,
                port = request.port,
                "Applying control operation"
            );
            api.apply_control_operation(request).await?;
            Ok(())
        }
        ServerInvocation::Invalid => Err(UsageError::ServerArgs.into()),
    }
}

/// Stream every session and print it as a table row
///
/// Rows are written as they arrive. A stream error stops the table and is
/// returned; rows already written stay.
pub async fn show_sessions<W: Write>(
    api: &dyn RpkiApi,
    out: &mut W,
    now: i64,
) -> Result<(), CliError> {
    let mut stream = api.list_session_status().await?;

    writeln!(out, "{}", format_session_header())?;
    while let Some(status) = stream.try_next().await? {
        writeln!(out, "{}", format_session_row(&status, now))?;
    }

    Ok(())
}
