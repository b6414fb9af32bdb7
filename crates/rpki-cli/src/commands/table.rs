//! Table command implementation

use std::io::Write;

use futures::TryStreamExt;

use rpki_core::{RouteFamily, RpkiApi};

use crate::error::{CliError, UsageError};
use crate::output::RoaLayout;

/// Execute the table command
///
/// The optional `address` is passed to the daemon as a scoping hint and also
/// applied here: only ROAs whose server address equals it exactly are printed.
pub async fn table_command<W: Write>(
    api: &dyn RpkiApi,
    address: Option<&str>,
    family: &str,
    out: &mut W,
) -> Result<(), CliError> {
    let family = RouteFamily::resolve(family, RouteFamily::UNSPECIFIED).map_err(UsageError::from)?;
    tracing::debug!(%family, ?address, "Listing ROA table");

    let mut stream = api.list_roa(family, address).await?;

    let layout = RoaLayout::for_family(family);
    writeln!(out, "{}", layout.header())?;
    while let Some(roa) = stream.try_next().await? {
        if address.is_some_and(|filter| filter != roa.server_address) {
            continue;
        }
        writeln!(out, "{}", layout.row(&roa))?;
    }

    Ok(())
}
