//! RPKI API trait

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::ClientError;
use crate::family::RouteFamily;
use crate::ipc::{ControlRequest, RoaEntry, SessionStatus};

/// A finite stream of records.
///
/// The stream ends (`None`) on the end-of-stream signal. An `Err` item is
/// terminal: nothing follows it.
pub type RecordStream<T> = BoxStream<'static, Result<T, ClientError>>;

/// Abstraction over the daemon's RPKI API
#[async_trait]
pub trait RpkiApi: Send + Sync {
    /// Stream the status of all validator sessions
    async fn list_session_status(&self) -> Result<RecordStream<SessionStatus>, ClientError>;

    /// Stream ROA entries for `family`, scoped server-side by `name` if given
    async fn list_roa(
        &self,
        family: RouteFamily,
        name: Option<&str>,
    ) -> Result<RecordStream<RoaEntry>, ClientError>;

    /// Apply a control operation to a validator session
    async fn apply_control_operation(&self, request: ControlRequest) -> Result<(), ClientError>;
}
