//! Daemon API client
//!
//! Requests are written as a single JSON line. Unary calls read one
//! response line back; streamed calls hand the connection to a lazy
//! [`RecordStream`] that decodes one [`StreamFrame`] per line until the
//! daemon signals `end` or `error`.

use async_trait::async_trait;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::TcpStream;

use rpki_core::ipc::{ApiRequest, ApiResponse, ControlRequest, RoaEntry, SessionStatus, StreamFrame};
use rpki_core::{ClientError, RecordStream, RouteFamily, RpkiApi};

/// Client for the daemon's RPKI API
#[derive(Debug, Clone)]
pub struct DaemonClient {
    address: String,
}

impl DaemonClient {
    /// Create a client for the API at `address` (host:port)
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Get the address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Connect and send `request`, returning the read side of the connection
    async fn open(&self, request: &ApiRequest) -> Result<BufReader<OwnedReadHalf>, ClientError> {
        tracing::debug!("Connecting to daemon API at {}", self.address);

        let stream =
            TcpStream::connect(&self.address)
                .await
                .map_err(|source| ClientError::Connect {
                    address: self.address.clone(),
                    source,
                })?;
        let (reader, mut writer) = stream.into_split();

        let mut request_json = serde_json::to_string(request)?;
        request_json.push('\n');
        writer.write_all(request_json.as_bytes()).await?;
        writer.flush().await?;
        tracing::debug!(request = %request_json.trim_end(), "Sent request");

        Ok(BufReader::new(reader))
    }

    /// Send a unary request and read its response
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut reader = self.open(&request).await?;

        let mut response_line = String::new();
        if reader.read_line(&mut response_line).await? == 0 {
            return Err(ClientError::PrematureEnd);
        }

        Ok(serde_json::from_str(&response_line)?)
    }

    /// Send a streamed request and decode its frames lazily
    async fn stream<T>(&self, request: ApiRequest) -> Result<RecordStream<T>, ClientError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let reader = self.open(&request).await?;
        Ok(record_stream(reader.lines()))
    }
}

/// Turn a line reader into a stream of records.
///
/// `end` finishes the stream, `error` and transport failures yield one
/// terminal `Err`. A connection that closes without `end` is reported as
/// [`ClientError::PrematureEnd`].
fn record_stream<T>(lines: Lines<BufReader<OwnedReadHalf>>) -> RecordStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    futures::stream::unfold(Some(lines), |state| async move {
        let mut lines = state?;
        match lines.next_line().await {
            Ok(Some(line)) => match serde_json::from_str::<StreamFrame<T>>(&line) {
                Ok(StreamFrame::Record(record)) => Some((Ok(record), Some(lines))),
                Ok(StreamFrame::End) => None,
                Ok(StreamFrame::Error { message }) => Some((Err(ClientError::Remote(message)), None)),
                Err(e) => {
                    tracing::warn!("Malformed stream frame: {}", e);
                    Some((Err(ClientError::Decode(e)), None))
                }
            },
            Ok(None) => Some((Err(ClientError::PrematureEnd), None)),
            Err(e) => Some((Err(ClientError::Io(e)), None)),
        }
    })
    .boxed()
}

#[async_trait]
impl RpkiApi for DaemonClient {
    async fn list_session_status(&self) -> Result<RecordStream<SessionStatus>, ClientError> {
        self.stream(ApiRequest::ListSessionStatus).await
    }

    async fn list_roa(
        &self,
        family: RouteFamily,
        name: Option<&str>,
    ) -> Result<RecordStream<RoaEntry>, ClientError> {
        let request = ApiRequest::ListRoa {
            family,
            name: name.map(String::from),
        };
        self.stream(request).await
    }

    async fn apply_control_operation(&self, request: ControlRequest) -> Result<(), ClientError> {
        match self.call(ApiRequest::ApplyControlOperation(request)).await? {
            ApiResponse::Ok => Ok(()),
            ApiResponse::Error { message } => Err(ClientError::Remote(message)),
        }
    }
}
