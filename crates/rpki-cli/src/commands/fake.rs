//! In-memory RPKI API used by the command tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::StreamExt;

use rpki_core::ipc::{ControlRequest, RoaEntry, SessionStatus};
use rpki_core::{ClientError, RecordStream, RouteFamily, RpkiApi};

#[derive(Default)]
pub(crate) struct FakeApi {
    sessions: Vec<SessionStatus>,
    roas: Vec<RoaEntry>,
    /// Yield this many records, then a remote error
    fail_after: Option<(usize, String)>,
    /// Fail every call before any record is produced
    refuse: Option<String>,
    pub session_queries: AtomicUsize,
    pub roa_queries: Mutex<Vec<(RouteFamily, Option<String>)>>,
    pub control_calls: Mutex<Vec<ControlRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(mut self, sessions: Vec<SessionStatus>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_roas(mut self, roas: Vec<RoaEntry>) -> Self {
        self.roas = roas;
        self
    }

    pub fn failing_after(mut self, records: usize, message: &str) -> Self {
        self.fail_after = Some((records, message.to_string()));
        self
    }

    pub fn refusing(mut self, message: &str) -> Self {
        self.refuse = Some(message.to_string());
        self
    }

    pub fn total_calls(&self) -> usize {
        self.session_queries.load(Ordering::SeqCst)
            + self.roa_queries.lock().unwrap().len()
            + self.control_calls.lock().unwrap().len()
    }

    fn check_refused(&self) -> Result<(), ClientError> {
        match &self.refuse {
            Some(message) => Err(ClientError::Remote(message.clone())),
            None => Ok(()),
        }
    }

    fn records<T: Clone + Send + 'static>(&self, items: &[T]) -> RecordStream<T> {
        let mut out: Vec<Result<T, ClientError>> = items.iter().cloned().map(Ok).collect();
        if let Some((count, message)) = &self.fail_after {
            out.truncate(*count);
            out.push(Err(ClientError::Remote(message.clone())));
        }
        futures::stream::iter(out).boxed()
    }
}

#[async_trait]
impl RpkiApi for FakeApi {
    async fn list_session_status(&self) -> Result<RecordStream<SessionStatus>, ClientError> {
        self.session_queries.fetch_add(1, Ordering::SeqCst);
        self.check_refused()?;
        Ok(self.records(&self.sessions))
    }

    async fn list_roa(
        &self,
        family: RouteFamily,
        name: Option<&str>,
    ) -> Result<RecordStream<RoaEntry>, ClientError> {
        self.roa_queries
            .lock()
            .unwrap()
            .push((family, name.map(String::from)));
        self.check_refused()?;
        Ok(self.records(&self.roas))
    }

    async fn apply_control_operation(&self, request: ControlRequest) -> Result<(), ClientError> {
        self.control_calls.lock().unwrap().push(request);
        self.check_refused()
    }
}

pub(crate) fn session(address: &str, uptime: i64, v4: u64, v6: u64) -> SessionStatus {
    SessionStatus {
        address: address.to_string(),
        uptime,
        received_ipv4: v4,
        received_ipv6: v6,
    }
}

pub(crate) fn roa(prefix: &str, prefix_len: u8, max_len: u8, asn: u32, server: &str) -> RoaEntry {
    RoaEntry {
        prefix: prefix.to_string(),
        prefix_len,
        max_len,
        asn,
        server_address: server.to_string(),
        server_port: 323,
    }
}
