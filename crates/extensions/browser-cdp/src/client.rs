//! CDP WebSocket client.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, trace, warn};

use crate::discovery::CdpEndpoint;
use crate::error::CdpError;
use crate::protocol::{AttachedTarget, CdpRequest, CdpResponse};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;
type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Value, CdpError>>>>>;

/// Browser-level CDP connection.
///
/// Commands are matched to their answers by request id. Events are not
/// consumed and are dropped on arrival.
pub struct CdpClient {
    endpoint: CdpEndpoint,
    ws_tx: tokio::sync::Mutex<WsSink>,
    request_id: AtomicU64,
    pending: PendingMap,
    timeout: Duration,
    recv_task: tokio::task::JoinHandle<()>,
}

impl CdpClient {
    /// Connect to the browser WebSocket advertised by `endpoint`.
    pub async fn connect(endpoint: CdpEndpoint, timeout: Duration) -> Result<Self, CdpError> {
        let version = endpoint.version().await?;
        debug!("Connected to browser: {}", version.browser);

        let (ws_stream, _) = tokio_tungstenite::connect_async(&version.web_socket_debugger_url)
            .await
            .map_err(|e| CdpError::ConnectionFailed(format!("WebSocket: {}", e)))?;

        let (ws_sink, ws_source) = ws_stream.split();
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let recv_task = tokio::spawn(Self::receive_loop(ws_source, pending.clone()));

        debug!("CDP client connected to {}", version.web_socket_debugger_url);

        Ok(Self {
            endpoint,
            ws_tx: tokio::sync::Mutex::new(ws_sink),
            request_id: AtomicU64::new(1),
            pending,
            timeout,
            recv_task,
        })
    }

    pub fn endpoint(&self) -> &CdpEndpoint {
        &self.endpoint
    }

    async fn receive_loop(mut ws_source: WsSource, pending: PendingMap) {
        while let Some(msg) = ws_source.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    trace!("CDP recv: {}", text);
                    match serde_json::from_str::<CdpResponse>(&text) {
                        Ok(resp) => Self::dispatch(resp, &pending),
                        Err(e) => warn!("Failed to parse CDP message: {}", e),
                    }
                }
                Ok(Message::Close(_)) => {
                    debug!("WebSocket closed");
                    break;
                }
                Err(e) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }

        // Fail whatever is still waiting.
        pending.lock().clear();
    }

    fn dispatch(resp: CdpResponse, pending: &PendingMap) {
        let Some(id) = resp.id else {
            trace!("Ignoring CDP event {:?}", resp.method);
            return;
        };
        let Some(tx) = pending.lock().remove(&id) else {
            return;
        };

        let result = match resp.error {
            Some(error) => Err(CdpError::Protocol {
                code: error.code,
                message: error.message,
            }),
            None => Ok(resp.result.unwrap_or(Value::Null)),
        };
        let _ = tx.send(result);
    }

    /// Send a CDP command and wait for its result.
    pub async fn call(
        &self,
        method: &str,
        params: Option<Value>,
        session_id: Option<&str>,
    ) -> Result<Value, CdpError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);

        let request = CdpRequest {
            id,
            method: method.to_string(),
            params,
            session_id: session_id.map(|s| s.to_string()),
        };

        let json = serde_json::to_string(&request)?;
        trace!("CDP send: {}", json);

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(id, tx);

        {
            let mut ws = self.ws_tx.lock().await;
            if let Err(e) = ws.send(Message::Text(json.into())).await {
                self.pending.lock().remove(&id);
                return Err(e.into());
            }
        }

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(CdpError::SessionClosed),
            Err(_) => {
                self.pending.lock().remove(&id);
                Err(CdpError::Timeout(format!("Request {} timed out", method)))
            }
        }
    }

    /// Send a command and decode its result.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
        session_id: Option<&str>,
    ) -> Result<T, CdpError> {
        let result = self.call(method, Some(params), session_id).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Attach to a target and return the flat session id.
    pub async fn attach(&self, target_id: &str) -> Result<String, CdpError> {
        let attached: AttachedTarget = self
            .call_as(
                "Target.attachToTarget",
                json!({
                    "targetId": target_id,
                    "flatten": true
                }),
                None,
            )
            .await?;
        Ok(attached.session_id)
    }

    pub async fn detach(&self, session_id: &str) {
        let params = json!({ "sessionId": session_id });
        if let Err(e) = self.call("Target.detachFromTarget", Some(params), None).await {
            debug!("Detach from {} failed: {}", session_id, e);
        }
    }
}

impl Drop for CdpClient {
    fn drop(&mut self) {
        self.recv_task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_with(id: u64) -> (PendingMap, oneshot::Receiver<Result<Value, CdpError>>) {
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let (tx, rx) = oneshot::channel();
        pending.lock().insert(id, tx);
        (pending, rx)
    }

    fn response(json: &str) -> CdpResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_dispatch_result() {
        let (pending, mut rx) = pending_with(4);
        CdpClient::dispatch(response(r#"{"id": 4, "result": {"targetId": "T"}}"#), &pending);

        let result = rx.try_recv().unwrap().unwrap();
        assert_eq!(result["targetId"], "T");
        assert!(pending.lock().is_empty());
    }

    #[test]
    fn test_dispatch_error() {
        let (pending, mut rx) = pending_with(5);
        CdpClient::dispatch(
            response(r#"{"id": 5, "error": {"code": -32000, "message": "No such window"}}"#),
            &pending,
        );

        let result = rx.try_recv().unwrap();
        assert!(matches!(result, Err(CdpError::Protocol { code: -32000, .. })));
    }

    #[test]
    fn test_dispatch_empty_result_is_null() {
        let (pending, mut rx) = pending_with(6);
        CdpClient::dispatch(response(r#"{"id": 6}"#), &pending);
        assert_eq!(rx.try_recv().unwrap().unwrap(), Value::Null);
    }

    #[test]
    fn test_dispatch_ignores_events_and_unknown_ids() {
        let (pending, mut rx) = pending_with(1);
        CdpClient::dispatch(
            response(r#"{"method": "Target.targetCreated", "params": {}}"#),
            &pending,
        );
        CdpClient::dispatch(response(r#"{"id": 99, "result": {}}"#), &pending);

        assert!(rx.try_recv().is_err());
        assert_eq!(pending.lock().len(), 1);
    }
}
