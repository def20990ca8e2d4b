//! `tiny_http` server adapter
//!
//! Owns the listening socket and worker threads. Each request gets a request
//! id, passes the rate limiter, is routed, and produces one access-log line.

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};
use uuid::Uuid;

use crate::api::ApiError;
use crate::config::ServerConfig;

use super::router::{AppState, Reply, route};

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// How often idle workers check for shutdown
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Longest client-supplied request id that is echoed back
const MAX_REQUEST_ID_LEN: usize = 128;

/// A running server
///
/// Dropping the handle leaves the workers running; call [`shutdown`] or
/// [`join`].
///
/// [`shutdown`]: ServerHandle::shutdown
/// [`join`]: ServerHandle::join
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    stop: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl ServerHandle {
    /// The bound address (useful when binding port 0)
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Whether every worker has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.workers.iter().all(JoinHandle::is_finished)
    }

    /// Stop accepting requests and wait for workers to finish
    pub fn shutdown(self) {
        info!("Server shutting down...");
        self.stop.store(true, Ordering::SeqCst);
        self.join();
    }

    /// Wait for all workers to exit
    pub fn join(self) {
        for worker in self.workers {
            if worker.join().is_err() {
                error!("Server worker panicked");
            }
        }
        info!("Server exiting");
    }
}

/// Bind the listener and start worker threads
pub fn start(config: &ServerConfig, state: AppState) -> anyhow::Result<ServerHandle> {
    let address = config.address();
    info!("Binding to {address}");

    let server =
        Server::http(&address).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| anyhow::anyhow!("Server is not listening on an IP address"))?;

    let server = Arc::new(server);
    let state = Arc::new(state);
    let stop = Arc::new(AtomicBool::new(false));

    let workers = (0..config.workers.max(1))
        .map(|n| {
            let server = Arc::clone(&server);
            let state = Arc::clone(&state);
            let stop = Arc::clone(&stop);
            thread::Builder::new()
                .name(format!("receipt-worker-{n}"))
                .spawn(move || worker_loop(&server, &state, &stop))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("Server running on {addr} with {} worker(s)", workers.len());
    Ok(ServerHandle {
        addr,
        stop,
        workers,
    })
}

fn worker_loop(server: &Server, state: &AppState, stop: &AtomicBool) {
    while !stop.load(Ordering::SeqCst) {
        match server.recv_timeout(POLL_INTERVAL) {
            Ok(Some(request)) => handle_request(state, request),
            Ok(None) => {},
            Err(e) => {
                error!("Failed to receive request: {e}");
                break;
            },
        }
    }
    debug!("Worker {:?} stopped", thread::current().name());
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

fn handle_request(state: &AppState, mut request: Request) {
    let started = Instant::now();
    let request_id = request_id(&request);
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = if state.admit(&url) {
        route(state, &method, &url, request.as_reader())
    } else {
        warn!("[{request_id}] Too many requests");
        Reply::error(&ApiError::too_many_requests(
            "too many requests please try again later",
        ))
    };

    let status = reply.status;
    if let Err(e) = request.respond(into_response(reply, &request_id)) {
        warn!("[{request_id}] Failed to send response: {e}");
    }

    info!(
        "[{request_id}] {method} {url} {status} {:.3}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
}

/// Reuse a sane client request id, otherwise mint one
fn request_id(request: &Request) -> String {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(REQUEST_ID_HEADER))
        .map(|h| h.value.as_str().trim().to_string())
        .filter(|id| is_acceptable_request_id(id))
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn is_acceptable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn into_response(reply: Reply, request_id: &str) -> Response<Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    if let Ok(header) = Header::from_bytes(REQUEST_ID_HEADER, request_id) {
        response.add_header(header);
    }
    response
}
