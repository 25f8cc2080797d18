//! Background worker that runs gateway calls off the UI thread.
//!
//! One thread owns the [`SolverGateway`] and serves requests in order. Each
//! request carries a oneshot responder; flows await the matching receiver.
//! A flow that is cancelled drops its receiver and the worker discards the
//! response when it eventually arrives.

use std::{
    sync::{Arc, mpsc},
    thread,
};

use futures_channel::oneshot;
use mazetrace_core::{Grid, MazeSize, SolveRequest, Trace};
use mazetrace_gateway::{GatewayError, SolverGateway};

pub(crate) type Responder<T> = oneshot::Sender<T>;

/// A request that can be offloaded to the worker.
///
/// Internal: prefer the typed helpers on [`Worker`].
#[derive(Debug, Clone)]
enum WorkRequest {
    /// Fetch a fresh maze.
    GenerateMaze(MazeSize),
    /// Run a search over a maze.
    SolveMaze(SolveRequest),
}

/// A response produced by the worker.
#[derive(Debug, Clone)]
enum WorkResponse {
    MazeReady(Grid),
    TraceReady(Trace),
    Error(WorkError),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WorkError {
    /// The gateway call failed.
    #[display("{_0}")]
    Gateway(GatewayError),
    /// The worker thread could not be started.
    #[display("failed to start worker thread: {message}")]
    SpawnFailed { message: String },
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
    /// Received a response that does not match the request.
    #[display("unexpected worker response")]
    UnexpectedResponse,
}

impl WorkRequest {
    /// Handle a request and produce the corresponding response.
    fn handle(self, gateway: &dyn SolverGateway) -> WorkResponse {
        let result = match self {
            WorkRequest::GenerateMaze(size) => gateway.generate(size).map(WorkResponse::MazeReady),
            WorkRequest::SolveMaze(request) => gateway.solve(&request).map(WorkResponse::TraceReady),
        };
        result.unwrap_or_else(|err| WorkResponse::Error(WorkError::Gateway(err)))
    }
}

struct WorkEnvelope {
    request: WorkRequest,
    responder: Responder<WorkResponse>,
}

/// Handle to the worker thread.
///
/// Cloning shares the same thread. The thread exits once every handle is
/// dropped.
#[derive(Clone)]
pub(crate) struct Worker {
    sender: mpsc::Sender<WorkEnvelope>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").finish_non_exhaustive()
    }
}

impl Worker {
    /// Starts the worker thread serving requests through `gateway`.
    pub(crate) fn spawn(gateway: Arc<dyn SolverGateway>) -> Result<Self, WorkError> {
        let (sender, receiver) = mpsc::channel::<WorkEnvelope>();
        thread::Builder::new()
            .name("mazetrace-worker".to_owned())
            .spawn(move || {
                while let Ok(envelope) = receiver.recv() {
                    let response = envelope.request.handle(gateway.as_ref());
                    if envelope.responder.send(response).is_err() {
                        log::debug!("discarding response of a cancelled request");
                    }
                }
            })
            .map_err(|err| WorkError::SpawnFailed {
                message: err.to_string(),
            })?;
        Ok(Self { sender })
    }

    async fn request(&self, request: WorkRequest) -> WorkResponse {
        let (responder, receiver) = oneshot::channel();
        if self
            .sender
            .send(WorkEnvelope { request, responder })
            .is_err()
        {
            return WorkResponse::Error(WorkError::WorkerDisconnected);
        }
        receiver
            .await
            .unwrap_or(WorkResponse::Error(WorkError::WorkerDisconnected))
    }

    /// Fetch a maze of side `size`.
    pub(crate) async fn generate_maze(&self, size: MazeSize) -> Result<Grid, WorkError> {
        match self.request(WorkRequest::GenerateMaze(size)).await {
            WorkResponse::MazeReady(grid) => Ok(grid),
            WorkResponse::Error(err) => Err(err),
            WorkResponse::TraceReady(_) => Err(WorkError::UnexpectedResponse),
        }
    }

    /// Run the search described by `request`.
    pub(crate) async fn solve_maze(&self, request: SolveRequest) -> Result<Trace, WorkError> {
        match self.request(WorkRequest::SolveMaze(request)).await {
            WorkResponse::TraceReady(trace) => Ok(trace),
            WorkResponse::Error(err) => Err(err),
            WorkResponse::MazeReady(_) => Err(WorkError::UnexpectedResponse),
        }
    }
}
