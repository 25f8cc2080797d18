use mazetrace_core::{MazeSize, SolveRequest};
use mazetrace_replay::{Failure, RequestId, RequestKind};

use super::{FlowExecutor, FlowHandle, helpers::with_spinner};
use crate::{
    action::{MazeAction, SpinnerKind},
    worker::Worker,
};

/// Spawn a flow that fetches a maze for request `id`.
pub(crate) fn spawn_generate_flow(
    executor: &mut FlowExecutor,
    worker: &Worker,
    id: RequestId,
    size: MazeSize,
) {
    let handle = executor.handle();
    executor.spawn(generate_flow(handle, worker.clone(), id, size));
}

async fn generate_flow(handle: FlowHandle, worker: Worker, id: RequestId, size: MazeSize) {
    let work = worker.generate_maze(size);
    let result = with_spinner(&handle, SpinnerKind::GenerateMaze, work)
        .await
        .map_err(|err| Failure::transport(RequestKind::Generate, err));
    handle.request_action(MazeAction::ApplyGenerated { id, result }.into());
}

/// Spawn a flow that runs the search for request `id`.
pub(crate) fn spawn_solve_flow(
    executor: &mut FlowExecutor,
    worker: &Worker,
    id: RequestId,
    request: SolveRequest,
) {
    let handle = executor.handle();
    executor.spawn(solve_flow(handle, worker.clone(), id, request));
}

async fn solve_flow(handle: FlowHandle, worker: Worker, id: RequestId, request: SolveRequest) {
    let work = worker.solve_maze(request);
    let result = with_spinner(&handle, SpinnerKind::SolveMaze, work)
        .await
        .map_err(|err| Failure::transport(RequestKind::Solve, err));
    handle.request_action(MazeAction::ApplySolved { id, result }.into());
}
