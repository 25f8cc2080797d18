use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use portable_atomic::AtomicU64;

use crate::{
    action::{SpinnerId, SpinnerKind, UiAction},
    flow::FlowHandle,
};

#[must_use]
pub(super) fn with_spinner<F>(
    handle: &FlowHandle,
    kind: SpinnerKind,
    future: F,
) -> WithSpinnerFuture<F>
where
    F: Future,
{
    WithSpinnerFuture::new(handle.clone(), kind, future)
}

/// Awaitable wrapper that shows a spinner while the inner future runs.
pub(super) struct WithSpinnerFuture<F>
where
    F: Future,
{
    handle: FlowHandle,
    id: SpinnerId,
    kind: SpinnerKind,
    started: bool,
    stopped: bool,
    inner: Pin<Box<F>>,
}

impl<F> WithSpinnerFuture<F>
where
    F: Future,
{
    #[must_use]
    fn new(handle: FlowHandle, kind: SpinnerKind, future: F) -> Self {
        static NEXT_SPINNER_ID: AtomicU64 = AtomicU64::new(1);

        let id = SpinnerId::new(NEXT_SPINNER_ID.fetch_add(1, portable_atomic::Ordering::Relaxed));
        Self {
            handle,
            id,
            kind,
            started: false,
            stopped: false,
            inner: Box::pin(future),
        }
    }
}

impl<F> Future for WithSpinnerFuture<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if !self.started {
            self.started = true;
            self.handle.request_action(
                UiAction::StartSpinner {
                    id: self.id,
                    kind: self.kind,
                }
                .into(),
            );
        }

        let result = self.inner.as_mut().poll(cx);

        if result.is_ready() {
            self.stopped = true;
            self.handle
                .request_action(UiAction::StopSpinner { id: self.id }.into());
        }

        result
    }
}

impl<F> Drop for WithSpinnerFuture<F>
where
    F: Future,
{
    fn drop(&mut self) {
        if self.started && !self.stopped {
            self.handle
                .request_action(UiAction::StopSpinner { id: self.id }.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::{self, Future as _},
        task::{Context, Waker},
    };

    use super::with_spinner;
    use crate::{
        action::{Action, ActionRequestQueue, SpinnerKind, UiAction},
        flow::FlowExecutor,
    };

    #[test]
    fn spinner_brackets_the_inner_future() {
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        executor.spawn(async move {
            with_spinner(&handle, SpinnerKind::SolveMaze, future::ready(())).await;
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        let actions = queue.take_all();
        assert_eq!(actions.len(), 2);
        let Action::Ui(UiAction::StartSpinner { id: started, kind }) = actions[0] else {
            panic!("expected StartSpinner, got {:?}", actions[0]);
        };
        assert_eq!(kind, SpinnerKind::SolveMaze);
        assert!(matches!(
            actions[1],
            Action::Ui(UiAction::StopSpinner { id }) if id == started
        ));
    }

    #[test]
    fn dropping_a_started_spinner_stops_it() {
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        let mut spinner = Box::pin(with_spinner(
            &handle,
            SpinnerKind::GenerateMaze,
            future::pending::<()>(),
        ));
        let mut cx = Context::from_waker(Waker::noop());
        assert!(spinner.as_mut().poll(&mut cx).is_pending());
        drop(spinner);

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        let actions = queue.take_all();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::Ui(UiAction::StartSpinner { .. })));
        assert!(matches!(actions[1], Action::Ui(UiAction::StopSpinner { .. })));
    }
}
