use std::{
    cell::RefCell,
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Waker},
};

use crate::action::{Action, ActionRequestQueue};

mod helpers;
pub(crate) mod tasks;

type FlowFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Drives generate and solve flows from the frame loop.
///
/// Flows never register wakers; every frame polls each of them once and
/// forwards whatever actions they queued.
#[derive(Default)]
pub(crate) struct FlowExecutor {
    outbox: Rc<RefCell<Vec<Action>>>,
    flows: Vec<FlowFuture>,
}

impl fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("flows", &self.flows.len())
            .field("queued", &self.outbox.borrow().len())
            .finish()
    }
}

impl FlowExecutor {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn handle(&self) -> FlowHandle {
        FlowHandle {
            outbox: Rc::clone(&self.outbox),
        }
    }

    #[must_use]
    pub(crate) fn is_idle(&self) -> bool {
        self.flows.is_empty()
    }

    pub(crate) fn spawn(&mut self, flow: impl Future<Output = ()> + 'static) {
        self.flows.push(Box::pin(flow));
    }

    /// Drops every running flow along with the actions they queued.
    ///
    /// Receivers held by the dropped flows go with them, so late worker
    /// responses have nowhere to land.
    pub(crate) fn cancel_all(&mut self) {
        if !self.flows.is_empty() {
            log::debug!("cancelling {} running flow(s)", self.flows.len());
        }
        // Dropping a flow may queue cleanup actions; discard them too.
        self.flows.clear();
        self.outbox.borrow_mut().clear();
    }

    /// Polls each flow once and moves queued actions into `action_queue`.
    pub(crate) fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        self.forward(action_queue);
        let mut cx = Context::from_waker(Waker::noop());
        self.flows.retain_mut(|flow| flow.as_mut().poll(&mut cx).is_pending());
        self.forward(action_queue);
    }

    fn forward(&self, action_queue: &mut ActionRequestQueue) {
        for action in self.outbox.borrow_mut().drain(..) {
            action_queue.request(action);
        }
    }
}

/// Lets a flow queue actions for the next frame.
#[derive(Clone)]
pub(crate) struct FlowHandle {
    outbox: Rc<RefCell<Vec<Action>>>,
}

impl FlowHandle {
    pub(crate) fn request_action(&self, action: Action) {
        self.outbox.borrow_mut().push(action);
    }
}

#[cfg(test)]
mod tests {
    use futures_channel::oneshot;

    use super::FlowExecutor;
    use crate::action::{Action, ActionRequestQueue, FlowAction, UiAction};

    #[test]
    fn flow_runs_until_its_receiver_resolves() {
        let mut executor = FlowExecutor::new();
        let (sender, receiver) = oneshot::channel::<()>();
        let handle = executor.handle();
        executor.spawn(async move {
            if receiver.await.is_ok() {
                handle.request_action(FlowAction::SolveMaze.into());
            }
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        assert!(!executor.is_idle());
        assert!(queue.take_all().is_empty());

        sender.send(()).unwrap();
        executor.poll(&mut queue);
        assert!(executor.is_idle());
        let actions = queue.take_all();
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Flow(FlowAction::SolveMaze)));
    }

    #[test]
    fn cancel_all_drops_flows_and_their_queued_actions() {
        let mut executor = FlowExecutor::new();
        let (sender, receiver) = oneshot::channel::<()>();
        let handle = executor.handle();
        executor.spawn(async move {
            handle.request_action(UiAction::Dismiss.into());
            let _ = receiver.await;
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        assert_eq!(queue.take_all().len(), 1);

        executor.handle().request_action(FlowAction::GenerateMaze.into());
        executor.cancel_all();
        assert!(executor.is_idle());
        assert!(sender.is_canceled());

        executor.poll(&mut queue);
        assert!(queue.take_all().is_empty());
    }
}
