use super::Group;
use crate::utils::{iter_pin_mut_vec, OpStates};

use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::mem;
use std::vec::Vec;

use futures_core::TryFuture;
use pin_project::pin_project;

/// Why a group stopped waiting.
#[derive(Debug, Clone, Copy)]
enum Resolution {
    Completed,
    Deadline,
}

impl Resolution {
    fn as_str(self) -> &'static str {
        match self {
            Resolution::Completed => "completed",
            Resolution::Deadline => "deadline",
        }
    }
}

/// One group of operations racing against its deadline.
///
/// Values are written into `slots` the moment their operation resolves. Once
/// the group is resolved, the slots are frozen: operations that were still
/// pending are marked abandoned and never polled again.
#[pin_project]
pub(crate) struct GroupState<F>
where
    F: TryFuture,
{
    kind: Group,
    pending: usize,
    resolved: bool,
    consumed: bool,
    slots: Vec<Option<F::Ok>>,
    states: OpStates,
    #[pin]
    futures: Vec<F>,
}

impl<F> GroupState<F>
where
    F: TryFuture,
{
    pub(crate) fn new(kind: Group, futures: Vec<F>) -> Self {
        let len = futures.len();
        GroupState {
            kind,
            pending: len,
            // An empty group has nothing to wait on.
            resolved: len == 0,
            consumed: false,
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            states: OpStates::new(len),
            futures,
        }
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Poll every operation which hasn't reached a terminal state yet.
    ///
    /// Resolves the group once the last operation finishes.
    pub(crate) fn poll_operations(mut self: Pin<&mut Self>, cx: &mut Context<'_>) {
        if self.resolved {
            return;
        }

        let this = self.as_mut().project();
        let states = &mut this.states[..];
        for (i, fut) in iter_pin_mut_vec(this.futures).enumerate() {
            if !states[i].is_pending() {
                continue;
            }
            if let Poll::Ready(res) = fut.try_poll(cx) {
                match res {
                    Ok(value) => {
                        this.slots[i] = Some(value);
                        states[i].set_succeeded();
                    }
                    Err(_) => states[i].set_failed(),
                }
                *this.pending -= 1;
            }
        }

        if self.pending == 0 {
            self.resolve(Resolution::Completed);
        }
    }

    /// The group's deadline fired: stop waiting on whatever is still pending.
    pub(crate) fn expire(self: Pin<&mut Self>) {
        if !self.resolved {
            self.resolve(Resolution::Deadline);
        }
    }

    fn resolve(self: Pin<&mut Self>, resolution: Resolution) {
        let this = self.project();
        *this.resolved = true;

        tracing::trace!(
            group = %this.kind,
            reason = resolution.as_str(),
            succeeded = this.states.succeeded(),
            total = this.states.len(),
            "group resolved"
        );

        if *this.pending > 0 {
            tracing::debug!(
                group = %this.kind,
                abandoned = *this.pending,
                "deadline reached with operations still pending"
            );
            let abandoned: Vec<usize> = this.states.pending_indexes().collect();
            for i in abandoned {
                this.states[i].set_abandoned();
            }
        }
    }

    /// Take the frozen slots out of the group.
    ///
    /// Returns `None` for an empty group.
    pub(crate) fn take(self: Pin<&mut Self>) -> Option<Vec<Option<F::Ok>>> {
        let this = self.project();
        debug_assert!(*this.resolved, "group must be resolved before its slots are taken");
        assert!(!*this.consumed, "group slots must not be taken twice");
        *this.consumed = true;

        if this.states.is_empty() {
            None
        } else {
            Some(mem::take(this.slots))
        }
    }
}

impl<F> fmt::Debug for GroupState<F>
where
    F: TryFuture,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}
