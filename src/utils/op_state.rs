use core::ops::{Deref, DerefMut};

use smallvec::SmallVec;

/// The maximum number of entries that `OpStates` can store without
/// dynamic memory allocation.
///
/// Each entry is a single byte, so this keeps the inline buffer the same size
/// as two pointers on 64-bit targets.
pub(crate) const MAX_INLINE_ENTRIES: usize = 16;

/// Enumerate the observed state of a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum OpState {
    /// The operation has not reached a terminal state yet.
    Pending,
    /// The operation resolved to `Ok`, and its value has been stored.
    Succeeded,
    /// The operation resolved to `Err`. The error has been dropped.
    Failed,
    /// The group resolved before the operation did. It will not be polled again.
    Abandoned,
}

impl OpState {
    /// Returns `true` if the state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the state is [`Succeeded`][Self::Succeeded].
    #[must_use]
    #[inline]
    pub(crate) fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Sets the state to [`Succeeded`][Self::Succeeded].
    #[inline]
    pub(crate) fn set_succeeded(&mut self) {
        *self = OpState::Succeeded;
    }

    /// Sets the state to [`Failed`][Self::Failed].
    #[inline]
    pub(crate) fn set_failed(&mut self) {
        *self = OpState::Failed;
    }

    /// Sets the state to [`Abandoned`][Self::Abandoned].
    #[inline]
    pub(crate) fn set_abandoned(&mut self) {
        *self = OpState::Abandoned;
    }
}

/// The states of every operation in a group, in input order.
pub(crate) struct OpStates(SmallVec<[OpState; MAX_INLINE_ENTRIES]>);

impl OpStates {
    pub(crate) fn new(len: usize) -> Self {
        Self(SmallVec::from_elem(OpState::Pending, len))
    }

    /// Count the operations which resolved to `Ok`.
    pub(crate) fn succeeded(&self) -> usize {
        self.iter().filter(|state| state.is_succeeded()).count()
    }

    /// Get an iterator of indexes of all operations which are still pending.
    pub(crate) fn pending_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, state)| state.is_pending())
            .map(|(i, _)| i)
    }
}

impl Deref for OpStates {
    type Target = [OpState];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for OpStates {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{OpState, OpStates, MAX_INLINE_ENTRIES};

    #[test]
    fn small_groups_stay_inline() {
        let states = OpStates::new(MAX_INLINE_ENTRIES);
        assert!(!states.0.spilled());

        let states = OpStates::new(MAX_INLINE_ENTRIES + 10);
        assert!(states.0.spilled());
        assert_eq!(states.len(), MAX_INLINE_ENTRIES + 10);
    }

    #[test]
    fn pending_indexes() {
        let mut states = OpStates::new(4);
        states[0].set_succeeded();
        states[2].set_failed();
        assert_eq!(states.pending_indexes().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(states.succeeded(), 1);

        states[1].set_abandoned();
        assert_eq!(states[1], OpState::Abandoned);
        assert_eq!(states.pending_indexes().collect::<Vec<_>>(), vec![3]);
    }
}
