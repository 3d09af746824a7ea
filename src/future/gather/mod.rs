use self::group::GroupState;
use super::Gather as GatherTrait;

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
#[cfg(feature = "timer")]
use std::time::Duration;

#[cfg(feature = "timer")]
use async_io::Timer;
use futures_core::TryFuture;
use pin_project::pin_project;

mod error;
mod group;
mod materialize;
mod output;

pub use error::InvalidArgument;
pub use materialize::materialize;
pub use output::GatherOutput;

/// Which of the two groups of a gather an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Operations whose completion is the primary objective.
    Required,
    /// Best-effort operations.
    Optional,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Required => f.write_str("required"),
            Group::Optional => f.write_str("optional"),
        }
    }
}

/// Waits for a required and an optional group of operations, each up to its
/// own deadline.
///
/// This `struct` is created by [`gather_until`], [`gather_timeout`], and the
/// methods on the [`Gather`][crate::future::Gather] trait. See their
/// documentation for more.
///
/// Both groups make progress from the first poll. A group is decided as soon
/// as all of its operations have resolved, or its deadline fires, whichever
/// comes first; from then on its slots are frozen and its pending operations
/// are no longer polled. The future resolves once the required group, and
/// then the optional group, are decided.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Gather<R, O, DR, DO>
where
    R: TryFuture,
    O: TryFuture,
{
    consumed: bool,
    #[pin]
    required: GroupState<R>,
    #[pin]
    optional: GroupState<O>,
    #[pin]
    required_deadline: DR,
    #[pin]
    optional_deadline: DO,
}

impl<R, O, DR, DO> Gather<R, O, DR, DO>
where
    R: TryFuture,
    O: TryFuture,
{
    pub(crate) fn new(
        required: Vec<R>,
        required_deadline: DR,
        optional: Vec<O>,
        optional_deadline: DO,
    ) -> Self {
        Gather {
            consumed: false,
            required: GroupState::new(Group::Required, required),
            optional: GroupState::new(Group::Optional, optional),
            required_deadline,
            optional_deadline,
        }
    }
}

impl<R, O, DR, DO> fmt::Debug for Gather<R, O, DR, DO>
where
    R: TryFuture,
    O: TryFuture,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gather")
            .field("required", &self.required)
            .field("optional", &self.optional)
            .finish()
    }
}

impl<R, O, DR, DO> Future for Gather<R, O, DR, DO>
where
    R: TryFuture,
    O: TryFuture,
    DR: Future,
    DO: Future,
{
    type Output = GatherOutput<R::Ok, O::Ok>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        // Operations go first, so that anything which finishes in the same
        // poll as a deadline still counts.
        this.required.as_mut().poll_operations(cx);
        this.optional.as_mut().poll_operations(cx);

        // The optional clock runs while the required group is awaited.
        if !this.optional.is_resolved() && this.optional_deadline.as_mut().poll(cx).is_ready() {
            this.optional.as_mut().expire();
        }
        if !this.required.is_resolved() && this.required_deadline.as_mut().poll(cx).is_ready() {
            this.required.as_mut().expire();
        }

        if !this.required.is_resolved() || !this.optional.is_resolved() {
            return Poll::Pending;
        }

        *this.consumed = true;
        Poll::Ready(GatherOutput {
            required: this.required.take(),
            optional: this.optional.take(),
        })
    }
}

/// Wait for a required and an optional group of operations, each bounded by
/// its own deadline future.
///
/// Any future can act as a deadline: a runtime's `sleep`, a channel, or a
/// shutdown signal. A deadline is considered to have fired once it resolves;
/// its output is ignored. Deadlines are first polled on the first poll of the
/// returned future, and the deadline of an empty group is never polled.
///
/// Operations are anything that can be turned into a future resolving to
/// `Result<T, E>`. An `Err` is reported as a missing slot, just like an
/// operation which was still pending when its group was decided.
///
/// # Examples
///
/// ```
/// use futures_gather::gather_until;
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let required = vec![future::ready(Ok::<_, ()>("a")), future::ready(Err(()))];
///     let optional = vec![future::pending::<Result<u8, ()>>()];
///
///     let output = gather_until(required, future::pending::<()>(), optional, future::ready(()))
///         .await;
///
///     assert_eq!(output.required, Some(vec![Some("a"), None]));
///     assert_eq!(output.optional, Some(vec![None]));
/// })
/// ```
pub fn gather_until<R, O, DR, DO>(
    required: R,
    deadline_required: DR,
    optional: O,
    deadline_optional: DO,
) -> Gather<
    <R::Item as IntoFuture>::IntoFuture,
    <O::Item as IntoFuture>::IntoFuture,
    DR::IntoFuture,
    DO::IntoFuture,
>
where
    R: IntoIterator,
    R::Item: IntoFuture,
    <R::Item as IntoFuture>::IntoFuture: TryFuture,
    O: IntoIterator,
    O::Item: IntoFuture,
    <O::Item as IntoFuture>::IntoFuture: TryFuture,
    DR: IntoFuture,
    DO: IntoFuture,
{
    (required, optional).gather_until(deadline_required, deadline_optional)
}

/// Wait for a required and an optional group of operations, each for at most
/// its own timeout.
///
/// Both timers start when this function is called, the optional one first.
/// Because the optional timer keeps running while the required group is
/// awaited, the whole gather takes at most
/// `max(timeout_required, timeout_optional)`, never their sum.
///
/// A zero timeout collects whatever resolves on the first poll.
///
/// # Examples
///
/// ```
/// use futures_gather::gather_timeout;
/// use futures_lite::future::block_on;
/// use std::future;
/// use std::time::Duration;
///
/// block_on(async {
///     let required = vec![future::ready(Ok::<_, ()>(1))];
///     let optional = vec![future::pending::<Result<u8, ()>>()];
///
///     let output = gather_timeout(
///         required,
///         Duration::from_millis(100),
///         optional,
///         Duration::from_millis(10),
///     )
///     .await;
///
///     assert_eq!(output.required, Some(vec![Some(1)]));
///     assert_eq!(output.optional_flags(), Some(vec![false]));
/// })
/// ```
#[cfg(feature = "timer")]
pub fn gather_timeout<R, O>(
    required: R,
    timeout_required: Duration,
    optional: O,
    timeout_optional: Duration,
) -> Gather<
    <R::Item as IntoFuture>::IntoFuture,
    <O::Item as IntoFuture>::IntoFuture,
    Timer,
    Timer,
>
where
    R: IntoIterator,
    R::Item: IntoFuture,
    <R::Item as IntoFuture>::IntoFuture: TryFuture,
    O: IntoIterator,
    O::Item: IntoFuture,
    <O::Item as IntoFuture>::IntoFuture: TryFuture,
{
    (required, optional).gather_timeout(timeout_required, timeout_optional)
}

/// Like [`gather_until`], for groups which may be absent or contain absent
/// operations.
///
/// Both groups are checked with [`materialize`] before anything is polled.
pub fn try_gather_until<R, O, F1, F2, DR, DO>(
    required: Option<R>,
    deadline_required: DR,
    optional: Option<O>,
    deadline_optional: DO,
) -> Result<Gather<F1::IntoFuture, F2::IntoFuture, DR::IntoFuture, DO::IntoFuture>, InvalidArgument>
where
    R: IntoIterator<Item = Option<F1>>,
    F1: IntoFuture,
    F1::IntoFuture: TryFuture,
    O: IntoIterator<Item = Option<F2>>,
    F2: IntoFuture,
    F2::IntoFuture: TryFuture,
    DR: IntoFuture,
    DO: IntoFuture,
{
    let required = materialize(required, Group::Required)?.unwrap_or_default();
    let optional = materialize(optional, Group::Optional)?.unwrap_or_default();
    Ok(gather_until(
        required,
        deadline_required,
        optional,
        deadline_optional,
    ))
}

/// Like [`gather_timeout`], for groups which may be absent or contain absent
/// operations.
///
/// Both groups are checked with [`materialize`] before the timers start, so a
/// malformed group fails without waiting.
///
/// # Examples
///
/// ```
/// use futures_gather::gather::Group;
/// use futures_gather::try_gather_timeout;
/// use std::future::{self, Ready};
/// use std::time::Duration;
///
/// let required = Some(vec![Some(future::ready(Ok::<u8, ()>(1))), None]);
/// let optional: Option<Vec<Option<Ready<Result<u8, ()>>>>> = None;
///
/// let err = try_gather_timeout(
///     required,
///     Duration::from_secs(1),
///     optional,
///     Duration::from_secs(1),
/// )
/// .unwrap_err();
/// assert_eq!(err.group(), Group::Required);
/// ```
#[cfg(feature = "timer")]
pub fn try_gather_timeout<R, O, F1, F2>(
    required: Option<R>,
    timeout_required: Duration,
    optional: Option<O>,
    timeout_optional: Duration,
) -> Result<Gather<F1::IntoFuture, F2::IntoFuture, Timer, Timer>, InvalidArgument>
where
    R: IntoIterator<Item = Option<F1>>,
    F1: IntoFuture,
    F1::IntoFuture: TryFuture,
    O: IntoIterator<Item = Option<F2>>,
    F2: IntoFuture,
    F2::IntoFuture: TryFuture,
{
    let required = materialize(required, Group::Required)?.unwrap_or_default();
    let optional = materialize(optional, Group::Optional)?.unwrap_or_default();
    Ok(gather_timeout(
        required,
        timeout_required,
        optional,
        timeout_optional,
    ))
}

impl<R, O> GatherTrait for (R, O)
where
    R: IntoIterator,
    R::Item: IntoFuture,
    <R::Item as IntoFuture>::IntoFuture: TryFuture,
    O: IntoIterator,
    O::Item: IntoFuture,
    <O::Item as IntoFuture>::IntoFuture: TryFuture,
{
    type Required = <R::Item as IntoFuture>::IntoFuture;
    type Optional = <O::Item as IntoFuture>::IntoFuture;

    fn gather_until<DR, DO>(
        self,
        deadline_required: DR,
        deadline_optional: DO,
    ) -> Gather<Self::Required, Self::Optional, DR::IntoFuture, DO::IntoFuture>
    where
        DR: IntoFuture,
        DO: IntoFuture,
    {
        let (required, optional) = self;
        Gather::new(
            required.into_iter().map(IntoFuture::into_future).collect(),
            deadline_required.into_future(),
            optional.into_iter().map(IntoFuture::into_future).collect(),
            deadline_optional.into_future(),
        )
    }
}
