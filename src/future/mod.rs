//! Best-effort fan-in for futures.
//!
//! A gather waits on two groups of fallible operations at once. The
//! *required* group holds the operations whose results matter most; the
//! *optional* group holds best-effort ones. Each group races against its own
//! deadline, and the gather reports, per operation, whether it produced a
//! value in time:
//!
//! | Operation state when its group is decided | Slot          |
//! | ---                                       | ---           |
//! | Resolved to `Ok(value)`                   | `Some(value)` |
//! | Resolved to `Err(_)`                      | `None`        |
//! | Still pending                             | `None`        |
//!
//! The optional deadline starts together with the required one rather than
//! after it, so the two budgets overlap: the gather as a whole never takes
//! longer than the larger of the two.
//!
//! # Examples
//!
//! ```
//! use futures_gather::prelude::*;
//! use futures_lite::future::block_on;
//! use std::time::Duration;
//!
//! async fn fetch(name: &'static str) -> Result<&'static str, std::io::Error> {
//!     Ok(name)
//! }
//!
//! block_on(async {
//!     let required = vec![fetch("accounts"), fetch("orders")];
//!     let optional = vec![fetch("recommendations")];
//!
//!     let output = (required, optional)
//!         .gather_timeout(Duration::from_secs(1), Duration::from_millis(200))
//!         .await;
//!
//!     assert_eq!(output.required, Some(vec![Some("accounts"), Some("orders")]));
//!     assert_eq!(output.optional, Some(vec![Some("recommendations")]));
//! })
//! ```
//!
//! # Abandoned operations
//!
//! Operations which are still pending when their group is decided are not
//! polled again, and are dropped together with the [`Gather`][crate::gather::Gather]
//! future. Handles to spawned tasks detach on drop, so the work itself keeps
//! running. To keep a plain future around, pass `&mut fut` (or `fut.as_mut()`
//! for a pinned one) and keep awaiting it after the gather returns.
#[cfg(feature = "timer")]
use core::time::Duration;

use core::future::IntoFuture;

#[cfg(feature = "timer")]
use async_io::Timer;
use futures_core::TryFuture;

pub(crate) mod gather;

/// Wait for a required and an optional group of operations, each up to its
/// own deadline.
///
/// Implemented for pairs `(required, optional)` of anything iterable whose
/// items can be turned into futures resolving to `Result`.
pub trait Gather {
    /// The operation futures of the required group.
    type Required: TryFuture;

    /// The operation futures of the optional group.
    type Optional: TryFuture;

    /// Wait for both groups, each bounded by a deadline future.
    ///
    /// See [`gather_until`][crate::gather_until] for details.
    fn gather_until<DR, DO>(
        self,
        deadline_required: DR,
        deadline_optional: DO,
    ) -> gather::Gather<Self::Required, Self::Optional, DR::IntoFuture, DO::IntoFuture>
    where
        DR: IntoFuture,
        DO: IntoFuture;

    /// Wait for both groups, each for at most its own timeout.
    ///
    /// Both timers start when this method is called, the optional one first.
    /// See [`gather_timeout`][crate::gather_timeout] for details.
    #[cfg(feature = "timer")]
    fn gather_timeout(
        self,
        timeout_required: Duration,
        timeout_optional: Duration,
    ) -> gather::Gather<Self::Required, Self::Optional, Timer, Timer>
    where
        Self: Sized,
    {
        let deadline_optional = Timer::after(timeout_optional);
        let deadline_required = Timer::after(timeout_required);
        self.gather_until(deadline_required, deadline_optional)
    }
}
