//! Best-effort fan-in of futures with per-group deadlines.
//!
//! Gathering results from several upstreams often means some of them are
//! mandatory and some are nice to have. This crate waits on a *required* and
//! an *optional* group of fallible futures, each up to its own deadline, and
//! reports for every future whether it produced a value in time. A slow or
//! failing participant never stalls or fails the whole gather: it simply
//! shows up as a missing slot.
//!
//! # Operations
//!
//! - [`gather_timeout`]: Wait on both groups, each for at most a [`Duration`][core::time::Duration].
//! - [`gather_until`]: Wait on both groups, each until a deadline future resolves.
//! - [`try_gather_timeout`] / [`try_gather_until`]: The same, for groups which
//!   may be absent or contain absent operations.
//! - [`future::Gather`]: The same operations as methods on `(required, optional)` pairs.
//!
//! # Examples
//!
//! ```
//! use futures_gather::gather_timeout;
//! use futures_lite::future::block_on;
//! use std::time::Duration;
//!
//! async fn upstream(value: u32) -> Result<u32, std::io::Error> {
//!     Ok(value)
//! }
//!
//! async fn broken() -> Result<u32, std::io::Error> {
//!     Err(std::io::ErrorKind::ConnectionReset.into())
//! }
//!
//! block_on(async {
//!     let output = gather_timeout(
//!         [upstream(1)],
//!         Duration::from_millis(500),
//!         [broken()],
//!         Duration::from_millis(100),
//!     )
//!     .await;
//!
//!     assert_eq!(output.required, Some(vec![Some(1)]));
//!     assert_eq!(output.optional, Some(vec![None]));
//! })
//! ```
//!
//! # Features
//!
//! - `timer` (default): enables the [`Duration`][core::time::Duration] based
//!   entry points, backed by [`async_io::Timer`]. Without it, bring your own
//!   deadline futures to [`gather_until`].

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The futures gather prelude.
pub mod prelude {
    pub use super::future::Gather as _;
}

pub mod future;

/// Helper functions and types for gathering.
pub mod gather {
    pub use crate::future::gather::{materialize, Gather, GatherOutput, Group, InvalidArgument};
}

#[cfg(feature = "timer")]
pub use crate::future::gather::{gather_timeout, try_gather_timeout};
pub use crate::future::gather::{gather_until, try_gather_until};
