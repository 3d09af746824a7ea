//! Utilities to implement the different futures of this crate.

mod op_state;
mod pin;

#[cfg(test)]
mod wakers;

pub(crate) use op_state::OpStates;
pub(crate) use pin::iter_pin_mut_vec;

#[cfg(test)]
pub(crate) use wakers::DummyWaker;
