use core::pin::Pin;
use std::vec::Vec;

pub(crate) fn iter_pin_mut<T>(slice: Pin<&mut [T]>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
    // invariants aren't required to transmit through slices. Otherwise this has
    // the same safety as a normal field pin projection.
    unsafe { slice.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}

/// Pin-project the elements of a pinned `Vec`.
///
/// The vec must never be resized or have its elements moved out while it is
/// pinned. The combinators in this crate only ever index into it.
pub(crate) fn iter_pin_mut_vec<T>(vec: Pin<&mut Vec<T>>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: `as_mut_slice` does not move the elements, and the slice is
    // re-wrapped in the same pin it came from.
    let slice = unsafe { vec.map_unchecked_mut(|vec| vec.as_mut_slice()) };
    iter_pin_mut(slice)
}
