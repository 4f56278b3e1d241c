//! Capacity limits and the growth policy applied when a vector runs out of room.

use core::mem::size_of;

use crate::error::StorageError;
use crate::storage::utils::min_non_zero_cap;

/// The largest number of `T` a single buffer may hold.
///
/// Allocations are limited to `isize::MAX` bytes. Zero-sized types never
/// allocate, and may always hold up to `usize::MAX` values.
#[inline]
pub const fn max_size<T>() -> usize {
    let t_size = size_of::<T>();
    if t_size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / t_size
    }
}

/// Calculate the capacity to request when `additional` more slots are needed
/// than a buffer of capacity `prev` provides.
///
/// An empty buffer starts at a small type-dependent minimum. Otherwise the
/// capacity grows by half of its current size, or by `additional` if that is
/// larger, so that repeated single-element appends cost amortized O(1).
pub fn next_capacity<T>(prev: usize, additional: usize) -> Result<usize, StorageError> {
    let max = max_size::<T>();
    let minimum = match prev.checked_add(additional) {
        Some(min) if min <= max => min,
        _ => return Err(StorageError::CapacityLimit),
    };
    let preferred = if prev == 0 {
        min_non_zero_cap::<T>()
    } else {
        prev.saturating_add(prev / 2)
    };
    Ok(preferred.max(minimum).min(max))
}
