use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;
use core::ptr::NonNull;

use crate::capacity::max_size;
use crate::error::StorageError;

use super::alloc::{Global, RawAlloc};
use super::utils::array_layout;

/// An owning handle to `capacity` slots of `T`.
///
/// The handle only manages memory: it never constructs or drops the values
/// stored in its slots. A zero capacity handle holds no allocation, and
/// zero-sized types never allocate.
pub(crate) struct RawBuffer<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = size_of::<T>() == 0;

    #[inline]
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: if Self::IS_ZST { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    /// Allocate exactly `capacity` slots.
    pub fn try_allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity > max_size::<T>() {
            return Err(StorageError::CapacityLimit);
        }
        if Self::IS_ZST || capacity == 0 {
            return Ok(Self::new());
        }
        let layout = array_layout::<T>(capacity)?;
        let data = Global.try_alloc(layout)?;
        Ok(Self {
            data: data.cast(),
            capacity,
            _marker: PhantomData,
        })
    }

    /// Change the number of allocated slots, keeping the contents of the
    /// leading slots which remain in range. On failure the buffer is unchanged.
    pub fn try_resize(&mut self, capacity: usize) -> Result<(), StorageError> {
        if Self::IS_ZST || capacity == self.capacity {
            return Ok(());
        }
        if capacity > max_size::<T>() {
            return Err(StorageError::CapacityLimit);
        }
        if capacity == 0 {
            *self = Self::new();
            return Ok(());
        }
        let new_layout = array_layout::<T>(capacity)?;
        let data = match self.layout() {
            Some(old_layout) => unsafe {
                Global.try_resize(self.data.cast(), old_layout, new_layout)?
            },
            None => Global.try_alloc(new_layout)?,
        };
        self.data = data.cast();
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Adopt an existing allocation of `capacity` slots made by the global allocator.
    ///
    /// # Safety
    /// `data` must have been allocated by `Global` with the array layout of
    /// `capacity` elements, or be dangling when no allocation exists.
    #[cfg(feature = "alloc")]
    #[inline]
    pub const unsafe fn from_raw_parts(data: NonNull<T>, capacity: usize) -> Self {
        Self {
            data,
            capacity: if Self::IS_ZST { usize::MAX } else { capacity },
            _marker: PhantomData,
        }
    }

    /// Give up ownership of the allocation, returning the data pointer and capacity.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let me = core::mem::ManuallyDrop::new(self);
        (me.data, me.capacity)
    }

    #[inline]
    fn layout(&self) -> Option<Layout> {
        if Self::IS_ZST || self.capacity == 0 {
            None
        } else {
            // the layout was validated when the block was allocated
            array_layout::<T>(self.capacity).ok()
        }
    }
}

impl<T> Default for RawBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            unsafe { Global.release(self.data.cast(), layout) };
        }
    }
}
