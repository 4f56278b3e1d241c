use core::alloc::Layout;
use core::fmt;
use core::ptr::{self, NonNull};

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc, realloc as raw_realloc};

#[cfg(all(feature = "alloc", feature = "allocator-api2"))]
use allocator_api2::alloc::Allocator;

use crate::error::StorageError;

/// Raw allocation of untyped memory blocks described by a `Layout`.
///
/// Implementations never construct or drop values; placing and destroying
/// elements in the returned memory is left to the owner of the block.
pub trait RawAlloc: fmt::Debug {
    /// Allocate a block of memory fitting `layout`.
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError>;

    /// Move an allocated block to one fitting `new_layout`, preserving the
    /// contents up to the smaller of the two sizes. On failure the original
    /// block is left untouched.
    ///
    /// # Safety
    /// `ptr` must be currently allocated by this allocator with `old_layout`.
    unsafe fn try_resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, StorageError> {
        // Default implementation simply allocates and copies over the contents.
        let new_ptr = self.try_alloc(new_layout)?;
        let cp_len = old_layout.size().min(new_layout.size());
        if cp_len > 0 {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new_ptr.as_ptr().cast(), cp_len);
        }
        self.release(ptr, old_layout);
        Ok(new_ptr)
    }

    /// Release an allocated block.
    ///
    /// # Safety
    /// `ptr` must be currently allocated by this allocator with `layout`.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global memory allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Global;

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
impl RawAlloc for Global {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        let ptr = if layout.size() == 0 {
            // SAFETY: layout alignments are guaranteed to be non-zero.
            unsafe { NonNull::new_unchecked(layout.align() as *mut u8) }
        } else {
            let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
                return Err(StorageError::AllocError(layout));
            };
            ptr
        };
        Ok(NonNull::slice_from_raw_parts(ptr, layout.size()))
    }

    unsafe fn try_resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, StorageError> {
        if old_layout.size() == 0
            || new_layout.size() == 0
            || old_layout.align() != new_layout.align()
        {
            let new_ptr = self.try_alloc(new_layout)?;
            let cp_len = old_layout.size().min(new_layout.size());
            if cp_len > 0 {
                ptr::copy_nonoverlapping(ptr.as_ptr(), new_ptr.as_ptr().cast(), cp_len);
            }
            self.release(ptr, old_layout);
            return Ok(new_ptr);
        }
        let Some(new_ptr) = NonNull::new(raw_realloc(ptr.as_ptr(), old_layout, new_layout.size()))
        else {
            return Err(StorageError::AllocError(new_layout));
        };
        Ok(NonNull::slice_from_raw_parts(new_ptr, new_layout.size()))
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cfg(all(feature = "alloc", feature = "allocator-api2"))]
impl RawAlloc for Global {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        allocator_api2::alloc::Global
            .allocate(layout)
            .map_err(|_| StorageError::AllocError(layout))
    }

    unsafe fn try_resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, StorageError> {
        let res = if new_layout.size() >= old_layout.size() {
            allocator_api2::alloc::Global.grow(ptr, old_layout, new_layout)
        } else {
            allocator_api2::alloc::Global.shrink(ptr, old_layout, new_layout)
        };
        res.map_err(|_| StorageError::AllocError(new_layout))
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        allocator_api2::alloc::Global.deallocate(ptr, layout)
    }
}

#[cfg(not(feature = "alloc"))]
// Without an allocator every request is refused, leaving vectors permanently empty.
impl RawAlloc for Global {
    fn try_alloc(&self, _layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        Err(StorageError::Unsupported)
    }

    unsafe fn release(&self, _ptr: NonNull<u8>, _layout: Layout) {}
}
