//! Insertion of elements at arbitrary positions.

use core::mem;
use core::ops::RangeBounds;
use core::ptr;
use core::slice;

use crate::capacity::next_capacity;
use crate::error::{InsertionError, StorageError};
use crate::storage::RawBuffer;

use super::insert::{relocate, Inserter};
use super::{bounds_to_range, index_panic, Vec};

/// Read access to the elements of a vector by their position before an
/// insertion began, wherever they currently reside.
pub(super) struct Prior<T> {
    data: *const T,
    index: usize,
    shift: usize,
}

impl<T> Prior<T> {
    /// # Safety
    /// `pos` must be less than the length of the vector before the insertion.
    #[inline]
    unsafe fn get(&self, pos: usize) -> &T {
        let pos = if pos < self.index { pos } else { pos + self.shift };
        &*self.data.add(pos)
    }
}

/// Drops any elements appended beyond `len` if an insertion unwinds.
struct TruncateOnDrop<'a, T> {
    vec: &'a mut Vec<T>,
    len: usize,
}

impl<T> Drop for TruncateOnDrop<'_, T> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}

impl<T> Vec<T> {
    /// Insert up to `count` values produced by `fill` at `index`.
    ///
    /// When spare capacity is available the tail is shifted up in place.
    /// Otherwise a new buffer is allocated and populated, and only swapped
    /// in once every value has been written: should `fill` panic the
    /// vector is left untouched.
    fn try_insert_block<F>(
        &mut self,
        index: usize,
        count: usize,
        fill: F,
    ) -> Result<usize, StorageError>
    where
        F: FnOnce(&mut Inserter<'_, T>, &Prior<T>),
    {
        let len = self.len;
        if index > len {
            index_panic();
        }
        if count == 0 {
            return Ok(0);
        }
        let tail = len - index;

        if self.buf.capacity() - len >= count {
            let data = self.buf.as_mut_ptr();
            unsafe { ptr::copy(data.add(index), data.add(index + count), tail) };
            self.len = index;
            let prior = Prior {
                data,
                index,
                shift: count,
            };
            let mut insert = unsafe { Inserter::new(data, &mut self.len, count, tail) };
            fill(&mut insert, &prior);
            return Ok(insert.complete());
        }

        let capacity = next_capacity::<T>(self.buf.capacity(), count)?;
        let mut fresh = RawBuffer::<T>::try_allocate(capacity)?;
        let src = self.buf.as_mut_ptr();
        let dst = fresh.as_mut_ptr();
        // The prefix is copied but still owned by the current buffer until
        // the new one is swapped in.
        unsafe { relocate(src, dst, index) };
        let prior = Prior {
            data: src,
            index,
            shift: 0,
        };
        let mut built = index;
        let mut insert = unsafe { Inserter::new(dst, &mut built, count, 0) };
        fill(&mut insert, &prior);
        let inserted = insert.complete();
        unsafe { relocate(src.add(index), dst.add(built), tail) };
        mem::swap(&mut self.buf, &mut fresh);
        self.len = built + tail;
        Ok(inserted)
    }

    /// Append an element to the end of the vector.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds [`max_size`](Vec::max_size) or
    /// the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = flex_vec::flex_vec![1, 2];
    /// v.push(3);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) {
        match self.try_push(item) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    /// Append an element to the end of the vector. If the buffer could not be
    /// grown the element is returned within the error.
    pub fn try_push(&mut self, item: T) -> Result<(), InsertionError<T>> {
        if self.len == self.buf.capacity() {
            if let Err(err) = self.try_grow(1) {
                return Err(InsertionError::new(err, item));
            }
        }
        unsafe { self.buf.as_mut_ptr().add(self.len).write(item) };
        self.len += 1;
        Ok(())
    }

    /// Append an element constructed by `f`, returning a reference to it.
    ///
    /// If the vector is full, `f` is evaluated before the buffer is replaced
    /// so that a panic leaves both its contents and capacity unchanged.
    #[inline]
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_push_with(f) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    #[inline]
    pub fn try_push_with<F>(&mut self, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        self.try_insert_with(self.len, f)
    }

    /// Insert an element at `index`, shifting all following elements up.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the buffer could not be grown.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) {
        match self.try_insert(index, value) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertionError<T>> {
        let len = self.len;
        if index > len {
            index_panic();
        }
        if len == self.buf.capacity() {
            if let Err(err) = self.try_grow(1) {
                return Err(InsertionError::new(err, value));
            }
        }
        unsafe {
            let head = self.buf.as_mut_ptr().add(index);
            ptr::copy(head, head.add(1), len - index);
            head.write(value);
        }
        self.len = len + 1;
        Ok(())
    }

    /// Insert an element constructed by `f` at `index`, returning a reference to it.
    #[inline]
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_insert_with(index, f) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            index_panic();
        }
        if len < self.buf.capacity() {
            let value = f();
            unsafe {
                let head = self.buf.as_mut_ptr().add(index);
                ptr::copy(head, head.add(1), len - index);
                head.write(value);
            }
            self.len = len + 1;
        } else {
            self.try_insert_block(index, 1, |insert, _| insert.push(f()))?;
        }
        Ok(unsafe { &mut *self.buf.as_mut_ptr().add(index) })
    }

    /// Insert `count` clones of `value` at `index`, returning the inserted elements.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> &mut [T]
    where
        T: Clone,
    {
        match self.try_insert_n(index, count, value) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert_n(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<&mut [T], StorageError>
    where
        T: Clone,
    {
        let added = self.try_insert_block(index, count, |insert, _| {
            insert.push_repeat(&value, count)
        })?;
        Ok(self.inserted_mut(index, added))
    }

    /// Insert clones of the elements of `items` at `index`, returning the
    /// inserted elements.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = flex_vec::flex_vec![1, 2, 3];
    /// v.insert_slice(1, &[7, 8]);
    /// assert_eq!(v, [1, 7, 8, 2, 3]);
    /// ```
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> &mut [T]
    where
        T: Clone,
    {
        match self.try_insert_slice(index, items) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert_slice(&mut self, index: usize, items: &[T]) -> Result<&mut [T], StorageError>
    where
        T: Clone,
    {
        let added =
            self.try_insert_block(index, items.len(), |insert, _| insert.push_slice(items))?;
        Ok(self.inserted_mut(index, added))
    }

    /// Insert clones of the elements in `range` of this vector at `index`.
    ///
    /// The source range refers to positions before the insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = flex_vec::flex_vec![1, 2, 3];
    /// v.insert_from_within(1, 1..3);
    /// assert_eq!(v, [1, 2, 3, 2, 3]);
    /// ```
    pub fn insert_from_within<R>(&mut self, index: usize, range: R) -> &mut [T]
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        match self.try_insert_from_within(index, range) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert_from_within<R>(
        &mut self,
        index: usize,
        range: R,
    ) -> Result<&mut [T], StorageError>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let range = bounds_to_range(range, self.len);
        if range.start > range.end || range.end > self.len {
            index_panic();
        }
        let count = range.end - range.start;
        let added = self.try_insert_block(index, count, |insert, prior| {
            for pos in range {
                insert.push(unsafe { prior.get(pos) }.clone());
            }
        })?;
        Ok(self.inserted_mut(index, added))
    }

    /// Insert the items produced by an iterator at `index`, returning the
    /// inserted elements.
    ///
    /// An iterator reporting an exact size is written directly into place,
    /// allocating at most once. Otherwise the items are appended and rotated
    /// into position. Should the iterator panic, the items it produced are
    /// dropped and the previous contents restored.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> &mut [T]
    where
        I: IntoIterator<Item = T>,
    {
        match self.try_insert_iter(index, iter) {
            Ok(res) => res,
            Err(err) => err.panic(),
        }
    }

    pub fn try_insert_iter<I>(&mut self, index: usize, iter: I) -> Result<&mut [T], StorageError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            index_panic();
        }
        let mut iter = iter.into_iter();
        let placed = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                self.try_insert_block(index, lower, |insert, _| insert.push_iter(&mut iter))?
            }
            _ => 0,
        };

        let at = index + placed;
        let old_len = self.len;
        let mut guard = TruncateOnDrop {
            vec: &mut *self,
            len: old_len,
        };
        let res = guard.vec.try_extend(&mut iter);
        mem::forget(guard);
        if let Err(err) = res {
            self.truncate(old_len);
            return Err(err.error);
        }
        let appended = self.len - old_len;
        if appended > 0 {
            self.as_mut_slice()[at..].rotate_left(old_len - at);
        }
        Ok(self.inserted_mut(index, placed + appended))
    }

    #[inline]
    fn inserted_mut(&mut self, index: usize, count: usize) -> &mut [T] {
        debug_assert!(index + count <= self.len);
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(index), count) }
    }
}
