use core::mem;

use crate::error::StorageError;

use super::Vec;

impl<T> Vec<T> {
    /// Replace the contents of the vector with clones of the elements of `items`.
    ///
    /// Existing elements are overwritten in place where possible. If more
    /// room is needed, the new contents are built in a buffer of exactly
    /// `items.len()` slots before the current one is released.
    pub fn assign_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_assign_slice(items) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_assign_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        let count = items.len();
        if count > self.buf.capacity() {
            let mut fresh = Self::try_from_slice(items)?;
            self.swap_with(&mut fresh);
            return Ok(());
        }
        let keep = self.len.min(count);
        self.as_mut_slice()[..keep].clone_from_slice(&items[..keep]);
        if count > keep {
            let rest = &items[keep..];
            self.append_with(rest.len(), |insert| insert.push_slice(rest));
        } else {
            self.truncate(count);
        }
        Ok(())
    }

    /// Replace the contents of the vector with `count` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = flex_vec::flex_vec![1, 2, 3, 4];
    /// v.assign_fill(2, 9);
    /// assert_eq!(v, [9, 9]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn assign_fill(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        match self.try_assign_fill(count, value) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_assign_fill(&mut self, count: usize, value: T) -> Result<(), StorageError>
    where
        T: Clone,
    {
        if count > self.buf.capacity() {
            let mut fresh = Self::try_from_elem(value, count)?;
            self.swap_with(&mut fresh);
            return Ok(());
        }
        let keep = self.len.min(count);
        for slot in &mut self.as_mut_slice()[..keep] {
            slot.clone_from(&value);
        }
        if count > keep {
            let rest = count - keep;
            self.append_with(rest, |insert| insert.push_repeat(&value, rest));
        } else {
            self.truncate(count);
        }
        Ok(())
    }

    /// Replace the contents of the vector with the items produced by an iterator.
    ///
    /// An iterator reporting an exact size larger than the current capacity
    /// is collected into a new buffer of exactly that size, leaving the
    /// vector untouched if it panics. Otherwise existing elements are
    /// overwritten one by one, then extra items are appended or surplus
    /// elements dropped.
    pub fn assign_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        match self.try_assign_iter(iter) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_assign_iter<I>(&mut self, iter: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        if let (lower, Some(upper)) = iter.size_hint() {
            if lower == upper && lower > self.buf.capacity() {
                let mut fresh = Self::try_with_capacity(lower)?;
                fresh.try_extend(&mut iter).map_err(|err| err.error)?;
                self.swap_with(&mut fresh);
                return Ok(());
            }
        }
        let mut kept = 0;
        for (slot, item) in self.as_mut_slice().iter_mut().zip(&mut iter) {
            *slot = item;
            kept += 1;
        }
        if kept < self.len {
            self.truncate(kept);
            Ok(())
        } else {
            self.try_extend(&mut iter).map_err(|err| err.error)
        }
    }

    /// Take the contents of `other`, leaving it empty with no allocated capacity.
    ///
    /// The previous contents of this vector are dropped.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) {
        *self = mem::take(other);
    }
}
