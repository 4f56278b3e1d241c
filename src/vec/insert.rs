use core::mem::ManuallyDrop;
use core::ops::Range;
use core::ptr;

/// Move `count` values from `src` into the uninitialized slots at `dst`.
///
/// # Safety
/// The source values must be initialized and the regions must not overlap.
/// Afterwards the source slots are logically uninitialized.
#[inline]
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    if count > 0 {
        ptr::copy_nonoverlapping(src, dst, count);
    }
}

/// Drop the values in `range` without releasing their storage.
///
/// # Safety
/// Every slot in the range must hold an initialized value, which will
/// be left uninitialized.
#[inline]
pub(crate) unsafe fn destroy_range<T>(data: *mut T, range: Range<usize>) {
    if range.start < range.end {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
            data.add(range.start),
            range.end - range.start,
        ));
    }
}

/// Writes values into a run of uninitialized slots, optionally followed by
/// a tail of initialized values which has been moved out of the way.
///
/// The owner's length is held at the start of the run. Completing the
/// insertion closes any unused part of the run and publishes the new length.
/// If the `Inserter` is dropped before completion (for instance by a panic
/// while producing a value), the values written so far are dropped, the tail
/// is moved back to the start of the run and the original length is restored.
pub(crate) struct Inserter<'a, T> {
    data: *mut T,
    len: &'a mut usize,
    start: usize,
    pos: usize,
    end: usize,
    tail: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// # Safety
    /// `data` must be valid for `*len + count + tail` slots. The `count` slots
    /// following `*len` must be uninitialized and the `tail` slots after them
    /// must be initialized.
    #[inline]
    pub unsafe fn new(data: *mut T, len: &'a mut usize, count: usize, tail: usize) -> Self {
        let start = *len;
        Self {
            data,
            len,
            start,
            pos: start,
            end: start + count,
            tail,
        }
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.pos < self.end);
        unsafe { self.data.add(self.pos).write(value) };
        self.pos += 1;
    }

    #[inline]
    pub fn push_iter(&mut self, iter: &mut impl Iterator<Item = T>) {
        while self.pos < self.end {
            let Some(item) = iter.next() else { break };
            unsafe { self.data.add(self.pos).write(item) };
            self.pos += 1;
        }
    }

    #[inline]
    pub fn push_repeat(&mut self, value: &T, count: usize)
    where
        T: Clone,
    {
        assert!(self.remaining() >= count);
        for _ in 0..count {
            unsafe { self.data.add(self.pos).write(value.clone()) };
            self.pos += 1;
        }
    }

    #[inline]
    pub fn push_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert!(self.remaining() >= values.len());
        for item in values {
            unsafe { self.data.add(self.pos).write(item.clone()) };
            self.pos += 1;
        }
    }

    /// Finish the insertion, returning the number of values written.
    #[inline]
    pub fn complete(self) -> usize {
        let mut this = ManuallyDrop::new(self);
        let count = this.pos - this.start;
        if this.pos < this.end && this.tail > 0 {
            unsafe { ptr::copy(this.data.add(this.end), this.data.add(this.pos), this.tail) };
        }
        *this.len = this.pos + this.tail;
        count
    }
}

impl<T> Drop for Inserter<'_, T> {
    fn drop(&mut self) {
        unsafe { destroy_range(self.data, self.start..self.pos) };
        if self.tail > 0 {
            unsafe { ptr::copy(self.data.add(self.end), self.data.add(self.start), self.tail) };
        }
        *self.len = self.start + self.tail;
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::mem::MaybeUninit;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use super::*;

    #[derive(Debug)]
    struct Counted(Rc<Cell<usize>>, u32);

    impl Counted {
        fn new(live: &Rc<Cell<usize>>, value: u32) -> Self {
            live.set(live.get() + 1);
            Self(live.clone(), value)
        }
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn insert_fill_hole() {
        let mut buf = [MaybeUninit::<u32>::uninit(); 6];
        let data = buf.as_mut_ptr().cast::<u32>();
        unsafe {
            data.write(1);
            // tail has been shifted up to leave a hole of three slots
            data.add(4).write(2);
            data.add(5).write(3);
        }
        let mut len = 1;
        let mut ins = unsafe { Inserter::new(data, &mut len, 3, 2) };
        ins.push_repeat(&9, 3);
        assert!(ins.full());
        assert_eq!(ins.complete(), 3);
        assert_eq!(len, 6);
        let vals = unsafe { core::slice::from_raw_parts(data, len) };
        assert_eq!(vals, &[1, 9, 9, 9, 2, 3]);
    }

    #[test]
    fn insert_short_closes_gap() {
        let mut buf = [MaybeUninit::<u32>::uninit(); 6];
        let data = buf.as_mut_ptr().cast::<u32>();
        unsafe {
            data.write(1);
            data.add(4).write(2);
            data.add(5).write(3);
        }
        let mut len = 1;
        let mut ins = unsafe { Inserter::new(data, &mut len, 3, 2) };
        ins.push_iter(&mut [7].into_iter());
        assert_eq!(ins.remaining(), 2);
        assert_eq!(ins.complete(), 1);
        assert_eq!(len, 4);
        let vals = unsafe { core::slice::from_raw_parts(data, len) };
        assert_eq!(vals, &[1, 7, 2, 3]);
    }

    #[test]
    fn insert_unwind_restores_tail() {
        let live = Rc::new(Cell::new(0));
        let mut buf: [MaybeUninit<Counted>; 5] = unsafe { MaybeUninit::uninit().assume_init() };
        let data = buf.as_mut_ptr().cast::<Counted>();
        unsafe {
            data.write(Counted::new(&live, 1));
            data.add(3).write(Counted::new(&live, 2));
            data.add(4).write(Counted::new(&live, 3));
        }
        let mut len = 1;
        let res = catch_unwind(AssertUnwindSafe(|| {
            let mut ins = unsafe { Inserter::new(data, &mut len, 2, 2) };
            ins.push(Counted::new(&live, 8));
            ins.push(Counted::new(&live, 9));
            // the run is full; the assertion panics
            ins.push(Counted::new(&live, 10));
        }));
        assert!(res.is_err());
        assert_eq!(len, 3);
        assert_eq!(live.get(), 3);
        let vals = unsafe { core::slice::from_raw_parts(data, len) };
        assert_eq!(vals.iter().map(|c| c.1).collect::<std::vec::Vec<_>>(), [1, 2, 3]);
        unsafe { destroy_range(data, 0..len) };
        assert_eq!(live.get(), 0);
    }
}
