use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use crate::storage::RawBuffer;

use super::insert::destroy_range;

/// An iterator which moves the elements out of a [`Vec`](super::Vec).
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    remain: Range<usize>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            remain: Range { start: 0, end: len },
        }
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.remain.start), self.len()) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.remain.start), self.len())
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.remain.end - self.remain.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remain.start == self.remain.end
    }

    fn clear(&mut self) {
        let remain = self.remain.clone();
        self.remain.start = self.remain.end;
        unsafe { destroy_range(self.buf.as_mut_ptr(), remain) };
    }
}

impl<T> AsRef<[T]> for IntoIter<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for IntoIter<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.start;
        if index != self.remain.end {
            self.remain.start = index + 1;
            unsafe { Some(ptr::read(self.buf.as_ptr().add(index))) }
        } else {
            None
        }
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut index = self.remain.end;
        if index != self.remain.start {
            index -= 1;
            self.remain.end = index;
            unsafe { Some(ptr::read(self.buf.as_ptr().add(index))) }
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Send> Send for IntoIter<T> {}

unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
