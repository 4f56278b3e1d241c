//! A contiguous growable array type.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Bound, Deref, DerefMut, Range, RangeBounds};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::capacity::{max_size, next_capacity};
use crate::error::{InsertionError, OutOfRange, StorageError};
use crate::storage::RawBuffer;

use self::insert::{destroy_range, Inserter};

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

mod assign;
mod emplace;
pub(crate) mod insert;
mod into_iter;

#[cold]
#[inline(never)]
pub(super) fn index_panic() -> ! {
    panic!("Invalid element index");
}

#[inline]
fn bounds_to_range(range: impl RangeBounds<usize>, length: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(i) => *i,
        Bound::Excluded(i) => i.saturating_add(1),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => length,
        Bound::Included(i) => i.saturating_add(1),
        Bound::Excluded(i) => *i,
    };
    Range { start, end }
}

/// A contiguous growable array type.
///
/// Elements live in a single buffer owned by the vector. Slots beyond
/// [`len`](Vec::len) and up to [`capacity`](Vec::capacity) are allocated
/// but uninitialized. The buffer is allocated lazily, grown by half of its
/// size when full, and released when the vector is dropped.
///
/// Operations which may allocate have a `try_` variant returning a
/// [`StorageError`]; the plain variants panic on allocation failure.
pub struct Vec<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> Vec<T> {
    /// Constructs a new, empty `Vec<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// let vec: flex_vec::Vec<i32> = flex_vec::Vec::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `Vec<T>` with exactly the specified capacity.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            buf: RawBuffer::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Constructs a new, empty `Vec<T>` with exactly the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds [`max_size`](Vec::max_size) or the
    /// allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Create a `Vec<T>` containing `count` clones of `elem`.
    pub fn from_elem(elem: T, count: usize) -> Self
    where
        T: Clone,
    {
        match Self::try_from_elem(elem, count) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_from_elem(elem: T, count: usize) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity(count)?;
        vec.append_with(count, |insert| insert.push_repeat(&elem, count));
        Ok(vec)
    }

    /// Create a `Vec<T>` containing `count` default values.
    pub fn from_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(count);
        vec.append_with(count, |insert| {
            for _ in 0..count {
                insert.push(T::default());
            }
        });
        vec
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity(data.len())?;
        vec.append_with(data.len(), |insert| insert.push_slice(data));
        Ok(vec)
    }

    fn try_from_iter(iter: impl IntoIterator<Item = T>) -> Result<Self, StorageError> {
        let mut iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut vec = Self::try_with_capacity(min_cap)?;
        vec.try_extend(&mut iter).map_err(|err| err.error)?;
        Ok(vec)
    }

    #[inline]
    fn into_parts(self) -> (RawBuffer<T>, usize) {
        let me = ManuallyDrop::new(self);
        (unsafe { ptr::read(&me.buf) }, me.len)
    }
}

impl<T> Vec<T> {
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// The number of allocated slots, initialized or not. Zero-sized types
    /// always report `usize::MAX`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The largest number of elements a vector of this type can hold.
    #[inline]
    pub const fn max_size(&self) -> usize {
        max_size::<T>()
    }

    /// # Safety
    /// `length` must not exceed the capacity, and every element up to
    /// `length` must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, length: usize) {
        self.len = length;
    }

    /// Access an element, returning an error if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// let v = flex_vec::flex_vec![1, 2, 3];
    /// assert_eq!(v.at(2), Ok(&3));
    /// assert!(v.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.as_slice().get(index).ok_or(OutOfRange {
            index,
            length: self.len,
        })
    }

    /// Mutably access an element, returning an error if the index is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, length })
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front() called on an empty vector");
        &self.as_slice()[0]
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front_mut() called on an empty vector");
        &mut self.as_mut_slice()[0]
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back() called on an empty vector");
        let Some(last) = self.as_slice().last() else {
            index_panic();
        };
        last
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_mut() called on an empty vector");
        let Some(last) = self.as_mut_slice().last_mut() else {
            index_panic();
        };
        last
    }

    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let spare = self.buf.capacity() - self.len;
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.len).cast(), spare)
        }
    }

    /// Ensure the vector can hold at least `capacity` elements in total.
    ///
    /// Unlike the growth applied when appending, exactly `capacity` slots are
    /// allocated. If the capacity is already sufficient this has no effect.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds [`max_size`](Vec::max_size) or the
    /// allocation fails.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity > max_size::<T>() {
            return Err(StorageError::CapacityLimit);
        }
        if capacity <= self.buf.capacity() {
            return Ok(());
        }
        self.buf.try_resize(capacity)
    }

    // Make room for `additional` more elements, applying the growth policy.
    fn try_grow(&mut self, additional: usize) -> Result<(), StorageError> {
        let capacity = self.buf.capacity();
        if capacity - self.len >= additional {
            return Ok(());
        }
        let capacity = next_capacity::<T>(capacity, additional)?;
        self.buf.try_resize(capacity)
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    /// Release any unused capacity.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        if self.len < self.buf.capacity() {
            self.buf.try_resize(self.len)?;
        }
        Ok(())
    }

    // Append up to `count` values into spare capacity which has already been reserved.
    #[inline]
    fn append_with<F>(&mut self, count: usize, fill: F) -> usize
    where
        F: FnOnce(&mut Inserter<'_, T>),
    {
        debug_assert!(self.buf.capacity() - self.len >= count);
        let mut insert = unsafe { Inserter::new(self.buf.as_mut_ptr(), &mut self.len, count, 0) };
        fill(&mut insert);
        insert.complete()
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_grow(items.len())?;
        self.append_with(items.len(), |insert| insert.push_slice(items));
        Ok(())
    }

    fn try_extend(&mut self, iter: &mut impl Iterator<Item = T>) -> Result<(), InsertionError<T>> {
        loop {
            let spare = self.buf.capacity() - self.len;
            let added = self.append_with(spare, |insert| insert.push_iter(&mut *iter));
            if added < spare {
                // ran out of items to insert
                break;
            }
            let Some(item) = iter.next() else { break };
            let min_reserve = iter.size_hint().0.saturating_add(1);
            if let Err(err) = self.try_grow(min_reserve) {
                return Err(InsertionError::new(err, item));
            }
            unsafe { self.buf.as_mut_ptr().add(self.len).write(item) };
            self.len += 1;
        }
        Ok(())
    }

    /// Remove the last element and return it, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Remove and return the element at `index`, shifting the following
    /// elements down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            index_panic();
        }
        unsafe {
            let head = self.buf.as_mut_ptr().add(index);
            let result = head.read();
            ptr::copy(head.add(1), head, len - index - 1);
            self.len = len - 1;
            result
        }
    }

    /// Drop the element at `index`, closing the gap. Returns the index of
    /// the element which now occupies that position (or the new length).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Drop the elements in `range`, shifting the following elements down to
    /// close the gap. Returns the start of the range, which is now occupied by
    /// the first element following the erased range.
    ///
    /// Erasing an empty range has no effect.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or decreasing.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = flex_vec::flex_vec![1, 2, 3, 4, 5];
    /// assert_eq!(v.erase_range(1..3), 1);
    /// assert_eq!(v, [1, 4, 5]);
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = bounds_to_range(range, self.len);
        if start > end || end > self.len {
            index_panic();
        }
        if start == end {
            return start;
        }
        let tail = self.len - end;
        self.len = start;
        let data = self.buf.as_mut_ptr();
        // An empty insertion over the erased run closes the gap when completed,
        // or when unwinding from a panicking destructor.
        let insert = unsafe { Inserter::new(data, &mut self.len, end - start, tail) };
        unsafe { destroy_range(data, start..end) };
        insert.complete();
        start
    }

    pub fn truncate(&mut self, length: usize) {
        let old_len = self.len;
        if length < old_len {
            self.len = length;
            unsafe { destroy_range(self.buf.as_mut_ptr(), length..old_len) };
        }
    }

    /// Drop all elements, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.erase_range(..);
    }

    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        match self.try_resize(new_len, value) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    /// Resize the vector, appending clones of `value` or truncating as required.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), StorageError>
    where
        T: Clone,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                let count = new_len - self.len;
                self.try_grow(count)?;
                self.append_with(count, |insert| insert.push_repeat(&value, count));
            }
            Ordering::Less => {
                self.truncate(new_len);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, f) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                let count = new_len - self.len;
                self.try_grow(count)?;
                self.append_with(count, |insert| {
                    for _ in 0..count {
                        insert.push(f());
                    }
                });
            }
            Ordering::Less => {
                self.truncate(new_len);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Resize the vector, appending default values or truncating as required.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Exchange the contents of two vectors without moving any elements.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> AsRef<[T]> for Vec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vec<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vec<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vec<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for Vec<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_slice(source);
    }
}

impl<T> ConstDefault for Vec<T> {
    const DEFAULT: Self = Self::new();
}

impl<T: fmt::Debug> fmt::Debug for Vec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> Default for Vec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Drop for Vec<T> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        unsafe { destroy_range(self.buf.as_mut_ptr(), 0..len) };
    }
}

impl<T> Extend<T> for Vec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Vec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter().cloned()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T> FromIterator<T> for Vec<T> {
    #[inline]
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        match Self::try_from_iter(iter) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }
}

unsafe impl<T: Send> Send for Vec<T> {}

unsafe impl<T: Sync> Sync for Vec<T> {}

#[cfg(feature = "alloc")]
impl<T> From<alloc::vec::Vec<T>> for Vec<T> {
    fn from(vec: alloc::vec::Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);
        let capacity = vec.capacity();
        let len = vec.len();
        let data = unsafe { ptr::NonNull::new_unchecked(vec.as_mut_ptr()) };
        Self {
            buf: unsafe { RawBuffer::from_raw_parts(data, capacity) },
            len,
        }
    }
}

#[cfg(feature = "alloc")]
impl<T> From<Vec<T>> for alloc::vec::Vec<T> {
    fn from(vec: Vec<T>) -> Self {
        let (buf, len) = vec.into_parts();
        let (data, capacity) = buf.into_raw_parts();
        unsafe { alloc::vec::Vec::from_raw_parts(data.as_ptr(), len, capacity) }
    }
}

impl<T: Clone> From<&[T]> for Vec<T> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone> From<&mut [T]> for Vec<T> {
    #[inline]
    fn from(data: &mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for Vec<T> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, const N: usize> From<[T; N]> for Vec<T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl From<&str> for Vec<u8> {
    #[inline]
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl<T: Hash> Hash for Vec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> IntoIterator for Vec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a Vec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, T2> PartialEq<Vec<T2>> for Vec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq> Eq for Vec<T> {}

impl<T1, T2> PartialEq<&[T2]> for Vec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, T2> PartialEq<[T2]> for Vec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, T2, const N: usize> PartialEq<&[T2; N]> for Vec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2, const N: usize> PartialEq<[T2; N]> for Vec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2> PartialEq<Vec<T2>> for &[T1]
where
    T2: PartialEq<T1>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2>) -> bool {
        other.eq(self)
    }
}

impl<T1, T2, const N: usize> PartialEq<Vec<T2>> for [T1; N]
where
    T2: PartialEq<T1>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2>) -> bool {
        other.eq(self)
    }
}

#[cfg(feature = "alloc")]
impl<A, B> PartialEq<alloc::vec::Vec<A>> for Vec<B>
where
    B: PartialEq<A>,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<A>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: PartialOrd> PartialOrd for Vec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Vec<u8> {
    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.try_extend_from_slice(buf) {
            Ok(_) => Ok(buf.len()),
            Err(err) => Err(std::io::Error::new(std::io::ErrorKind::OutOfMemory, err)),
        }
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for Vec<T> {
    fn zeroize(&mut self) {
        for item in self.iter_mut() {
            item.zeroize();
        }
        self.clear();
        zeroize::Zeroize::zeroize(self.spare_capacity_mut());
    }
}
