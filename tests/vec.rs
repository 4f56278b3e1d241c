#![cfg(feature = "alloc")]

use rstest::rstest;

use flex_vec::{flex_vec, OutOfRange, StorageError, Vec as FlexVec};

const SLICE: &[usize] = &[1, 2, 3, 4, 5];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Zst;

#[test]
fn vec_new_global() {
    let v = FlexVec::<usize>::new();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vec_with_capacity_global() {
    let v = FlexVec::<usize>::with_capacity(10);
    assert_eq!(v.capacity(), 10);
    assert!(v.is_empty());
}

#[test]
fn vec_check_capacity_growth() {
    let mut res = [0usize; 10];
    let mut vec = FlexVec::<u32>::new();
    for cap in res.iter_mut() {
        vec.push(1);
        *cap = vec.capacity();
    }
    assert_eq!(res, [4, 4, 4, 4, 6, 6, 9, 9, 9, 13]);
}

#[rstest]
#[case::bytes(1, 8)]
#[case::words(8, 4)]
#[case::large(2048, 1)]
fn vec_first_allocation(#[case] size: usize, #[case] expect: usize) {
    fn first_cap<const N: usize>() -> usize {
        let mut v = FlexVec::<[u8; N]>::new();
        v.push([0; N]);
        v.capacity()
    }
    let cap = match size {
        1 => first_cap::<1>(),
        8 => first_cap::<8>(),
        _ => first_cap::<2048>(),
    };
    assert_eq!(cap, expect);
}

#[test]
fn vec_reallocations_logarithmic() {
    let mut v = FlexVec::<u64>::new();
    let mut reallocs = 0;
    let mut cap = v.capacity();
    for i in 0..100_000u64 {
        v.push(i);
        if v.capacity() != cap {
            cap = v.capacity();
            reallocs += 1;
        }
    }
    assert_eq!(v.len(), 100_000);
    assert!(reallocs < 30, "{} reallocations", reallocs);
}

#[test]
fn vec_extend_new_global() {
    let mut v = FlexVec::<usize>::new();
    v.extend(SLICE.iter().cloned());
    assert!(v.capacity() >= SLICE.len());
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_extend_refs() {
    let mut v = FlexVec::<usize>::new();
    v.extend(SLICE);
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_extend_new_global_medium() {
    let mut v = FlexVec::<usize>::new();
    v.extend((0..100).filter(|_| true));
    assert!(v.capacity() >= 100);
    assert_eq!(v.len(), 100);
    assert!(v.iter().copied().eq(0..100));
}

#[test]
fn vec_extend_grow_global() {
    let mut v = FlexVec::<usize>::with_capacity(1);
    v.extend_from_slice(SLICE);
    assert!(v.capacity() >= SLICE.len());
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_from_iter_exact_capacity() {
    let v = FlexVec::<usize>::from_iter(SLICE.iter().cloned());
    assert_eq!(v.capacity(), SLICE.len());
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_from_slice_global() {
    let v = FlexVec::<usize>::from_slice(SLICE);
    assert_eq!(v.capacity(), SLICE.len());
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_from_elem_and_default() {
    let v = FlexVec::from_elem(7u8, 3);
    assert_eq!(v, [7, 7, 7]);
    let v = FlexVec::<u16>::from_default(4);
    assert_eq!(v, [0, 0, 0, 0]);
    assert_eq!(flex_vec![1u8; 2], [1, 1]);
    let e: FlexVec<u8> = flex_vec![];
    assert!(e.is_empty());
}

#[test]
fn vec_clone_no_alias() {
    let a = FlexVec::<u32>::from([1, 2, 3]);
    let mut b = a.clone();
    b[0] = 10;
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [10, 2, 3]);
    assert_ne!(a.as_ptr(), b.as_ptr());
}

#[test]
fn vec_clone_from() {
    let a = FlexVec::<u32>::from([1, 2, 3]);
    let mut b = FlexVec::<u32>::with_capacity(8);
    b.push(9);
    b.clone_from(&a);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 8);
}

#[test]
fn vec_move_leaves_empty() {
    let mut a = FlexVec::<u32>::from([1, 2, 3]);
    let mut b = FlexVec::new();
    b.move_from(&mut a);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);
}

#[test]
fn vec_insert_single() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    v.insert(1, 9);
    assert_eq!(v, [1, 9, 2, 3]);
    v.insert(4, 4);
    assert_eq!(v, [1, 9, 2, 3, 4]);
    v.insert(0, 0);
    assert_eq!(v, [0, 1, 9, 2, 3, 4]);
}

#[test]
fn vec_insert_with_returns_element() {
    let mut v = FlexVec::<u32>::from([1, 3]);
    let item = v.insert_with(1, || 2);
    *item += 10;
    assert_eq!(v, [1, 12, 3]);
    *v.push_with(|| 4) *= 2;
    assert_eq!(v, [1, 12, 3, 8]);
}

#[rstest]
#[case::front(0, &[5, 5, 1, 2, 3])]
#[case::middle(1, &[1, 5, 5, 2, 3])]
#[case::back(3, &[1, 2, 3, 5, 5])]
fn vec_insert_n(#[case] index: usize, #[case] expect: &[u32]) {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    assert_eq!(v.insert_n(index, 2, 5), [5, 5]);
    assert_eq!(v, expect);
}

#[test]
fn vec_insert_from_within_self() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    v.insert_from_within(1, 0..=1);
    assert_eq!(v, [1, 1, 2, 2, 3]);
    v.insert_from_within(5, ..);
    assert_eq!(v, [1, 1, 2, 2, 3, 1, 1, 2, 2, 3]);
}

#[test]
fn vec_pop() {
    let mut v = FlexVec::<u32>::from([1, 2]);
    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.pop(), Some(1));
    assert_eq!(v.pop(), None);
    assert!(v.capacity() >= 2);
}

#[test]
fn vec_erase() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    assert_eq!(v.erase(1), 1);
    assert_eq!(v, [1, 3]);
    assert_eq!(v.erase(1), 1);
    assert_eq!(v, [1]);
    assert_eq!(v.remove(0), 1);
    assert!(v.is_empty());
}

#[rstest]
#[case::head(0..2, &[3, 4, 5])]
#[case::middle(1..3, &[1, 4, 5])]
#[case::tail(3..5, &[1, 2, 3])]
#[case::empty(2..2, &[1, 2, 3, 4, 5])]
#[case::all(0..5, &[])]
fn vec_erase_range(#[case] range: core::ops::Range<usize>, #[case] expect: &[u32]) {
    let mut v = FlexVec::<u32>::from([1, 2, 3, 4, 5]);
    assert_eq!(v.erase_range(range.clone()), range.start);
    assert_eq!(v, expect);
    assert_eq!(v.capacity(), 5);
}

#[test]
#[should_panic]
fn vec_erase_range_out_of_bounds() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    v.erase_range(2..4);
}

#[test]
fn vec_clear_keeps_capacity() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);
}

#[test]
fn vec_at() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    assert_eq!(v.at(2), Ok(&3));
    assert_eq!(
        v.at(3),
        Err(OutOfRange {
            index: 3,
            length: 3
        })
    );
    *v.at_mut(0).unwrap() = 7;
    assert_eq!(v.front(), &7);
    assert_eq!(v.back(), &3);
    *v.back_mut() = 8;
    *v.front_mut() = 6;
    assert_eq!(v, [6, 2, 8]);
}

#[test]
fn vec_reserve_exact() {
    let mut v = FlexVec::<u32>::new();
    v.reserve(0);
    assert_eq!(v.capacity(), 0);
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    v.reserve(5);
    assert_eq!(v.capacity(), 10);
    v.reserve(11);
    assert_eq!(v.capacity(), 11);
}

#[test]
fn vec_reserve_limit() {
    let mut v = FlexVec::<u32>::from([1]);
    assert_eq!(
        v.try_reserve(v.max_size() + 1),
        Err(StorageError::CapacityLimit)
    );
    assert_eq!(v, [1]);
    assert_eq!(v.capacity(), 1);
}

#[test]
fn vec_shrink_to_fit_idempotent() {
    let mut v = FlexVec::<u32>::with_capacity(10);
    v.extend_from_slice(&[1, 2, 3]);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    let ptr = v.as_ptr();
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(v, [1, 2, 3]);
    v.clear();
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vec_resize() {
    let mut v = FlexVec::<u32>::from([1, 2]);
    v.resize(4, 9);
    assert_eq!(v, [1, 2, 9, 9]);
    v.resize(1, 0);
    assert_eq!(v, [1]);
    v.resize_default(3);
    assert_eq!(v, [1, 0, 0]);
    let mut n = 0;
    v.resize_with(5, || {
        n += 1;
        n
    });
    assert_eq!(v, [1, 0, 0, 1, 2]);
}

#[test]
fn vec_truncate() {
    let mut v = FlexVec::<u32>::from([1, 2, 3]);
    v.truncate(5);
    assert_eq!(v.len(), 3);
    v.truncate(1);
    assert_eq!(v, [1]);
}

#[test]
fn vec_swap_with() {
    let mut a = FlexVec::<u32>::from([1, 2]);
    let mut b = FlexVec::<u32>::with_capacity(9);
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    a.swap_with(&mut b);
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 9);
    assert_eq!(b, [1, 2]);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(b.as_ptr(), pa);
}

#[test]
fn vec_compare() {
    let a = FlexVec::<u32>::from([1, 2, 3]);
    let b = FlexVec::<u32>::from([1, 2, 4]);
    let c = FlexVec::<u32>::from([1, 2]);
    assert!(a < b);
    assert!(c < a);
    assert!(a >= c);
    assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
    assert_ne!(a, b);
    assert_eq!(a, std::vec![1u32, 2, 3]);
    assert_eq!([1u32, 2, 3], a);
}

#[test]
fn vec_iterate() {
    let v = FlexVec::<u32>::from([1, 2, 3]);
    assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    let mut total = 0;
    for item in &v {
        total += item;
    }
    assert_eq!(total, 6);
    let doubled: FlexVec<u32> = v.into_iter().map(|i| i * 2).collect();
    assert_eq!(doubled, [2, 4, 6]);
}

#[test]
fn vec_std_round_trip() {
    let v: FlexVec<String> = std::vec![String::from("a"), String::from("b")].into();
    assert_eq!(v.len(), 2);
    let back: Vec<String> = v.into();
    assert_eq!(back, ["a", "b"]);
}

#[test]
fn vec_zst() {
    let mut b = FlexVec::<Zst>::new();
    assert_eq!(b.capacity(), usize::MAX);
    b.push(Zst);
    b.insert(0, Zst);
    assert_eq!(b.len(), 2);
    assert_eq!(b.pop(), Some(Zst));
    b.extend([Zst, Zst, Zst]);
    assert_eq!(b.erase_range(1..3), 1);
    assert_eq!(b.len(), 2);
    let mut iter = b.into_iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(Zst));
    assert_eq!(iter.next_back(), Some(Zst));
    assert_eq!(iter.next(), None);
}

#[cfg(feature = "std")]
#[test]
fn vec_io_write() {
    use std::io::Write;

    let mut v = FlexVec::<u8>::new();
    write!(v, "{}-{}", 1, 2).unwrap();
    assert_eq!(v, b"1-2");
}
