/// Create a [`Vec`](crate::vec::Vec) containing the arguments.
///
/// ```
/// let v = flex_vec::flex_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let z = flex_vec::flex_vec![0u8; 4];
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! flex_vec {
    () => (
        $crate::vec::Vec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::Vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::Vec::from([$($x),+])
    );
}
