use core::cmp::Ordering;

use super::Trapping;
use crate::Integer;

impl<T: Integer> PartialEq<T> for Trapping<T> {
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl<T: Integer> PartialOrd<T> for Trapping<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

#[test]
fn test_compare_with_wrapper() {
    let (a, b) = (Trapping::new(-3i32), Trapping::new(4i32));
    assert!(a < b);
    assert!(b > a);
    assert!(a <= Trapping::new(-3) && a >= Trapping::new(-3));
    assert!(a == Trapping::new(-3) && a != b);
    assert_eq!(a.max(b), b);
}

#[test]
fn test_compare_with_primitive() {
    let x = Trapping::new(200u8);
    assert!(x == 200u8);
    assert!(x != 199u8);
    assert!(x > 100u8);
    assert!(x >= 200u8);
    assert!(x < 201u8);
    assert!(x <= 255u8);
}
