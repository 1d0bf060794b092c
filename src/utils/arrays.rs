// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Zips two arrays together and applies the function `f` to each memberwise element, returning a fixed
/// size array of the results.
///
/// It is preferred to use this function over chaining `zip()` and `map()` together, as it avoids
/// building an intermediate array of tuples.
///
/// # Examples
///
/// ```
/// # use lintrans::utils::zip_map;
/// let sums = zip_map([1, 2, 3], [10, 20, 30], |x, y| x + y);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let (lhs, rhs) = (ManuallyDrop::new(lhs), ManuallyDrop::new(rhs));
    let mut result = [const { MaybeUninit::<Res>::uninit() }; N];

    for i in 0..N {
        unsafe {
            let slot = result.get_unchecked_mut(i);
            let lhs = ptr::read(lhs.get_unchecked(i));
            let rhs = ptr::read(rhs.get_unchecked(i));

            slot.write(f(lhs, rhs));
        }
    }

    unsafe { array_assume_init(result) }
}

/// Converts an array of initialized `MaybeUninit` values into an array of values.
///
/// # Safety
///
/// Every element of `array` must be initialized.
#[must_use]
#[inline(always)]
pub const unsafe fn array_assume_init<T, const N: usize>(array: [MaybeUninit<T>; N]) -> [T; N] {
    let array = ManuallyDrop::new(array);
    unsafe { ptr::read((&raw const array).cast::<[T; N]>()) }
}

#[must_use]
#[inline]
pub const fn array_get_checked<T>(array: &[T], idx: usize) -> Option<&T> {
    if idx < array.len() {
        unsafe { Some(array_get_unchecked(array, idx)) }
    } else {
        None
    }
}

#[must_use]
#[inline]
pub const fn array_get_mut_checked<T>(array: &mut [T], idx: usize) -> Option<&mut T> {
    if idx < array.len() {
        unsafe { Some(array_get_unchecked_mut(array, idx)) }
    } else {
        None
    }
}

/// # Safety
///
/// `idx` must be smaller than `array.len()`.
#[must_use]
#[inline(always)]
pub const unsafe fn array_get_unchecked<T>(array: &[T], idx: usize) -> &T {
    unsafe { &*array.as_ptr().add(idx) }
}

/// # Safety
///
/// `idx` must be smaller than `array.len()`.
#[must_use]
#[inline(always)]
pub const unsafe fn array_get_unchecked_mut<T>(array: &mut [T], idx: usize) -> &mut T {
    unsafe { &mut *array.as_mut_ptr().add(idx) }
}

/// Fills a fixed size array one element at a time.
///
/// Elements pushed before the builder is dropped without being finished are dropped with it.
pub struct ArrayBuilder<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> ArrayBuilder<T, N> {
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value`, or hands it back if the array is already full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), T> {
        match self.data.get_mut(self.len) {
            Some(slot) => {
                slot.write(value);
                self.len += 1;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Returns the array if every element has been pushed, or gives the builder back otherwise.
    #[inline]
    pub fn finish(self) -> Result<[T; N], Self> {
        if self.len < N {
            return Err(self);
        }

        let this = ManuallyDrop::new(self);
        unsafe { Ok(array_assume_init(ptr::read(&this.data))) }
    }
}

impl<T, const N: usize> Default for ArrayBuilder<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for ArrayBuilder<T, N> {
    #[inline]
    fn drop(&mut self) {
        for slot in &mut self.data[..self.len] {
            unsafe { slot.assume_init_drop() };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_map_moves_owned_values() {
        let names = [String::from("a"), String::from("b")];
        let suffixes = [String::from("x"), String::from("y")];

        let joined = zip_map(names, suffixes, |mut n, s| {
            n.push_str(&s);
            n
        });

        assert_eq!(joined, [String::from("ax"), String::from("by")]);
    }

    #[test]
    fn test_array_builder_drops_partial_contents() {
        use std::rc::Rc;

        let shared = Rc::new(());

        let mut builder = ArrayBuilder::<Rc<()>, 3>::new();
        assert!(builder.push(Rc::clone(&shared)).is_ok());
        assert!(builder.push(Rc::clone(&shared)).is_ok());
        assert_eq!(builder.len(), 2);
        assert_eq!(Rc::strong_count(&shared), 3);

        let builder = match builder.finish() {
            Ok(_) => panic!("builder is not full"),
            Err(builder) => builder,
        };
        assert_eq!(Rc::strong_count(&shared), 3);

        drop(builder);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_array_builder_rejects_overflow() {
        let mut builder = ArrayBuilder::<String, 2>::new();
        assert!(builder.is_empty());
        assert!(builder.push(String::from("a")).is_ok());
        assert!(builder.push(String::from("b")).is_ok());
        assert_eq!(builder.push(String::from("c")), Err(String::from("c")));

        let Ok(array) = builder.finish() else {
            panic!("builder should be full");
        };
        assert_eq!(array, [String::from("a"), String::from("b")]);
    }

    #[test]
    fn test_checked_access() {
        let mut array = [1, 2, 3];
        assert_eq!(array_get_checked(&array, 2), Some(&3));
        assert_eq!(array_get_checked(&array, 3), None);

        if let Some(elem) = array_get_mut_checked(&mut array, 0) {
            *elem = 7;
        }
        assert_eq!(array, [7, 2, 3]);
        assert!(array_get_mut_checked(&mut array, 9).is_none());
    }
}
