//! Filling owned blocks with index-derived values.
//!
//! A freshly allocated block is often seeded with a value computed from each
//! element's position. [`FromIndex`] captures that computation per payload
//! type and [`fill_from_index`] applies it through the owner's public
//! indexed access.

use mono_ptr::{OwnedSlicePtr, OwningHandle};

// -----------------------------------------------------------------------------
// FromIndex

/// A value derived deterministically from an element's index position.
///
/// Implemented for the primitive numeric types as a plain cast. Payload
/// types implement it themselves; a struct will typically derive every field
/// from the same index.
///
/// # Examples
///
/// ```
/// use mono_utils::seq::FromIndex;
///
/// assert_eq!(u32::from_index(3), 3);
/// assert_eq!(f64::from_index(3), 3.0);
/// ```
pub trait FromIndex {
    /// The value for the element at `index`.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_from_index {
    ($($ty:ty),* $(,)?) => {
        $(impl FromIndex for $ty {
            #[inline]
            fn from_index(index: usize) -> Self {
                index as $ty
            }
        })*
    };
}

impl_from_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// -----------------------------------------------------------------------------
// fill_from_index

/// Fills every element of the owned block with its index-derived value.
///
/// Uses only the owner's public access operations. Filling a null owner is
/// a warned no-op; filling a zero-length block does nothing.
///
/// # Examples
///
/// ```
/// use mono_ptr::OwnedSlicePtr;
/// use mono_utils::seq::fill_from_index;
///
/// let mut owner = OwnedSlicePtr::<i32>::new_default(5);
/// fill_from_index(&mut owner);
///
/// assert_eq!(owner.as_slice(), Some(&[0, 1, 2, 3, 4][..]));
/// ```
pub fn fill_from_index<T: FromIndex>(owner: &mut OwnedSlicePtr<T>) {
    if owner.is_null() {
        log::warn!("fill_from_index on a null owner; nothing to fill");
        return;
    }
    for index in 0..owner.len() {
        owner[index] = T::from_index(index);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use mono_ptr::{OwnedSlicePtr, OwningHandle};

    use super::{FromIndex, fill_from_index};
    use crate::default;

    #[derive(Debug, Default, PartialEq)]
    struct Triple {
        x: i32,
        y: i32,
        z: i32,
    }

    impl FromIndex for Triple {
        fn from_index(index: usize) -> Self {
            let value = index as i32;
            Triple {
                x: value,
                y: value,
                z: value,
            }
        }
    }

    #[test]
    fn fills_primitive_blocks_with_their_indexes() {
        let mut owner = OwnedSlicePtr::<i32>::new_default(5);
        fill_from_index(&mut owner);
        for index in 0..5 {
            assert_eq!(owner[index], index as i32);
        }
    }

    #[test]
    fn fills_payload_fields_from_the_index() {
        let mut owner = OwnedSlicePtr::<Triple>::new_default(3);
        fill_from_index(&mut owner);
        for index in 0..3 {
            let value = index as i32;
            assert_eq!(
                owner[index],
                Triple {
                    x: value,
                    y: value,
                    z: value,
                }
            );
        }
    }

    #[test]
    fn filling_a_null_owner_is_a_noop() {
        let mut owner: OwnedSlicePtr<u32> = OwnedSlicePtr::null();
        fill_from_index(&mut owner);
        assert!(owner.is_null());
    }

    #[test]
    fn payloads_default_to_zeroed_fields() {
        let payload: Triple = default();
        assert_eq!(payload, Triple { x: 0, y: 0, z: 0 });
    }
}
