//! Rendering owners to a human-readable text stream.
//!
//! The adapters borrow an owner and implement [`Display`](core::fmt::Display)
//! over its public access operations, so they compose with any formatting
//! sink. The null state renders as `<null>`.

use core::fmt;

use mono_ptr::{OwnedPtr, OwnedSlicePtr};

// -----------------------------------------------------------------------------
// DisplayOwned

/// Renders a scalar owner as its value.
///
/// # Examples
///
/// ```
/// use mono_ptr::OwnedPtr;
/// use mono_utils::text::DisplayOwned;
///
/// let owner = OwnedPtr::new(42);
/// assert_eq!(format!("{}", DisplayOwned(&owner)), "42");
///
/// let owner: OwnedPtr<i32> = OwnedPtr::null();
/// assert_eq!(format!("{}", DisplayOwned(&owner)), "<null>");
/// ```
pub struct DisplayOwned<'a, T>(pub &'a OwnedPtr<T>);

impl<T: fmt::Display> fmt::Display for DisplayOwned<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("<null>"),
        }
    }
}

// -----------------------------------------------------------------------------
// DisplaySlice

/// Renders a block owner as its elements, space-separated.
///
/// # Examples
///
/// ```
/// use mono_ptr::OwnedSlicePtr;
/// use mono_utils::{seq::fill_from_index, text::DisplaySlice};
///
/// let mut owner = OwnedSlicePtr::<u32>::new_default(5);
/// fill_from_index(&mut owner);
///
/// assert_eq!(format!("{}", DisplaySlice(&owner)), "0 1 2 3 4");
/// ```
pub struct DisplaySlice<'a, T>(pub &'a OwnedSlicePtr<T>);

impl<T: fmt::Display> fmt::Display for DisplaySlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(slice) = self.0.as_slice() else {
            return f.write_str("<null>");
        };
        for (index, value) in slice.iter().enumerate() {
            if index != 0 {
                f.write_str(" ")?;
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;

    use mono_ptr::{OwnedPtr, OwnedSlicePtr, OwningHandle};

    use super::{DisplayOwned, DisplaySlice};
    use crate::seq::fill_from_index;

    #[test]
    fn renders_scalar_values_and_the_null_state() {
        let owner = OwnedPtr::new(7);
        assert_eq!(format!("{}", DisplayOwned(&owner)), "7");

        let owner: OwnedPtr<i32> = OwnedPtr::null();
        assert_eq!(format!("{}", DisplayOwned(&owner)), "<null>");
    }

    #[test]
    fn renders_filled_blocks_space_separated() {
        let mut owner = OwnedSlicePtr::<u32>::new_default(5);
        fill_from_index(&mut owner);
        assert_eq!(format!("{}", DisplaySlice(&owner)), "0 1 2 3 4");
    }

    #[test]
    fn renders_empty_and_null_blocks() {
        let owner = OwnedSlicePtr::<u32>::new_default(0);
        assert_eq!(format!("{}", DisplaySlice(&owner)), "");

        let owner: OwnedSlicePtr<u32> = OwnedSlicePtr::null();
        assert_eq!(format!("{}", DisplaySlice(&owner)), "<null>");
    }

    #[test]
    fn taken_owners_render_as_null() {
        let mut owner = OwnedSlicePtr::<u32>::new_default(3);
        fill_from_index(&mut owner);

        let moved = owner.take();
        assert_eq!(format!("{}", DisplaySlice(&owner)), "<null>");
        assert_eq!(format!("{}", DisplaySlice(&moved)), "0 1 2");
    }
}
