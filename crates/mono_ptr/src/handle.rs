use core::mem;

// -----------------------------------------------------------------------------
// OwningHandle

/// The capability set shared by the owner types.
///
/// An implementor is a value in one of two states: holding a raw handle to a
/// heap resource it must eventually release, or the null state, holding
/// nothing. Every operation here preserves the exclusivity invariant: at any
/// point, exactly one owner (or, after [`release`](Self::release), exactly
/// one caller) is responsible for a given resource.
///
/// The two implementors differ in handle shape and release strategy:
/// [`OwnedPtr<T>`](crate::OwnedPtr) works on thin `*mut T` handles and frees
/// a single object, [`OwnedSlicePtr<T>`](crate::OwnedSlicePtr) works on fat
/// `*mut [T]` handles and frees a whole block. Code that only needs the
/// shared protocol can be written against this trait.
///
/// # Examples
///
/// ```
/// use mono_ptr::{OwnedPtr, OwningHandle};
///
/// let mut owner = OwnedPtr::new(5);
///
/// let moved = owner.take();
/// assert!(owner.is_null());
/// assert_eq!(*moved, 5);
/// ```
pub trait OwningHandle: Sized {
    /// The raw handle released to and adopted from callers.
    ///
    /// A thin `*mut T` for the scalar owner, a fat `*mut [T]` for the block
    /// owner. The handle by itself carries no ownership semantics.
    type Raw: Copy;

    /// The owner in the null state, holding no resource.
    fn null() -> Self;

    /// Adopts `raw`, taking sole responsibility for releasing it.
    ///
    /// A null `raw` produces the null owner.
    ///
    /// # Safety
    ///
    /// A non-null `raw` must point to a live allocation compatible with this
    /// owner's release strategy (for these implementors: one obtained from
    /// [`Box::into_raw`](alloc::boxed::Box::into_raw) or from
    /// [`release`](Self::release) on an owner of the same shape), and no
    /// other owner or caller may free or alias it afterwards.
    unsafe fn from_raw(raw: Self::Raw) -> Self;

    /// Returns the raw handle without transferring ownership.
    ///
    /// Null when the owner is in the null state. The caller must not free
    /// the resource through the returned handle.
    fn as_raw(&self) -> Self::Raw;

    /// Whether the owner is in the null state.
    fn is_null(&self) -> bool;

    /// Detaches and returns the raw handle without destroying the resource.
    ///
    /// The owner reverts to the null state and the caller becomes solely
    /// responsible for the resource's lifetime, typically by adopting the
    /// handle again through [`from_raw`](Self::from_raw).
    fn release(&mut self) -> Self::Raw;

    /// Destroys the held resource (if any), then adopts `raw`.
    ///
    /// On a null owner this only adopts; nothing is destroyed.
    ///
    /// # Safety
    ///
    /// `raw` must satisfy the [`from_raw`](Self::from_raw) contract. It must
    /// also not be the handle this owner currently holds: the held resource
    /// is destroyed first, so adopting it again would leave the owner with a
    /// dangling handle.
    unsafe fn reset(&mut self, raw: Self::Raw);

    /// Moves the resource out, leaving this owner in the null state.
    ///
    /// This is the observable form of a move transfer: the source reverts to
    /// null and the returned owner holds exactly the resource the source
    /// held. Assigning the result over another owner destroys that owner's
    /// prior resource, once.
    #[inline]
    fn take(&mut self) -> Self {
        mem::replace(self, Self::null())
    }

    /// Exchanges the held resources of two owners of the same shape.
    ///
    /// A pure handle exchange: no allocation, no destruction, and both
    /// owners uphold the exclusivity invariant before and after.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_ptr::{OwnedPtr, OwningHandle};
    ///
    /// let mut first = OwnedPtr::new(1);
    /// let mut second = OwnedPtr::new(2);
    ///
    /// first.swap(&mut second);
    /// assert_eq!(*first, 2);
    /// assert_eq!(*second, 1);
    /// ```
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::OwningHandle;
    use crate::{OwnedPtr, OwnedSlicePtr};

    fn shuttle<H: OwningHandle>(owner: &mut H) -> H {
        owner.take()
    }

    #[test]
    fn protocol_is_shape_generic() {
        let mut scalar = OwnedPtr::new(5);
        let moved = shuttle(&mut scalar);
        assert!(scalar.is_null());
        assert_eq!(*moved, 5);

        let mut block = OwnedSlicePtr::<u8>::new_default(2);
        let moved = shuttle(&mut block);
        assert!(block.is_null());
        assert_eq!(moved.len(), 2);
    }
}
