use alloc::alloc::alloc;
use alloc::boxed::Box;
use core::alloc::Layout;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use crate::error::AllocError;
use crate::handle::OwningHandle;

// -----------------------------------------------------------------------------
// OwnedPtr

/// A single-owner pointer to one heap-allocated value.
///
/// # Ownership
///
/// Exactly one `OwnedPtr` is responsible for a given value at any time.
/// Dropping the owner frees the value with the single-object release
/// strategy; [`release`](OwningHandle::release) detaches the handle and hands
/// that responsibility to the caller instead. The type cannot be cloned or
/// copied, so no construct produces two owners of the same value.
///
/// # Null state
///
/// An owner may hold nothing: after [`null`](OwnedPtr::null),
/// [`take`](OwningHandle::take) or [`release`](OwningHandle::release).
/// Dropping or resetting a null owner is a no-op. Dereferencing one is a
/// caller error and panics; use [`get`](OwnedPtr::get) for a checked peek.
///
/// # Examples
///
/// ```
/// use mono_ptr::{OwnedPtr, OwningHandle};
///
/// let mut owner = OwnedPtr::new(41);
/// *owner += 1;
/// assert_eq!(*owner, 42);
///
/// let raw = owner.release();
/// assert!(owner.is_null());
///
/// // The caller is now responsible for the value; adopt it back.
/// let owner = unsafe { OwnedPtr::from_raw(raw) };
/// assert_eq!(*owner, 42);
/// ```
pub struct OwnedPtr<T> {
    ptr: Option<NonNull<T>>,
}

// SAFETY: the owner is the unique holder of its allocation; sending it to
// another thread moves the `T` along with it.
unsafe impl<T: Send> Send for OwnedPtr<T> {}

// SAFETY: shared access to the owner only yields `&T`.
unsafe impl<T: Sync> Sync for OwnedPtr<T> {}

impl<T> OwnedPtr<T> {
    /// Creates an owner in the null state.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_ptr::{OwnedPtr, OwningHandle};
    ///
    /// let owner: OwnedPtr<i32> = OwnedPtr::null();
    /// assert!(owner.is_null());
    /// assert!(owner.as_raw().is_null());
    /// ```
    #[inline]
    pub const fn null() -> Self {
        OwnedPtr { ptr: None }
    }

    /// Allocates `value` on the heap and returns its owner.
    ///
    /// Construction happens at the call site and the finished value moves
    /// into the fresh allocation. On allocator exhaustion this escalates to
    /// the global allocation error handler; use
    /// [`try_new`](OwnedPtr::try_new) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_ptr::OwnedPtr;
    ///
    /// let owner = OwnedPtr::new(7);
    /// assert_eq!(*owner, 7);
    /// ```
    #[inline]
    pub fn new(value: T) -> OwnedPtr<T> {
        // SAFETY: `Box::into_raw` hands over a unique allocation compatible
        // with this owner's release strategy.
        unsafe { Self::from_raw(Box::into_raw(Box::new(value))) }
    }

    /// Allocates `value` on the heap, reporting allocation failure.
    ///
    /// On failure no owner is produced, nothing stays allocated and `value`
    /// is dropped normally.
    ///
    /// # Errors
    ///
    /// [`AllocError::Exhausted`] when the global allocator cannot provide
    /// the value's layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_ptr::OwnedPtr;
    ///
    /// let owner = OwnedPtr::try_new(7)?;
    /// assert_eq!(*owner, 7);
    /// # Ok::<(), mono_ptr::AllocError>(())
    /// ```
    pub fn try_new(value: T) -> Result<OwnedPtr<T>, AllocError> {
        let layout = Layout::new::<T>();
        let data = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has non-zero size.
            let raw = unsafe { alloc(layout) };
            match NonNull::new(raw.cast::<T>()) {
                Some(data) => data,
                None => return Err(AllocError::Exhausted { layout }),
            }
        };
        // SAFETY: `data` is writable, properly aligned and uninitialized.
        unsafe { data.as_ptr().write(value) };
        Ok(OwnedPtr { ptr: Some(data) })
    }

    /// Returns a shared reference to the owned value, or `None` on a null
    /// owner.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_ptr::OwnedPtr;
    ///
    /// let owner = OwnedPtr::new(7);
    /// assert_eq!(owner.get(), Some(&7));
    ///
    /// let owner: OwnedPtr<i32> = OwnedPtr::null();
    /// assert_eq!(owner.get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: a held handle always refers to a live, initialized value.
        self.ptr.map(|data| unsafe { data.as_ref() })
    }

    /// Returns a mutable reference to the owned value, or `None` on a null
    /// owner.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a held handle always refers to a live, initialized value,
        // and `&mut self` makes this the only access.
        self.ptr.map(|mut data| unsafe { data.as_mut() })
    }
}

impl<T> OwningHandle for OwnedPtr<T> {
    type Raw = *mut T;

    #[inline]
    fn null() -> Self {
        OwnedPtr::null()
    }

    #[inline]
    unsafe fn from_raw(raw: *mut T) -> Self {
        OwnedPtr {
            ptr: NonNull::new(raw),
        }
    }

    #[inline]
    fn as_raw(&self) -> *mut T {
        match self.ptr {
            Some(data) => data.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    #[inline]
    fn release(&mut self) -> *mut T {
        match self.ptr.take() {
            Some(data) => data.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    unsafe fn reset(&mut self, raw: *mut T) {
        if let Some(old) = self.ptr.take() {
            // SAFETY: held handles always originate from Box-compatible
            // allocations, and the caller guarantees `raw` is not `old`.
            unsafe { drop(Box::from_raw(old.as_ptr())) };
        }
        self.ptr = NonNull::new(raw);
    }
}

impl<T> Drop for OwnedPtr<T> {
    fn drop(&mut self) {
        if let Some(data) = self.ptr {
            // SAFETY: held handles always originate from Box-compatible
            // allocations; rebuilding the box is the single-object release.
            unsafe { drop(Box::from_raw(data.as_ptr())) };
        }
    }
}

impl<T> Default for OwnedPtr<T> {
    #[inline]
    fn default() -> Self {
        OwnedPtr::null()
    }
}

impl<T> Deref for OwnedPtr<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics on a null owner.
    #[inline]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a null OwnedPtr"),
        }
    }
}

impl<T> DerefMut for OwnedPtr<T> {
    /// # Panics
    ///
    /// Panics on a null owner.
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced a null OwnedPtr"),
        }
    }
}

impl<T> From<Box<T>> for OwnedPtr<T> {
    #[inline]
    fn from(boxed: Box<T>) -> Self {
        // SAFETY: `Box::into_raw` hands over a unique allocation compatible
        // with this owner's release strategy.
        unsafe { Self::from_raw(Box::into_raw(boxed)) }
    }
}

impl<T> fmt::Pointer for OwnedPtr<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.as_raw(), f)
    }
}

impl<T> fmt::Debug for OwnedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnedPtr({:?})", self.as_raw())
    }
}

// -----------------------------------------------------------------------------
// Tests
