//! This crate provides single-owner pointers over heap allocations.
//!
//! An owner holds exclusive responsibility for releasing one heap resource.
//! It releases that resource exactly once: when the owner is dropped, or when
//! the resource is replaced through [`reset`](OwningHandle::reset). Detaching
//! without releasing is possible through [`release`](OwningHandle::release),
//! which hands the raw handle (and the responsibility) back to the caller.
//!
//! **OwnedPtr**
//!
//! [`OwnedPtr<T>`] owns a single heap-allocated value and dereferences to it.
//! Its raw handle is a thin `*mut T` and its release strategy frees one
//! object.
//!
//! **OwnedSlicePtr**
//!
//! [`OwnedSlicePtr<T>`] owns a contiguous heap-allocated block of `T` and
//! exposes indexed access instead of a single pointee. Its raw handle is a
//! fat `*mut [T]`, so the element count travels with the handle, and its
//! release strategy frees the whole block.
//!
//! **OwningHandle**
//!
//! [`OwningHandle`] is the capability set both owners share: adopt a raw
//! handle, peek at it, release it, reset to a new one, take the resource out,
//! or swap with another owner of the same shape.
//!
//! Owners cannot be cloned or copied. Moving one transfers the resource;
//! [`take`](OwningHandle::take) does the same while leaving the source behind
//! in the null state, which is the observable form of a move transfer.
//!
//! Fallible constructors report allocation failure as [`AllocError`] instead
//! of going through the global allocation error handler.
#![expect(unsafe_code, reason = "Owning raw handles requires raw-pointer work.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod handle;
mod owned;
mod owned_slice;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::AllocError;
pub use handle::OwningHandle;
pub use owned::OwnedPtr;
pub use owned_slice::OwnedSlicePtr;
