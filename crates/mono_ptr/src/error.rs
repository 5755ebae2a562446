use alloc::alloc::handle_alloc_error;
use core::alloc::Layout;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure to obtain heap memory for a new owned resource.
///
/// Returned by the fallible constructors ([`OwnedPtr::try_new`] and
/// [`OwnedSlicePtr::try_new_default`]). No owner is produced on failure and
/// nothing is left allocated. The infallible constructors escalate through
/// the global allocation error handler instead of returning this.
///
/// [`OwnedPtr::try_new`]: crate::OwnedPtr::try_new
/// [`OwnedSlicePtr::try_new_default`]: crate::OwnedSlicePtr::try_new_default
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AllocError {
    /// The global allocator returned null for the requested layout.
    #[error("heap allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    Exhausted {
        /// The layout the allocator rejected.
        layout: Layout,
    },

    /// The requested element count cannot be laid out in a single block.
    #[error("array of {len} elements overflows the maximum allocation size")]
    Oversized {
        /// The element count whose byte size overflowed.
        len: usize,
    },
}

impl AllocError {
    /// Escalates the failure the way the infallible constructors do:
    /// allocator exhaustion reaches the global allocation error handler,
    /// an oversized element count panics.
    pub(crate) fn escalate(self) -> ! {
        match self {
            AllocError::Exhausted { layout } => handle_alloc_error(layout),
            AllocError::Oversized { len } => {
                panic!("array of {len} elements overflows the maximum allocation size")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use core::alloc::Layout;

    use super::AllocError;

    #[test]
    fn messages_name_the_rejected_request() {
        let exhausted = AllocError::Exhausted {
            layout: Layout::new::<u64>(),
        };
        assert_eq!(
            format!("{exhausted}"),
            "heap allocation of 8 bytes (align 8) failed"
        );

        let oversized = AllocError::Oversized { len: usize::MAX };
        assert!(format!("{oversized}").contains("overflows"));
    }
}
