#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod default;

pub mod seq;
pub mod text;

// -----------------------------------------------------------------------------
// Top-level exports

pub use default::default;
