#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use mono_ptr as ptr;
pub use mono_utils as utils;
