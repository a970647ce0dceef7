//! IPv4 CIDR arithmetic library.
//!
//! This crate provides pure, side-effect-free functions for IPv4
//! address-block arithmetic: dotted-quad / 32-bit integer conversion,
//! netmask / prefix-length conversion, and CIDR block algebra — most
//! importantly, decomposing an arbitrary address range into the minimal
//! set of properly aligned CIDR blocks, and splitting one block into
//! aligned sub-blocks at a target prefix length.

pub mod addr;
pub mod block;
pub mod error;
pub mod mask;
pub mod summarize;

pub use addr::{format_ipv4, parse_ipv4};
pub use block::{Ipv4Block, block_to_range, ip_within_block};
pub use error::CidrError;
pub use mask::{is_valid_netmask, mask_to_prefix, popcount, prefix_to_mask};
pub use summarize::{
    largest_aligned_prefix, split_block, split_block_strs, summarize_range, summarize_range_strs,
};
