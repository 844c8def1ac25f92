// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat keyword identifier space shared by style systems.
//!
//! Every CSS keyword that a style property can take is a single [`Keyword`]. Keywords are
//! plain `Copy` identifiers: they carry their CSS spelling but no property semantics. Which
//! keyword denotes which property value is decided by a separate mapping layer.
//!
//! [`PropertyId`] names the handful of properties whose value mapping depends on the property
//! being serialized.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`Keyword`].
//!
//! ## Example
//!
//! ```
//! use style_keywords::Keyword;
//!
//! let keyword = Keyword::WebkitSticky;
//! assert_eq!(keyword.as_str(), "-webkit-sticky");
//! assert_eq!(Keyword::from_u16(keyword.to_u16()), Some(keyword));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod keyword;
mod property;


pub use keyword::Keyword;
pub use property::PropertyId;
