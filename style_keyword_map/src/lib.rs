// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional mapping between style value enumerations and keyword identifiers.
//!
//! Every enumeration in [`style_values`] has exactly one canonical [`Keyword`]
//! ([`ToKeyword`]), and may be recovered from that keyword and from any of its legacy or
//! vendor-prefixed synonyms ([`FromKeyword`]).
//!
//! ## Failure policy
//!
//! The mappings are total from the caller's point of view. Reverse lookups that receive a
//! keyword the enumeration does not know, and forward lookups of values that have no keyword
//! form, are programmer errors. They are reported through [`log`] and panic in builds with
//! `debug_assertions`. Release builds instead return a documented fallback: the type's
//! [`FromKeyword::FALLBACK`], or a placeholder keyword for the forward direction.
//!
//! Use [`FromKeyword::try_from_keyword`] to probe a keyword without triggering diagnostics.
//!
//! A few values serialize differently depending on the property they belong to
//! ([`ToKeywordInContext`]). Asking for a combination that has no serialization at all is
//! always a panic, in every build.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use style_keyword_map::{FromKeyword, ToKeyword, from_keyword};
//! use style_keywords::Keyword;
//! use style_values::{DisplayType, PositionType};
//!
//! assert_eq!(DisplayType::InlineBlock.to_keyword(), Keyword::InlineBlock);
//! assert_eq!(from_keyword::<DisplayType>(Keyword::None), DisplayType::None);
//!
//! // Vendor-prefixed spellings resolve to the same value.
//! assert_eq!(
//!     PositionType::from_keyword(Keyword::WebkitSticky),
//!     PositionType::Sticky
//! );
//! assert_eq!(PositionType::try_from_keyword(Keyword::Grid), None);
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

#[macro_use]
mod macros;

mod composite;
mod diagnostics;
mod flags;
mod flex;
mod font;
mod layout;
mod legacy;
mod paint;
mod primitive;
mod scroll;
mod svg;
mod text;
mod ui;

#[cfg(test)]
mod tests;

use core::any::type_name;
use core::fmt::Debug;

use style_keywords::{Keyword, PropertyId};

pub use legacy::{
    break_between_from_legacy, break_inside_from_legacy, font_stretch_keyword,
    font_stretch_percentage, legacy_break_keyword,
};
pub use primitive::{FromPrimitiveValue, PrimitiveValue};

/// Conversion of a value to its canonical keyword.
pub trait ToKeyword: Copy {
    /// Returns the canonical keyword for `self`.
    ///
    /// Values that have no keyword form are diagnosed and yield a placeholder keyword,
    /// documented on the value's type.
    fn to_keyword(self) -> Keyword;
}

/// Conversion of a value to a keyword for a specific property.
///
/// Implemented by values whose spelling depends on the property being serialized.
pub trait ToKeywordInContext: Copy {
    /// Returns the keyword for `self` as a value of `property`.
    ///
    /// # Panics
    ///
    /// Panics if `self` cannot be expressed as a value of `property`.
    fn to_keyword_in(self, property: PropertyId) -> Keyword;
}

/// Conversion of a keyword to a value.
pub trait FromKeyword: Copy + Debug {
    /// The value produced for a keyword that does not denote any value of this type.
    const FALLBACK: Self;

    /// Returns the value denoted by `keyword`, accepting canonical keywords and synonyms.
    ///
    /// Returns `None` for keywords that do not belong to this type. This never logs.
    fn try_from_keyword(keyword: Keyword) -> Option<Self>;

    /// Returns the value denoted by `keyword`.
    ///
    /// An unrecognized keyword is a programmer error: it is logged, panics when
    /// `debug_assertions` are enabled, and otherwise yields [`FALLBACK`](Self::FALLBACK).
    #[track_caller]
    fn from_keyword(keyword: Keyword) -> Self {
        match Self::try_from_keyword(keyword) {
            Some(value) => value,
            None => diagnostics::unrecognized_keyword(type_name::<Self>(), keyword, Self::FALLBACK),
        }
    }
}

/// Returns the value of type `T` denoted by `keyword`.
///
/// This is [`FromKeyword::from_keyword`] with the target type chosen by the caller.
///
/// ```
/// use style_keyword_map::from_keyword;
/// use style_keywords::Keyword;
/// use style_values::Overflow;
///
/// assert_eq!(from_keyword::<Overflow>(Keyword::Overlay), Overflow::Auto);
/// ```
#[track_caller]
pub fn from_keyword<T: FromKeyword>(keyword: Keyword) -> T {
    T::from_keyword(keyword)
}

/// Returns the canonical keyword for `value`.
pub fn to_keyword<T: ToKeyword>(value: T) -> Keyword {
    value.to_keyword()
}
