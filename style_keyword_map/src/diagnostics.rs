// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reporting for mapping requests that violate a caller contract.
//!
//! All failures are logged. Recoverable ones panic only when `debug_assertions` are enabled.

use core::fmt::Debug;

use style_keywords::{Keyword, PropertyId};

use crate::PrimitiveValue;

/// A reverse lookup received a keyword that names no value of `ty`.
#[cold]
#[track_caller]
pub(crate) fn unrecognized_keyword<T: Debug>(ty: &str, keyword: Keyword, fallback: T) -> T {
    log::warn!("`{keyword}` ({keyword:?}) is not a keyword for {ty}; using {fallback:?}");
    if cfg!(debug_assertions) {
        panic!("`{keyword}` ({keyword:?}) is not a keyword for {ty}");
    }
    fallback
}

/// A forward lookup was asked for a value that has no keyword form.
#[cold]
#[track_caller]
pub(crate) fn unrepresentable_value<T: Debug>(value: T, placeholder: Keyword) -> Keyword {
    log::warn!("{value:?} has no keyword form; using `{placeholder}`");
    if cfg!(debug_assertions) {
        panic!("{value:?} has no keyword form");
    }
    placeholder
}

/// A property-dependent forward lookup was asked for a value the property cannot express.
#[cold]
#[track_caller]
pub(crate) fn invalid_context<T: Debug>(value: T, property: PropertyId) -> ! {
    log::error!("{value:?} cannot be serialized as a value of `{property}`");
    panic!("{value:?} cannot be serialized as a value of `{property}`");
}

/// A value was given as a primitive that the target type cannot be built from.
#[cold]
#[track_caller]
pub(crate) fn unrecognized_primitive<T: Debug>(ty: &str, value: PrimitiveValue, fallback: T) -> T {
    log::warn!("{value:?} is not a valid {ty}; using {fallback:?}");
    if cfg!(debug_assertions) {
        panic!("{value:?} is not a valid {ty}");
    }
    fallback
}
