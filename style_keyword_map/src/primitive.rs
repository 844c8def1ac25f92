// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values given as parsed primitives rather than bare keywords.

use core::any::type_name;

use style_keywords::Keyword;
use style_values::{ColumnSpan, LineClamp, LineClampKind};

use crate::{FromKeyword, diagnostics};

/// A parsed primitive value: a keyword, or a number in one of the units that keyword-valued
/// properties accept for compatibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveValue {
    /// A keyword.
    Keyword(Keyword),
    /// A unitless number.
    Number(f64),
    /// An integer.
    Integer(i32),
    /// A percentage, where `100.0` is 100%.
    Percentage(f64),
}

impl PrimitiveValue {
    /// Returns the keyword, if this is one.
    pub const fn keyword(self) -> Option<Keyword> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }
}

impl From<Keyword> for PrimitiveValue {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

/// Conversion of a primitive value to a value.
///
/// For most types only a keyword is meaningful. A few accept numbers for compatibility with
/// older syntax.
///
/// ```
/// use style_keyword_map::{FromPrimitiveValue, PrimitiveValue};
/// use style_values::ColumnSpan;
///
/// // `column-span: 1` is a legacy spelling of `none`.
/// assert_eq!(
///     ColumnSpan::from_primitive_value(PrimitiveValue::Integer(1)),
///     ColumnSpan::None
/// );
/// ```
pub trait FromPrimitiveValue: Sized {
    /// Returns the value denoted by `value`.
    ///
    /// A primitive that does not denote a value is handled like an unrecognized keyword.
    fn from_primitive_value(value: PrimitiveValue) -> Self;
}

#[track_caller]
pub(crate) fn keyword_from_primitive<T: FromKeyword>(value: PrimitiveValue) -> T {
    match value {
        PrimitiveValue::Keyword(keyword) => T::from_keyword(keyword),
        other => diagnostics::unrecognized_primitive(type_name::<T>(), other, T::FALLBACK),
    }
}

impl FromPrimitiveValue for ColumnSpan {
    fn from_primitive_value(value: PrimitiveValue) -> Self {
        match value {
            PrimitiveValue::Integer(1) => Self::None,
            PrimitiveValue::Number(number) if number == 1.0 => Self::None,
            other => keyword_from_primitive(other),
        }
    }
}

impl FromPrimitiveValue for LineClamp {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Percentages are clamped to whole values, saturating at the `i32` range."
    )]
    fn from_primitive_value(value: PrimitiveValue) -> Self {
        match value {
            PrimitiveValue::Integer(lines) => Self::new(lines, LineClampKind::LineCount),
            PrimitiveValue::Percentage(percent) => Self::new(percent as i32, LineClampKind::Percentage),
            other => diagnostics::unrecognized_primitive(type_name::<Self>(), other, Self::NONE),
        }
    }
}

impl From<LineClamp> for PrimitiveValue {
    fn from(clamp: LineClamp) -> Self {
        match clamp.kind() {
            LineClampKind::LineCount => Self::Integer(clamp.value()),
            LineClampKind::Percentage => Self::Percentage(f64::from(clamp.value())),
        }
    }
}
