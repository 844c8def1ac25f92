// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy shorthands and keyword forms of numeric values.

use core::any::type_name;

use style_keywords::{Keyword, PropertyId};
use style_values::{BreakBetween, BreakInside};

use crate::diagnostics;

/// Returns the value of a legacy break shorthand given the keyword of its modern longhand.
///
/// `page-break-before`/`-after` and `-webkit-column-break-before`/`-after` serialize
/// `break-before`/`-after`. `page-break-inside` and `-webkit-column-break-inside` serialize
/// `break-inside`. Returns `None` when the longhand value cannot be written with the
/// shorthand, in which case the shorthand has no serialization.
///
/// ```
/// use style_keyword_map::legacy_break_keyword;
/// use style_keywords::{Keyword, PropertyId};
///
/// assert_eq!(
///     legacy_break_keyword(PropertyId::PageBreakBefore, Keyword::Page),
///     Some(Keyword::Always)
/// );
/// assert_eq!(
///     legacy_break_keyword(PropertyId::WebkitColumnBreakAfter, Keyword::AvoidColumn),
///     Some(Keyword::Avoid)
/// );
/// assert_eq!(legacy_break_keyword(PropertyId::PageBreakAfter, Keyword::Column), None);
/// ```
///
/// # Panics
///
/// Panics if `shorthand` is not a legacy break shorthand.
#[track_caller]
pub fn legacy_break_keyword(shorthand: PropertyId, longhand: Keyword) -> Option<Keyword> {
    match shorthand {
        PropertyId::PageBreakBefore | PropertyId::PageBreakAfter => match longhand {
            Keyword::Page => Some(Keyword::Always),
            Keyword::Auto | Keyword::Avoid | Keyword::Left | Keyword::Right => Some(longhand),
            _ => None,
        },
        PropertyId::WebkitColumnBreakBefore | PropertyId::WebkitColumnBreakAfter => {
            match longhand {
                Keyword::Column => Some(Keyword::Always),
                Keyword::AvoidColumn => Some(Keyword::Avoid),
                Keyword::Auto => Some(Keyword::Auto),
                _ => None,
            }
        }
        PropertyId::PageBreakInside | PropertyId::WebkitColumnBreakInside => match longhand {
            Keyword::Auto | Keyword::Avoid => Some(longhand),
            _ => None,
        },
        _ => diagnostics::invalid_context(longhand, shorthand),
    }
}

/// Returns the `break-before`/`-after` value written as a legacy shorthand keyword.
///
/// `always` means a page break for the `page-break-*` shorthands and a column break for the
/// `-webkit-column-break-*` shorthands. An unrecognized keyword is handled like any other
/// unrecognized keyword and yields [`BreakBetween::Auto`].
///
/// ```
/// use style_keyword_map::break_between_from_legacy;
/// use style_keywords::{Keyword, PropertyId};
/// use style_values::BreakBetween;
///
/// assert_eq!(
///     break_between_from_legacy(PropertyId::WebkitColumnBreakBefore, Keyword::Always),
///     BreakBetween::Column
/// );
/// assert_eq!(
///     break_between_from_legacy(PropertyId::PageBreakBefore, Keyword::Left),
///     BreakBetween::LeftPage
/// );
/// ```
///
/// # Panics
///
/// Panics if `shorthand` is not a legacy `before`/`after` break shorthand.
#[track_caller]
pub fn break_between_from_legacy(shorthand: PropertyId, keyword: Keyword) -> BreakBetween {
    let value = match shorthand {
        PropertyId::PageBreakBefore | PropertyId::PageBreakAfter => match keyword {
            Keyword::Always => Some(BreakBetween::Page),
            Keyword::Auto => Some(BreakBetween::Auto),
            Keyword::Avoid => Some(BreakBetween::Avoid),
            Keyword::Left => Some(BreakBetween::LeftPage),
            Keyword::Right => Some(BreakBetween::RightPage),
            _ => None,
        },
        PropertyId::WebkitColumnBreakBefore | PropertyId::WebkitColumnBreakAfter => {
            match keyword {
                Keyword::Always => Some(BreakBetween::Column),
                Keyword::Auto => Some(BreakBetween::Auto),
                Keyword::Avoid => Some(BreakBetween::AvoidColumn),
                _ => None,
            }
        }
        _ => diagnostics::invalid_context(keyword, shorthand),
    };
    match value {
        Some(value) => value,
        None => diagnostics::unrecognized_keyword(
            type_name::<BreakBetween>(),
            keyword,
            BreakBetween::Auto,
        ),
    }
}

/// Returns the `break-inside` value written as a legacy shorthand keyword.
///
/// Both inside shorthands read `avoid` as [`BreakInside::Avoid`], the value
/// [`legacy_break_keyword`] writes as `avoid`.
///
/// ```
/// use style_keyword_map::break_inside_from_legacy;
/// use style_keywords::{Keyword, PropertyId};
/// use style_values::BreakInside;
///
/// assert_eq!(
///     break_inside_from_legacy(PropertyId::WebkitColumnBreakInside, Keyword::Avoid),
///     BreakInside::Avoid
/// );
/// ```
///
/// # Panics
///
/// Panics if `shorthand` is not a legacy `inside` break shorthand.
#[track_caller]
pub fn break_inside_from_legacy(shorthand: PropertyId, keyword: Keyword) -> BreakInside {
    let value = match shorthand {
        PropertyId::PageBreakInside | PropertyId::WebkitColumnBreakInside => match keyword {
            Keyword::Auto => Some(BreakInside::Auto),
            Keyword::Avoid => Some(BreakInside::Avoid),
            _ => None,
        },
        _ => diagnostics::invalid_context(keyword, shorthand),
    };
    match value {
        Some(value) => value,
        None => diagnostics::unrecognized_keyword(
            type_name::<BreakInside>(),
            keyword,
            BreakInside::Auto,
        ),
    }
}

/// The `font-stretch` keywords and the percentages they stand for.
const FONT_STRETCH_KEYWORDS: [(Keyword, f32); 9] = [
    (Keyword::UltraCondensed, 50.0),
    (Keyword::ExtraCondensed, 62.5),
    (Keyword::Condensed, 75.0),
    (Keyword::SemiCondensed, 87.5),
    (Keyword::Normal, 100.0),
    (Keyword::SemiExpanded, 112.5),
    (Keyword::Expanded, 125.0),
    (Keyword::ExtraExpanded, 150.0),
    (Keyword::UltraExpanded, 200.0),
];

/// Returns the `font-stretch` keyword for a width percentage, if there is one.
///
/// Only exact matches are converted. A percentage that does not survive conversion to
/// `f32` unchanged is never written as a keyword, even if it would round to one.
///
/// ```
/// use style_keyword_map::font_stretch_keyword;
/// use style_keywords::Keyword;
///
/// assert_eq!(font_stretch_keyword(87.5), Some(Keyword::SemiCondensed));
/// assert_eq!(font_stretch_keyword(90.0), None);
/// ```
pub fn font_stretch_keyword(percentage: f64) -> Option<Keyword> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Narrowing is intended; values that change are rejected below."
    )]
    let narrowed = percentage as f32;
    if f64::from(narrowed) != percentage {
        return None;
    }
    FONT_STRETCH_KEYWORDS
        .iter()
        .find(|(_, value)| *value == narrowed)
        .map(|(keyword, _)| *keyword)
}

/// Returns the width percentage of a `font-stretch` keyword.
pub fn font_stretch_percentage(keyword: Keyword) -> Option<f32> {
    FONT_STRETCH_KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == keyword)
        .map(|(_, value)| *value)
}
