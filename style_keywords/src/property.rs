// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identifies a style property whose value mapping depends on which property is being
/// serialized or parsed.
///
/// Only properties that need such context are listed here. Most values map to the same
/// keyword regardless of property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PropertyId {
    /// `mask-composite`
    MaskComposite = 0,
    /// `-webkit-mask-composite`
    WebkitMaskComposite = 1,
    /// `page-break-before`
    PageBreakBefore = 2,
    /// `page-break-after`
    PageBreakAfter = 3,
    /// `page-break-inside`
    PageBreakInside = 4,
    /// `-webkit-column-break-before`
    WebkitColumnBreakBefore = 5,
    /// `-webkit-column-break-after`
    WebkitColumnBreakAfter = 6,
    /// `-webkit-column-break-inside`
    WebkitColumnBreakInside = 7,
    // NOTICE: If a new value is added, be sure to modify `MAX_VALUE`.
}

impl PropertyId {
    /// Returns the maximum numeric value for known variants.
    pub const MAX_VALUE: u8 = Self::WebkitColumnBreakInside as u8;

    /// Returns the CSS name of this property.
    ///
    /// ```
    /// use style_keywords::PropertyId;
    ///
    /// assert_eq!(PropertyId::MaskComposite.as_str(), "mask-composite");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaskComposite => "mask-composite",
            Self::WebkitMaskComposite => "-webkit-mask-composite",
            Self::PageBreakBefore => "page-break-before",
            Self::PageBreakAfter => "page-break-after",
            Self::PageBreakInside => "page-break-inside",
            Self::WebkitColumnBreakBefore => "-webkit-column-break-before",
            Self::WebkitColumnBreakAfter => "-webkit-column-break-after",
            Self::WebkitColumnBreakInside => "-webkit-column-break-inside",
        }
    }

    /// Returns an iterator over all property identifiers.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        [
            Self::MaskComposite,
            Self::WebkitMaskComposite,
            Self::PageBreakBefore,
            Self::PageBreakAfter,
            Self::PageBreakInside,
            Self::WebkitColumnBreakBefore,
            Self::WebkitColumnBreakAfter,
            Self::WebkitColumnBreakInside,
        ]
        .into_iter()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
