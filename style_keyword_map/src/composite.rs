// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compositing operators.
//!
//! `mask-composite` names four of the Porter-Duff operators after the set operation they
//! perform on mask coverage. Every other property uses the canvas compositing names.

use style_keywords::{Keyword, PropertyId};
use style_values::CompositeOperator;

use crate::{FromKeyword, FromPrimitiveValue, PrimitiveValue, ToKeyword, ToKeywordInContext};
use crate::{diagnostics, primitive};

impl ToKeywordInContext for CompositeOperator {
    /// ```
    /// use style_keyword_map::ToKeywordInContext;
    /// use style_keywords::{Keyword, PropertyId};
    /// use style_values::CompositeOperator;
    ///
    /// let op = CompositeOperator::SourceIn;
    /// assert_eq!(op.to_keyword_in(PropertyId::MaskComposite), Keyword::Intersect);
    /// assert_eq!(op.to_keyword_in(PropertyId::WebkitMaskComposite), Keyword::SourceIn);
    /// ```
    #[track_caller]
    fn to_keyword_in(self, property: PropertyId) -> Keyword {
        if property == PropertyId::MaskComposite {
            return match self {
                Self::SourceOver => Keyword::Add,
                Self::SourceIn => Keyword::Intersect,
                Self::SourceOut => Keyword::Subtract,
                Self::Xor => Keyword::Exclude,
                Self::Clear
                | Self::Copy
                | Self::SourceAtop
                | Self::DestinationOver
                | Self::DestinationIn
                | Self::DestinationOut
                | Self::DestinationAtop
                | Self::PlusDarker
                | Self::PlusLighter
                | Self::Difference => diagnostics::invalid_context(self, property),
            };
        }
        match self {
            Self::Clear => Keyword::Clear,
            Self::Copy => Keyword::Copy,
            Self::SourceOver => Keyword::SourceOver,
            Self::SourceIn => Keyword::SourceIn,
            Self::SourceOut => Keyword::SourceOut,
            Self::SourceAtop => Keyword::SourceAtop,
            Self::DestinationOver => Keyword::DestinationOver,
            Self::DestinationIn => Keyword::DestinationIn,
            Self::DestinationOut => Keyword::DestinationOut,
            Self::DestinationAtop => Keyword::DestinationAtop,
            Self::Xor => Keyword::Xor,
            Self::PlusDarker => Keyword::PlusDarker,
            Self::PlusLighter => Keyword::PlusLighter,
            Self::Difference => diagnostics::invalid_context(self, property),
        }
    }
}

/// Serializes with the compositing names used outside of `mask-composite`.
impl ToKeyword for CompositeOperator {
    #[track_caller]
    fn to_keyword(self) -> Keyword {
        self.to_keyword_in(PropertyId::WebkitMaskComposite)
    }
}

/// Accepts the names of both property families.
impl FromKeyword for CompositeOperator {
    const FALLBACK: Self = Self::Clear;

    fn try_from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Clear => Self::Clear,
            Keyword::Copy => Self::Copy,
            Keyword::SourceOver | Keyword::Add => Self::SourceOver,
            Keyword::SourceIn | Keyword::Intersect => Self::SourceIn,
            Keyword::SourceOut | Keyword::Subtract => Self::SourceOut,
            Keyword::SourceAtop => Self::SourceAtop,
            Keyword::DestinationOver => Self::DestinationOver,
            Keyword::DestinationIn => Self::DestinationIn,
            Keyword::DestinationOut => Self::DestinationOut,
            Keyword::DestinationAtop => Self::DestinationAtop,
            Keyword::Xor | Keyword::Exclude => Self::Xor,
            Keyword::PlusDarker => Self::PlusDarker,
            Keyword::PlusLighter => Self::PlusLighter,
            _ => return None,
        })
    }
}

impl FromPrimitiveValue for CompositeOperator {
    fn from_primitive_value(value: PrimitiveValue) -> Self {
        primitive::keyword_from_primitive(value)
    }
}
