// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties whose value is a set of independent facets.

use bitflags::bitflags;

bitflags! {
    /// Values for the `touch-action` property.
    ///
    /// `auto` and `none` are flags of their own rather than the full and empty sets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TouchAction: u8 {
        /// `auto`
        const AUTO = 1 << 0;
        /// `none`
        const NONE = 1 << 1;
        /// `manipulation`
        const MANIPULATION = 1 << 2;
        /// `pan-x`
        const PAN_X = 1 << 3;
        /// `pan-y`
        const PAN_Y = 1 << 4;
        /// `pinch-zoom`
        const PINCH_ZOOM = 1 << 5;
    }
}

bitflags! {
    /// Values for the `text-decoration-line` property. `none` is the empty set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TextDecorationLine: u8 {
        /// `underline`
        const UNDERLINE = 1 << 0;
        /// `overline`
        const OVERLINE = 1 << 1;
        /// `line-through`
        const LINE_THROUGH = 1 << 2;
        /// `blink`
        const BLINK = 1 << 3;
    }
}

bitflags! {
    /// Values for the `hanging-punctuation` property. `none` is the empty set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HangingPunctuation: u8 {
        /// `first`
        const FIRST = 1 << 0;
        /// `last`
        const LAST = 1 << 1;
        /// `allow-end`
        const ALLOW_END = 1 << 2;
        /// `force-end`
        const FORCE_END = 1 << 3;
    }
}

bitflags! {
    /// Values for the `speak-as` property. `normal` is the empty set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SpeakAs: u8 {
        /// `spell-out`
        const SPELL_OUT = 1 << 0;
        /// `digits`
        const DIGITS = 1 << 1;
        /// `literal-punctuation`
        const LITERAL_PUNCTUATION = 1 << 2;
        /// `no-punctuation`
        const NO_PUNCTUATION = 1 << 3;
    }
}
