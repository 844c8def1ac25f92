// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag sets map one keyword to one flag. Joining several flags into a list is left to the
//! serializer.

use style_values::{HangingPunctuation, SpeakAs, TextDecorationLine, TouchAction};

flag_keyword_map! {
    TouchAction, fallback: Self::AUTO;
    AUTO => Auto,
    NONE => None,
    MANIPULATION => Manipulation,
    PAN_X => PanX,
    PAN_Y => PanY,
    PINCH_ZOOM => PinchZoom,
}

flag_keyword_map! {
    TextDecorationLine, fallback: Self::empty(), empty: None;
    UNDERLINE => Underline,
    OVERLINE => Overline,
    LINE_THROUGH => LineThrough,
    BLINK => Blink,
}

flag_keyword_map! {
    HangingPunctuation, fallback: Self::empty(), empty: None;
    FIRST => First,
    LAST => Last,
    ALLOW_END => AllowEnd,
    FORCE_END => ForceEnd,
}

flag_keyword_map! {
    SpeakAs, fallback: Self::empty(), empty: Normal;
    SPELL_OUT => SpellOut,
    DIGITS => Digits,
    LITERAL_PUNCTUATION => LiteralPunctuation,
    NO_PUNCTUATION => NoPunctuation,
}
