// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    Hyphens, LeadingTrim, LineAlign, LineBreak, LineSnap, MathStyle, NbspMode, Order,
    OverflowWrap, RubyPosition, TextAlignLast, TextAlignMode, TextCombine, TextDecorationSkipInk,
    TextDecorationStyle, TextDirection, TextEdgeType, TextEmphasisFill, TextEmphasisMark,
    TextGroupAlign, TextJustify, TextOrientation, TextOverflow, TextSecurity, TextTransform,
    TextUnderlinePosition, TextWrap, TextZoom, UnicodeBidi, WhiteSpace, WordBreak, WritingMode,
};

keyword_map! {
    TextAlignMode, fallback: Start;
    Left => Left,
    Right => Right,
    Center => Center,
    Justify => Justify,
    WebkitLeft => WebkitLeft,
    WebkitRight => WebkitRight,
    WebkitCenter => WebkitCenter,
    Start => Start | WebkitAuto,
    End => End,
}

keyword_map! {
    TextAlignLast, fallback: Auto;
    Auto => Auto,
    Start => Start,
    End => End,
    Left => Left,
    Right => Right,
    Center => Center,
    Justify => Justify,
}

keyword_map! {
    TextGroupAlign, fallback: None;
    None => None,
    Start => Start,
    End => End,
    Left => Left,
    Right => Right,
    Center => Center,
}

keyword_map! {
    TextJustify, fallback: Auto;
    Auto => Auto,
    None => None,
    InterWord => InterWord,
    InterCharacter => InterCharacter | Distribute,
}

keyword_map! {
    TextDecorationStyle, fallback: Solid;
    Solid => Solid,
    Double => Double,
    Dotted => Dotted,
    Dashed => Dashed,
    Wavy => Wavy,
}

keyword_map! {
    TextUnderlinePosition, fallback: Auto;
    Auto => Auto,
    Under => Under,
    FromFont => FromFont,
}

keyword_map! {
    TextDecorationSkipInk, fallback: None;
    None => None,
    Auto => Auto,
    All => All,
}

keyword_map! {
    TextSecurity, fallback: None;
    None => None,
    Disc => Disc,
    Circle => Circle,
    Square => Square,
}

keyword_map! {
    TextTransform, fallback: None;
    Capitalize => Capitalize,
    Uppercase => Uppercase,
    Lowercase => Lowercase,
    None => None,
}

keyword_map! {
    UnicodeBidi, fallback: Normal;
    Normal => Normal,
    Embed => Embed,
    Override => BidiOverride,
    Isolate => Isolate | WebkitIsolate,
    IsolateOverride => IsolateOverride | WebkitIsolateOverride,
    Plaintext => Plaintext | WebkitPlaintext,
}

keyword_map! {
    WhiteSpace, fallback: Normal;
    Normal => Normal,
    Pre => Pre,
    PreWrap => PreWrap,
    PreLine => PreLine,
    NoWrap => Nowrap,
    BreakSpaces => BreakSpaces,
}

keyword_map! {
    WordBreak, fallback: Normal;
    Normal => Normal,
    BreakAll => BreakAll,
    KeepAll => KeepAll,
    BreakWord => BreakWord,
}

keyword_map! {
    OverflowWrap, fallback: Normal;
    Normal => Normal,
    Anywhere => Anywhere,
    BreakWord => BreakWord,
}

keyword_map! {
    LineBreak, fallback: Auto;
    Auto => Auto,
    Loose => Loose,
    Normal => Normal,
    Strict => Strict,
    AfterWhiteSpace => AfterWhiteSpace,
    Anywhere => Anywhere,
}

keyword_map! {
    TextDirection, fallback: Ltr;
    Ltr => Ltr,
    Rtl => Rtl,
}

// The two-letter forms are the SVG 1.1 `writing-mode` values.
keyword_map! {
    WritingMode, fallback: HorizontalTb;
    HorizontalTb => HorizontalTb | Lr | LrTb | Rl | RlTb,
    VerticalRl => VerticalRl | Tb | TbRl,
    VerticalLr => VerticalLr,
    HorizontalBt => HorizontalBt,
}

keyword_map! {
    TextCombine, fallback: None;
    None => None,
    All => All | Horizontal,
}

keyword_map! {
    RubyPosition, fallback: Before;
    Before => Before,
    After => After,
    InterCharacter => InterCharacter,
}

keyword_map! {
    TextOverflow, fallback: Clip;
    Clip => Clip,
    Ellipsis => Ellipsis,
}

keyword_map! {
    TextWrap, fallback: Wrap;
    Wrap => Wrap,
    NoWrap => Nowrap,
    Balance => Balance,
    Stable => Stable,
    Pretty => Pretty,
}

keyword_map! {
    TextEmphasisFill, fallback: Filled;
    Filled => Filled,
    Open => Open,
}

// `none`, `auto` and custom strings are serialized by the caller.
keyword_map! {
    TextEmphasisMark, fallback: None;
    Dot => Dot,
    Circle => Circle,
    DoubleCircle => DoubleCircle,
    Triangle => Triangle,
    Sesame => Sesame,
    ; overrides: None => None,
    ; unrepresentable: None => None, Auto => None, Custom => None,
}

keyword_map! {
    TextOrientation, fallback: Mixed;
    Mixed => Mixed,
    Upright => Upright,
    Sideways => Sideways,
}

keyword_map! {
    Hyphens, fallback: Auto;
    None => None,
    Manual => Manual,
    Auto => Auto,
}

keyword_map! {
    LineSnap, fallback: None;
    None => None,
    Baseline => Baseline,
    Contain => Contain,
}

keyword_map! {
    LineAlign, fallback: None;
    None => None,
    Edges => Edges,
}

keyword_map! {
    Order, fallback: Logical;
    Logical => Logical,
    Visual => Visual,
}

keyword_map! {
    NbspMode, fallback: Normal;
    Normal => Normal,
    Space => Space,
}

keyword_map! {
    LeadingTrim, fallback: Normal;
    Normal => Normal,
    Start => Start,
    End => End,
    Both => Both,
}

keyword_map! {
    TextEdgeType, fallback: Leading;
    Leading => Leading,
    Text => Text,
    CapHeight => Cap,
    ExHeight => Ex,
    Alphabetic => Alphabetic,
    CjkIdeographic => Ideographic,
    CjkIdeographicInk => IdeographicInk,
}

keyword_map! {
    TextZoom, fallback: Normal;
    Normal => Normal,
    Reset => Reset,
}

keyword_map! {
    MathStyle, fallback: Normal;
    Normal => Normal,
    Compact => Compact,
}
