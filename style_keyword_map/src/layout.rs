// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    BoxSizing, BreakBetween, BreakInside, CaptionSide, Clear, ColumnAxis, ColumnFill,
    ColumnProgression, ColumnSpan, ContainerType, ContentVisibility, DisplayType, Edge,
    EmptyCell, Float, ListStylePosition, ListStyleType, MarqueeBehavior, MarqueeDirection,
    Overflow, OverflowAnchor, OverscrollBehavior, PositionType, TableLayoutType, VerticalAlign,
    Visibility,
};

keyword_map! {
    DisplayType, fallback: Inline;
    Inline => Inline,
    Block => Block,
    ListItem => ListItem,
    InlineBlock => InlineBlock,
    Table => Table,
    InlineTable => InlineTable,
    TableRowGroup => TableRowGroup,
    TableHeaderGroup => TableHeaderGroup,
    TableFooterGroup => TableFooterGroup,
    TableRow => TableRow,
    TableColumnGroup => TableColumnGroup,
    TableColumn => TableColumn,
    TableCell => TableCell,
    TableCaption => TableCaption,
    Box => WebkitBox,
    InlineBox => WebkitInlineBox,
    Flex => Flex,
    InlineFlex => InlineFlex,
    Grid => Grid,
    InlineGrid => InlineGrid,
    None => None,
    Contents => Contents,
    FlowRoot => FlowRoot,
}

keyword_map! {
    PositionType, fallback: Static;
    Static => Static,
    Relative => Relative,
    Absolute => Absolute,
    Fixed => Fixed,
    Sticky => Sticky | WebkitSticky,
}

keyword_map! {
    Float, fallback: None;
    None => None | Center,
    Left => Left,
    Right => Right,
    InlineStart => InlineStart,
    InlineEnd => InlineEnd,
}

keyword_map! {
    Clear, fallback: None;
    None => None,
    Left => Left,
    Right => Right,
    InlineStart => InlineStart,
    InlineEnd => InlineEnd,
    Both => Both,
}

// `overlay` is a legacy synonym for `auto`.
keyword_map! {
    Overflow, fallback: Visible;
    Visible => Visible,
    Hidden => Hidden,
    Scroll => Scroll,
    Auto => Auto | Overlay,
    PagedX => WebkitPagedX,
    PagedY => WebkitPagedY,
    Clip => Clip,
}

keyword_map! {
    OverscrollBehavior, fallback: Auto;
    Auto => Auto,
    Contain => Contain,
    None => None,
}

keyword_map! {
    OverflowAnchor, fallback: Auto;
    Auto => Auto,
    None => None,
}

keyword_map! {
    Visibility, fallback: Visible;
    Visible => Visible,
    Hidden => Hidden,
    Collapse => Collapse,
}

keyword_map! {
    ContentVisibility, fallback: Visible;
    Visible => Visible,
    Hidden => Hidden,
    Auto => Auto,
}

keyword_map! {
    ContainerType, fallback: Normal;
    Normal => Normal,
    Size => Size,
    InlineSize => InlineSize,
}

keyword_map! {
    BoxSizing, fallback: ContentBox;
    BorderBox => BorderBox,
    ContentBox => ContentBox,
}

keyword_map! {
    Edge, fallback: Top;
    Top => Top,
    Right => Right,
    Bottom => Bottom,
    Left => Left,
}

keyword_map! {
    CaptionSide, fallback: Top;
    Left => Left,
    Right => Right,
    Top => Top,
    Bottom => Bottom,
}

keyword_map! {
    EmptyCell, fallback: Show;
    Show => Show,
    Hide => Hide,
}

keyword_map! {
    TableLayoutType, fallback: Auto;
    Auto => Auto,
    Fixed => Fixed,
}

keyword_map! {
    ColumnFill, fallback: Auto;
    Auto => Auto,
    Balance => Balance,
}

// Numeric `1` is handled in `FromPrimitiveValue`.
keyword_map! {
    ColumnSpan, fallback: None, primitive: custom;
    None => None,
    All => All,
}

keyword_map! {
    ColumnAxis, fallback: Auto;
    Horizontal => Horizontal,
    Vertical => Vertical,
    Auto => Auto,
}

keyword_map! {
    ColumnProgression, fallback: Normal;
    Normal => Normal,
    Reverse => Reverse,
}

keyword_map! {
    BreakBetween, fallback: Auto;
    Auto => Auto,
    Avoid => Avoid,
    AvoidColumn => AvoidColumn,
    AvoidPage => AvoidPage,
    Column => Column,
    Page => Page,
    LeftPage => Left,
    RightPage => Right,
    RectoPage => Recto,
    VersoPage => Verso,
}

keyword_map! {
    BreakInside, fallback: Auto;
    Auto => Auto,
    Avoid => Avoid,
    AvoidColumn => AvoidColumn,
    AvoidPage => AvoidPage,
}

keyword_map! {
    ListStylePosition, fallback: Outside;
    Outside => Outside,
    Inside => Inside,
}

keyword_map! {
    ListStyleType, fallback: Disc;
    Disc => Disc,
    Circle => Circle,
    Square => Square,
    Decimal => Decimal,
    DecimalLeadingZero => DecimalLeadingZero,
    ArabicIndic => ArabicIndic,
    Binary => Binary,
    Bengali => Bengali,
    Cambodian => Cambodian,
    Khmer => Khmer,
    Devanagari => Devanagari,
    Gujarati => Gujarati,
    Gurmukhi => Gurmukhi,
    Kannada => Kannada,
    LowerHexadecimal => LowerHexadecimal,
    Lao => Lao,
    Malayalam => Malayalam,
    Mongolian => Mongolian,
    Myanmar => Myanmar,
    Octal => Octal,
    Oriya => Oriya,
    Persian => Persian,
    Urdu => Urdu,
    Telugu => Telugu,
    Tibetan => Tibetan,
    Thai => Thai,
    UpperHexadecimal => UpperHexadecimal,
    LowerRoman => LowerRoman,
    UpperRoman => UpperRoman,
    LowerGreek => LowerGreek,
    LowerAlpha => LowerAlpha,
    LowerLatin => LowerLatin,
    UpperAlpha => UpperAlpha,
    UpperLatin => UpperLatin,
    Ethiopic => Ethiopic,
    EthiopicHalehame => EthiopicHalehame,
    EthiopicAbegede => EthiopicAbegede,
    CjkEarthlyBranch => CjkEarthlyBranch,
    CjkHeavenlyStem => CjkHeavenlyStem,
    CjkIdeographic => CjkIdeographic,
    Hangul => Hangul,
    HangulConsonant => HangulConsonant,
    Hiragana => Hiragana,
    HiraganaIroha => HiraganaIroha,
    Katakana => Katakana,
    KatakanaIroha => KatakanaIroha,
    Armenian => Armenian,
    LowerArmenian => LowerArmenian,
    UpperArmenian => UpperArmenian,
    Georgian => Georgian,
    Hebrew => Hebrew,
    None => None,
    ; unrepresentable: String => Invalid,
}

keyword_map! {
    MarqueeBehavior, fallback: None;
    None => None,
    Scroll => Scroll,
    Slide => Slide,
    Alternate => Alternate,
}

keyword_map! {
    MarqueeDirection, fallback: Auto;
    Auto => Auto,
    Left => Left,
    Right => Right,
    Up => Up | Ahead,
    Down => Down | Reverse,
    Forward => Forwards,
    Backward => Backwards,
}

keyword_map! {
    VerticalAlign, fallback: Top;
    Baseline => Baseline,
    Middle => Middle,
    Sub => Sub,
    Super => Super,
    TextTop => TextTop,
    TextBottom => TextBottom,
    Top => Top,
    Bottom => Bottom,
    BaselineMiddle => WebkitBaselineMiddle,
    ; unrepresentable: Length => Invalid,
}
