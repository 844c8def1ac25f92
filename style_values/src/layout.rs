// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box generation, positioning, overflow, tables, lists and fragmentation.

value_enum! {
    /// The box type generated by an element.
    ///
    /// See: <https://www.w3.org/TR/css-display-3/#the-display-properties>
    pub enum DisplayType {
        Inline = "inline",
        Block = "block",
        ListItem = "list-item",
        InlineBlock = "inline-block",
        Table = "table",
        InlineTable = "inline-table",
        TableRowGroup = "table-row-group",
        TableHeaderGroup = "table-header-group",
        TableFooterGroup = "table-footer-group",
        TableRow = "table-row",
        TableColumnGroup = "table-column-group",
        TableColumn = "table-column",
        TableCell = "table-cell",
        TableCaption = "table-caption",
        Box = "-webkit-box",
        InlineBox = "-webkit-inline-box",
        Flex = "flex",
        InlineFlex = "inline-flex",
        Grid = "grid",
        InlineGrid = "inline-grid",
        None = "none",
        Contents = "contents",
        FlowRoot = "flow-root",
    }
}

value_enum! {
    /// The positioning scheme of a box.
    pub enum PositionType {
        Static = "static",
        Relative = "relative",
        Absolute = "absolute",
        Fixed = "fixed",
        Sticky = "sticky",
    }
}

value_enum! {
    /// The side a box floats to.
    pub enum Float {
        None = "none",
        Left = "left",
        Right = "right",
        InlineStart = "inline-start",
        InlineEnd = "inline-end",
    }
}

value_enum! {
    /// Which preceding floats a box is moved below.
    pub enum Clear {
        None = "none",
        Left = "left",
        Right = "right",
        InlineStart = "inline-start",
        InlineEnd = "inline-end",
        Both = "both",
    }
}

value_enum! {
    /// How content that overflows its box is handled.
    ///
    /// See: <https://www.w3.org/TR/css-overflow-3/#overflow-properties>
    pub enum Overflow {
        Visible = "visible",
        Hidden = "hidden",
        Scroll = "scroll",
        Auto = "auto",
        PagedX = "-webkit-paged-x",
        PagedY = "-webkit-paged-y",
        Clip = "clip",
    }
}

value_enum! {
    /// Scroll chaining behavior at the edge of a scroll container.
    pub enum OverscrollBehavior {
        Auto = "auto",
        Contain = "contain",
        None = "none",
    }
}

value_enum! {
    /// Whether a box participates in scroll anchoring.
    pub enum OverflowAnchor {
        Auto = "auto",
        None = "none",
    }
}

value_enum! {
    /// Whether a box is rendered.
    pub enum Visibility {
        Visible = "visible",
        Hidden = "hidden",
        Collapse = "collapse",
    }
}

value_enum! {
    /// Whether an element renders its contents at all.
    pub enum ContentVisibility {
        Visible = "visible",
        Hidden = "hidden",
        Auto = "auto",
    }
}

value_enum! {
    /// The kind of size container an element establishes.
    pub enum ContainerType {
        Normal = "normal",
        Size = "size",
        InlineSize = "inline-size",
    }
}

value_enum! {
    /// Which box `width` and `height` apply to.
    pub enum BoxSizing {
        BorderBox = "border-box",
        ContentBox = "content-box",
    }
}

value_enum! {
    /// A physical box edge.
    pub enum Edge {
        Top = "top",
        Right = "right",
        Bottom = "bottom",
        Left = "left",
    }
}

value_enum! {
    /// The placement of a table caption.
    pub enum CaptionSide {
        Left = "left",
        Right = "right",
        Top = "top",
        Bottom = "bottom",
    }
}

value_enum! {
    /// Whether borders and backgrounds are drawn around empty table cells.
    pub enum EmptyCell {
        Show = "show",
        Hide = "hide",
    }
}

value_enum! {
    /// The table layout algorithm.
    pub enum TableLayoutType {
        Auto = "auto",
        Fixed = "fixed",
    }
}

value_enum! {
    /// How content is distributed between columns.
    pub enum ColumnFill {
        Auto = "auto",
        Balance = "balance",
    }
}

value_enum! {
    /// Whether an element spans all columns of its multi-column container.
    pub enum ColumnSpan {
        None = "none",
        All = "all",
    }
}

value_enum! {
    /// The axis along which columns are laid out.
    pub enum ColumnAxis {
        Horizontal = "horizontal",
        Vertical = "vertical",
        Auto = "auto",
    }
}

value_enum! {
    /// The direction in which columns progress.
    pub enum ColumnProgression {
        Normal = "normal",
        Reverse = "reverse",
    }
}

value_enum! {
    /// The break behavior before or after a box.
    ///
    /// See: <https://www.w3.org/TR/css-break-3/#break-between>
    pub enum BreakBetween {
        Auto = "auto",
        Avoid = "avoid",
        AvoidColumn = "avoid-column",
        AvoidPage = "avoid-page",
        Column = "column",
        Page = "page",
        LeftPage = "left",
        RightPage = "right",
        RectoPage = "recto",
        VersoPage = "verso",
    }
}

value_enum! {
    /// The break behavior within a box.
    pub enum BreakInside {
        Auto = "auto",
        Avoid = "avoid",
        AvoidColumn = "avoid-column",
        AvoidPage = "avoid-page",
    }
}

value_enum! {
    /// The position of a list marker relative to the principal box.
    pub enum ListStylePosition {
        Outside = "outside",
        Inside = "inside",
    }
}

value_enum! {
    /// The counter style of a list marker.
    pub enum ListStyleType {
        Disc = "disc",
        Circle = "circle",
        Square = "square",
        Decimal = "decimal",
        DecimalLeadingZero = "decimal-leading-zero",
        ArabicIndic = "arabic-indic",
        Binary = "binary",
        Bengali = "bengali",
        Cambodian = "cambodian",
        Khmer = "khmer",
        Devanagari = "devanagari",
        Gujarati = "gujarati",
        Gurmukhi = "gurmukhi",
        Kannada = "kannada",
        LowerHexadecimal = "lower-hexadecimal",
        Lao = "lao",
        Malayalam = "malayalam",
        Mongolian = "mongolian",
        Myanmar = "myanmar",
        Octal = "octal",
        Oriya = "oriya",
        Persian = "persian",
        Urdu = "urdu",
        Telugu = "telugu",
        Tibetan = "tibetan",
        Thai = "thai",
        UpperHexadecimal = "upper-hexadecimal",
        LowerRoman = "lower-roman",
        UpperRoman = "upper-roman",
        LowerGreek = "lower-greek",
        LowerAlpha = "lower-alpha",
        LowerLatin = "lower-latin",
        UpperAlpha = "upper-alpha",
        UpperLatin = "upper-latin",
        Ethiopic = "ethiopic",
        EthiopicHalehame = "ethiopic-halehame",
        EthiopicAbegede = "ethiopic-abegede",
        CjkEarthlyBranch = "cjk-earthly-branch",
        CjkHeavenlyStem = "cjk-heavenly-stem",
        CjkIdeographic = "cjk-ideographic",
        Hangul = "hangul",
        HangulConsonant = "hangul-consonant",
        Hiragana = "hiragana",
        HiraganaIroha = "hiragana-iroha",
        Katakana = "katakana",
        KatakanaIroha = "katakana-iroha",
        Armenian = "armenian",
        LowerArmenian = "lower-armenian",
        UpperArmenian = "upper-armenian",
        Georgian = "georgian",
        Hebrew = "hebrew",
        None = "none",
        /// The marker is a literal string. The string itself is stored elsewhere.
        String,
    }
}

value_enum! {
    /// The animation style of a marquee.
    pub enum MarqueeBehavior {
        None = "none",
        Scroll = "scroll",
        Slide = "slide",
        Alternate = "alternate",
    }
}

value_enum! {
    /// The direction a marquee moves in.
    pub enum MarqueeDirection {
        Auto = "auto",
        Left = "left",
        Right = "right",
        Up = "up",
        Down = "down",
        Forward = "forwards",
        Backward = "backwards",
    }
}

value_enum! {
    /// Vertical alignment of an inline-level box within its line.
    pub enum VerticalAlign {
        Baseline = "baseline",
        Middle = "middle",
        Sub = "sub",
        Super = "super",
        TextTop = "text-top",
        TextBottom = "text-bottom",
        Top = "top",
        Bottom = "bottom",
        BaselineMiddle = "-webkit-baseline-middle",
        /// The box is shifted by a length or percentage stored elsewhere.
        Length,
    }
}

/// The unit of a [`LineClamp`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineClampKind {
    /// The value is a number of lines.
    LineCount,
    /// The value is a percentage of the total line count.
    Percentage,
}

/// A `-webkit-line-clamp` value.
///
/// ```
/// use style_values::{LineClamp, LineClampKind};
///
/// assert!(LineClamp::NONE.is_none());
/// let clamp = LineClamp::new(3, LineClampKind::LineCount);
/// assert_eq!(clamp.value(), 3);
/// assert!(!clamp.is_percentage());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineClamp {
    value: i32,
    kind: LineClampKind,
}

impl LineClamp {
    /// No clamping.
    pub const NONE: Self = Self {
        value: -1,
        kind: LineClampKind::LineCount,
    };

    /// Creates a clamp of `value` in the given unit.
    pub const fn new(value: i32, kind: LineClampKind) -> Self {
        Self { value, kind }
    }

    /// The clamp amount.
    pub const fn value(self) -> i32 {
        self.value
    }

    /// The unit of [`value`](Self::value).
    pub const fn kind(self) -> LineClampKind {
        self.kind
    }

    /// Returns `true` if the value is a percentage of the line count.
    pub const fn is_percentage(self) -> bool {
        matches!(self.kind, LineClampKind::Percentage)
    }

    /// Returns `true` if no clamping applies.
    pub const fn is_none(self) -> bool {
        self.value == -1
    }
}

impl Default for LineClamp {
    fn default() -> Self {
        Self::NONE
    }
}
