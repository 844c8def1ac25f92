// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline text layout, decoration and writing modes.

value_enum! {
    /// Horizontal alignment of inline content within a block.
    ///
    /// See: <https://www.w3.org/TR/css-text-3/#text-align-property>
    pub enum TextAlignMode {
        Left = "left",
        Right = "right",
        Center = "center",
        Justify = "justify",
        WebkitLeft = "-webkit-left",
        WebkitRight = "-webkit-right",
        WebkitCenter = "-webkit-center",
        Start = "start",
        End = "end",
    }
}

value_enum! {
    /// Alignment of the last line of a block.
    pub enum TextAlignLast {
        Auto = "auto",
        Start = "start",
        End = "end",
        Left = "left",
        Right = "right",
        Center = "center",
        Justify = "justify",
    }
}

value_enum! {
    /// Alignment of a block's lines as a group.
    pub enum TextGroupAlign {
        None = "none",
        Start = "start",
        End = "end",
        Left = "left",
        Right = "right",
        Center = "center",
    }
}

value_enum! {
    /// The justification method.
    pub enum TextJustify {
        Auto = "auto",
        None = "none",
        InterWord = "inter-word",
        InterCharacter = "inter-character",
    }
}

value_enum! {
    /// The line style of a text decoration.
    pub enum TextDecorationStyle {
        Solid = "solid",
        Double = "double",
        Dotted = "dotted",
        Dashed = "dashed",
        Wavy = "wavy",
    }
}

value_enum! {
    /// Where an underline is positioned.
    pub enum TextUnderlinePosition {
        Auto = "auto",
        Under = "under",
        FromFont = "from-font",
    }
}

value_enum! {
    /// Whether decorations skip glyph ink.
    pub enum TextDecorationSkipInk {
        None = "none",
        Auto = "auto",
        All = "all",
    }
}

value_enum! {
    /// The glyph used to obscure characters in a secure text field.
    pub enum TextSecurity {
        None = "none",
        Disc = "disc",
        Circle = "circle",
        Square = "square",
    }
}

value_enum! {
    /// Case transformation applied to text.
    pub enum TextTransform {
        Capitalize = "capitalize",
        Uppercase = "uppercase",
        Lowercase = "lowercase",
        None = "none",
    }
}

value_enum! {
    /// The bidirectional embedding level behavior.
    ///
    /// See: <https://www.w3.org/TR/css-writing-modes-3/#unicode-bidi>
    pub enum UnicodeBidi {
        Normal = "normal",
        Embed = "embed",
        Override = "bidi-override",
        Isolate = "isolate",
        IsolateOverride = "isolate-override",
        Plaintext = "plaintext",
    }
}

value_enum! {
    /// White space collapsing and wrapping.
    pub enum WhiteSpace {
        Normal = "normal",
        Pre = "pre",
        PreWrap = "pre-wrap",
        PreLine = "pre-line",
        NoWrap = "nowrap",
        BreakSpaces = "break-spaces",
    }
}

value_enum! {
    /// Soft wrap opportunities between letters.
    pub enum WordBreak {
        Normal = "normal",
        BreakAll = "break-all",
        KeepAll = "keep-all",
        BreakWord = "break-word",
    }
}

value_enum! {
    /// Whether unbreakable strings may be broken to prevent overflow.
    pub enum OverflowWrap {
        Normal = "normal",
        Anywhere = "anywhere",
        BreakWord = "break-word",
    }
}

value_enum! {
    /// The strictness of line breaking rules.
    pub enum LineBreak {
        Auto = "auto",
        Loose = "loose",
        Normal = "normal",
        Strict = "strict",
        AfterWhiteSpace = "after-white-space",
        Anywhere = "anywhere",
    }
}

value_enum! {
    /// The inline base direction.
    pub enum TextDirection {
        Ltr = "ltr",
        Rtl = "rtl",
    }
}

value_enum! {
    /// The block flow direction and line orientation.
    ///
    /// See: <https://www.w3.org/TR/css-writing-modes-3/#block-flow>
    pub enum WritingMode {
        HorizontalTb = "horizontal-tb",
        VerticalRl = "vertical-rl",
        VerticalLr = "vertical-lr",
        HorizontalBt = "horizontal-bt",
    }
}

value_enum! {
    /// Whether characters are combined horizontally in vertical text.
    pub enum TextCombine {
        None = "none",
        All = "all",
    }
}

value_enum! {
    /// The position of ruby annotations.
    pub enum RubyPosition {
        Before = "before",
        After = "after",
        InterCharacter = "inter-character",
    }
}

value_enum! {
    /// How overflowing inline content is signaled.
    pub enum TextOverflow {
        Clip = "clip",
        Ellipsis = "ellipsis",
    }
}

value_enum! {
    /// The text wrapping style.
    pub enum TextWrap {
        Wrap = "wrap",
        NoWrap = "nowrap",
        Balance = "balance",
        Stable = "stable",
        Pretty = "pretty",
    }
}

value_enum! {
    /// Whether emphasis marks are filled.
    pub enum TextEmphasisFill {
        Filled = "filled",
        Open = "open",
    }
}

value_enum! {
    /// The shape of an emphasis mark.
    pub enum TextEmphasisMark {
        /// No emphasis mark.
        None,
        /// The shape is chosen from the writing mode.
        Auto,
        Dot = "dot",
        Circle = "circle",
        DoubleCircle = "double-circle",
        Triangle = "triangle",
        Sesame = "sesame",
        /// The mark is a string stored elsewhere.
        Custom,
    }
}

value_enum! {
    /// Glyph orientation in vertical text.
    pub enum TextOrientation {
        Mixed = "mixed",
        Upright = "upright",
        Sideways = "sideways",
    }
}

value_enum! {
    /// Whether hyphenation is allowed.
    pub enum Hyphens {
        None = "none",
        Manual = "manual",
        Auto = "auto",
    }
}

value_enum! {
    /// How lines snap to a line grid.
    pub enum LineSnap {
        None = "none",
        Baseline = "baseline",
        Contain = "contain",
    }
}

value_enum! {
    /// How lines align to a line grid.
    pub enum LineAlign {
        None = "none",
        Edges = "edges",
    }
}

value_enum! {
    /// Whether text is stored in logical or visual order.
    pub enum Order {
        Logical = "logical",
        Visual = "visual",
    }
}

value_enum! {
    /// Whether non-breaking spaces are treated as ordinary spaces.
    pub enum NbspMode {
        Normal = "normal",
        Space = "space",
    }
}

value_enum! {
    /// Which half-leading is trimmed from the first and last lines.
    pub enum LeadingTrim {
        Normal = "normal",
        Start = "start",
        End = "end",
        Both = "both",
    }
}

value_enum! {
    /// The font metric used for the edges of an inline box.
    pub enum TextEdgeType {
        Leading = "leading",
        Text = "text",
        CapHeight = "cap",
        ExHeight = "ex",
        Alphabetic = "alphabetic",
        CjkIdeographic = "ideographic",
        CjkIdeographicInk = "ideographic-ink",
    }
}

value_enum! {
    /// Whether inherited text zoom is reset.
    pub enum TextZoom {
        Normal = "normal",
        Reset = "reset",
    }
}

value_enum! {
    /// The math layout style.
    pub enum MathStyle {
        Normal = "normal",
        Compact = "compact",
    }
}
