// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flexible box layout, in both its legacy `-webkit-box` form and its current form, and box
//! alignment.

value_enum! {
    /// Legacy `-webkit-box-pack`.
    pub enum BoxPack {
        Start = "start",
        Center = "center",
        End = "end",
        Justify = "justify",
    }
}

value_enum! {
    /// Legacy `-webkit-box-align`.
    pub enum BoxAlignment {
        Stretch = "stretch",
        Start = "start",
        Center = "center",
        End = "end",
        Baseline = "baseline",
    }
}

value_enum! {
    /// Legacy `-webkit-box-direction`.
    pub enum BoxDirection {
        Normal = "normal",
        Reverse = "reverse",
    }
}

value_enum! {
    /// Legacy `-webkit-box-lines`.
    pub enum BoxLines {
        Single = "single",
        Multiple = "multiple",
    }
}

value_enum! {
    /// Legacy `-webkit-box-orient`.
    pub enum BoxOrient {
        Horizontal = "horizontal",
        Vertical = "vertical",
    }
}

value_enum! {
    /// The main axis of a flex container.
    pub enum FlexDirection {
        Row = "row",
        RowReverse = "row-reverse",
        Column = "column",
        ColumnReverse = "column-reverse",
    }
}

value_enum! {
    /// Whether flex items wrap onto multiple lines.
    pub enum FlexWrap {
        NoWrap = "nowrap",
        Wrap = "wrap",
        Reverse = "wrap-reverse",
    }
}

value_enum! {
    /// The self-alignment of a box within its alignment container.
    ///
    /// See: <https://www.w3.org/TR/css-align-3/#self-alignment>
    pub enum ItemPosition {
        Legacy = "legacy",
        Auto = "auto",
        Normal = "normal",
        Stretch = "stretch",
        Baseline = "baseline",
        LastBaseline = "last baseline",
        Center = "center",
        Start = "start",
        End = "end",
        SelfStart = "self-start",
        SelfEnd = "self-end",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        Left = "left",
        Right = "right",
    }
}

value_enum! {
    /// The overflow-position modifier of an alignment value.
    pub enum OverflowAlignment {
        Default = "default",
        Unsafe = "unsafe",
        Safe = "safe",
    }
}

value_enum! {
    /// The positional part of a content-distribution value.
    pub enum ContentPosition {
        Normal = "normal",
        Baseline = "baseline",
        LastBaseline = "last baseline",
        Center = "center",
        Start = "start",
        End = "end",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        Left = "left",
        Right = "right",
    }
}

value_enum! {
    /// The distribution part of a content-distribution value.
    pub enum ContentDistribution {
        Default = "default",
        SpaceBetween = "space-between",
        SpaceAround = "space-around",
        SpaceEvenly = "space-evenly",
        Stretch = "stretch",
    }
}
