// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backgrounds, borders, compositing and replaced-content painting.

value_enum! {
    /// How a background image scrolls with its box.
    ///
    /// See: <https://www.w3.org/TR/css-backgrounds-3/#background-attachment>
    pub enum FillAttachment {
        Scroll = "scroll",
        Local = "local",
        Fixed = "fixed",
    }
}

value_enum! {
    /// The painting or positioning area of a background or mask layer.
    pub enum FillBox {
        Border = "border-box",
        Padding = "padding-box",
        Content = "content-box",
        Text = "text",
        NoClip = "no-clip",
    }
}

value_enum! {
    /// How a background image repeats along one axis.
    pub enum FillRepeat {
        Repeat = "repeat",
        NoRepeat = "no-repeat",
        Round = "round",
        Space = "space",
    }
}

value_enum! {
    /// The line style of a border or outline.
    ///
    /// See: <https://www.w3.org/TR/css-backgrounds-3/#border-style>
    pub enum BorderStyle {
        None = "none",
        Hidden = "hidden",
        Inset = "inset",
        Groove = "groove",
        Outset = "outset",
        Ridge = "ridge",
        Dotted = "dotted",
        Dashed = "dashed",
        Solid = "solid",
        Double = "double",
    }
}

value_enum! {
    /// Whether an outline was specified as `outline-style: auto`.
    pub enum OutlineIsAuto {
        /// The outline uses an explicit border style.
        Off,
        /// The outline uses the platform focus ring style.
        On,
    }
}

value_enum! {
    /// The table border model.
    pub enum BorderCollapse {
        Separate = "separate",
        Collapse = "collapse",
    }
}

value_enum! {
    /// How box decorations are applied to fragments of a broken box.
    pub enum BoxDecorationBreak {
        Slice = "slice",
        Clone = "clone",
    }
}

value_enum! {
    /// Whether the back face of a transformed element is visible.
    pub enum BackfaceVisibility {
        Visible = "visible",
        Hidden = "hidden",
    }
}

value_enum! {
    /// A Porter-Duff compositing operator.
    ///
    /// The same operator is spelled differently by `mask-composite` and by the compositing
    /// properties; see the keyword mapping layer for the property-dependent forms.
    pub enum CompositeOperator {
        /// Clears the destination.
        Clear,
        /// Replaces the destination with the source.
        Copy,
        /// The source is drawn over the destination.
        SourceOver,
        /// The source is kept where it overlaps the destination.
        SourceIn,
        /// The source is kept where it does not overlap the destination.
        SourceOut,
        /// The source is drawn over the destination where they overlap.
        SourceAtop,
        /// The destination is drawn over the source.
        DestinationOver,
        /// The destination is kept where it overlaps the source.
        DestinationIn,
        /// The destination is kept where it does not overlap the source.
        DestinationOut,
        /// The destination is drawn over the source where they overlap.
        DestinationAtop,
        /// Non-overlapping regions of source and destination are kept.
        Xor,
        /// Darkening additive composite.
        PlusDarker,
        /// Lightening additive composite.
        PlusLighter,
        /// The absolute difference of source and destination.
        ///
        /// Only produced internally; no compositing keyword names it.
        Difference,
    }
}

value_enum! {
    /// A separable or non-separable blend mode.
    ///
    /// See: <https://www.w3.org/TR/compositing-1/#ltblendmodegt>
    pub enum BlendMode {
        Normal = "normal",
        Multiply = "multiply",
        Screen = "screen",
        Overlay = "overlay",
        Darken = "darken",
        Lighten = "lighten",
        ColorDodge = "color-dodge",
        ColorBurn = "color-burn",
        HardLight = "hard-light",
        SoftLight = "soft-light",
        Difference = "difference",
        Exclusion = "exclusion",
        Hue = "hue",
        Saturation = "saturation",
        Color = "color",
        Luminosity = "luminosity",
        PlusDarker = "plus-darker",
        PlusLighter = "plus-lighter",
    }
}

value_enum! {
    /// Whether an element creates an isolated group for blending.
    pub enum Isolation {
        Auto = "auto",
        Isolate = "isolate",
    }
}

value_enum! {
    /// Which channel of a mask image is used as the mask value.
    pub enum MaskType {
        Luminance = "luminance",
        Alpha = "alpha",
    }
}

value_enum! {
    /// The scaling algorithm hint for images.
    pub enum ImageRendering {
        Auto = "auto",
        CrispEdges = "crisp-edges",
        Pixelated = "pixelated",
        OptimizeSpeed = "optimizespeed",
        OptimizeQuality = "optimizequality",
    }
}

value_enum! {
    /// How replaced content is fitted to its box.
    pub enum ObjectFit {
        Fill = "fill",
        Contain = "contain",
        Cover = "cover",
        None = "none",
        ScaleDown = "scale-down",
    }
}

value_enum! {
    /// The side on which `-webkit-box-reflect` draws its reflection.
    pub enum ReflectionDirection {
        Above = "above",
        Below = "below",
        Left = "left",
        Right = "right",
    }
}

value_enum! {
    /// Whether the user agent may adjust colors when printing.
    pub enum PrintColorAdjust {
        Economy = "economy",
        Exact = "exact",
    }
}

value_enum! {
    /// A CSS box edge used as a reference box.
    pub enum BoxType {
        MarginBox = "margin-box",
        BorderBox = "border-box",
        PaddingBox = "padding-box",
        ContentBox = "content-box",
        FillBox = "fill-box",
        StrokeBox = "stroke-box",
        ViewBox = "view-box",
        /// No reference box was given.
        Missing,
    }
}

value_enum! {
    /// The reference box for `transform` and `transform-origin`.
    pub enum TransformBox {
        StrokeBox = "stroke-box",
        ContentBox = "content-box",
        BorderBox = "border-box",
        FillBox = "fill-box",
        ViewBox = "view-box",
    }
}

value_enum! {
    /// Whether children of a transformed element are flattened into its plane.
    pub enum TransformStyle3d {
        Flat = "flat",
        Preserve3d = "preserve-3d",
        Optimized3d = "optimized-3d",
    }
}
