// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation attributes that only apply to SVG content.

value_enum! {
    /// The shape at the end of an open stroke.
    pub enum LineCap {
        Butt = "butt",
        Round = "round",
        Square = "square",
    }
}

value_enum! {
    /// The shape at the corners of a stroke.
    pub enum LineJoin {
        Miter = "miter",
        Round = "round",
        Bevel = "bevel",
    }
}

value_enum! {
    /// The rule that decides which points are inside a path.
    pub enum WindRule {
        NonZero = "nonzero",
        EvenOdd = "evenodd",
    }
}

value_enum! {
    /// The baseline an inline box aligns to in its parent.
    pub enum AlignmentBaseline {
        Auto = "auto",
        Baseline = "baseline",
        BeforeEdge = "before-edge",
        TextBeforeEdge = "text-before-edge",
        Middle = "middle",
        Central = "central",
        AfterEdge = "after-edge",
        TextAfterEdge = "text-after-edge",
        Ideographic = "ideographic",
        Alphabetic = "alphabetic",
        Hanging = "hanging",
        Mathematical = "mathematical",
    }
}

value_enum! {
    /// The dominant baseline of a text content element.
    pub enum DominantBaseline {
        Auto = "auto",
        UseScript = "use-script",
        NoChange = "no-change",
        ResetSize = "reset-size",
        Ideographic = "ideographic",
        Alphabetic = "alphabetic",
        Hanging = "hanging",
        Mathematical = "mathematical",
        Central = "central",
        Middle = "middle",
        TextAfterEdge = "text-after-edge",
        TextBeforeEdge = "text-before-edge",
    }
}

value_enum! {
    /// A buffering hint for the renderer.
    pub enum BufferedRendering {
        Auto = "auto",
        Dynamic = "dynamic",
        Static = "static",
    }
}

value_enum! {
    /// The color space used for interpolation.
    pub enum ColorInterpolation {
        Auto = "auto",
        Srgb = "srgb",
        LinearRgb = "linearrgb",
    }
}

value_enum! {
    /// A color rendering quality hint.
    pub enum ColorRendering {
        Auto = "auto",
        OptimizeSpeed = "optimizespeed",
        OptimizeQuality = "optimizequality",
    }
}

value_enum! {
    /// A shape rendering quality hint.
    pub enum ShapeRendering {
        Auto = "auto",
        OptimizeSpeed = "optimizespeed",
        CrispEdges = "crispedges",
        GeometricPrecision = "geometricprecision",
    }
}

value_enum! {
    /// Alignment of text relative to its anchor point.
    pub enum TextAnchor {
        Start = "start",
        Middle = "middle",
        End = "end",
    }
}

value_enum! {
    /// Whether strokes are unaffected by transforms.
    pub enum VectorEffect {
        None = "none",
        NonScalingStroke = "non-scaling-stroke",
    }
}
