// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    AlignmentBaseline, BufferedRendering, ColorInterpolation, ColorRendering, DominantBaseline,
    LineCap, LineJoin, ShapeRendering, TextAnchor, VectorEffect, WindRule,
};

keyword_map! {
    LineCap, fallback: Butt;
    Butt => Butt,
    Round => Round,
    Square => Square,
}

keyword_map! {
    LineJoin, fallback: Miter;
    Miter => Miter,
    Round => Round,
    Bevel => Bevel,
}

keyword_map! {
    WindRule, fallback: NonZero;
    NonZero => Nonzero,
    EvenOdd => Evenodd,
}

keyword_map! {
    AlignmentBaseline, fallback: Auto;
    Auto => Auto,
    Baseline => Baseline,
    BeforeEdge => BeforeEdge,
    TextBeforeEdge => TextBeforeEdge,
    Middle => Middle,
    Central => Central,
    AfterEdge => AfterEdge,
    TextAfterEdge => TextAfterEdge,
    Ideographic => Ideographic,
    Alphabetic => Alphabetic,
    Hanging => Hanging,
    Mathematical => Mathematical,
}

keyword_map! {
    DominantBaseline, fallback: Auto;
    Auto => Auto,
    UseScript => UseScript,
    NoChange => NoChange,
    ResetSize => ResetSize,
    Ideographic => Ideographic,
    Alphabetic => Alphabetic,
    Hanging => Hanging,
    Mathematical => Mathematical,
    Central => Central,
    Middle => Middle,
    TextAfterEdge => TextAfterEdge,
    TextBeforeEdge => TextBeforeEdge,
}

keyword_map! {
    BufferedRendering, fallback: Auto;
    Auto => Auto,
    Dynamic => Dynamic,
    Static => Static,
}

keyword_map! {
    ColorInterpolation, fallback: Auto;
    Auto => Auto,
    Srgb => SRGB,
    LinearRgb => LinearRGB,
}

keyword_map! {
    ColorRendering, fallback: Auto;
    Auto => Auto,
    OptimizeSpeed => OptimizeSpeed,
    OptimizeQuality => OptimizeQuality,
}

// SVG spells this without the hyphen used by `image-rendering`.
keyword_map! {
    ShapeRendering, fallback: Auto;
    Auto => Auto,
    OptimizeSpeed => OptimizeSpeed,
    CrispEdges => Crispedges,
    GeometricPrecision => GeometricPrecision,
}

keyword_map! {
    TextAnchor, fallback: Start;
    Start => Start,
    Middle => Middle,
    End => End,
}

keyword_map! {
    VectorEffect, fallback: None;
    None => None,
    NonScalingStroke => NonScalingStroke,
}
