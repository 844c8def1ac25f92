// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_keywords::Keyword;
use style_values::{
    BackfaceVisibility, BlendMode, BorderCollapse, BorderStyle, BoxDecorationBreak, BoxType,
    FillAttachment, FillBox, FillRepeat, ImageRendering, Isolation, MaskType, ObjectFit,
    OutlineIsAuto, PrintColorAdjust, ReflectionDirection, TransformBox, TransformStyle3d,
};

use crate::FromKeyword;

keyword_map! {
    FillAttachment, fallback: Scroll;
    Scroll => Scroll,
    Local => Local,
    Fixed => Fixed,
}

// The bare box keywords are the `background-clip` spellings from CSS 2.
keyword_map! {
    FillBox, fallback: Border;
    Border => BorderBox | Border,
    Padding => PaddingBox | Padding,
    Content => ContentBox | Content,
    Text => Text | WebkitText,
    NoClip => NoClip,
}

keyword_map! {
    FillRepeat, fallback: Repeat;
    Repeat => Repeat,
    NoRepeat => NoRepeat,
    Round => Round,
    Space => Space,
}

// `auto` is only valid for `outline-style`, where it is drawn dotted.
keyword_map! {
    BorderStyle, fallback: None;
    None => None,
    Hidden => Hidden,
    Inset => Inset,
    Groove => Groove,
    Outset => Outset,
    Ridge => Ridge,
    Dotted => Dotted,
    Dashed => Dashed,
    Solid => Solid,
    Double => Double,
    ; overrides: Auto => Dotted,
}

/// `outline-style: auto` is the only way to turn the flag on, so every keyword maps to a
/// value and the lookup never fails.
impl FromKeyword for OutlineIsAuto {
    const FALLBACK: Self = Self::Off;

    fn try_from_keyword(keyword: Keyword) -> Option<Self> {
        Some(if keyword == Keyword::Auto {
            Self::On
        } else {
            Self::Off
        })
    }
}

keyword_map! {
    BorderCollapse, fallback: Separate;
    Separate => Separate,
    Collapse => Collapse,
}

keyword_map! {
    BoxDecorationBreak, fallback: Slice;
    Slice => Slice,
    Clone => Clone,
}

keyword_map! {
    BackfaceVisibility, fallback: Visible;
    Visible => Visible,
    Hidden => Hidden,
}

keyword_map! {
    BlendMode, fallback: Normal;
    Normal => Normal,
    Multiply => Multiply,
    Screen => Screen,
    Overlay => Overlay,
    Darken => Darken,
    Lighten => Lighten,
    ColorDodge => ColorDodge,
    ColorBurn => ColorBurn,
    HardLight => HardLight,
    SoftLight => SoftLight,
    Difference => Difference,
    Exclusion => Exclusion,
    Hue => Hue,
    Saturation => Saturation,
    Color => Color,
    Luminosity => Luminosity,
    PlusDarker => PlusDarker,
    PlusLighter => PlusLighter,
}

keyword_map! {
    Isolation, fallback: Auto;
    Auto => Auto,
    Isolate => Isolate,
}

keyword_map! {
    MaskType, fallback: Luminance;
    Luminance => Luminance,
    Alpha => Alpha,
}

keyword_map! {
    ImageRendering, fallback: Auto;
    Auto => Auto,
    CrispEdges => CrispEdges | WebkitCrispEdges | WebkitOptimizeContrast,
    Pixelated => Pixelated,
    OptimizeSpeed => OptimizeSpeed,
    OptimizeQuality => OptimizeQuality,
}

keyword_map! {
    ObjectFit, fallback: Fill;
    Fill => Fill,
    Contain => Contain,
    Cover => Cover,
    None => None,
    ScaleDown => ScaleDown,
}

keyword_map! {
    ReflectionDirection, fallback: Above;
    Above => Above,
    Below => Below,
    Left => Left,
    Right => Right,
}

keyword_map! {
    PrintColorAdjust, fallback: Economy;
    Economy => Economy,
    Exact => Exact,
}

keyword_map! {
    BoxType, fallback: Missing;
    MarginBox => MarginBox,
    BorderBox => BorderBox,
    PaddingBox => PaddingBox,
    ContentBox => ContentBox,
    FillBox => FillBox,
    StrokeBox => StrokeBox,
    ViewBox => ViewBox,
    ; unrepresentable: Missing => None,
}

keyword_map! {
    TransformBox, fallback: BorderBox;
    StrokeBox => StrokeBox,
    ContentBox => ContentBox,
    BorderBox => BorderBox,
    FillBox => FillBox,
    ViewBox => ViewBox,
}

keyword_map! {
    TransformStyle3d, fallback: Flat;
    Flat => Flat,
    Preserve3d => Preserve3d,
    Optimized3d => Optimized3d,
}
