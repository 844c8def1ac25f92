// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    FontLoadingBehavior, FontOpticalSizing, FontSmallCaps, FontSmoothingMode,
    FontSynthesisLonghand, FontVariantCaps, FontVariantPosition, Kerning, TextRenderingMode,
};

keyword_map! {
    Kerning, fallback: Auto;
    Auto => Auto,
    Normal => Normal,
    NoShift => None,
}

keyword_map! {
    FontSmoothingMode, fallback: Auto;
    Auto => Auto,
    None => None,
    Antialiased => Antialiased,
    SubpixelAntialiased => SubpixelAntialiased,
}

keyword_map! {
    FontSmallCaps, fallback: Off;
    Off => Normal,
    On => SmallCaps,
}

keyword_map! {
    TextRenderingMode, fallback: Auto;
    Auto => Auto,
    OptimizeSpeed => OptimizeSpeed,
    OptimizeLegibility => OptimizeLegibility,
    GeometricPrecision => GeometricPrecision,
}

keyword_map! {
    FontVariantPosition, fallback: Normal;
    Normal => Normal,
    Subscript => Sub,
    Superscript => Super,
}

keyword_map! {
    FontVariantCaps, fallback: Normal;
    Normal => Normal,
    Small => SmallCaps,
    AllSmall => AllSmallCaps,
    Petite => PetiteCaps,
    AllPetite => AllPetiteCaps,
    Unicase => Unicase,
    Titling => TitlingCaps,
}

keyword_map! {
    FontOpticalSizing, fallback: Enabled;
    Enabled => Auto,
    Disabled => None,
}

keyword_map! {
    FontSynthesisLonghand, fallback: Auto;
    Auto => Auto,
    None => None,
}

keyword_map! {
    FontLoadingBehavior, fallback: Auto;
    Auto => Auto,
    Block => Block,
    Swap => Swap,
    Fallback => Fallback,
    Optional => Optional,
}
