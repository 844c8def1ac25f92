// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

value_enum! {
    /// Whether font kerning information is applied.
    pub enum Kerning {
        Auto = "auto",
        Normal = "normal",
        NoShift = "none",
    }
}

value_enum! {
    /// Font antialiasing, as `-webkit-font-smoothing`.
    pub enum FontSmoothingMode {
        Auto = "auto",
        None = "none",
        Antialiased = "antialiased",
        SubpixelAntialiased = "subpixel-antialiased",
    }
}

value_enum! {
    /// The CSS 2 small-caps flag.
    pub enum FontSmallCaps {
        Off = "normal",
        On = "small-caps",
    }
}

value_enum! {
    /// The text rendering quality hint.
    pub enum TextRenderingMode {
        Auto = "auto",
        OptimizeSpeed = "optimizespeed",
        OptimizeLegibility = "optimizelegibility",
        GeometricPrecision = "geometricprecision",
    }
}

value_enum! {
    /// Subscript and superscript glyph selection.
    pub enum FontVariantPosition {
        Normal = "normal",
        Subscript = "sub",
        Superscript = "super",
    }
}

value_enum! {
    /// Capital glyph selection.
    ///
    /// See: <https://www.w3.org/TR/css-fonts-4/#font-variant-caps-prop>
    pub enum FontVariantCaps {
        Normal = "normal",
        Small = "small-caps",
        AllSmall = "all-small-caps",
        Petite = "petite-caps",
        AllPetite = "all-petite-caps",
        Unicase = "unicase",
        Titling = "titling-caps",
    }
}

value_enum! {
    /// Whether the optical size axis is set automatically.
    pub enum FontOpticalSizing {
        Enabled = "auto",
        Disabled = "none",
    }
}

value_enum! {
    /// One longhand of `font-synthesis`.
    pub enum FontSynthesisLonghand {
        Auto = "auto",
        None = "none",
    }
}

value_enum! {
    /// How a web font is displayed while it loads.
    pub enum FontLoadingBehavior {
        Auto = "auto",
        Block = "block",
        Swap = "swap",
        Fallback = "fallback",
        Optional = "optional",
    }
}
