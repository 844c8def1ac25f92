// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll snapping.
//!
//! See: <https://www.w3.org/TR/css-scroll-snap-1/>

value_enum! {
    /// How strictly a scroll container snaps.
    pub enum ScrollSnapStrictness {
        None = "none",
        Proximity = "proximity",
        Mandatory = "mandatory",
    }
}

value_enum! {
    /// The axis along which a scroll container snaps.
    pub enum ScrollSnapAxis {
        XAxis = "x",
        YAxis = "y",
        Block = "block",
        Inline = "inline",
        Both = "both",
    }
}

value_enum! {
    /// The snap alignment of a snap area along one axis.
    pub enum ScrollSnapAxisAlignType {
        None = "none",
        Start = "start",
        Center = "center",
        End = "end",
    }
}

value_enum! {
    /// Whether a scroll may pass over a snap position.
    pub enum ScrollSnapStop {
        Normal = "normal",
        Always = "always",
    }
}
