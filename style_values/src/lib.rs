// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved values of keyword-valued CSS properties.
//!
//! Each property value is a small closed enumeration, or a set of flags for properties that
//! combine independent facets. These types know nothing about keyword identifiers; the
//! `style_keyword_map` crate converts between the two.
//!
//! Every enumeration exposes `ALL`, listing its variants in declaration order.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use style_values::{DisplayType, TouchAction};
//!
//! assert_eq!(DisplayType::ALL.first(), Some(&DisplayType::Inline));
//! let pan = TouchAction::PAN_X | TouchAction::PAN_Y;
//! assert!(pan.contains(TouchAction::PAN_Y));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[macro_use]
mod macros;

mod flags;
mod flex;
mod font;
mod layout;
mod paint;
mod scroll;
mod svg;
mod text;
mod ui;


pub use flags::{HangingPunctuation, SpeakAs, TextDecorationLine, TouchAction};
pub use flex::{
    BoxAlignment, BoxDirection, BoxLines, BoxOrient, BoxPack, ContentDistribution,
    ContentPosition, FlexDirection, FlexWrap, ItemPosition, OverflowAlignment,
};
pub use font::{
    FontLoadingBehavior, FontOpticalSizing, FontSmallCaps, FontSmoothingMode,
    FontSynthesisLonghand, FontVariantCaps, FontVariantPosition, Kerning, TextRenderingMode,
};
pub use layout::{
    BoxSizing, BreakBetween, BreakInside, CaptionSide, Clear, ColumnAxis, ColumnFill,
    ColumnProgression, ColumnSpan, ContainerType, ContentVisibility, DisplayType, Edge,
    EmptyCell, Float, LineClamp, LineClampKind, ListStylePosition, ListStyleType,
    MarqueeBehavior, MarqueeDirection, Overflow, OverflowAnchor, OverscrollBehavior,
    PositionType, TableLayoutType, VerticalAlign, Visibility,
};
pub use paint::{
    BackfaceVisibility, BlendMode, BorderCollapse, BorderStyle, BoxDecorationBreak, BoxType,
    CompositeOperator, FillAttachment, FillBox, FillRepeat, ImageRendering, Isolation, MaskType,
    ObjectFit, OutlineIsAuto, PrintColorAdjust, ReflectionDirection, TransformBox,
    TransformStyle3d,
};
pub use scroll::{ScrollSnapAxis, ScrollSnapAxisAlignType, ScrollSnapStop, ScrollSnapStrictness};
pub use svg::{
    AlignmentBaseline, BufferedRendering, ColorInterpolation, ColorRendering, DominantBaseline,
    LineCap, LineJoin, ShapeRendering, TextAnchor, VectorEffect, WindRule,
};
pub use text::{
    Hyphens, LeadingTrim, LineAlign, LineBreak, LineSnap, MathStyle, NbspMode, Order,
    OverflowWrap, RubyPosition, TextAlignLast, TextAlignMode, TextCombine, TextDecorationSkipInk,
    TextDecorationStyle, TextDirection, TextEdgeType, TextEmphasisFill, TextEmphasisMark,
    TextGroupAlign, TextJustify, TextOrientation, TextOverflow, TextSecurity, TextTransform,
    TextUnderlinePosition, TextWrap, TextZoom, UnicodeBidi, WhiteSpace, WordBreak, WritingMode,
};
pub use ui::{
    ApplePayButtonStyle, ApplePayButtonType, CursorType, CursorVisibility, InputSecurity,
    PointerEvents, Resize, StyleAppearance, UserDrag, UserModify, UserSelect,
};
