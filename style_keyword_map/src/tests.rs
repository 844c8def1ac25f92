// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use style_keywords::{Keyword, PropertyId};
use style_values::*;

use crate::*;

/// Checks that every variant of `all` except those in `skip` survives a keyword round trip,
/// and that its canonical keyword is the spelling it is documented with.
fn round_trip<T: ToKeyword + FromKeyword + PartialEq>(
    all: &[T],
    spelling: fn(T) -> Option<&'static str>,
    skip: &[T],
) {
    for &value in all {
        if skip.contains(&value) {
            continue;
        }
        let keyword = value.to_keyword();
        assert_ne!(keyword, Keyword::Invalid, "{value:?}");
        if let Some(text) = spelling(value) {
            assert_eq!(keyword.as_str(), text, "{value:?}");
        }
        assert_eq!(T::try_from_keyword(keyword), Some(value), "{value:?} via {keyword:?}");
        assert_eq!(T::from_keyword(keyword), value, "{value:?} via {keyword:?}");
    }
}

fn converges<T: FromKeyword + PartialEq>(value: T, keywords: &[Keyword]) {
    for &keyword in keywords {
        assert_eq!(T::try_from_keyword(keyword), Some(value), "{keyword:?}");
    }
}

#[test]
fn round_trips() {
    round_trip(ReflectionDirection::ALL, ReflectionDirection::spelling, &[]);
    round_trip(ColumnFill::ALL, ColumnFill::spelling, &[]);
    round_trip(ColumnSpan::ALL, ColumnSpan::spelling, &[]);
    round_trip(PrintColorAdjust::ALL, PrintColorAdjust::spelling, &[]);
    round_trip(BorderStyle::ALL, BorderStyle::spelling, &[]);
    round_trip(
        StyleAppearance::ALL,
        StyleAppearance::spelling,
        &StyleAppearance::ALL
            .iter()
            .copied()
            .filter(|a| a.is_internal())
            .collect::<std::vec::Vec<_>>(),
    );
    round_trip(BackfaceVisibility::ALL, BackfaceVisibility::spelling, &[]);
    round_trip(FillAttachment::ALL, FillAttachment::spelling, &[]);
    round_trip(FillBox::ALL, FillBox::spelling, &[]);
    round_trip(FillRepeat::ALL, FillRepeat::spelling, &[]);
    round_trip(BoxPack::ALL, BoxPack::spelling, &[]);
    round_trip(BoxAlignment::ALL, BoxAlignment::spelling, &[]);
    round_trip(BoxDecorationBreak::ALL, BoxDecorationBreak::spelling, &[]);
    round_trip(Edge::ALL, Edge::spelling, &[]);
    round_trip(BoxSizing::ALL, BoxSizing::spelling, &[]);
    round_trip(BoxDirection::ALL, BoxDirection::spelling, &[]);
    round_trip(BoxLines::ALL, BoxLines::spelling, &[]);
    round_trip(BoxOrient::ALL, BoxOrient::spelling, &[]);
    round_trip(CaptionSide::ALL, CaptionSide::spelling, &[]);
    round_trip(Clear::ALL, Clear::spelling, &[]);
    round_trip(LeadingTrim::ALL, LeadingTrim::spelling, &[]);
    round_trip(CursorType::ALL, CursorType::spelling, &[]);
    round_trip(CursorVisibility::ALL, CursorVisibility::spelling, &[]);
    round_trip(DisplayType::ALL, DisplayType::spelling, &[]);
    round_trip(EmptyCell::ALL, EmptyCell::spelling, &[]);
    round_trip(FlexDirection::ALL, FlexDirection::spelling, &[]);
    round_trip(FlexWrap::ALL, FlexWrap::spelling, &[]);
    round_trip(Float::ALL, Float::spelling, &[]);
    round_trip(LineBreak::ALL, LineBreak::spelling, &[]);
    round_trip(ListStylePosition::ALL, ListStylePosition::spelling, &[]);
    round_trip(ListStyleType::ALL, ListStyleType::spelling, &[ListStyleType::String]);
    round_trip(MarqueeBehavior::ALL, MarqueeBehavior::spelling, &[]);
    round_trip(MarqueeDirection::ALL, MarqueeDirection::spelling, &[]);
    round_trip(NbspMode::ALL, NbspMode::spelling, &[]);
    round_trip(Overflow::ALL, Overflow::spelling, &[]);
    round_trip(OverscrollBehavior::ALL, OverscrollBehavior::spelling, &[]);
    round_trip(OverflowAnchor::ALL, OverflowAnchor::spelling, &[]);
    round_trip(BreakBetween::ALL, BreakBetween::spelling, &[]);
    round_trip(BreakInside::ALL, BreakInside::spelling, &[]);
    round_trip(PositionType::ALL, PositionType::spelling, &[]);
    round_trip(Resize::ALL, Resize::spelling, &[]);
    round_trip(TableLayoutType::ALL, TableLayoutType::spelling, &[]);
    round_trip(TextAlignMode::ALL, TextAlignMode::spelling, &[]);
    round_trip(TextAlignLast::ALL, TextAlignLast::spelling, &[]);
    round_trip(TextGroupAlign::ALL, TextGroupAlign::spelling, &[]);
    round_trip(TextJustify::ALL, TextJustify::spelling, &[]);
    round_trip(TextDecorationStyle::ALL, TextDecorationStyle::spelling, &[]);
    round_trip(TextUnderlinePosition::ALL, TextUnderlinePosition::spelling, &[]);
    round_trip(TextSecurity::ALL, TextSecurity::spelling, &[]);
    round_trip(TextDecorationSkipInk::ALL, TextDecorationSkipInk::spelling, &[]);
    round_trip(TextTransform::ALL, TextTransform::spelling, &[]);
    round_trip(UnicodeBidi::ALL, UnicodeBidi::spelling, &[]);
    round_trip(UserDrag::ALL, UserDrag::spelling, &[]);
    round_trip(UserModify::ALL, UserModify::spelling, &[]);
    round_trip(UserSelect::ALL, UserSelect::spelling, &[]);
    round_trip(VerticalAlign::ALL, VerticalAlign::spelling, &[VerticalAlign::Length]);
    round_trip(Visibility::ALL, Visibility::spelling, &[]);
    round_trip(WhiteSpace::ALL, WhiteSpace::spelling, &[]);
    round_trip(WordBreak::ALL, WordBreak::spelling, &[]);
    round_trip(OverflowWrap::ALL, OverflowWrap::spelling, &[]);
    round_trip(TextDirection::ALL, TextDirection::spelling, &[]);
    round_trip(WritingMode::ALL, WritingMode::spelling, &[]);
    round_trip(TextCombine::ALL, TextCombine::spelling, &[]);
    round_trip(RubyPosition::ALL, RubyPosition::spelling, &[]);
    round_trip(TextOverflow::ALL, TextOverflow::spelling, &[]);
    round_trip(TextWrap::ALL, TextWrap::spelling, &[]);
    round_trip(TextEmphasisFill::ALL, TextEmphasisFill::spelling, &[]);
    round_trip(
        TextEmphasisMark::ALL,
        TextEmphasisMark::spelling,
        &[
            TextEmphasisMark::None,
            TextEmphasisMark::Auto,
            TextEmphasisMark::Custom,
        ],
    );
    round_trip(TextOrientation::ALL, TextOrientation::spelling, &[]);
    round_trip(PointerEvents::ALL, PointerEvents::spelling, &[]);
    round_trip(Kerning::ALL, Kerning::spelling, &[]);
    round_trip(ObjectFit::ALL, ObjectFit::spelling, &[]);
    round_trip(FontSmoothingMode::ALL, FontSmoothingMode::spelling, &[]);
    round_trip(FontSmallCaps::ALL, FontSmallCaps::spelling, &[]);
    round_trip(TextRenderingMode::ALL, TextRenderingMode::spelling, &[]);
    round_trip(Hyphens::ALL, Hyphens::spelling, &[]);
    round_trip(LineSnap::ALL, LineSnap::spelling, &[]);
    round_trip(LineAlign::ALL, LineAlign::spelling, &[]);
    round_trip(Order::ALL, Order::spelling, &[]);
    round_trip(BlendMode::ALL, BlendMode::spelling, &[]);
    round_trip(Isolation::ALL, Isolation::spelling, &[]);
    round_trip(LineCap::ALL, LineCap::spelling, &[]);
    round_trip(LineJoin::ALL, LineJoin::spelling, &[]);
    round_trip(WindRule::ALL, WindRule::spelling, &[]);
    round_trip(AlignmentBaseline::ALL, AlignmentBaseline::spelling, &[]);
    round_trip(BorderCollapse::ALL, BorderCollapse::spelling, &[]);
    round_trip(ImageRendering::ALL, ImageRendering::spelling, &[]);
    round_trip(InputSecurity::ALL, InputSecurity::spelling, &[]);
    round_trip(TransformStyle3d::ALL, TransformStyle3d::spelling, &[]);
    round_trip(TransformBox::ALL, TransformBox::spelling, &[]);
    round_trip(ColumnAxis::ALL, ColumnAxis::spelling, &[]);
    round_trip(ColumnProgression::ALL, ColumnProgression::spelling, &[]);
    round_trip(BufferedRendering::ALL, BufferedRendering::spelling, &[]);
    round_trip(ColorInterpolation::ALL, ColorInterpolation::spelling, &[]);
    round_trip(ColorRendering::ALL, ColorRendering::spelling, &[]);
    round_trip(DominantBaseline::ALL, DominantBaseline::spelling, &[]);
    round_trip(ShapeRendering::ALL, ShapeRendering::spelling, &[]);
    round_trip(TextAnchor::ALL, TextAnchor::spelling, &[]);
    round_trip(VectorEffect::ALL, VectorEffect::spelling, &[]);
    round_trip(MaskType::ALL, MaskType::spelling, &[]);
    round_trip(BoxType::ALL, BoxType::spelling, &[BoxType::Missing]);
    round_trip(ItemPosition::ALL, ItemPosition::spelling, &[]);
    round_trip(OverflowAlignment::ALL, OverflowAlignment::spelling, &[]);
    round_trip(ContentPosition::ALL, ContentPosition::spelling, &[]);
    round_trip(ContentDistribution::ALL, ContentDistribution::spelling, &[]);
    round_trip(TextZoom::ALL, TextZoom::spelling, &[]);
    round_trip(ScrollSnapStrictness::ALL, ScrollSnapStrictness::spelling, &[]);
    round_trip(ScrollSnapAxis::ALL, ScrollSnapAxis::spelling, &[]);
    round_trip(ScrollSnapAxisAlignType::ALL, ScrollSnapAxisAlignType::spelling, &[]);
    round_trip(ScrollSnapStop::ALL, ScrollSnapStop::spelling, &[]);
    round_trip(TextEdgeType::ALL, TextEdgeType::spelling, &[]);
    round_trip(ApplePayButtonStyle::ALL, ApplePayButtonStyle::spelling, &[]);
    round_trip(ApplePayButtonType::ALL, ApplePayButtonType::spelling, &[]);
    round_trip(FontVariantPosition::ALL, FontVariantPosition::spelling, &[]);
    round_trip(FontVariantCaps::ALL, FontVariantCaps::spelling, &[]);
    round_trip(FontOpticalSizing::ALL, FontOpticalSizing::spelling, &[]);
    round_trip(FontSynthesisLonghand::ALL, FontSynthesisLonghand::spelling, &[]);
    round_trip(FontLoadingBehavior::ALL, FontLoadingBehavior::spelling, &[]);
    round_trip(MathStyle::ALL, MathStyle::spelling, &[]);
    round_trip(ContainerType::ALL, ContainerType::spelling, &[]);
    round_trip(ContentVisibility::ALL, ContentVisibility::spelling, &[]);
    round_trip(CompositeOperator::ALL, CompositeOperator::spelling, &[CompositeOperator::Difference]);
}

#[test]
fn unrepresentable_values_are_unspelled() {
    assert_eq!(VerticalAlign::Length.spelling(), None);
    assert_eq!(ListStyleType::String.spelling(), None);
    assert_eq!(BoxType::Missing.spelling(), None);
    assert_eq!(TextEmphasisMark::Custom.spelling(), None);
    assert!(
        StyleAppearance::ALL
            .iter()
            .filter(|a| a.is_internal())
            .all(|a| a.spelling().is_none())
    );
}

#[test]
fn display_scenario() {
    assert_eq!(DisplayType::Inline.to_keyword(), Keyword::Inline);
    assert_eq!(DisplayType::None.to_keyword(), Keyword::None);
    assert_eq!(from_keyword::<DisplayType>(Keyword::InlineBlock), DisplayType::InlineBlock);
    assert_eq!(DisplayType::Box.to_keyword(), Keyword::WebkitBox);
    assert_eq!(DisplayType::FALLBACK, DisplayType::Inline);
}

#[test]
fn canonical_spellings() {
    assert_eq!(to_keyword(FlexWrap::Reverse).as_str(), "wrap-reverse");
    assert_eq!(to_keyword(Overflow::PagedY).as_str(), "-webkit-paged-y");
    assert_eq!(to_keyword(UnicodeBidi::Override).as_str(), "bidi-override");
    assert_eq!(to_keyword(Kerning::NoShift).as_str(), "none");
    assert_eq!(to_keyword(FontOpticalSizing::Enabled).as_str(), "auto");
    assert_eq!(to_keyword(ShapeRendering::CrispEdges).as_str(), "crispedges");
    assert_eq!(to_keyword(ImageRendering::CrispEdges).as_str(), "crisp-edges");
    assert_eq!(to_keyword(CursorType::ColumnResize).as_str(), "col-resize");
    assert_eq!(to_keyword(StyleAppearance::TextField).as_str(), "textfield");
    assert_eq!(
        to_keyword(StyleAppearance::ApplePayButton).as_str(),
        "-apple-pay-button"
    );
    assert_eq!(to_keyword(BreakBetween::LeftPage).as_str(), "left");
    assert_eq!(to_keyword(FillBox::Padding).as_str(), "padding-box");
}

#[test]
fn aliases_converge() {
    converges(PositionType::Sticky, &[Keyword::Sticky, Keyword::WebkitSticky]);
    converges(Float::None, &[Keyword::None, Keyword::Center]);
    converges(Overflow::Auto, &[Keyword::Auto, Keyword::Overlay]);
    converges(MarqueeDirection::Up, &[Keyword::Up, Keyword::Ahead]);
    converges(MarqueeDirection::Down, &[Keyword::Down, Keyword::Reverse]);
    converges(TextAlignMode::Start, &[Keyword::Start, Keyword::WebkitAuto]);
    converges(
        TextJustify::InterCharacter,
        &[Keyword::InterCharacter, Keyword::Distribute],
    );
    converges(
        UnicodeBidi::Isolate,
        &[Keyword::Isolate, Keyword::WebkitIsolate],
    );
    converges(
        UnicodeBidi::IsolateOverride,
        &[Keyword::IsolateOverride, Keyword::WebkitIsolateOverride],
    );
    converges(
        UnicodeBidi::Plaintext,
        &[Keyword::Plaintext, Keyword::WebkitPlaintext],
    );
    converges(
        WritingMode::HorizontalTb,
        &[
            Keyword::HorizontalTb,
            Keyword::Lr,
            Keyword::LrTb,
            Keyword::Rl,
            Keyword::RlTb,
        ],
    );
    converges(
        WritingMode::VerticalRl,
        &[Keyword::VerticalRl, Keyword::Tb, Keyword::TbRl],
    );
    converges(TextCombine::All, &[Keyword::All, Keyword::Horizontal]);
    converges(UserSelect::Text, &[Keyword::Text, Keyword::Auto]);
    converges(
        ImageRendering::CrispEdges,
        &[
            Keyword::CrispEdges,
            Keyword::WebkitCrispEdges,
            Keyword::WebkitOptimizeContrast,
        ],
    );
    converges(CursorType::Grab, &[Keyword::Grab, Keyword::WebkitGrab]);
    converges(
        CursorType::Grabbing,
        &[Keyword::Grabbing, Keyword::WebkitGrabbing],
    );
    converges(CursorType::ZoomIn, &[Keyword::ZoomIn, Keyword::WebkitZoomIn]);
    converges(
        CursorType::ZoomOut,
        &[Keyword::ZoomOut, Keyword::WebkitZoomOut],
    );
    converges(
        ItemPosition::Baseline,
        &[Keyword::Baseline, Keyword::FirstBaseline],
    );
    converges(
        ContentPosition::Baseline,
        &[Keyword::Baseline, Keyword::FirstBaseline],
    );
    converges(FillBox::Border, &[Keyword::BorderBox, Keyword::Border]);
    converges(FillBox::Padding, &[Keyword::PaddingBox, Keyword::Padding]);
    converges(FillBox::Content, &[Keyword::ContentBox, Keyword::Content]);
    converges(FillBox::Text, &[Keyword::Text, Keyword::WebkitText]);
    converges(TextEmphasisMark::None, &[Keyword::None]);
}

#[test]
fn contextual_overrides() {
    // `outline-style: auto` is drawn dotted, while `dotted` keeps its own keyword.
    assert_eq!(BorderStyle::from_keyword(Keyword::Auto), BorderStyle::Dotted);
    assert_eq!(BorderStyle::from_keyword(Keyword::Dotted), BorderStyle::Dotted);
    assert_eq!(BorderStyle::Dotted.to_keyword(), Keyword::Dotted);

    assert_eq!(OutlineIsAuto::from_keyword(Keyword::Auto), OutlineIsAuto::On);
    assert_eq!(OutlineIsAuto::from_keyword(Keyword::Dotted), OutlineIsAuto::Off);
    assert_eq!(OutlineIsAuto::from_keyword(Keyword::Grid), OutlineIsAuto::Off);
}

#[test]
fn unrelated_keywords_are_not_values() {
    assert_eq!(DisplayType::try_from_keyword(Keyword::Sticky), None);
    assert_eq!(PositionType::try_from_keyword(Keyword::Grid), None);
    assert_eq!(BorderStyle::try_from_keyword(Keyword::Invalid), None);
    assert_eq!(Resize::try_from_keyword(Keyword::Auto), None);
    assert_eq!(ColumnSpan::try_from_keyword(Keyword::Inherit), None);
    assert_eq!(TouchAction::try_from_keyword(Keyword::Underline), None);
    assert_eq!(CompositeOperator::try_from_keyword(Keyword::Multiply), None);
}

#[test]
fn fallbacks_are_stable() {
    assert_eq!(DisplayType::FALLBACK, DisplayType::Inline);
    assert_eq!(BoxType::FALLBACK, BoxType::Missing);
    assert_eq!(TransformBox::FALLBACK, TransformBox::BorderBox);
    assert_eq!(VerticalAlign::FALLBACK, VerticalAlign::Top);
    assert_eq!(PointerEvents::FALLBACK, PointerEvents::All);
    assert_eq!(UserSelect::FALLBACK, UserSelect::Text);
    assert_eq!(ScrollSnapAxis::FALLBACK, ScrollSnapAxis::Both);
    assert_eq!(OverflowAlignment::FALLBACK, OverflowAlignment::Unsafe);
    assert_eq!(ContentDistribution::FALLBACK, ContentDistribution::Stretch);
    assert_eq!(CompositeOperator::FALLBACK, CompositeOperator::Clear);
    assert_eq!(TouchAction::FALLBACK, TouchAction::AUTO);
    assert_eq!(TextDecorationLine::FALLBACK, TextDecorationLine::empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a keyword for")]
fn unrecognized_keyword_panics_in_debug() {
    let _ = DisplayType::from_keyword(Keyword::Sticky);
}

#[test]
#[cfg(not(debug_assertions))]
fn unrecognized_keyword_falls_back_in_release() {
    assert_eq!(DisplayType::from_keyword(Keyword::Sticky), DisplayType::Inline);
    assert_eq!(Resize::from_keyword(Keyword::Auto), Resize::None);
    assert_eq!(BoxType::from_keyword(Keyword::Grid), BoxType::Missing);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "has no keyword form")]
fn unrepresentable_value_panics_in_debug() {
    let _ = VerticalAlign::Length.to_keyword();
}

#[test]
#[cfg(not(debug_assertions))]
fn unrepresentable_value_uses_placeholder_in_release() {
    assert_eq!(VerticalAlign::Length.to_keyword(), Keyword::Invalid);
    assert_eq!(ListStyleType::String.to_keyword(), Keyword::Invalid);
    assert_eq!(BoxType::Missing.to_keyword(), Keyword::None);
    assert_eq!(TextEmphasisMark::Custom.to_keyword(), Keyword::None);
    assert_eq!(StyleAppearance::ColorWell.to_keyword(), Keyword::None);
    assert_eq!(
        (TextDecorationLine::UNDERLINE | TextDecorationLine::OVERLINE).to_keyword(),
        Keyword::Invalid
    );
}

#[test]
fn composite_depends_on_property() {
    let mask = [
        (CompositeOperator::SourceOver, Keyword::Add),
        (CompositeOperator::SourceIn, Keyword::Intersect),
        (CompositeOperator::SourceOut, Keyword::Subtract),
        (CompositeOperator::Xor, Keyword::Exclude),
    ];
    for (op, keyword) in mask {
        assert_eq!(op.to_keyword_in(PropertyId::MaskComposite), keyword);
        assert_eq!(CompositeOperator::from_keyword(keyword), op);
    }
    assert_eq!(
        CompositeOperator::SourceOver.to_keyword_in(PropertyId::WebkitMaskComposite),
        Keyword::SourceOver
    );
    assert_eq!(
        CompositeOperator::PlusLighter.to_keyword_in(PropertyId::WebkitMaskComposite),
        Keyword::PlusLighter
    );
    // Only the unprefixed property uses the mask names.
    assert_eq!(
        CompositeOperator::Xor.to_keyword_in(PropertyId::WebkitMaskComposite),
        Keyword::Xor
    );
    assert_eq!(CompositeOperator::Xor.to_keyword(), Keyword::Xor);
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn composite_without_mask_spelling_panics() {
    let _ = CompositeOperator::Copy.to_keyword_in(PropertyId::MaskComposite);
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn composite_difference_panics() {
    let _ = CompositeOperator::Difference.to_keyword_in(PropertyId::WebkitMaskComposite);
}

#[test]
fn column_span_accepts_one() {
    assert_eq!(
        ColumnSpan::from_primitive_value(PrimitiveValue::Integer(1)),
        ColumnSpan::None
    );
    assert_eq!(
        ColumnSpan::from_primitive_value(PrimitiveValue::Number(1.0)),
        ColumnSpan::None
    );
    assert_eq!(
        ColumnSpan::from_primitive_value(Keyword::All.into()),
        ColumnSpan::All
    );
    assert_eq!(
        DisplayType::from_primitive_value(Keyword::Flex.into()),
        DisplayType::Flex
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a valid")]
fn column_span_rejects_other_numbers() {
    let _ = ColumnSpan::from_primitive_value(PrimitiveValue::Integer(2));
}

#[test]
fn line_clamp_from_primitives() {
    let lines = LineClamp::from_primitive_value(PrimitiveValue::Integer(3));
    assert_eq!(lines, LineClamp::new(3, LineClampKind::LineCount));
    assert_eq!(PrimitiveValue::from(lines), PrimitiveValue::Integer(3));

    let percent = LineClamp::from_primitive_value(PrimitiveValue::Percentage(40.0));
    assert_eq!(percent, LineClamp::new(40, LineClampKind::Percentage));
    assert!(percent.is_percentage());
    assert_eq!(PrimitiveValue::from(percent), PrimitiveValue::Percentage(40.0));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a valid")]
fn line_clamp_rejects_keywords_in_debug() {
    let _ = LineClamp::from_primitive_value(Keyword::None.into());
}

#[test]
#[cfg(not(debug_assertions))]
fn line_clamp_falls_back_to_none() {
    assert_eq!(
        LineClamp::from_primitive_value(Keyword::None.into()),
        LineClamp::NONE
    );
}

#[test]
fn flag_sets_map_single_facets() {
    assert_eq!(TouchAction::from_keyword(Keyword::None), TouchAction::NONE);
    assert_eq!(TouchAction::from_keyword(Keyword::PanX), TouchAction::PAN_X);
    assert_eq!(TouchAction::NONE.to_keyword(), Keyword::None);
    assert_eq!(
        TextDecorationLine::from_keyword(Keyword::None),
        TextDecorationLine::empty()
    );
    assert_eq!(TextDecorationLine::empty().to_keyword(), Keyword::None);
    assert_eq!(
        HangingPunctuation::from_keyword(Keyword::ForceEnd),
        HangingPunctuation::FORCE_END
    );
    assert_eq!(SpeakAs::from_keyword(Keyword::Normal), SpeakAs::empty());
    assert_eq!(SpeakAs::empty().to_keyword(), Keyword::Normal);

    for flag in SpeakAs::all().iter() {
        assert_eq!(SpeakAs::from_keyword(flag.to_keyword()), flag);
    }
    for flag in TouchAction::all().iter() {
        assert_eq!(TouchAction::from_keyword(flag.to_keyword()), flag);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "has no keyword form")]
fn flag_combinations_panic_in_debug() {
    let _ = (TouchAction::PAN_X | TouchAction::PAN_Y).to_keyword();
}

#[test]
fn legacy_page_breaks() {
    let before = PropertyId::PageBreakBefore;
    assert_eq!(legacy_break_keyword(before, Keyword::Page), Some(Keyword::Always));
    assert_eq!(legacy_break_keyword(before, Keyword::Left), Some(Keyword::Left));
    assert_eq!(legacy_break_keyword(before, Keyword::Recto), None);
    assert_eq!(
        legacy_break_keyword(PropertyId::PageBreakInside, Keyword::AvoidPage),
        None
    );

    assert_eq!(break_between_from_legacy(before, Keyword::Always), BreakBetween::Page);
    assert_eq!(break_between_from_legacy(before, Keyword::Right), BreakBetween::RightPage);
    assert_eq!(
        break_inside_from_legacy(PropertyId::PageBreakInside, Keyword::Avoid),
        BreakInside::Avoid
    );
}

#[test]
fn legacy_column_breaks() {
    let after = PropertyId::WebkitColumnBreakAfter;
    assert_eq!(legacy_break_keyword(after, Keyword::Column), Some(Keyword::Always));
    assert_eq!(legacy_break_keyword(after, Keyword::AvoidColumn), Some(Keyword::Avoid));
    assert_eq!(legacy_break_keyword(after, Keyword::Page), None);
    assert_eq!(
        legacy_break_keyword(PropertyId::WebkitColumnBreakInside, Keyword::Avoid),
        Some(Keyword::Avoid)
    );

    assert_eq!(break_between_from_legacy(after, Keyword::Avoid), BreakBetween::AvoidColumn);
    assert_eq!(
        break_inside_from_legacy(PropertyId::WebkitColumnBreakInside, Keyword::Avoid),
        BreakInside::Avoid
    );
}

#[test]
fn legacy_breaks_survive_round_trip() {
    for shorthand in [PropertyId::PageBreakBefore, PropertyId::WebkitColumnBreakBefore] {
        for &value in BreakBetween::ALL {
            if let Some(legacy) = legacy_break_keyword(shorthand, value.to_keyword()) {
                assert_eq!(break_between_from_legacy(shorthand, legacy), value, "{value:?}");
            }
        }
    }
    for shorthand in [PropertyId::PageBreakInside, PropertyId::WebkitColumnBreakInside] {
        let mut written = 0;
        for &value in BreakInside::ALL {
            if let Some(legacy) = legacy_break_keyword(shorthand, value.to_keyword()) {
                assert_eq!(break_inside_from_legacy(shorthand, legacy), value, "{value:?}");
                written += 1;
            }
        }
        assert_eq!(written, 2, "{shorthand:?}");
    }
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn legacy_break_requires_a_shorthand() {
    let _ = legacy_break_keyword(PropertyId::MaskComposite, Keyword::Page);
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn break_between_requires_a_before_or_after_shorthand() {
    let _ = break_between_from_legacy(PropertyId::PageBreakInside, Keyword::Always);
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn break_between_requires_a_legacy_shorthand() {
    let _ = break_between_from_legacy(PropertyId::WebkitMaskComposite, Keyword::Always);
}

#[test]
#[should_panic(expected = "cannot be serialized as a value of")]
fn break_inside_requires_an_inside_shorthand() {
    let _ = break_inside_from_legacy(PropertyId::PageBreakBefore, Keyword::Avoid);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a keyword for")]
fn unknown_legacy_break_panics_in_debug() {
    let _ = break_between_from_legacy(PropertyId::PageBreakBefore, Keyword::Column);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a keyword for")]
fn unknown_legacy_inside_break_panics_in_debug() {
    let _ = break_inside_from_legacy(PropertyId::WebkitColumnBreakInside, Keyword::AvoidColumn);
}

#[test]
#[cfg(not(debug_assertions))]
fn unknown_legacy_breaks_fall_back_to_auto() {
    assert_eq!(
        break_between_from_legacy(PropertyId::PageBreakBefore, Keyword::Column),
        BreakBetween::Auto
    );
    assert_eq!(
        break_between_from_legacy(PropertyId::WebkitColumnBreakAfter, Keyword::Left),
        BreakBetween::Auto
    );
    assert_eq!(
        break_inside_from_legacy(PropertyId::PageBreakInside, Keyword::Always),
        BreakInside::Auto
    );
}

#[test]
fn font_stretch() {
    assert_eq!(font_stretch_keyword(50.0), Some(Keyword::UltraCondensed));
    assert_eq!(font_stretch_keyword(100.0), Some(Keyword::Normal));
    assert_eq!(font_stretch_keyword(200.0), Some(Keyword::UltraExpanded));
    assert_eq!(font_stretch_keyword(101.0), None);
    assert_eq!(font_stretch_keyword(87.5 + 1e-12), None);

    assert_eq!(font_stretch_percentage(Keyword::SemiExpanded), Some(112.5));
    assert_eq!(font_stretch_percentage(Keyword::Auto), None);
    for keyword in [Keyword::ExtraCondensed, Keyword::Expanded] {
        let percentage = font_stretch_percentage(keyword).map(f64::from);
        assert_eq!(percentage.and_then(font_stretch_keyword), Some(keyword));
    }
}

#[test]
fn primitive_values() {
    assert_eq!(PrimitiveValue::from(Keyword::Auto).keyword(), Some(Keyword::Auto));
    assert_eq!(PrimitiveValue::Integer(4).keyword(), None);
    assert_eq!(PrimitiveValue::Number(0.5).keyword(), None);
}
