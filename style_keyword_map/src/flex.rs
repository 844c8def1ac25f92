// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    BoxAlignment, BoxDirection, BoxLines, BoxOrient, BoxPack, ContentDistribution,
    ContentPosition, FlexDirection, FlexWrap, ItemPosition, OverflowAlignment,
};

keyword_map! {
    BoxPack, fallback: Start;
    Start => Start,
    Center => Center,
    End => End,
    Justify => Justify,
}

keyword_map! {
    BoxAlignment, fallback: Stretch;
    Stretch => Stretch,
    Start => Start,
    Center => Center,
    End => End,
    Baseline => Baseline,
}

keyword_map! {
    BoxDirection, fallback: Normal;
    Normal => Normal,
    Reverse => Reverse,
}

keyword_map! {
    BoxLines, fallback: Single;
    Single => Single,
    Multiple => Multiple,
}

keyword_map! {
    BoxOrient, fallback: Horizontal;
    Horizontal => Horizontal,
    Vertical => Vertical,
}

keyword_map! {
    FlexDirection, fallback: Row;
    Row => Row,
    RowReverse => RowReverse,
    Column => Column,
    ColumnReverse => ColumnReverse,
}

keyword_map! {
    FlexWrap, fallback: NoWrap;
    NoWrap => Nowrap,
    Wrap => Wrap,
    Reverse => WrapReverse,
}

keyword_map! {
    ItemPosition, fallback: Auto;
    Legacy => Legacy,
    Auto => Auto,
    Normal => Normal,
    Stretch => Stretch,
    Baseline => Baseline | FirstBaseline,
    LastBaseline => LastBaseline,
    Center => Center,
    Start => Start,
    End => End,
    SelfStart => SelfStart,
    SelfEnd => SelfEnd,
    FlexStart => FlexStart,
    FlexEnd => FlexEnd,
    Left => Left,
    Right => Right,
}

keyword_map! {
    OverflowAlignment, fallback: Unsafe;
    Default => Default,
    Unsafe => Unsafe,
    Safe => Safe,
}

keyword_map! {
    ContentPosition, fallback: Normal;
    Normal => Normal,
    Baseline => Baseline | FirstBaseline,
    LastBaseline => LastBaseline,
    Center => Center,
    Start => Start,
    End => End,
    FlexStart => FlexStart,
    FlexEnd => FlexEnd,
    Left => Left,
    Right => Right,
}

keyword_map! {
    ContentDistribution, fallback: Stretch;
    Default => Default,
    SpaceBetween => SpaceBetween,
    SpaceAround => SpaceAround,
    SpaceEvenly => SpaceEvenly,
    Stretch => Stretch,
}
