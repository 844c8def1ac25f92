// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{ScrollSnapAxis, ScrollSnapAxisAlignType, ScrollSnapStop, ScrollSnapStrictness};

keyword_map! {
    ScrollSnapStrictness, fallback: None;
    None => None,
    Proximity => Proximity,
    Mandatory => Mandatory,
}

keyword_map! {
    ScrollSnapAxis, fallback: Both;
    XAxis => X,
    YAxis => Y,
    Block => Block,
    Inline => Inline,
    Both => Both,
}

keyword_map! {
    ScrollSnapAxisAlignType, fallback: None;
    None => None,
    Start => Start,
    Center => Center,
    End => End,
}

keyword_map! {
    ScrollSnapStop, fallback: Normal;
    Normal => Normal,
    Always => Always,
}
