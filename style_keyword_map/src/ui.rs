// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_values::{
    ApplePayButtonStyle, ApplePayButtonType, CursorType, CursorVisibility, InputSecurity,
    PointerEvents, Resize, StyleAppearance, UserDrag, UserModify, UserSelect,
};

// Control parts are computed from their host control and never written in a style sheet.
keyword_map! {
    StyleAppearance, fallback: None;
    None => None,
    Auto => Auto,
    Checkbox => Checkbox,
    Radio => Radio,
    PushButton => PushButton,
    SquareButton => SquareButton,
    Button => Button,
    DefaultButton => DefaultButton,
    Listbox => Listbox,
    Menulist => Menulist,
    MenulistButton => MenulistButton,
    Meter => Meter,
    ProgressBar => ProgressBar,
    SliderHorizontal => SliderHorizontal,
    SliderVertical => SliderVertical,
    SearchField => Searchfield,
    TextField => Textfield,
    TextArea => Textarea,
    Attachment => Attachment,
    BorderlessAttachment => BorderlessAttachment,
    ApplePayButton => ApplePayButton,
    ; unrepresentable:
        CapsLockIndicator => None,
        ColorWell => None,
        ImageControlsButton => None,
        InnerSpinButton => None,
        ListButton => None,
        SearchFieldDecoration => None,
        SearchFieldResultsDecoration => None,
        SearchFieldResultsButton => None,
        SearchFieldCancelButton => None,
        SliderThumbHorizontal => None,
        SliderThumbVertical => None,
}

keyword_map! {
    CursorType, fallback: Auto;
    Auto => Auto,
    Default => Default,
    None => None,
    ContextMenu => ContextMenu,
    Help => Help,
    Pointer => Pointer,
    Progress => Progress,
    Wait => Wait,
    Cell => Cell,
    Crosshair => Crosshair,
    Text => Text,
    VerticalText => VerticalText,
    Alias => Alias,
    Copy => Copy,
    Move => Move,
    NoDrop => NoDrop,
    NotAllowed => NotAllowed,
    Grab => Grab | WebkitGrab,
    Grabbing => Grabbing | WebkitGrabbing,
    EResize => EResize,
    NResize => NResize,
    NeResize => NeResize,
    NwResize => NwResize,
    SResize => SResize,
    SeResize => SeResize,
    SwResize => SwResize,
    WResize => WResize,
    EwResize => EwResize,
    NsResize => NsResize,
    NeswResize => NeswResize,
    NwseResize => NwseResize,
    ColumnResize => ColResize,
    RowResize => RowResize,
    AllScroll => AllScroll,
    ZoomIn => ZoomIn | WebkitZoomIn,
    ZoomOut => ZoomOut | WebkitZoomOut,
}

keyword_map! {
    CursorVisibility, fallback: Auto;
    Auto => Auto,
    AutoHide => AutoHide,
}

keyword_map! {
    PointerEvents, fallback: All;
    Auto => Auto,
    None => None,
    Stroke => Stroke,
    Fill => Fill,
    Painted => Painted,
    Visible => Visible,
    VisibleStroke => VisibleStroke,
    VisibleFill => VisibleFill,
    VisiblePainted => VisiblePainted,
    BoundingBox => BoundingBox,
    All => All,
}

keyword_map! {
    UserDrag, fallback: Auto;
    Auto => Auto,
    None => None,
    Element => Element,
}

keyword_map! {
    UserModify, fallback: ReadOnly;
    ReadOnly => ReadOnly,
    ReadWrite => ReadWrite,
    ReadWritePlaintextOnly => ReadWritePlaintextOnly,
}

// The computed value of `auto` is `text` outside of editable content.
keyword_map! {
    UserSelect, fallback: Text;
    None => None,
    Text => Text,
    All => All,
    ; overrides: Auto => Text,
}

keyword_map! {
    InputSecurity, fallback: Auto;
    Auto => Auto,
    None => None,
}

// `auto` depends on the element and must be resolved before it gets here.
keyword_map! {
    Resize, fallback: None;
    None => None,
    Both => Both,
    Horizontal => Horizontal,
    Vertical => Vertical,
    Block => Block,
    Inline => Inline,
}

keyword_map! {
    ApplePayButtonStyle, fallback: Black;
    White => White,
    WhiteOutline => WhiteOutline,
    Black => Black,
}

keyword_map! {
    ApplePayButtonType, fallback: Plain;
    Plain => Plain,
    Buy => Buy,
    SetUp => SetUp,
    Donate => Donate,
    CheckOut => CheckOut,
    Book => Book,
    Subscribe => Subscribe,
    Reload => Reload,
    AddMoney => AddMoney,
    TopUp => TopUp,
    Order => Order,
    Rent => Rent,
    Support => Support,
    Contribute => Contribute,
    Tip => Tip,
}
