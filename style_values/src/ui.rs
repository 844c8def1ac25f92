// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User interface and interaction.

value_enum! {
    /// The native appearance of a form control.
    ///
    /// Several variants describe parts of controls that the renderer draws itself. They can
    /// be computed but never appear in a style sheet.
    pub enum StyleAppearance {
        None = "none",
        Auto = "auto",
        Checkbox = "checkbox",
        Radio = "radio",
        PushButton = "push-button",
        SquareButton = "square-button",
        Button = "button",
        DefaultButton = "default-button",
        Listbox = "listbox",
        Menulist = "menulist",
        MenulistButton = "menulist-button",
        Meter = "meter",
        ProgressBar = "progress-bar",
        SliderHorizontal = "slider-horizontal",
        SliderVertical = "slider-vertical",
        SearchField = "searchfield",
        TextField = "textfield",
        TextArea = "textarea",
        Attachment = "attachment",
        BorderlessAttachment = "borderless-attachment",
        ApplePayButton = "-apple-pay-button",
        /// The caps lock indicator inside a password field.
        CapsLockIndicator,
        /// The swatch of a color input.
        ColorWell,
        /// The controls button overlaid on an image.
        ImageControlsButton,
        /// The stepper of a number input.
        InnerSpinButton,
        /// The drop-down button of an input with a data list.
        ListButton,
        /// The decoration area of a search field.
        SearchFieldDecoration,
        /// The results decoration of a search field.
        SearchFieldResultsDecoration,
        /// The results button of a search field.
        SearchFieldResultsButton,
        /// The cancel button of a search field.
        SearchFieldCancelButton,
        /// The thumb of a horizontal slider.
        SliderThumbHorizontal,
        /// The thumb of a vertical slider.
        SliderThumbVertical,
    }
}

impl StyleAppearance {
    /// Returns `true` for parts of controls that have no keyword of their own.
    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            Self::CapsLockIndicator
                | Self::ColorWell
                | Self::ImageControlsButton
                | Self::InnerSpinButton
                | Self::ListButton
                | Self::SearchFieldDecoration
                | Self::SearchFieldResultsDecoration
                | Self::SearchFieldResultsButton
                | Self::SearchFieldCancelButton
                | Self::SliderThumbHorizontal
                | Self::SliderThumbVertical
        )
    }
}

value_enum! {
    /// The mouse cursor shown over an element.
    ///
    /// See: <https://www.w3.org/TR/css-ui-3/#cursor>
    pub enum CursorType {
        Auto = "auto",
        Default = "default",
        None = "none",
        ContextMenu = "context-menu",
        Help = "help",
        Pointer = "pointer",
        Progress = "progress",
        Wait = "wait",
        Cell = "cell",
        Crosshair = "crosshair",
        Text = "text",
        VerticalText = "vertical-text",
        Alias = "alias",
        Copy = "copy",
        Move = "move",
        NoDrop = "no-drop",
        NotAllowed = "not-allowed",
        Grab = "grab",
        Grabbing = "grabbing",
        EResize = "e-resize",
        NResize = "n-resize",
        NeResize = "ne-resize",
        NwResize = "nw-resize",
        SResize = "s-resize",
        SeResize = "se-resize",
        SwResize = "sw-resize",
        WResize = "w-resize",
        EwResize = "ew-resize",
        NsResize = "ns-resize",
        NeswResize = "nesw-resize",
        NwseResize = "nwse-resize",
        ColumnResize = "col-resize",
        RowResize = "row-resize",
        AllScroll = "all-scroll",
        ZoomIn = "zoom-in",
        ZoomOut = "zoom-out",
    }
}

value_enum! {
    /// Whether the cursor hides itself while idle.
    pub enum CursorVisibility {
        Auto = "auto",
        AutoHide = "auto-hide",
    }
}

value_enum! {
    /// Which parts of an element are hit-tested.
    pub enum PointerEvents {
        Auto = "auto",
        None = "none",
        Stroke = "stroke",
        Fill = "fill",
        Painted = "painted",
        Visible = "visible",
        VisibleStroke = "visiblestroke",
        VisibleFill = "visiblefill",
        VisiblePainted = "visiblepainted",
        BoundingBox = "bounding-box",
        All = "all",
    }
}

value_enum! {
    /// Whether an element can be dragged.
    pub enum UserDrag {
        Auto = "auto",
        None = "none",
        Element = "element",
    }
}

value_enum! {
    /// Whether an element's content is editable.
    pub enum UserModify {
        ReadOnly = "read-only",
        ReadWrite = "read-write",
        ReadWritePlaintextOnly = "read-write-plaintext-only",
    }
}

value_enum! {
    /// Whether text can be selected.
    pub enum UserSelect {
        None = "none",
        Text = "text",
        All = "all",
    }
}

value_enum! {
    /// Whether a password field obscures its value.
    pub enum InputSecurity {
        Auto = "auto",
        None = "none",
    }
}

value_enum! {
    /// Which axes of an element the user can resize.
    pub enum Resize {
        None = "none",
        Both = "both",
        Horizontal = "horizontal",
        Vertical = "vertical",
        Block = "block",
        Inline = "inline",
    }
}

value_enum! {
    /// The color scheme of an Apple Pay button.
    pub enum ApplePayButtonStyle {
        White = "white",
        WhiteOutline = "white-outline",
        Black = "black",
    }
}

value_enum! {
    /// The label of an Apple Pay button.
    pub enum ApplePayButtonType {
        Plain = "plain",
        Buy = "buy",
        SetUp = "set-up",
        Donate = "donate",
        CheckOut = "check-out",
        Book = "book",
        Subscribe = "subscribe",
        Reload = "reload",
        AddMoney = "add-money",
        TopUp = "top-up",
        Order = "order",
        Rent = "rent",
        Support = "support",
        Contribute = "contribute",
        Tip = "tip",
    }
}
