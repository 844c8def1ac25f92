// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

macro_rules! define_keywords {
    ($($(#[$meta:meta])* $name:ident = $text:literal,)+) => {
        /// A CSS keyword identifier.
        ///
        /// Every recognized style keyword has exactly one `Keyword`. Identifiers are densely
        /// numbered from `0` ([`Keyword::Invalid`]) to [`Keyword::MAX_VALUE`], but the numbering
        /// is only stable within a single build and carries no ordering semantics: compare
        /// keywords for equality, never by magnitude.
        ///
        /// Several keywords can denote the same value of a style property (for example
        /// `-webkit-sticky` and `sticky`). Resolving those synonyms is the job of the
        /// keyword mapping layer, not of this type.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum Keyword {
            $(
                $(#[$meta])*
                #[doc = concat!("`", $text, "`")]
                $name,
            )+
        }

        impl Keyword {
            /// Every keyword, in identifier order.
            ///
            /// `Keyword::ALL[k.to_u16() as usize] == k` holds for every keyword `k`.
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            /// Returns the CSS spelling of this keyword.
            ///
            /// [`Keyword::Invalid`] is spelled as the empty string.
            ///
            /// ```
            /// use style_keywords::Keyword;
            ///
            /// assert_eq!(Keyword::InlineBlock.as_str(), "inline-block");
            /// assert_eq!(Keyword::WebkitPagedX.as_str(), "-webkit-paged-x");
            /// ```
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$name => $text,)+
                }
            }
        }
    };
}

impl Keyword {
    /// Returns the maximum numeric value of the keyword space.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The keyword space is `repr(u16)`, so its length always fits."
    )]
    pub const MAX_VALUE: u16 = (Self::ALL.len() - 1) as u16;

    /// Returns the numeric identifier of this keyword.
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Returns the keyword with the given numeric identifier, if there is one.
    ///
    /// ```
    /// use style_keywords::Keyword;
    ///
    /// let id = Keyword::Grid.to_u16();
    /// assert_eq!(Keyword::from_u16(id), Some(Keyword::Grid));
    /// assert_eq!(Keyword::from_u16(u16::MAX), None);
    /// ```
    pub const fn from_u16(value: u16) -> Option<Self> {
        if value > Self::MAX_VALUE {
            return None;
        }
        Some(Self::ALL[value as usize])
    }

    /// Returns `true` for the CSS-wide keywords, which are valid for every property and are
    /// never mapped to a property value.
    pub const fn is_css_wide(self) -> bool {
        matches!(
            self,
            Self::Initial | Self::Inherit | Self::Unset | Self::Revert | Self::RevertLayer
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

define_keywords! {
    /// The identifier that denotes no keyword at all.
    Invalid = "",

    // CSS-wide keywords.
    Initial = "initial",
    Inherit = "inherit",
    Unset = "unset",
    Revert = "revert",
    RevertLayer = "revert-layer",

    // Shared by many properties.
    Auto = "auto",
    None = "none",
    Normal = "normal",
    All = "all",
    Both = "both",
    Default = "default",
    Legacy = "legacy",
    Reset = "reset",
    Always = "always",
    Avoid = "avoid",
    Reverse = "reverse",
    Visible = "visible",
    Hidden = "hidden",
    Collapse = "collapse",
    Clip = "clip",
    Contain = "contain",
    Cover = "cover",
    Fill = "fill",
    Stroke = "stroke",
    Text = "text",
    Size = "size",
    Element = "element",
    Order = "order",

    // Directions, sides and axes.
    Left = "left",
    Right = "right",
    Top = "top",
    Bottom = "bottom",
    Center = "center",
    Middle = "middle",
    Start = "start",
    End = "end",
    Above = "above",
    Below = "below",
    Before = "before",
    After = "after",
    First = "first",
    Last = "last",
    Up = "up",
    Down = "down",
    Ahead = "ahead",
    Forwards = "forwards",
    Backwards = "backwards",
    Horizontal = "horizontal",
    Vertical = "vertical",
    X = "x",
    Y = "y",
    Inline = "inline",
    Block = "block",
    InlineStart = "inline-start",
    InlineEnd = "inline-end",
    InlineSize = "inline-size",
    SelfStart = "self-start",
    SelfEnd = "self-end",
    FlexStart = "flex-start",
    FlexEnd = "flex-end",
    Ltr = "ltr",
    Rtl = "rtl",

    // Display types.
    ListItem = "list-item",
    InlineBlock = "inline-block",
    Table = "table",
    InlineTable = "inline-table",
    TableRowGroup = "table-row-group",
    TableHeaderGroup = "table-header-group",
    TableFooterGroup = "table-footer-group",
    TableRow = "table-row",
    TableColumnGroup = "table-column-group",
    TableColumn = "table-column",
    TableCell = "table-cell",
    TableCaption = "table-caption",
    WebkitBox = "-webkit-box",
    WebkitInlineBox = "-webkit-inline-box",
    Flex = "flex",
    InlineFlex = "inline-flex",
    Grid = "grid",
    InlineGrid = "inline-grid",
    Contents = "contents",
    FlowRoot = "flow-root",

    // Positioning, overflow and boxes.
    Static = "static",
    Relative = "relative",
    Absolute = "absolute",
    Fixed = "fixed",
    Sticky = "sticky",
    WebkitSticky = "-webkit-sticky",
    Scroll = "scroll",
    Overlay = "overlay",
    WebkitPagedX = "-webkit-paged-x",
    WebkitPagedY = "-webkit-paged-y",
    Local = "local",
    Border = "border",
    Padding = "padding",
    Content = "content",
    MarginBox = "margin-box",
    BorderBox = "border-box",
    PaddingBox = "padding-box",
    ContentBox = "content-box",
    FillBox = "fill-box",
    StrokeBox = "stroke-box",
    ViewBox = "view-box",
    WebkitText = "-webkit-text",
    NoClip = "no-clip",
    Repeat = "repeat",
    NoRepeat = "no-repeat",
    Round = "round",
    Space = "space",
    Separate = "separate",
    Show = "show",
    Hide = "hide",
    Flat = "flat",
    Preserve3d = "preserve-3d",
    Optimized3d = "optimized-3d",
    ScaleDown = "scale-down",

    // Border styles, in the order used by `border-style`.
    Inset = "inset",
    Groove = "groove",
    Outset = "outset",
    Ridge = "ridge",
    Dotted = "dotted",
    Dashed = "dashed",
    Solid = "solid",
    Double = "double",
    Wavy = "wavy",

    // Legacy flexible box and alignment.
    Justify = "justify",
    Baseline = "baseline",
    FirstBaseline = "first baseline",
    LastBaseline = "last baseline",
    Stretch = "stretch",
    Single = "single",
    Multiple = "multiple",
    Row = "row",
    RowReverse = "row-reverse",
    Column = "column",
    ColumnReverse = "column-reverse",
    Wrap = "wrap",
    Nowrap = "nowrap",
    WrapReverse = "wrap-reverse",
    Safe = "safe",
    Unsafe = "unsafe",
    SpaceBetween = "space-between",
    SpaceAround = "space-around",
    SpaceEvenly = "space-evenly",
    Slice = "slice",
    Clone = "clone",

    // Fragmentation.
    AvoidColumn = "avoid-column",
    AvoidPage = "avoid-page",
    Page = "page",
    Recto = "recto",
    Verso = "verso",
    Balance = "balance",
    Economy = "economy",
    Exact = "exact",

    // Text layout.
    WebkitAuto = "-webkit-auto",
    WebkitLeft = "-webkit-left",
    WebkitRight = "-webkit-right",
    WebkitCenter = "-webkit-center",
    InterWord = "inter-word",
    InterCharacter = "inter-character",
    Distribute = "distribute",
    Under = "under",
    FromFont = "from-font",
    Capitalize = "capitalize",
    Uppercase = "uppercase",
    Lowercase = "lowercase",
    Embed = "embed",
    BidiOverride = "bidi-override",
    Isolate = "isolate",
    IsolateOverride = "isolate-override",
    Plaintext = "plaintext",
    WebkitIsolate = "-webkit-isolate",
    WebkitIsolateOverride = "-webkit-isolate-override",
    WebkitPlaintext = "-webkit-plaintext",
    Pre = "pre",
    PreWrap = "pre-wrap",
    PreLine = "pre-line",
    BreakSpaces = "break-spaces",
    BreakAll = "break-all",
    KeepAll = "keep-all",
    BreakWord = "break-word",
    Anywhere = "anywhere",
    Loose = "loose",
    Strict = "strict",
    AfterWhiteSpace = "after-white-space",
    Manual = "manual",
    Edges = "edges",
    Stable = "stable",
    Pretty = "pretty",
    Ellipsis = "ellipsis",
    Sideways = "sideways",
    Mixed = "mixed",
    Upright = "upright",
    Logical = "logical",
    Visual = "visual",
    Leading = "leading",
    Cap = "cap",
    Ex = "ex",
    Alphabetic = "alphabetic",
    Ideographic = "ideographic",
    IdeographicInk = "ideographic-ink",
    Compact = "compact",

    // Writing modes, including the SVG 1.1 spellings.
    HorizontalTb = "horizontal-tb",
    HorizontalBt = "horizontal-bt",
    VerticalRl = "vertical-rl",
    VerticalLr = "vertical-lr",
    Lr = "lr",
    LrTb = "lr-tb",
    Rl = "rl",
    RlTb = "rl-tb",
    Tb = "tb",
    TbRl = "tb-rl",

    // Text decoration and emphasis.
    Underline = "underline",
    Overline = "overline",
    LineThrough = "line-through",
    Blink = "blink",
    Filled = "filled",
    Open = "open",
    Dot = "dot",
    Circle = "circle",
    DoubleCircle = "double-circle",
    Triangle = "triangle",
    Sesame = "sesame",
    Square = "square",
    Disc = "disc",

    // Hanging punctuation and speech.
    AllowEnd = "allow-end",
    ForceEnd = "force-end",
    SpellOut = "spell-out",
    Digits = "digits",
    LiteralPunctuation = "literal-punctuation",
    NoPunctuation = "no-punctuation",

    // List markers, in counter-style order.
    Decimal = "decimal",
    DecimalLeadingZero = "decimal-leading-zero",
    ArabicIndic = "arabic-indic",
    Binary = "binary",
    Bengali = "bengali",
    Cambodian = "cambodian",
    Khmer = "khmer",
    Devanagari = "devanagari",
    Gujarati = "gujarati",
    Gurmukhi = "gurmukhi",
    Kannada = "kannada",
    LowerHexadecimal = "lower-hexadecimal",
    Lao = "lao",
    Malayalam = "malayalam",
    Mongolian = "mongolian",
    Myanmar = "myanmar",
    Octal = "octal",
    Oriya = "oriya",
    Persian = "persian",
    Urdu = "urdu",
    Telugu = "telugu",
    Tibetan = "tibetan",
    Thai = "thai",
    UpperHexadecimal = "upper-hexadecimal",
    LowerRoman = "lower-roman",
    UpperRoman = "upper-roman",
    LowerGreek = "lower-greek",
    LowerAlpha = "lower-alpha",
    LowerLatin = "lower-latin",
    UpperAlpha = "upper-alpha",
    UpperLatin = "upper-latin",
    Ethiopic = "ethiopic",
    EthiopicHalehame = "ethiopic-halehame",
    EthiopicAbegede = "ethiopic-abegede",
    CjkEarthlyBranch = "cjk-earthly-branch",
    CjkHeavenlyStem = "cjk-heavenly-stem",
    CjkIdeographic = "cjk-ideographic",
    Hangul = "hangul",
    HangulConsonant = "hangul-consonant",
    Hiragana = "hiragana",
    HiraganaIroha = "hiragana-iroha",
    Katakana = "katakana",
    KatakanaIroha = "katakana-iroha",
    Armenian = "armenian",
    LowerArmenian = "lower-armenian",
    UpperArmenian = "upper-armenian",
    Georgian = "georgian",
    Hebrew = "hebrew",
    Outside = "outside",
    Inside = "inside",

    // Marquee.
    Slide = "slide",
    Alternate = "alternate",

    // Fonts.
    Antialiased = "antialiased",
    SubpixelAntialiased = "subpixel-antialiased",
    SmallCaps = "small-caps",
    AllSmallCaps = "all-small-caps",
    PetiteCaps = "petite-caps",
    AllPetiteCaps = "all-petite-caps",
    Unicase = "unicase",
    TitlingCaps = "titling-caps",
    Sub = "sub",
    Super = "super",
    Swap = "swap",
    Fallback = "fallback",
    Optional = "optional",
    OptimizeSpeed = "optimizespeed",
    OptimizeLegibility = "optimizelegibility",
    OptimizeQuality = "optimizequality",
    GeometricPrecision = "geometricprecision",
    UltraCondensed = "ultra-condensed",
    ExtraCondensed = "extra-condensed",
    Condensed = "condensed",
    SemiCondensed = "semi-condensed",
    SemiExpanded = "semi-expanded",
    Expanded = "expanded",
    ExtraExpanded = "extra-expanded",
    UltraExpanded = "ultra-expanded",

    // Vertical alignment.
    TextTop = "text-top",
    TextBottom = "text-bottom",
    WebkitBaselineMiddle = "-webkit-baseline-middle",

    // Cursors, in `cursor` grammar order.
    ContextMenu = "context-menu",
    Help = "help",
    Pointer = "pointer",
    Progress = "progress",
    Wait = "wait",
    Cell = "cell",
    Crosshair = "crosshair",
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
    ColResize = "col-resize",
    RowResize = "row-resize",
    AllScroll = "all-scroll",
    ZoomIn = "zoom-in",
    ZoomOut = "zoom-out",
    WebkitGrab = "-webkit-grab",
    WebkitGrabbing = "-webkit-grabbing",
    WebkitZoomIn = "-webkit-zoom-in",
    WebkitZoomOut = "-webkit-zoom-out",
    AutoHide = "auto-hide",

    // User interaction.
    ReadOnly = "read-only",
    ReadWrite = "read-write",
    ReadWritePlaintextOnly = "read-write-plaintext-only",
    Manipulation = "manipulation",
    PanX = "pan-x",
    PanY = "pan-y",
    PinchZoom = "pinch-zoom",
    Painted = "painted",
    VisibleStroke = "visiblestroke",
    VisibleFill = "visiblefill",
    VisiblePainted = "visiblepainted",
    BoundingBox = "bounding-box",

    // Native control appearance.
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
    Searchfield = "searchfield",
    Textfield = "textfield",
    Textarea = "textarea",
    Attachment = "attachment",
    BorderlessAttachment = "borderless-attachment",
    ApplePayButton = "-apple-pay-button",

    // Apple Pay buttons.
    White = "white",
    WhiteOutline = "white-outline",
    Black = "black",
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
    Rent = "rent",
    Support = "support",
    Contribute = "contribute",
    Tip = "tip",

    // Compositing and blending.
    Clear = "clear",
    SourceOver = "source-over",
    SourceIn = "source-in",
    SourceOut = "source-out",
    SourceAtop = "source-atop",
    DestinationOver = "destination-over",
    DestinationIn = "destination-in",
    DestinationOut = "destination-out",
    DestinationAtop = "destination-atop",
    Xor = "xor",
    PlusDarker = "plus-darker",
    PlusLighter = "plus-lighter",
    Add = "add",
    Subtract = "subtract",
    Intersect = "intersect",
    Exclude = "exclude",
    Multiply = "multiply",
    Screen = "screen",
    Darken = "darken",
    Lighten = "lighten",
    ColorDodge = "color-dodge",
    ColorBurn = "color-burn",
    HardLight = "hard-light",
    SoftLight = "soft-light",
    Difference = "difference",
    Exclusion = "exclusion",
    Hue = "hue",
    Saturation = "saturation",
    Color = "color",
    Luminosity = "luminosity",
    Luminance = "luminance",
    Alpha = "alpha",

    // Images and rendering hints.
    CrispEdges = "crisp-edges",
    WebkitCrispEdges = "-webkit-crisp-edges",
    WebkitOptimizeContrast = "-webkit-optimize-contrast",
    Pixelated = "pixelated",
    Dynamic = "dynamic",

    // SVG painting and text.
    Butt = "butt",
    Miter = "miter",
    Bevel = "bevel",
    Nonzero = "nonzero",
    Evenodd = "evenodd",
    BeforeEdge = "before-edge",
    TextBeforeEdge = "text-before-edge",
    AfterEdge = "after-edge",
    TextAfterEdge = "text-after-edge",
    Central = "central",
    Hanging = "hanging",
    Mathematical = "mathematical",
    UseScript = "use-script",
    NoChange = "no-change",
    ResetSize = "reset-size",
    SRGB = "srgb",
    LinearRGB = "linearrgb",
    Crispedges = "crispedges",
    NonScalingStroke = "non-scaling-stroke",

    // Scroll snapping and overscroll.
    Proximity = "proximity",
    Mandatory = "mandatory",
}
