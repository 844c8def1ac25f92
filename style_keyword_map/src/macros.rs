// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Implements [`ToKeyword`](crate::ToKeyword), [`FromKeyword`](crate::FromKeyword) and
/// [`FromPrimitiveValue`](crate::FromPrimitiveValue) for an enumeration from a single table.
///
/// ```text
/// keyword_map! {
///     Type, fallback: Variant;
///     Variant => CanonicalKeyword | AliasKeyword,
///     ...
///     ; overrides: Keyword => Variant, ...
///     ; unrepresentable: Variant => PlaceholderKeyword, ...
/// }
/// ```
///
/// Each row gives the canonical keyword for a variant followed by any synonyms accepted in
/// the reverse direction. The forward match is exhaustive, so a variant missing from the
/// table fails to compile.
///
/// `overrides` lists keywords borrowed from a related property, or accepted only in the
/// reverse direction. They are matched before the table.
///
/// `unrepresentable` lists variants that have no keyword. Serializing one is diagnosed and
/// yields the placeholder.
///
/// Writing `primitive: custom` after the fallback leaves `FromPrimitiveValue` to a
/// hand-written impl.
macro_rules! keyword_map {
    (
        $ty:ident, fallback: $fallback:ident $(, primitive: $custom:ident)?;
        $($variant:ident => $canonical:ident $(| $alias:ident)*),+ $(,)?
        $(; overrides: $($okw:ident => $ovariant:ident),+ $(,)?)?
        $(; unrepresentable: $($uvariant:ident => $placeholder:ident),+ $(,)?)?
    ) => {
        impl $crate::ToKeyword for $ty {
            fn to_keyword(self) -> ::style_keywords::Keyword {
                match self {
                    $(Self::$variant => ::style_keywords::Keyword::$canonical,)+
                    $($(
                        Self::$uvariant => $crate::diagnostics::unrepresentable_value(
                            self,
                            ::style_keywords::Keyword::$placeholder,
                        ),
                    )+)?
                }
            }
        }

        impl $crate::FromKeyword for $ty {
            const FALLBACK: Self = Self::$fallback;

            fn try_from_keyword(keyword: ::style_keywords::Keyword) -> Option<Self> {
                Some(match keyword {
                    $($(::style_keywords::Keyword::$okw => Self::$ovariant,)+)?
                    $(
                        ::style_keywords::Keyword::$canonical
                        $(| ::style_keywords::Keyword::$alias)* => Self::$variant,
                    )+
                    _ => return None,
                })
            }
        }

        keyword_map!(@primitive $ty $(, $custom)?);
    };
    (@primitive $ty:ident) => {
        impl $crate::FromPrimitiveValue for $ty {
            fn from_primitive_value(value: $crate::PrimitiveValue) -> Self {
                $crate::primitive::keyword_from_primitive(value)
            }
        }
    };
    (@primitive $ty:ident, custom) => {};
}

/// Implements [`ToKeyword`](crate::ToKeyword) and [`FromKeyword`](crate::FromKeyword) for a
/// set of flags from a single `(flag, keyword)` table.
///
/// The reverse direction yields a single-flag set. `empty: Keyword` names the keyword that
/// denotes the empty set, when there is one. The forward direction is only defined for the
/// empty set (when it has a keyword) and for sets of exactly one flag; any other set is
/// diagnosed and yields [`Keyword::Invalid`](style_keywords::Keyword::Invalid).
macro_rules! flag_keyword_map {
    (
        $ty:ident, fallback: $fallback:expr $(, empty: $empty:ident)?;
        $($flag:ident => $kw:ident),+ $(,)?
    ) => {
        impl $crate::ToKeyword for $ty {
            fn to_keyword(self) -> ::style_keywords::Keyword {
                $(
                    if self.is_empty() {
                        return ::style_keywords::Keyword::$empty;
                    }
                )?
                $(
                    if self == Self::$flag {
                        return ::style_keywords::Keyword::$kw;
                    }
                )+
                $crate::diagnostics::unrepresentable_value(self, ::style_keywords::Keyword::Invalid)
            }
        }

        impl $crate::FromKeyword for $ty {
            const FALLBACK: Self = $fallback;

            fn try_from_keyword(keyword: ::style_keywords::Keyword) -> Option<Self> {
                Some(match keyword {
                    $(::style_keywords::Keyword::$empty => Self::empty(),)?
                    $(::style_keywords::Keyword::$kw => Self::$flag,)+
                    _ => return None,
                })
            }
        }

        impl $crate::FromPrimitiveValue for $ty {
            fn from_primitive_value(value: $crate::PrimitiveValue) -> Self {
                $crate::primitive::keyword_from_primitive(value)
            }
        }
    };
}
