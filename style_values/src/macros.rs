// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Declares a closed value enumeration together with its `ALL` table.
///
/// A variant written as `Name = "text"` is documented with its CSS spelling, which is also
/// returned by the generated `spelling` method. Variants that have no spelling carry their own
/// doc comment.
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $css:literal)?,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[doc = concat!("`", $css, "`")])?
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the CSS spelling this variant is documented with.
            ///
            /// Variants that are never written as a keyword return `None`.
            pub const fn spelling(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => value_enum!(@spelling $($css)?),)+
                }
            }
        }
    };
    (@spelling $css:literal) => {
        Some($css)
    };
    (@spelling) => {
        None
    };
}
