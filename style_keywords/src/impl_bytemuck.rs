// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{Keyword, PropertyId};
use bytemuck::{Contiguous, NoUninit, Zeroable, checked::CheckedBitPattern};

// Safety: The enum is `repr(u16)` and has only fieldless variants.
unsafe impl NoUninit for Keyword {}

// Safety: The enum is `repr(u16)` and `0` is `Keyword::Invalid`.
unsafe impl Zeroable for Keyword {}

// Safety: The enum is `repr(u16)` with implicit, dense discriminants.
unsafe impl CheckedBitPattern for Keyword {
    type Bits = u16;

    fn is_valid_bit_pattern(bits: &u16) -> bool {
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u16)` and every value from `0` to `MAX_VALUE` is a variant.
unsafe impl Contiguous for Keyword {
    type Int = u16;
    const MIN_VALUE: u16 = Self::Invalid as u16;
    #[allow(
        clippy::use_self,
        reason = "Using `Self::MAX_VALUE` here would refer to `Contiguous::MAX_VALUE` (self-reference)."
    )]
    const MAX_VALUE: u16 = Keyword::MAX_VALUE;
}

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for PropertyId {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for PropertyId {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        *bits <= Self::MAX_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::Keyword;
    use crate::PropertyId;
    use bytemuck::{Contiguous, Zeroable, checked::try_from_bytes};
    use core::ptr;

    #[test]
    fn checked_bit_pattern() {
        let grid = Keyword::Grid.to_u16();
        let valid = bytemuck::bytes_of(&grid);
        let invalid = bytemuck::bytes_of(&u16::MAX);

        assert_eq!(Ok(&Keyword::Grid), try_from_bytes::<Keyword>(valid));
        assert!(try_from_bytes::<Keyword>(invalid).is_err());

        let invalid = bytemuck::bytes_of(&200_u8);
        assert!(try_from_bytes::<PropertyId>(invalid).is_err());
    }

    #[test]
    fn contiguous() {
        let kw = Keyword::SpaceEvenly;
        assert_eq!(Some(kw), Keyword::from_integer(kw.into_integer()));
        assert_eq!(None, Keyword::from_integer(u16::MAX));
    }

    #[test]
    fn zeroable() {
        assert_eq!(Keyword::zeroed(), Keyword::Invalid);
    }

    /// Tests that the [`Contiguous`] impl for [`Keyword`] is not trivially incorrect.
    const _: () = {
        let mut value = 0;
        while value <= Keyword::MAX_VALUE {
            // Safety: In a const context, therefore if this makes an invalid Keyword, that will be detected.
            let it: Keyword = unsafe { ptr::read((&raw const value).cast()) };
            // Evaluate the enum value to ensure it actually has a valid tag.
            if it as u16 != value {
                unreachable!();
            }
            value += 1;
        }
    };
}

#[cfg(doctest)]
/// Doctests aren't collected under `cfg(test)`; we can use `cfg(doctest)` instead.
mod doctests {
    /// Validates that `Keyword::MAX_VALUE` is the last valid identifier.
    ///
    /// ```compile_fail,E0080
    /// use style_keywords::Keyword;
    /// const {
    ///     let value = Keyword::MAX_VALUE + 1;
    ///     // Safety: In a const context, therefore if this makes an invalid Keyword, that will be detected.
    ///     // (Indeed, we rely upon that)
    ///     let it: Keyword = unsafe { core::ptr::read((&raw const value).cast()) };
    ///     // Evaluate the enum value to ensure it actually has an invalid tag.
    ///     if it as u16 != value {
    ///         unreachable!();
    ///     }
    /// }
    /// ```
    const _KEYWORD: () = {};
}
