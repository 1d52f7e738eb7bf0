//! Checked fixed-width unsigned integers
//!
//! `U8`, `U32`, `U64` and `U128` wrap the native unsigned types with explicit
//! range-checked construction and arithmetic that reports overflow as `None`
//! instead of wrapping or panicking. Runes arithmetic (rune id deltas, edict
//! outputs, supply) goes through these types so an overflow always surfaces
//! as a flaw.

use std::fmt;
use std::str::FromStr;

/// Construction failure for the checked integer types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("num is out of range")]
    OutOfRange,

    #[error("num is not a valid integer")]
    NotInteger,
}

macro_rules! checked_uint {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $inner);

        impl $name {
            pub const MIN: Self = Self(0);
            pub const MAX: Self = Self(<$inner>::MAX);

            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }

            pub fn checked_add(self, rhs: Self) -> Option<Self> {
                self.0.checked_add(rhs.0).map(Self)
            }

            pub fn checked_sub(self, rhs: Self) -> Option<Self> {
                self.0.checked_sub(rhs.0).map(Self)
            }

            /// Construct from a floating point number
            ///
            /// Fails with [`RangeError::NotInteger`] for fractional or non-finite
            /// input and [`RangeError::OutOfRange`] for negative or too-large input.
            pub fn from_f64(value: f64) -> Result<Self, RangeError> {
                if !value.is_finite() || value.fract() != 0.0 {
                    return Err(RangeError::NotInteger);
                }

                // 2^BITS is exactly representable, unlike MAX
                let limit = 2f64.powi(<$inner>::BITS as i32);
                if value < 0.0 || value >= limit {
                    return Err(RangeError::OutOfRange);
                }

                Ok(Self(value as $inner))
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<i128> for $name {
            type Error = RangeError;

            fn try_from(value: i128) -> Result<Self, Self::Error> {
                if value < 0 {
                    return Err(RangeError::OutOfRange);
                }
                <$inner>::try_from(value as u128)
                    .map(Self)
                    .map_err(|_| RangeError::OutOfRange)
            }
        }

        /// Parses a decimal big-integer string
        impl FromStr for $name {
            type Err = RangeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let (negative, digits) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s),
                };

                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RangeError::NotInteger);
                }

                if negative {
                    return if digits.bytes().all(|b| b == b'0') {
                        Ok(Self(0))
                    } else {
                        Err(RangeError::OutOfRange)
                    };
                }

                digits
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|_| RangeError::OutOfRange)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! narrow_from_u128 {
    ($name:ident, $inner:ty) => {
        impl TryFrom<u128> for $name {
            type Error = RangeError;

            fn try_from(value: u128) -> Result<Self, Self::Error> {
                <$inner>::try_from(value)
                    .map(Self)
                    .map_err(|_| RangeError::OutOfRange)
            }
        }
    };
}

checked_uint!(U8, u8);
checked_uint!(U32, u32);
checked_uint!(U64, u64);
checked_uint!(U128, u128);

narrow_from_u128!(U8, u8);
narrow_from_u128!(U32, u32);
narrow_from_u128!(U64, u64);

impl U128 {
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }
}
