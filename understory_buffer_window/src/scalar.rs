// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for extents and scroll offsets.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item heights, extents, paddings, and scroll offsets.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point coordinates. Integer-valued
/// extents (whole pixels) are represented exactly by both implementations as
/// long as they stay below the mantissa limit (2^24 for `f32`, 2^53 for `f64`).
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Constructs from an `i64` lossily.
    fn from_i64(value: i64) -> Self;

    /// Clamps negative values to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Rounds toward negative infinity and converts to `i64`.
    ///
    /// Unlike a plain `as` cast this is a true floor for negative values, so
    /// `-0.25` maps to `-1`. Values outside the `i64` range saturate and NaN
    /// maps to `0`.
    fn floor_to_i64(self) -> i64;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_i64(value: i64) -> Self {
        value as Self
    }

    fn floor_to_i64(self) -> i64 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Saturating float to index conversion; fractional part is handled below"
        )]
        let truncated = self as i64;
        if (truncated as Self) > self {
            truncated.saturating_sub(1)
        } else {
            truncated
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_i64(value: i64) -> Self {
        value as Self
    }

    fn floor_to_i64(self) -> i64 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Saturating float to index conversion; fractional part is handled below"
        )]
        let truncated = self as i64;
        if (truncated as Self) > self {
            truncated.saturating_sub(1)
        } else {
            truncated
        }
    }
}
