// pauliphase - Pauli phase factors as the fourth roots of unity
// Copyright (C) 2021 - Aleks Kissinger
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Phase restricted to the fourth roots of unity, encoded as a 2-bit code.

use std::fmt::{self, Display};
use std::iter::Product;
use std::ops::{Div, DivAssign, Mul, MulAssign, Neg, RangeBounds};

use num::complex::Complex;
use num::traits::{Inv, Pow};
use num::{Num, One, Signed};
use serde::{Deserialize, Serialize};

/// One of the four Pauli phase factors `+1`, `+i`, `-1` and `-i`.
///
/// The phase is stored as a code in `0..4`, where code `k` stands for
/// `i^k`. Products, inverses, powers, negation and conjugation stay inside
/// the type. Sums do not, so `+` and `-` produce a [Complex] number instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Into,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Phase {
    code: u8,
}

/// Errors raised when building a [Phase].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    /// The code is not in `0..4`.
    #[error("invalid phase code 0x{0:02x}, expected a value below 4")]
    InvalidCode(u8),
    /// The number is not exactly one of `1`, `i`, `-1` or `-i`.
    #[error("{0} is not a fourth root of unity")]
    NotARootOfUnity(String),
    /// The operation needs a zero element, which no phase is.
    #[error("`{0}` is not defined for Phase: no phase is zero")]
    NoZeroPhase(&'static str),
}

impl Phase {
    /// The phase `+1`.
    pub const PLUS_ONE: Phase = Phase { code: 0 };
    /// The phase `+i`.
    pub const PLUS_I: Phase = Phase { code: 1 };
    /// The phase `-1`.
    pub const MINUS_ONE: Phase = Phase { code: 2 };
    /// The phase `-i`.
    pub const MINUS_I: Phase = Phase { code: 3 };

    /// All phases, ordered by code.
    pub const ALL: [Phase; 4] = [
        Phase::PLUS_ONE,
        Phase::PLUS_I,
        Phase::MINUS_ONE,
        Phase::MINUS_I,
    ];

    /// Creates the phase `i^code`.
    ///
    /// Fails with [PhaseError::InvalidCode] unless `code < 4`.
    pub fn new(code: u8) -> Result<Self, PhaseError> {
        if code < 4 {
            Ok(Phase { code })
        } else {
            Err(PhaseError::InvalidCode(code))
        }
    }

    /// Folds an arbitrary byte into `0..4`.
    #[inline]
    pub(crate) const fn wrapping(code: u8) -> Self {
        Phase { code: code & 3 }
    }

    /// Returns the phase `i^num_imag * (-1)^num_minus`.
    ///
    /// The code is computed directly, without going through complex powers.
    pub fn from_factors(num_imag: i64, num_minus: i64) -> Self {
        let code = num_imag.rem_euclid(4) + 2 * num_minus.rem_euclid(2);
        Phase::wrapping(code as u8)
    }

    /// Returns the code `k` of the phase `i^k`.
    #[inline]
    pub fn code(self) -> u8 {
        self.code
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.code as usize
    }

    /// Returns the phase as a complex number in any numeric type that can
    /// hold `-1`. The conversion is exact.
    pub fn to_complex<T>(self) -> Complex<T>
    where
        T: Clone + Num + Neg<Output = T>,
    {
        let (re, im) = self.reim();
        Complex::new(re, im)
    }

    /// Returns the real and imaginary parts of the phase.
    pub fn reim<T>(self) -> (T, T)
    where
        T: Num + Neg<Output = T>,
    {
        match self.code {
            0 => (T::one(), T::zero()),
            1 => (T::zero(), T::one()),
            2 => (-T::one(), T::zero()),
            _ => (T::zero(), -T::one()),
        }
    }

    /// Real part of the phase.
    pub fn re(self) -> i64 {
        self.reim::<i64>().0
    }

    /// Imaginary part of the phase.
    pub fn im(self) -> i64 {
        self.reim::<i64>().1
    }

    /// Returns `true` for `+1` and `-1`.
    #[inline]
    pub fn is_real(self) -> bool {
        self.code & 1 == 0
    }

    /// Returns `+1` for `+1` and `+i`, and `-1` for `-1` and `-i`.
    ///
    /// This is a convention splitting the circle into the two halves
    /// reached by rotating forwards from `+1` and from `-1`. It is not the
    /// complex sign `z / |z|`, which would be the phase itself.
    pub fn sign(self) -> Phase {
        if self.code < 2 {
            Phase::PLUS_ONE
        } else {
            Phase::MINUS_ONE
        }
    }

    /// Absolute value, always `1`.
    pub fn abs(self) -> i64 {
        1
    }

    /// Squared absolute value, always `1`.
    pub fn abs2(self) -> i64 {
        1
    }

    /// Logarithm of the squared absolute value, always `0`.
    pub fn log_abs2(self) -> f64 {
        0.0
    }

    /// Multiplicative inverse, equal to the complex conjugate.
    #[inline]
    pub fn inv(self) -> Phase {
        Phase::wrapping(self.code.wrapping_neg())
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> Phase {
        if self.is_real() {
            self
        } else {
            self.inv()
        }
    }

    /// Raises the phase to an integer power. Negative powers are powers of
    /// the inverse.
    pub fn powi(self, n: i64) -> Phase {
        Phase::wrapping(self.code * n.rem_euclid(4) as u8)
    }

    /// Returns `-self` if `y` is negative, and `self` otherwise.
    pub fn flip_sign<T: Signed>(self, y: T) -> Phase {
        if y.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Returns `true` if the phase is real and its value lies in `range`.
    ///
    /// # Example
    /// ```
    /// # use pauliphase::Phase;
    /// assert!(Phase::MINUS_ONE.in_range(&(-1..=0)));
    /// assert!(!Phase::PLUS_ONE.in_range(&(-1..1)));
    /// assert!(!Phase::PLUS_I.in_range(&(-1.0..=1.0)));
    /// ```
    pub fn in_range<T, R>(self, range: &R) -> bool
    where
        T: PartialOrd + Num + Neg<Output = T>,
        R: RangeBounds<T>,
    {
        self.is_real() && range.contains(&self.reim::<T>().0)
    }

    /// There is no zero phase. Always fails with [PhaseError::NoZeroPhase].
    ///
    /// [num::Zero] is not implemented for the same reason, so generic code
    /// that needs an additive identity cannot be instantiated with a phase.
    pub fn zero() -> Result<Phase, PhaseError> {
        Err(PhaseError::NoZeroPhase("zero"))
    }

    /// There is no zero phase. Always fails with [PhaseError::NoZeroPhase].
    pub fn is_zero(&self) -> Result<bool, PhaseError> {
        Err(PhaseError::NoZeroPhase("is_zero"))
    }
}

/// Returns the phase `i^num_imag * (-1)^num_minus`.
///
/// # Example
/// ```
/// # use pauliphase::{phase_from_factors, Phase};
/// assert_eq!(phase_from_factors(1, 1), Phase::MINUS_I);
/// assert_eq!(phase_from_factors(-1, 0), Phase::MINUS_I);
/// assert_eq!(phase_from_factors(6, 3), Phase::PLUS_ONE);
/// ```
pub fn phase_from_factors(num_imag: i64, num_minus: i64) -> Phase {
    Phase::from_factors(num_imag, num_minus)
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self.code {
            0 => "+1",
            1 => "+im",
            2 => "-1",
            _ => "-im",
        };
        write!(f, "Phase({s})")
    }
}

/// A `u8` is always read as a code, so `Phase::try_from(1u8)` is `+i`.
/// The signed integer types are read as values instead, so
/// `Phase::try_from(1i8)` is `+1`.
impl TryFrom<u8> for Phase {
    type Error = PhaseError;

    fn try_from(code: u8) -> Result<Phase, PhaseError> {
        Phase::new(code)
    }
}

impl One for Phase {
    fn one() -> Self {
        Phase::PLUS_ONE
    }

    fn is_one(&self) -> bool {
        self.code == 0
    }
}

impl Neg for Phase {
    type Output = Self;

    fn neg(self) -> Self {
        Phase::wrapping(self.code + 2)
    }
}

impl Inv for Phase {
    type Output = Self;

    fn inv(self) -> Self {
        Phase::inv(self)
    }
}

impl Mul for Phase {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Phase::wrapping(self.code + other.code)
    }
}

impl MulAssign for Phase {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl Div for Phase {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self * other.inv()
    }
}

impl DivAssign for Phase {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl Product for Phase {
    fn product<I: Iterator<Item = Phase>>(iter: I) -> Phase {
        iter.fold(Phase::PLUS_ONE, |acc, p| acc * p)
    }
}

impl<'a> Product<&'a Phase> for Phase {
    fn product<I: Iterator<Item = &'a Phase>>(iter: I) -> Phase {
        iter.copied().product()
    }
}

impl Pow<bool> for Phase {
    type Output = Self;

    /// `p^true` is `p` and `p^false` is `+1`.
    fn pow(self, rhs: bool) -> Self {
        if rhs {
            self
        } else {
            Phase::PLUS_ONE
        }
    }
}

macro_rules! impl_pow_signed {
    ( $($int:ty),* ) => {$(
        impl Pow<$int> for Phase {
            type Output = Self;

            fn pow(self, rhs: $int) -> Self {
                Phase::wrapping(self.code * rhs.rem_euclid(4) as u8)
            }
        }
    )*};
}

macro_rules! impl_pow_unsigned {
    ( $($int:ty),* ) => {$(
        impl Pow<$int> for Phase {
            type Output = Self;

            fn pow(self, rhs: $int) -> Self {
                Phase::wrapping(self.code * (rhs % 4) as u8)
            }
        }
    )*};
}

impl_pow_signed!(i8, i16, i32, i64, i128, isize);
impl_pow_unsigned!(u8, u16, u32, u64, u128, usize);
