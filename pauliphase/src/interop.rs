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

//! Mixed arithmetic between phases and the rest of the numeric tower.
//!
//! Every real type `T` and its complex form `Complex<T>` get the same set of
//! impls, generated once per numeric family:
//!
//! * `TryFrom<T>` and `TryFrom<Complex<T>>` for [Phase], accepting exactly
//!   `1`, `i`, `-1` and `-i`;
//! * `*`, `+`, `-` and `==` in both operand orders, computed in
//!   [PhaseScalar::Promoted];
//! * `/` in both operand orders. Integer families and `bool` divide in
//!   `Complex<f64>`.
//!
//! Products and sums in an integer family follow that integer type's own
//! overflow rules, so `Phase::MINUS_ONE * i8::MIN` overflows like `-1 * i8::MIN`.

use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::complex::Complex;
use num::Num;

use crate::phase::{Phase, PhaseError};
use crate::scalar_traits::PhaseScalar;

impl<T> From<Phase> for Complex<T>
where
    T: Clone + Num + Neg<Output = T>,
{
    fn from(p: Phase) -> Complex<T> {
        p.to_complex()
    }
}

/// Finds the phase exactly equal to `z`, testing `1`, `i`, `-1`, `-i` in turn.
fn root_of_unity<T>(z: &Complex<T>, shown: impl Display) -> Result<Phase, PhaseError>
where
    T: Clone + Num + Neg<Output = T>,
{
    Phase::ALL
        .into_iter()
        .find(|p| p.to_complex::<T>() == *z)
        .ok_or_else(|| {
            log::trace!("rejecting {shown} as a phase");
            PhaseError::NotARootOfUnity(shown.to_string())
        })
}

impl Add for Phase {
    type Output = Complex<i64>;

    fn add(self, other: Phase) -> Complex<i64> {
        self.to_complex::<i64>() + other.to_complex::<i64>()
    }
}

impl Sub for Phase {
    type Output = Complex<i64>;

    fn sub(self, other: Phase) -> Complex<i64> {
        self.to_complex::<i64>() - other.to_complex::<i64>()
    }
}

/// `*`, `+`, `-` and `==` between a phase and a scalar, in both orders.
macro_rules! impl_mixed_ops {
    ( $t:ty ) => {
        impl Mul<$t> for Phase {
            type Output = <$t as PhaseScalar>::Promoted;

            fn mul(self, rhs: $t) -> Self::Output {
                <$t as PhaseScalar>::promote_phase(self) * rhs.promote()
            }
        }

        impl Mul<Phase> for $t {
            type Output = <$t as PhaseScalar>::Promoted;

            fn mul(self, rhs: Phase) -> Self::Output {
                self.promote() * <$t as PhaseScalar>::promote_phase(rhs)
            }
        }

        impl Add<$t> for Phase {
            type Output = <$t as PhaseScalar>::Promoted;

            fn add(self, rhs: $t) -> Self::Output {
                <$t as PhaseScalar>::promote_phase(self) + rhs.promote()
            }
        }

        impl Add<Phase> for $t {
            type Output = <$t as PhaseScalar>::Promoted;

            fn add(self, rhs: Phase) -> Self::Output {
                self.promote() + <$t as PhaseScalar>::promote_phase(rhs)
            }
        }

        impl Sub<$t> for Phase {
            type Output = <$t as PhaseScalar>::Promoted;

            fn sub(self, rhs: $t) -> Self::Output {
                <$t as PhaseScalar>::promote_phase(self) - rhs.promote()
            }
        }

        impl Sub<Phase> for $t {
            type Output = <$t as PhaseScalar>::Promoted;

            fn sub(self, rhs: Phase) -> Self::Output {
                self.promote() - <$t as PhaseScalar>::promote_phase(rhs)
            }
        }

        impl PartialEq<$t> for Phase {
            fn eq(&self, other: &$t) -> bool {
                <$t as PhaseScalar>::promote_phase(*self) == other.promote()
            }
        }

        impl PartialEq<Phase> for $t {
            fn eq(&self, other: &Phase) -> bool {
                self.promote() == <$t as PhaseScalar>::promote_phase(*other)
            }
        }
    };
}

/// A real type and its complex form: promotion, construction and mixed ops.
macro_rules! impl_real_family {
    ( $($t:ty),* ) => {$(
        impl PhaseScalar for $t {
            type Promoted = Complex<$t>;

            #[inline]
            fn promote(self) -> Complex<$t> {
                Complex::new(self, num::zero())
            }

            #[inline]
            fn promote_phase(p: Phase) -> Complex<$t> {
                p.to_complex()
            }
        }

        impl PhaseScalar for Complex<$t> {
            type Promoted = Complex<$t>;

            #[inline]
            fn promote(self) -> Complex<$t> {
                self
            }

            #[inline]
            fn promote_phase(p: Phase) -> Complex<$t> {
                p.to_complex()
            }
        }

        impl TryFrom<$t> for Phase {
            type Error = PhaseError;

            fn try_from(x: $t) -> Result<Phase, PhaseError> {
                root_of_unity(&x.promote(), x)
            }
        }

        impl TryFrom<Complex<$t>> for Phase {
            type Error = PhaseError;

            fn try_from(z: Complex<$t>) -> Result<Phase, PhaseError> {
                root_of_unity(&z, z)
            }
        }

        impl_mixed_ops!($t);
        impl_mixed_ops!(Complex<$t>);
    )*};
}

/// Division for integer families goes through `Complex<f64>`.
macro_rules! impl_int_division {
    ( $($t:ty),* ) => {$(
        impl Div<$t> for Phase {
            type Output = Complex<f64>;

            fn div(self, rhs: $t) -> Complex<f64> {
                self.to_complex::<f64>() / (rhs as f64)
            }
        }

        impl Div<Phase> for $t {
            type Output = Complex<f64>;

            fn div(self, rhs: Phase) -> Complex<f64> {
                (self as f64) * rhs.inv().to_complex::<f64>()
            }
        }

        impl Div<Complex<$t>> for Phase {
            type Output = Complex<f64>;

            fn div(self, rhs: Complex<$t>) -> Complex<f64> {
                self.to_complex::<f64>() / Complex::new(rhs.re as f64, rhs.im as f64)
            }
        }

        impl Div<Phase> for Complex<$t> {
            type Output = Complex<f64>;

            fn div(self, rhs: Phase) -> Complex<f64> {
                Complex::new(self.re as f64, self.im as f64) * rhs.inv().to_complex::<f64>()
            }
        }
    )*};
}

/// Division for float families stays in the float width.
macro_rules! impl_float_division {
    ( $($t:ty),* ) => {$(
        impl Div<$t> for Phase {
            type Output = Complex<$t>;

            fn div(self, rhs: $t) -> Complex<$t> {
                self.to_complex::<$t>() / rhs
            }
        }

        impl Div<Phase> for $t {
            type Output = Complex<$t>;

            fn div(self, rhs: Phase) -> Complex<$t> {
                self * rhs.inv().to_complex::<$t>()
            }
        }

        impl Div<Complex<$t>> for Phase {
            type Output = Complex<$t>;

            fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                self.to_complex::<$t>() / rhs
            }
        }

        impl Div<Phase> for Complex<$t> {
            type Output = Complex<$t>;

            fn div(self, rhs: Phase) -> Complex<$t> {
                self * rhs.inv().to_complex::<$t>()
            }
        }
    )*};
}

impl_real_family!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_int_division!(i8, i16, i32, i64, i128, isize);
impl_float_division!(f32, f64);

// bool combines like the default integer.
impl PhaseScalar for bool {
    type Promoted = Complex<i64>;

    #[inline]
    fn promote(self) -> Complex<i64> {
        Complex::new(self as i64, 0)
    }

    #[inline]
    fn promote_phase(p: Phase) -> Complex<i64> {
        p.to_complex()
    }
}

impl TryFrom<bool> for Phase {
    type Error = PhaseError;

    fn try_from(b: bool) -> Result<Phase, PhaseError> {
        root_of_unity(&b.promote(), b)
    }
}

impl_mixed_ops!(bool);

impl Div<bool> for Phase {
    type Output = Complex<f64>;

    /// Dividing by `false` follows IEEE division by zero.
    fn div(self, rhs: bool) -> Complex<f64> {
        self.to_complex::<f64>() / (rhs as u8 as f64)
    }
}

impl Div<Phase> for bool {
    type Output = Complex<f64>;

    fn div(self, rhs: Phase) -> Complex<f64> {
        (self as u8 as f64) * rhs.inv().to_complex::<f64>()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num::traits::Pow;
    use rstest::rstest;

    #[rstest]
    #[case(Complex::new(1, 0), Phase::PLUS_ONE)]
    #[case(Complex::new(0, 1), Phase::PLUS_I)]
    #[case(Complex::new(-1, 0), Phase::MINUS_ONE)]
    #[case(Complex::new(0, -1), Phase::MINUS_I)]
    fn complex_round_trip(#[case] z: Complex<i64>, #[case] p: Phase) {
        assert_eq!(Complex::<i64>::from(p), z);
        assert_eq!(Phase::try_from(z), Ok(p));
        assert_eq!(Phase::try_from(Complex::<f32>::from(p)), Ok(p));
        assert_eq!(Phase::try_from(Complex::<i8>::from(p)), Ok(p));
        assert_eq!(Phase::try_from(Complex::<i128>::from(p)), Ok(p));
    }

    #[test]
    fn from_reals() {
        assert_eq!(Phase::try_from(1.0_f64), Ok(Phase::PLUS_ONE));
        assert_eq!(Phase::try_from(-1.0_f32), Ok(Phase::MINUS_ONE));
        assert_eq!(Phase::try_from(-1_i16), Ok(Phase::MINUS_ONE));
        assert_eq!(Phase::try_from(1_isize), Ok(Phase::PLUS_ONE));
        assert_eq!(Phase::try_from(true), Ok(Phase::PLUS_ONE));
        assert_eq!(
            Phase::try_from(Complex::new(-0.0_f64, -1.0)),
            Ok(Phase::MINUS_I)
        );
    }

    #[rstest]
    #[case(Phase::try_from(1.1_f64), "1.1")]
    #[case(Phase::try_from(0_i32), "0")]
    #[case(Phase::try_from(2_i64), "2")]
    #[case(Phase::try_from(f64::NAN), "NaN")]
    #[case(Phase::try_from(1.0_f64 + f64::EPSILON), "1.0000000000000002")]
    #[case(Phase::try_from(Complex::new(1_i32, 1)), "1+1i")]
    #[case(Phase::try_from(Complex::new(0.0_f64, 0.5)), "0+0.5i")]
    #[case(Phase::try_from(false), "false")]
    fn not_a_root_of_unity(#[case] res: Result<Phase, PhaseError>, #[case] shown: &str) {
        let err = res.unwrap_err();
        assert_eq!(err, PhaseError::NotARootOfUnity(shown.to_string()));
        assert_eq!(err.to_string(), format!("{shown} is not a fourth root of unity"));
    }

    #[test]
    fn add_sub_promote() {
        let z: Complex<i64> = Phase::PLUS_ONE + Phase::PLUS_I;
        assert_eq!(z, Complex::new(1, 1));
        assert_eq!(Phase::PLUS_ONE + Phase::MINUS_ONE, Complex::new(0, 0));
        assert_eq!(Phase::MINUS_I - Phase::PLUS_I, Complex::new(0, -2));
        assert_eq!(Phase::PLUS_I + 2.5_f64, Complex::new(2.5, 1.0));
        assert_eq!(3_i32 - Phase::MINUS_ONE, Complex::new(4, 0));
        assert_eq!(Phase::MINUS_I + Complex::new(1.0_f32, 1.0), Complex::new(1.0, 0.0));
        assert_eq!(true + Phase::PLUS_I, Complex::new(1_i64, 1));
    }

    #[test]
    fn mul_by_scalars() {
        let z: Complex<f64> = Phase::PLUS_I * 2.0_f64;
        assert_eq!(z, Complex::new(0.0, 2.0));
        assert_eq!(3_i8 * Phase::MINUS_I, Complex::new(0_i8, -3));
        assert_eq!(
            Phase::MINUS_ONE * Complex::new(1.5_f64, -2.0),
            Complex::new(-1.5, 2.0)
        );
        assert_eq!(
            Complex::new(2_i32, 3) * Phase::PLUS_I,
            Complex::new(-3, 2)
        );
    }

    #[test]
    fn mul_by_bool() {
        assert_eq!(true * Phase::PLUS_ONE, Complex::new(1_i64, 0));
        assert_eq!(Phase::MINUS_I * true, Complex::new(0_i64, -1));
        for p in Phase::ALL {
            let z: Complex<i64> = false * p;
            assert_eq!(z, Complex::new(0, 0));
            assert_eq!(p * false, Complex::new(0, 0));
        }
    }

    #[test]
    fn div_by_bool() {
        assert_eq!(Phase::MINUS_I / true, Complex::new(0.0, -1.0));
        assert_eq!(true / Phase::PLUS_I, Complex::new(0.0, -1.0));
        assert_eq!(false / Phase::MINUS_ONE, Complex::new(-0.0, 0.0));

        let z = Phase::PLUS_ONE / false;
        assert_eq!(z.re, f64::INFINITY);
        assert!(z.im.is_nan());
        let z = Phase::MINUS_I / false;
        assert!(z.re.is_nan());
        assert_eq!(z.im, f64::NEG_INFINITY);
    }

    #[test]
    fn division() {
        assert_eq!(Phase::PLUS_I / 2.0_f64, Complex::new(0.0, 0.5));
        assert_eq!(2.0_f32 / Phase::PLUS_I, Complex::new(0.0, -2.0));
        assert_eq!(Phase::MINUS_ONE / 4_i32, Complex::new(-0.25, 0.0));
        assert_eq!(6_i64 / Phase::MINUS_I, Complex::new(0.0, 6.0));
        assert_eq!(
            Complex::new(1.0_f64, 1.0) / Phase::PLUS_I,
            Complex::new(1.0, -1.0)
        );
        assert_eq!(
            Phase::PLUS_I / Complex::new(0.0_f64, 2.0),
            Complex::new(0.5, 0.0)
        );
        assert_eq!(
            Complex::new(3_i16, 0) / Phase::MINUS_ONE,
            Complex::new(-3.0, 0.0)
        );
        assert_eq!(
            Phase::PLUS_ONE / Complex::new(0_i32, 1),
            Complex::new(0.0, -1.0)
        );
    }

    #[test]
    fn equality() {
        assert_eq!(Phase::PLUS_ONE, 1_i32);
        assert_eq!(1.0_f64, Phase::PLUS_ONE);
        assert_eq!(Phase::MINUS_ONE, -1_i8);
        assert_eq!(Phase::PLUS_I, Complex::new(0.0_f32, 1.0));
        assert_eq!(Complex::new(0_i64, -1), Phase::MINUS_I);
        assert_eq!(Phase::PLUS_ONE, true);
        assert_ne!(Phase::PLUS_I, 1_i64);
        assert_ne!(Phase::PLUS_I, Complex::new(0.0_f64, -1.0));
        assert_ne!(Phase::MINUS_ONE, 1.0_f64);
        assert_ne!(Phase::PLUS_ONE, false);
    }

    #[test]
    fn complex_powers() {
        for p in Phase::ALL {
            let z: Complex<i64> = p.into();
            for n in -8..8_i32 {
                assert_eq!(z.powi(n), p.pow(n).to_complex::<i64>());
            }
        }
    }
}
