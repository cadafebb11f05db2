//! Transcendental functions of a phase.
//!
//! There are only four phases, so each function is evaluated once over
//! `1, i, -1, -i` on first use and looked up by code afterwards.

use std::f64::consts::{FRAC_PI_2, LN_2, PI};
use std::sync::LazyLock;

use num::complex::Complex64;
use num::traits::Pow;

use crate::phase::Phase;

type Table = [Complex64; 4];

const ARG: [f64; 4] = [0.0, FRAC_PI_2, PI, -FRAC_PI_2];

fn tabulate(name: &str, f: impl Fn(Complex64) -> Complex64) -> Table {
    log::debug!("building phase lookup table for `{name}`");
    Phase::ALL.map(|p| f(p.to_complex()))
}

static POW: LazyLock<[Table; 4]> = LazyLock::new(|| {
    log::debug!("building phase lookup table for `pow`");
    Phase::ALL.map(|base| {
        let z: Complex64 = base.to_complex();
        Phase::ALL.map(|exp| {
            if exp.is_real() {
                base.powi(exp.re()).to_complex()
            } else {
                z.powc(exp.to_complex())
            }
        })
    })
});

macro_rules! lookup_fns {
    ( $( $(#[$meta:meta])* $name:ident => $f:expr; )* ) => {
        impl Phase {
            $(
                $(#[$meta])*
                pub fn $name(self) -> Complex64 {
                    static TABLE: LazyLock<Table> =
                        LazyLock::new(|| tabulate(stringify!($name), $f));
                    TABLE[self.index()]
                }
            )*
        }
    };
}

impl Phase {
    /// Argument of the phase in `(-pi, pi]`.
    pub fn arg(self) -> f64 {
        ARG[self.index()]
    }
}

lookup_fns! {
    /// Exponential `e^p`.
    exp => |z| z.exp();
    /// `2^p`.
    exp2 => |z| (z * LN_2).exp();
    /// `e^p - 1`.
    expm1 => |z| z.exp() - 1.0;
    /// Principal natural logarithm, exactly `(0, arg)`.
    ln => |z| Complex64::new(0.0, z.arg());
    /// Base-2 logarithm.
    log2 => |z| z.log(2.0);
    /// Base-10 logarithm.
    log10 => |z| z.log(10.0);
    /// `ln(1 + p)`. Infinite at `-1`.
    log1p => |z| (z + 1.0).ln();
    /// Principal square root.
    sqrt => |z| z.sqrt();
    /// Principal cube root, with argument in `[-pi/3, pi/3]`.
    cbrt => |z| z.cbrt();
    /// Sine.
    sin => |z| z.sin();
    /// Cosine.
    cos => |z| z.cos();
    /// Tangent.
    tan => |z| z.tan();
    /// Principal inverse sine.
    asin => |z| z.asin();
    /// Principal inverse cosine.
    acos => |z| z.acos();
    /// Principal inverse tangent. Infinite at `i` and `-i`.
    atan => |z| z.atan();
    /// Hyperbolic sine.
    sinh => |z| z.sinh();
    /// Hyperbolic cosine.
    cosh => |z| z.cosh();
    /// Hyperbolic tangent.
    tanh => |z| z.tanh();
    /// Principal inverse hyperbolic sine.
    asinh => |z| z.asinh();
    /// Principal inverse hyperbolic cosine.
    acosh => |z| z.acosh();
    /// Principal inverse hyperbolic tangent. Infinite at `1` and `-1`.
    atanh => |z| z.atanh();
}

impl Pow<Phase> for Phase {
    type Output = Complex64;

    /// Principal value of `self^rhs`. Not a phase in general: `i^i` is real.
    fn pow(self, rhs: Phase) -> Complex64 {
        POW[self.index()][rhs.index()]
    }
}
