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

//! The fourth roots of unity `{1, i, -1, -i}` as a closed value type, for
//! tracking the global phase of Pauli operators.
//!
//! ```
//! use num::complex::Complex;
//! use pauliphase::Phase;
//!
//! let p = Phase::PLUS_I * Phase::MINUS_I.powi(3);
//! assert_eq!(p, Phase::MINUS_ONE);
//! assert_eq!(p.to_string(), "Phase(-1)");
//!
//! // Sums leave the group and become complex numbers.
//! assert_eq!(Phase::PLUS_ONE + Phase::PLUS_I, Complex::new(1, 1));
//! assert_eq!(Phase::try_from(Complex::new(0.0, -1.0)), Ok(Phase::MINUS_I));
//! ```

mod interop;
mod lookup;
pub mod phase;
mod random;
pub mod scalar_traits;

pub use phase::{phase_from_factors, Phase, PhaseError};
pub use scalar_traits::PhaseScalar;
