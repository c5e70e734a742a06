// This code is part of Qiskit.
//
// (C) Copyright IBM 2025
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

use num_complex::{Complex, Complex64};

/// Create a new [`Complex<f64>`] with arguments that can convert [`Into<f64>`].
///
/// Two generic parameters are used so that calls like `c64(half_theta.cos(), 0)` can mix `f64`
/// and integer arguments.
#[inline]
pub fn c64<T: Into<f64>, V: Into<f64>>(re: T, im: V) -> Complex64 {
    Complex::new(re.into(), im.into())
}

/// Create a new [`Complex<f64>`] with arguments that can be converted to `f64` via `as`.
///
/// This macro may be used in `static` and `const` statements.
#[macro_export]
macro_rules! c64 {
    ($re: expr, $im: expr $(,)*) => {
        ::num_complex::Complex64::new($re as f64, $im as f64)
    };
}

pub type GateArray1Q = [[Complex64; 2]; 2];
pub type GateArray2Q = [[Complex64; 4]; 4];

pub const C_ZERO: Complex64 = c64!(0, 0);
pub const C_ONE: Complex64 = c64!(1, 0);
pub const C_M_ONE: Complex64 = c64!(-1, 0);
pub const IM: Complex64 = c64!(0, 1);
pub const M_IM: Complex64 = c64!(0, -1);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_c64_mixed_arguments() {
        assert_eq!(c64(1, 2.5), Complex64::new(1.0, 2.5));
        assert_eq!(c64!(-1, 0), C_M_ONE);
        assert_eq!(IM * M_IM, C_ONE);
    }
}
