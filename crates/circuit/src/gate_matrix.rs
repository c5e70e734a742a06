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

use crate::util::{c64, GateArray1Q, GateArray2Q, C_ONE, C_ZERO};

pub static ONE_QUBIT_IDENTITY: GateArray1Q = [[C_ONE, C_ZERO], [C_ZERO, C_ONE]];

#[inline]
pub fn ry_gate(theta: f64) -> GateArray1Q {
    let half_theta = theta / 2.;
    let cos = c64(half_theta.cos(), 0.);
    let sin = c64(half_theta.sin(), 0.);
    [[cos, -sin], [sin, cos]]
}

#[inline]
pub fn rz_gate(theta: f64) -> GateArray1Q {
    let ilam2 = c64(0., 0.5 * theta);
    [[(-ilam2).exp(), C_ZERO], [C_ZERO, ilam2.exp()]]
}

// Qubit 0 is the control, qubit 1 the target.
pub static CX_GATE: GateArray2Q = [
    [C_ONE, C_ZERO, C_ZERO, C_ZERO],
    [C_ZERO, C_ZERO, C_ZERO, C_ONE],
    [C_ZERO, C_ZERO, C_ONE, C_ZERO],
    [C_ZERO, C_ONE, C_ZERO, C_ZERO],
];

pub static SWAP_GATE: GateArray2Q = [
    [C_ONE, C_ZERO, C_ZERO, C_ZERO],
    [C_ZERO, C_ZERO, C_ONE, C_ZERO],
    [C_ZERO, C_ONE, C_ZERO, C_ZERO],
    [C_ZERO, C_ZERO, C_ZERO, C_ONE],
];

#[cfg(test)]
mod test {
    use super::*;
    use approx::abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_ry_pi_flips_basis() {
        let mat = ry_gate(PI);
        assert!(abs_diff_eq!(mat[0][0], C_ZERO, epsilon = 1e-15));
        assert!(abs_diff_eq!(mat[1][0], C_ONE, epsilon = 1e-15));
        assert!(abs_diff_eq!(mat[0][1], -C_ONE, epsilon = 1e-15));
    }

    #[test]
    fn test_rz_is_diagonal_phase() {
        let mat = rz_gate(0.8);
        assert_eq!(mat[0][1], C_ZERO);
        assert_eq!(mat[1][0], C_ZERO);
        assert!(abs_diff_eq!(mat[0][0] * mat[1][1], C_ONE, epsilon = 1e-15));
        assert!(abs_diff_eq!(mat[1][1], c64(0.4f64.cos(), 0.4f64.sin()), epsilon = 1e-15));
    }

    #[test]
    fn test_zero_angle_rotations_are_identity() {
        assert_eq!(ry_gate(0.), ONE_QUBIT_IDENTITY);
        assert_eq!(rz_gate(0.), ONE_QUBIT_IDENTITY);
    }
}
