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

//! Numerical checks on dense matrices.  Every check takes an absolute, per-element tolerance.

use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;

pub const ATOL_DEFAULT: f64 = 1e-9;

/// Whether `a` and `b` have the same shape and agree element-wise to within `atol`.
pub fn matrices_close(a: &ArrayView2<Complex64>, b: &ArrayView2<Complex64>, atol: f64) -> bool {
    a.dim() == b.dim() && a.abs_diff_eq(b, atol)
}

pub fn is_identity_matrix(mat: &ArrayView2<Complex64>, atol: f64) -> bool {
    let (rows, cols) = mat.dim();
    rows == cols && matrices_close(mat, &Array2::eye(rows).view(), atol)
}

/// Check `U†U = I`.
pub fn is_unitary_matrix(mat: &ArrayView2<Complex64>, atol: f64) -> bool {
    let (rows, cols) = mat.dim();
    if rows != cols {
        return false;
    }
    let adjoint = mat.t().mapv(|x| x.conj());
    is_identity_matrix(&adjoint.dot(mat).view(), atol)
}

/// Whether `mat` only couples computational basis states with the same number of qubits in
/// `|1>`.
pub fn conserves_excitation_number(mat: &ArrayView2<Complex64>, atol: f64) -> bool {
    let (rows, cols) = mat.dim();
    rows == cols
        && rows.is_power_of_two()
        && mat
            .indexed_iter()
            .all(|((row, col), x)| x.norm() <= atol || row.count_ones() == col.count_ones())
}
