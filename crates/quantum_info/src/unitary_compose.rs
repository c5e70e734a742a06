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

use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;
use varforms_circuit::util::C_ZERO;
use varforms_circuit::Qubit;

use crate::SimulationError;

/// Pick the bits of `index` at positions `qubits` and pack them, `qubits[0]` first, into a
/// local basis index.
#[inline]
fn gather(index: usize, qubits: &[Qubit]) -> usize {
    qubits
        .iter()
        .enumerate()
        .fold(0, |acc, (pos, q)| acc | (((index >> q.index()) & 1) << pos))
}

/// The inverse of [gather]: spread the bits of a local index out to positions `qubits`.
#[inline]
fn scatter(local: usize, qubits: &[Qubit]) -> usize {
    qubits
        .iter()
        .enumerate()
        .fold(0, |acc, (pos, q)| acc | (((local >> pos) & 1) << q.index()))
}

/// Apply `gate` on `qubits` after `overall`, returning `G · overall` where `G` is `gate`
/// embedded into the full space.
///
/// Both matrices use little-endian ordering: qubit `i` is bit `i` of a basis index, and the
/// `j`-th entry of `qubits` is bit `j` of the gate's own basis index.
pub fn compose(
    overall: &ArrayView2<Complex64>,
    gate: &ArrayView2<Complex64>,
    qubits: &[Qubit],
) -> Result<Array2<Complex64>, SimulationError> {
    let dim = overall.nrows();
    let num_qubits = dim.trailing_zeros() as usize;
    let gate_dim = gate.nrows();
    if gate.ncols() != gate_dim || gate_dim != 1 << qubits.len() {
        return Err(SimulationError::ShapeMismatch {
            gate_dim,
            num_qubits: qubits.len(),
        });
    }
    if let Some(q) = qubits.iter().find(|q| q.index() >= num_qubits) {
        return Err(SimulationError::QubitOutOfRange {
            qubit: q.index(),
            num_qubits,
        });
    }

    let mask = scatter(gate_dim - 1, qubits);
    let mut out = Array2::<Complex64>::zeros(overall.raw_dim());
    for row in 0..dim {
        let local_row = gather(row, qubits);
        let base = row & !mask;
        let mut out_row = out.row_mut(row);
        for local_col in 0..gate_dim {
            let coeff = gate[[local_row, local_col]];
            if coeff == C_ZERO {
                continue;
            }
            out_row.scaled_add(coeff, &overall.row(base | scatter(local_col, qubits)));
        }
    }
    Ok(out)
}
