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

use tracing::debug;
use varforms_circuit::circuit_data::CircuitData;
use varforms_circuit::error::{CircuitError, InvalidOperation};

use crate::variational_forms::a_gate;

/// Number of angles [excitation_preserving_ansatz] consumes, or `None` if it does not fit in a
/// `usize`.
pub fn excitation_preserving_num_parameters(num_qubits: u32, reps: usize) -> Option<usize> {
    (num_qubits.saturating_sub(1) as usize)
        .checked_mul(2)?
        .checked_mul(reps)
}

/// Build `reps` layers of `A(θ, φ)` gates on neighbouring qubits.
///
/// Each layer first covers the pairs `(0, 1), (2, 3), ...` and then `(1, 2), (3, 4), ...`, so
/// every neighbouring pair gets exactly one gate per layer.  Gates take their `(θ, φ)` from
/// consecutive entries of `params`.
pub fn excitation_preserving_ansatz(
    num_qubits: u32,
    reps: usize,
    params: &[f64],
) -> Result<CircuitData, CircuitError> {
    if num_qubits < 2 {
        return Err(InvalidOperation::AnsatzTooSmall(num_qubits).into());
    }
    let expected = excitation_preserving_num_parameters(num_qubits, reps)
        .ok_or(InvalidOperation::AnsatzTooLarge { num_qubits, reps })?;
    if params.len() != expected {
        return Err(InvalidOperation::AnsatzParamMismatch {
            expected,
            actual: params.len(),
        }
        .into());
    }

    let pairs: Vec<u32> = (0..num_qubits - 1)
        .step_by(2)
        .chain((1..num_qubits - 1).step_by(2))
        .collect();

    let mut circuit = CircuitData::new(num_qubits);
    for (first, angles) in pairs.iter().cycle().zip(params.chunks_exact(2)) {
        let gate = a_gate(angles[0], angles[1])?;
        circuit.append_gate(&gate, &[*first, first + 1])?;
    }
    debug!(
        num_qubits,
        reps,
        num_gates = circuit.len(),
        "built excitation preserving ansatz"
    );
    Ok(circuit)
}
