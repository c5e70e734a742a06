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

use ndarray::Array2;
use num_complex::Complex64;
use tracing::trace;
use varforms_circuit::circuit_data::CircuitData;
use varforms_circuit::operations::{Operation, OperationType};

use crate::{unitary_compose, SimulationError};

// Dense unitaries of 13 or more qubits are too large to be useful here.
pub const MAX_NUM_QUBITS: usize = 12;

/// The matrix of a single operation with bound `params`.  Operations without a matrix of their
/// own are simulated from their definition.
pub fn sim_unitary_operation(
    op: &OperationType,
    params: &[f64],
) -> Result<Array2<Complex64>, SimulationError> {
    if let Some(mat) = op.matrix(params) {
        return Ok(mat);
    }
    let definition = op
        .definition(params)
        .ok_or_else(|| SimulationError::NoMatrix(op.name().to_string()))?;
    sim_unitary_circuit(&definition)
}

/// Create a unitary matrix for a circuit.
pub fn sim_unitary_circuit(circuit: &CircuitData) -> Result<Array2<Complex64>, SimulationError> {
    let num_qubits = circuit.num_qubits();

    if num_qubits > MAX_NUM_QUBITS {
        return Err(SimulationError::TooManyQubits {
            num_qubits,
            max: MAX_NUM_QUBITS,
        });
    }

    // e^{i * global_phase}
    let global_phase_exp = Complex64::new(0., circuit.global_phase()).exp();

    // Product matrix holding the result
    let mut product_mat: Array2<Complex64> =
        Array2::<Complex64>::eye(1_usize << num_qubits) * global_phase_exp;

    for inst in circuit.iter() {
        trace!(
            gate = inst.name(),
            qubits = ?inst.qubits.as_slice(),
            "applying instruction"
        );
        let mat = match inst.try_matrix() {
            Some(mat) => mat,
            None => sim_unitary_operation(&inst.op, inst.params_view())?,
        };
        product_mat = unitary_compose::compose(&product_mat.view(), &mat.view(), &inst.qubits)?;
    }

    Ok(product_mat)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::abs_diff_eq;
    use ndarray::aview2;
    use varforms_circuit::gate_matrix::{ry_gate, rz_gate, CX_GATE};
    use varforms_circuit::operations::StandardGate;
    use varforms_circuit::util::C_ZERO;

    #[test]
    fn test_sim_cx_little_endian() {
        let mut circuit = CircuitData::new(2);
        circuit.cx(0, 1).unwrap();
        let simulated_matrix = sim_unitary_circuit(&circuit).unwrap();
        assert!(abs_diff_eq!(simulated_matrix, aview2(&CX_GATE), epsilon = 1e-12));
    }

    #[test]
    fn test_sim_applies_in_circuit_order() {
        let mut circuit = CircuitData::new(1);
        circuit.ry(0.4, 0).unwrap();
        circuit.rz(1.1, 0).unwrap();
        let simulated_matrix = sim_unitary_circuit(&circuit).unwrap();
        let expected = aview2(&rz_gate(1.1)).dot(&aview2(&ry_gate(0.4)));
        assert!(abs_diff_eq!(simulated_matrix, expected, epsilon = 1e-12));
    }

    #[test]
    fn test_sim_global_phase() {
        let mut circuit = CircuitData::new(1);
        circuit.set_global_phase(std::f64::consts::PI).unwrap();
        let simulated_matrix = sim_unitary_circuit(&circuit).unwrap();
        let expected = Array2::<Complex64>::eye(2) * Complex64::new(-1., 0.);
        assert!(abs_diff_eq!(simulated_matrix, expected, epsilon = 1e-12));
    }

    #[test]
    fn test_sim_custom_gate_through_definition() {
        let mut inner = CircuitData::new(2);
        inner.ry(0.3, 0).unwrap();
        inner.cx(0, 1).unwrap();
        inner.set_global_phase(0.2).unwrap();
        let gate = inner.to_gate("block");

        let mut outer = CircuitData::new(2);
        outer.append_gate(&gate, &[1, 0]).unwrap();

        let mut flat = CircuitData::new(2);
        flat.ry(0.3, 1).unwrap();
        flat.cx(1, 0).unwrap();
        flat.set_global_phase(0.2).unwrap();

        let simulated_matrix = sim_unitary_circuit(&outer).unwrap();
        let expected = sim_unitary_circuit(&flat).unwrap();
        assert!(abs_diff_eq!(simulated_matrix, expected, epsilon = 1e-12));
        assert!(abs_diff_eq!(
            sim_unitary_circuit(&outer.decompose()).unwrap(),
            expected,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn test_sim_inverse_is_identity() {
        let mut circuit = CircuitData::new(3);
        circuit.ry(0.3, 0).unwrap();
        circuit.cx(0, 2).unwrap();
        circuit.rz(-1.7, 2).unwrap();
        circuit.cx(2, 1).unwrap();
        circuit.set_global_phase(0.5).unwrap();
        let forward = sim_unitary_circuit(&circuit).unwrap();
        let backward = sim_unitary_circuit(&circuit.inverse()).unwrap();
        assert!(abs_diff_eq!(
            backward.dot(&forward),
            Array2::<Complex64>::eye(8),
            epsilon = 1e-12
        ));
    }

    #[test]
    fn test_sim_operation_prefers_matrix() {
        let mat = sim_unitary_operation(&StandardGate::RYGate.into(), &[0.0]).unwrap();
        assert_eq!(mat[[0, 1]], C_ZERO);
        assert_eq!(mat.dim(), (2, 2));
    }

    #[test]
    fn test_too_many_qubits() {
        let circuit = CircuitData::new(13);
        assert_eq!(
            sim_unitary_circuit(&circuit),
            Err(SimulationError::TooManyQubits {
                num_qubits: 13,
                max: MAX_NUM_QUBITS
            })
        );
    }
}
