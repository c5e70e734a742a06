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

use std::f64::consts::{FRAC_PI_2, PI};

use approx::abs_diff_eq;
use ndarray::{array, Array2};
use num_complex::Complex64;
use varforms_circuit::circuit_data::CircuitData;
use varforms_circuit::error::{CircuitError, InvalidOperation};
use varforms_circuit::operations::CustomGate;
use varforms_circuit_library::{
    a_gate, decompose, draw, excitation_preserving_ansatz, excitation_preserving_num_parameters,
    r_gate, rd_gate,
};
use varforms_quantum_info::predicates::{
    conserves_excitation_number, is_identity_matrix, is_unitary_matrix, matrices_close,
    ATOL_DEFAULT,
};
use varforms_quantum_info::unitary_sim::{sim_unitary_circuit, sim_unitary_operation};
use varforms_quantum_info::SimulationError;

const ANGLES: [f64; 8] = [-PI, -1.3, -0.25, 0., 0.7, FRAC_PI_2, 2.9, 12.5];

fn unitary(gate: &CustomGate) -> Array2<Complex64> {
    sim_unitary_operation(&gate.clone().into(), &[]).unwrap()
}

fn angle_grid() -> impl Iterator<Item = (f64, f64)> {
    ANGLES
        .iter()
        .flat_map(|theta| ANGLES.iter().map(move |phi| (*theta, *phi)))
}

fn a_closed_form(theta: f64, phi: f64) -> Array2<Complex64> {
    let zero = Complex64::new(0., 0.);
    let one = Complex64::new(1., 0.);
    let (sin, cos) = theta.sin_cos();
    array![
        [one, zero, zero, zero],
        [
            zero,
            Complex64::new(-sin, 0.),
            Complex64::from_polar(cos, -phi),
            zero
        ],
        [
            zero,
            Complex64::from_polar(cos, phi),
            Complex64::new(sin, 0.),
            zero
        ],
        [zero, zero, zero, one],
    ]
}

#[test]
fn test_r_is_unitary() {
    for (theta, phi) in angle_grid() {
        let r = unitary(&r_gate(theta, phi).unwrap());
        assert!(is_unitary_matrix(&r.view(), ATOL_DEFAULT), "θ={theta}, φ={phi}");
    }
}

#[test]
fn test_rd_is_adjoint_of_r() {
    for (theta, phi) in angle_grid() {
        let r = unitary(&r_gate(theta, phi).unwrap());
        let rd = unitary(&rd_gate(theta, phi).unwrap());
        let adjoint = r.t().mapv(|x| x.conj());
        assert!(matrices_close(&rd.view(), &adjoint.view(), ATOL_DEFAULT));
        assert!(is_identity_matrix(&r.dot(&rd).view(), ATOL_DEFAULT));
    }
}

#[test]
fn test_a_matches_closed_form() {
    for (theta, phi) in angle_grid() {
        let a = unitary(&a_gate(theta, phi).unwrap());
        assert!(
            abs_diff_eq!(a, a_closed_form(theta, phi), epsilon = ATOL_DEFAULT),
            "θ={theta}, φ={phi}"
        );
        assert!(is_unitary_matrix(&a.view(), ATOL_DEFAULT));
        assert!(conserves_excitation_number(&a.view(), ATOL_DEFAULT));
    }
}

#[test]
fn test_a_at_zero_is_its_cnots() {
    let mut cnots = CircuitData::new(2);
    cnots.cx(1, 0).unwrap();
    cnots.cx(0, 1).unwrap();
    cnots.cx(1, 0).unwrap();
    let expected = sim_unitary_circuit(&cnots).unwrap();
    let a = unitary(&a_gate(0., 0.).unwrap());
    assert!(matrices_close(&a.view(), &expected.view(), ATOL_DEFAULT));
}

#[test]
fn test_decomposition_preserves_unitary() {
    let a = a_gate(0.9, -2.1).unwrap();
    let mut boxed = CircuitData::new(2);
    boxed.append_gate(&a, &[0, 1]).unwrap();
    let once = boxed.decompose();
    let twice = once.decompose();
    assert_eq!(twice.count_ops().get("cx"), Some(&3));
    assert_eq!(twice.count_ops().get("ry"), Some(&2));
    let expected = sim_unitary_circuit(&boxed).unwrap();
    for circuit in [&once, &twice] {
        let mat = sim_unitary_circuit(circuit).unwrap();
        assert!(matrices_close(&mat.view(), &expected.view(), ATOL_DEFAULT));
    }
}

#[test]
fn test_non_finite_angles() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for (theta, phi) in [(bad, 0.3), (0.3, bad)] {
            assert!(matches!(
                a_gate(theta, phi),
                Err(CircuitError::InvalidOperation(
                    InvalidOperation::NonFiniteParam { .. }
                ))
            ));
        }
    }
}

#[test]
fn test_out_of_range_qubit() {
    let a = a_gate(0.1, 0.2).unwrap();
    let mut circuit = CircuitData::new(2);
    assert_eq!(
        circuit.append_gate(&a, &[1, 2]),
        Err(CircuitError::InvalidOperation(
            InvalidOperation::QubitExceedsCapacity(2, 2)
        ))
    );
}

#[test]
fn test_errors_chain_into_simulation_error() -> Result<(), SimulationError> {
    let gate = a_gate(0.3, 0.4)?;
    let mat = sim_unitary_operation(&gate.into(), &[])?;
    assert!(is_unitary_matrix(&mat.view(), ATOL_DEFAULT));

    let err = a_gate(f64::NAN, 0.)
        .map_err(SimulationError::from)
        .unwrap_err();
    assert!(matches!(
        err,
        SimulationError::Circuit(CircuitError::InvalidOperation(_))
    ));
    Ok(())
}

#[test]
fn test_drawing_is_deterministic() {
    let a = a_gate(0.3, 0.4).unwrap();
    for theme in ["text", "latex_source"] {
        for decomposed in [false, true] {
            assert_eq!(
                draw(&a, theme, decomposed).unwrap(),
                draw(&a, theme, decomposed).unwrap()
            );
        }
        assert_eq!(decompose(&a, theme).unwrap(), draw(&a, theme, true).unwrap());
    }
}

#[test]
fn test_ansatz_conserves_excitation_number() {
    let num_qubits = 4;
    let reps = 2;
    let num_params = excitation_preserving_num_parameters(num_qubits, reps).unwrap();
    let params: Vec<f64> = (0..num_params)
        .map(|i| 0.37 * i as f64 - 1.1)
        .collect();
    let ansatz = excitation_preserving_ansatz(num_qubits, reps, &params).unwrap();
    assert_eq!(ansatz.len(), 6);
    let mat = sim_unitary_circuit(&ansatz).unwrap();
    assert!(is_unitary_matrix(&mat.view(), ATOL_DEFAULT));
    assert!(conserves_excitation_number(&mat.view(), ATOL_DEFAULT));
}
