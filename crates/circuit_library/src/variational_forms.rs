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

//! Building blocks for particle-number conserving variational forms.
//!
//! The two-qubit gate `A(θ, φ)` mixes `|01>` and `|10>` while leaving `|00>` and `|11>`
//! untouched:
//!
//! ```text
//! ┌                                    ┐
//! │ 1        0             0         0 │
//! │ 0     -sin θ     cos θ e^{-iφ}   0 │
//! │ 0  cos θ e^{iφ}      sin θ       0 │
//! │ 0        0             0         1 │
//! └                                    ┘
//! ```
//!
//! It is built from CNOTs and the single-qubit rotation `R(θ, φ) = Rz(φ) Ry(θ)` together with its
//! inverse.

use smallvec::smallvec;
use tracing::debug;
use varforms_circuit::circuit_data::CircuitData;
use varforms_circuit::circuit_drawer::{DrawOptions, DrawTheme};
use varforms_circuit::error::CircuitError;
use varforms_circuit::operations::{CustomGate, Operation, StandardGate};
use varforms_circuit::Qubit;

/// The single-qubit rotation `R(θ, φ)`: `ry(θ)` followed by `rz(φ)`.
pub fn r_gate(theta: f64, phi: f64) -> Result<CustomGate, CircuitError> {
    let circuit = CircuitData::from_standard_gates(
        1,
        [
            (StandardGate::RYGate, smallvec![theta], smallvec![Qubit(0)]),
            (StandardGate::RZGate, smallvec![phi], smallvec![Qubit(0)]),
        ],
        0.,
    )?;
    debug!(theta, phi, "built R gate");
    Ok(circuit
        .to_gate("r")
        .with_label("R(θ,φ)")
        .with_latex_label("R(\\theta, \\phi)"))
}

/// The inverse of [r_gate]: `rz(-φ)` followed by `ry(-θ)`.
pub fn rd_gate(theta: f64, phi: f64) -> Result<CustomGate, CircuitError> {
    let circuit = CircuitData::from_standard_gates(
        1,
        [
            (StandardGate::RZGate, smallvec![-phi], smallvec![Qubit(0)]),
            (StandardGate::RYGate, smallvec![-theta], smallvec![Qubit(0)]),
        ],
        0.,
    )?;
    debug!(theta, phi, "built R† gate");
    Ok(circuit
        .to_gate("rd")
        .with_label("R(θ,φ)†")
        .with_latex_label("R(\\theta, \\phi)^\\dagger"))
}

/// The excitation preserving two-qubit gate `A(θ, φ)`.
///
/// `A(0, 0)` reduces to the three CNOTs, i.e. a SWAP.
pub fn a_gate(theta: f64, phi: f64) -> Result<CustomGate, CircuitError> {
    let r = r_gate(theta, phi)?;
    let rd = rd_gate(theta, phi)?;

    let mut circuit = CircuitData::new(2);
    circuit.cx(1, 0)?;
    circuit.append_gate(&rd, &[1])?;
    circuit.cx(0, 1)?;
    circuit.append_gate(&r, &[1])?;
    circuit.cx(1, 0)?;
    debug!(theta, phi, "built A gate");
    Ok(circuit
        .to_gate("a")
        .with_label("A(θ,φ)")
        .with_latex_label("A(\\theta, \\phi)"))
}

/// Render `gate` applied to all of its qubits in order.
///
/// With `decomposed` set the gate is expanded one level first, so its definition is shown
/// instead of a single box.  `theme` is parsed as a [DrawTheme]; the initial state is always
/// shown.
pub fn draw(gate: &CustomGate, theme: &str, decomposed: bool) -> Result<String, CircuitError> {
    let theme: DrawTheme = theme.parse()?;
    draw_with_options(gate, &DrawOptions::default().with_theme(theme), decomposed)
}

/// Render the one-level decomposition of `gate`.
pub fn decompose(gate: &CustomGate, theme: &str) -> Result<String, CircuitError> {
    draw(gate, theme, true)
}

pub fn draw_with_options(
    gate: &CustomGate,
    options: &DrawOptions,
    decomposed: bool,
) -> Result<String, CircuitError> {
    let num_qubits = gate.num_qubits();
    let qargs: Vec<u32> = (0..num_qubits).collect();
    let mut circuit = CircuitData::new(num_qubits);
    circuit.append_gate(gate, &qargs)?;
    if decomposed {
        circuit = circuit.decompose();
    }
    debug!(gate = gate.name(), decomposed, theme = %options.theme, "drawing gate");
    Ok(circuit.draw(options))
}
