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

pub mod predicates;
pub mod unitary_compose;
pub mod unitary_sim;

use thiserror::Error;
use varforms_circuit::error::CircuitError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error(
        "The number of circuit qubits ({num_qubits}) exceeds the maximum allowed number of qubits allowed for simulation ({max})."
    )]
    TooManyQubits { num_qubits: usize, max: usize },
    #[error("Cannot extract matrix for operation \"{0}\".")]
    NoMatrix(String),
    #[error("a {gate_dim}x{gate_dim} matrix cannot act on {num_qubits} qubits")]
    ShapeMismatch { gate_dim: usize, num_qubits: usize },
    #[error("qubit {qubit} is outside a {num_qubits}-qubit unitary")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    #[error(transparent)]
    Circuit(#[from] CircuitError),
}
