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

use thiserror::Error;

/// An operation that cannot be placed in a circuit as requested.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidOperation {
    #[error("parameter {index} of '{gate}' is not finite: {value}")]
    NonFiniteParam {
        gate: String,
        index: usize,
        value: f64,
    },
    #[error("Qubit at index {0} exceeds circuit capacity of {1} qubits.")]
    QubitExceedsCapacity(usize, usize),
    #[error("'{gate}' acts on {expected} qubits but {actual} were given")]
    QubitCountMismatch {
        gate: String,
        expected: u32,
        actual: usize,
    },
    #[error("'{gate}' takes {expected} parameters but {actual} were given")]
    ParamCountMismatch {
        gate: String,
        expected: u32,
        actual: usize,
    },
    #[error("duplicate qubit {0} in instruction arguments")]
    DuplicateQubit(usize),
    #[error("global phase is not finite: {0}")]
    NonFiniteGlobalPhase(f64),
    #[error("an ansatz on {0} qubits needs at least 2 qubits")]
    AnsatzTooSmall(u32),
    #[error("an ansatz on {num_qubits} qubits with {reps} repetitions has too many parameters")]
    AnsatzTooLarge { num_qubits: u32, reps: usize },
    #[error("ansatz expects {expected} parameters but {actual} were given")]
    AnsatzParamMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircuitError {
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
    #[error("unknown drawing theme \"{0}\", expected one of: text, latex_source")]
    UnknownTheme(String),
}
