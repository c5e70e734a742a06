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
use smallvec::SmallVec;

use crate::operations::{Operation, OperationType, Params};
use crate::Qubit;

/// An instruction as stored in a [crate::circuit_data::CircuitData]: the operation, the qubits it
/// acts on in the order the operation expects them, and its bound parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedInstruction {
    pub op: OperationType,
    pub qubits: SmallVec<[Qubit; 2]>,
    pub params: Params,
}

impl PackedInstruction {
    #[inline]
    pub fn params_view(&self) -> &[f64] {
        &self.params
    }

    /// The matrix of this instruction's operation, if it has one without unrolling a definition.
    #[inline]
    pub fn try_matrix(&self) -> Option<Array2<Complex64>> {
        self.op.matrix(&self.params)
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self.op, OperationType::Gate(_))
    }

    /// The inclusive range of qubit indices spanned by this instruction.
    pub fn qubit_range(&self) -> (usize, usize) {
        let mut indices = self.qubits.iter().map(|q| q.index());
        let first = indices.next().unwrap_or_default();
        indices.fold((first, first), |(min, max), idx| (min.min(idx), max.max(idx)))
    }

    pub fn name(&self) -> &str {
        self.op.name()
    }
}
