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

use ndarray::{aview2, Array2};
use num_complex::Complex64;
use smallvec::SmallVec;

use crate::circuit_data::CircuitData;
use crate::gate_matrix;

/// Bound float parameters of an instruction.
pub type Params = SmallVec<[f64; 3]>;

pub trait Operation {
    fn name(&self) -> &str;
    fn num_qubits(&self) -> u32;
    fn num_params(&self) -> u32;
    fn matrix(&self, params: &[f64]) -> Option<Array2<Complex64>>;
    fn definition(&self, params: &[f64]) -> Option<CircuitData>;
}

/// Valid types for an operation stored in a circuit.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationType {
    Standard(StandardGate),
    Gate(CustomGate),
}

impl OperationType {
    pub fn standard_gate(&self) -> Option<StandardGate> {
        match self {
            Self::Standard(gate) => Some(*gate),
            Self::Gate(_) => None,
        }
    }

    pub fn custom_gate(&self) -> Option<&CustomGate> {
        match self {
            Self::Standard(_) => None,
            Self::Gate(gate) => Some(gate),
        }
    }

    /// Return the inverse operation together with the parameters it must be applied with.
    pub fn inverse(&self, params: &[f64]) -> (OperationType, Params) {
        match self {
            Self::Standard(gate) => {
                let (gate, params) = gate.inverse(params);
                (Self::Standard(gate), params)
            }
            Self::Gate(gate) => (Self::Gate(gate.inverse()), SmallVec::new()),
        }
    }
}

impl Operation for OperationType {
    fn name(&self) -> &str {
        match self {
            Self::Standard(op) => op.name(),
            Self::Gate(op) => op.name(),
        }
    }

    fn num_qubits(&self) -> u32 {
        match self {
            Self::Standard(op) => op.num_qubits(),
            Self::Gate(op) => op.num_qubits(),
        }
    }

    fn num_params(&self) -> u32 {
        match self {
            Self::Standard(op) => op.num_params(),
            Self::Gate(op) => op.num_params(),
        }
    }

    fn matrix(&self, params: &[f64]) -> Option<Array2<Complex64>> {
        match self {
            Self::Standard(op) => op.matrix(params),
            Self::Gate(op) => op.matrix(params),
        }
    }

    fn definition(&self, params: &[f64]) -> Option<CircuitData> {
        match self {
            Self::Standard(op) => op.definition(params),
            Self::Gate(op) => Operation::definition(op, params),
        }
    }
}

impl From<StandardGate> for OperationType {
    fn from(value: StandardGate) -> Self {
        Self::Standard(value)
    }
}

impl From<CustomGate> for OperationType {
    fn from(value: CustomGate) -> Self {
        Self::Gate(value)
    }
}

/// The elementary gates every composite in this crate is eventually built from.
#[derive(Clone, Debug, Copy, Eq, PartialEq, Hash)]
pub enum StandardGate {
    RYGate,
    RZGate,
    CXGate,
}

// This must be kept up-to-date with `StandardGate` when adding or removing
// gates from the enum
pub const STANDARD_GATE_SIZE: usize = 3;

impl StandardGate {
    pub fn num_ctrl_qubits(&self) -> u32 {
        match self {
            Self::CXGate => 1,
            Self::RYGate | Self::RZGate => 0,
        }
    }

    /// The inverse gate and the parameters it takes.  Rotations invert by negating their angle,
    /// `cx` is self-inverse.
    pub fn inverse(&self, params: &[f64]) -> (StandardGate, Params) {
        match self {
            Self::RYGate | Self::RZGate => (*self, params.iter().map(|p| -p).collect()),
            Self::CXGate => (Self::CXGate, SmallVec::new()),
        }
    }
}

impl Operation for StandardGate {
    fn name(&self) -> &str {
        match self {
            Self::RYGate => "ry",
            Self::RZGate => "rz",
            Self::CXGate => "cx",
        }
    }

    fn num_qubits(&self) -> u32 {
        match self {
            Self::RYGate => 1,
            Self::RZGate => 1,
            Self::CXGate => 2,
        }
    }

    fn num_params(&self) -> u32 {
        match self {
            Self::RYGate => 1,
            Self::RZGate => 1,
            Self::CXGate => 0,
        }
    }

    fn matrix(&self, params: &[f64]) -> Option<Array2<Complex64>> {
        match self {
            Self::RYGate => {
                let theta = params.first()?;
                Some(aview2(&gate_matrix::ry_gate(*theta)).to_owned())
            }
            Self::RZGate => {
                let theta = params.first()?;
                Some(aview2(&gate_matrix::rz_gate(*theta)).to_owned())
            }
            Self::CXGate => Some(aview2(&gate_matrix::CX_GATE).to_owned()),
        }
    }

    fn definition(&self, _params: &[f64]) -> Option<CircuitData> {
        // These are the basis of every definition.
        None
    }
}

/// A named gate defined by a circuit of other operations.
///
/// This is what a circuit turns into when it is wrapped up to be used as a subroutine of another
/// circuit.  The gate has no matrix of its own; its action is that of [CustomGate::definition].
#[derive(Clone, Debug, PartialEq)]
pub struct CustomGate {
    name: String,
    label: Option<String>,
    latex_label: Option<String>,
    definition: Box<CircuitData>,
}

impl CustomGate {
    pub fn new(name: impl Into<String>, definition: CircuitData) -> Self {
        CustomGate {
            name: name.into(),
            label: None,
            latex_label: None,
            definition: Box::new(definition),
        }
    }

    /// Set the label shown by the text drawer.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the label shown by the LaTeX drawer.  This is math-mode source without the
    /// surrounding `$`.
    pub fn with_latex_label(mut self, label: impl Into<String>) -> Self {
        self.latex_label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn latex_label(&self) -> Option<&str> {
        self.latex_label.as_deref()
    }

    pub fn definition(&self) -> &CircuitData {
        &self.definition
    }

    /// The gate whose definition is the inverse circuit of this one's.
    pub fn inverse(&self) -> CustomGate {
        CustomGate {
            name: format!("{}_dg", self.name),
            label: self.label.as_ref().map(|label| format!("{}†", label)),
            latex_label: self
                .latex_label
                .as_ref()
                .map(|label| format!("{}^\\dagger", label)),
            definition: Box::new(self.definition.inverse()),
        }
    }
}

impl Operation for CustomGate {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> u32 {
        self.definition.num_qubits() as u32
    }

    fn num_params(&self) -> u32 {
        0
    }

    fn matrix(&self, _params: &[f64]) -> Option<Array2<Complex64>> {
        None
    }

    fn definition(&self, _params: &[f64]) -> Option<CircuitData> {
        Some((*self.definition).clone())
    }
}
