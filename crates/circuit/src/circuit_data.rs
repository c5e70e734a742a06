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

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::circuit_drawer::{draw_circuit, DrawOptions};
use crate::error::{CircuitError, InvalidOperation};
use crate::operations::{CustomGate, Operation, OperationType, Params, StandardGate};
use crate::packed_instruction::PackedInstruction;
use crate::Qubit;

/// An ordered sequence of operations over a fixed number of qubit lines.
///
/// Every instruction is validated when it is added: it must name existing, distinct qubits, have
/// the number of qubits and parameters its operation expects, and all parameters must be finite.
/// A failed append leaves the circuit unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircuitData {
    /// The instruction listing, in application order.
    data: Vec<PackedInstruction>,
    num_qubits: u32,
    global_phase: f64,
}

impl CircuitData {
    pub fn new(num_qubits: u32) -> Self {
        CircuitData {
            data: Vec::new(),
            num_qubits,
            global_phase: 0.,
        }
    }

    /// An alternate constructor to build a new `CircuitData` from an iterator
    /// of standard gates.
    ///
    /// # Arguments
    ///
    /// * num_qubits: The number of qubits in the circuit.
    /// * instructions: An iterator of the standard gate params and qubits to
    ///     add to the circuit
    /// * global_phase: The global phase to use for the circuit
    pub fn from_standard_gates<I>(
        num_qubits: u32,
        instructions: I,
        global_phase: f64,
    ) -> Result<Self, CircuitError>
    where
        I: IntoIterator<Item = (StandardGate, Params, SmallVec<[Qubit; 2]>)>,
    {
        let instruction_iter = instructions.into_iter();
        let mut res = CircuitData {
            data: Vec::with_capacity(instruction_iter.size_hint().0),
            num_qubits,
            global_phase: 0.,
        };
        res.set_global_phase(global_phase)?;
        for (gate, params, qargs) in instruction_iter {
            res.push_standard_gate(gate, &params, &qargs)?;
        }
        Ok(res)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    pub fn global_phase(&self) -> f64 {
        self.global_phase
    }

    pub fn set_global_phase(&mut self, angle: f64) -> Result<(), CircuitError> {
        if !angle.is_finite() {
            return Err(InvalidOperation::NonFiniteGlobalPhase(angle).into());
        }
        self.global_phase = angle;
        Ok(())
    }

    pub fn data(&self) -> &[PackedInstruction] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackedInstruction> {
        self.data.iter()
    }

    pub fn push_standard_gate(
        &mut self,
        gate: StandardGate,
        params: &[f64],
        qargs: &[Qubit],
    ) -> Result<(), CircuitError> {
        self.append(gate, params, qargs)
    }

    /// Append an operation acting on `qargs`.
    pub fn append(
        &mut self,
        op: impl Into<OperationType>,
        params: &[f64],
        qargs: &[Qubit],
    ) -> Result<(), CircuitError> {
        let op = op.into();
        self.check_operation(&op, params, qargs)?;
        self.data.push(PackedInstruction {
            op,
            qubits: qargs.iter().copied().collect(),
            params: params.iter().copied().collect(),
        });
        Ok(())
    }

    /// Append a composite gate as a single instruction acting on `qargs`.
    pub fn append_gate(&mut self, gate: &CustomGate, qargs: &[u32]) -> Result<(), CircuitError> {
        let qargs: SmallVec<[Qubit; 2]> = qargs.iter().copied().map(Qubit::from).collect();
        self.append(gate.clone(), &[], &qargs)
    }

    pub fn ry(&mut self, theta: f64, qubit: u32) -> Result<(), CircuitError> {
        self.push_standard_gate(StandardGate::RYGate, &[theta], &[Qubit(qubit)])
    }

    pub fn rz(&mut self, phi: f64, qubit: u32) -> Result<(), CircuitError> {
        self.push_standard_gate(StandardGate::RZGate, &[phi], &[Qubit(qubit)])
    }

    pub fn cx(&mut self, control: u32, target: u32) -> Result<(), CircuitError> {
        self.push_standard_gate(StandardGate::CXGate, &[], &[Qubit(control), Qubit(target)])
    }

    fn check_operation(
        &self,
        op: &OperationType,
        params: &[f64],
        qargs: &[Qubit],
    ) -> Result<(), InvalidOperation> {
        if params.len() != op.num_params() as usize {
            return Err(InvalidOperation::ParamCountMismatch {
                gate: op.name().to_string(),
                expected: op.num_params(),
                actual: params.len(),
            });
        }
        if let Some((index, value)) = params
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(InvalidOperation::NonFiniteParam {
                gate: op.name().to_string(),
                index,
                value,
            });
        }
        if qargs.len() != op.num_qubits() as usize {
            return Err(InvalidOperation::QubitCountMismatch {
                gate: op.name().to_string(),
                expected: op.num_qubits(),
                actual: qargs.len(),
            });
        }
        for (i, qubit) in qargs.iter().enumerate() {
            if qubit.index() >= self.num_qubits() {
                return Err(InvalidOperation::QubitExceedsCapacity(
                    qubit.index(),
                    self.num_qubits(),
                ));
            }
            if qargs[..i].contains(qubit) {
                return Err(InvalidOperation::DuplicateQubit(qubit.index()));
            }
        }
        Ok(())
    }

    /// The circuit that undoes this one: instructions in reverse order, each replaced by its
    /// inverse, and the global phase negated.
    pub fn inverse(&self) -> CircuitData {
        let data = self
            .data
            .iter()
            .rev()
            .map(|inst| {
                let (op, params) = inst.op.inverse(&inst.params);
                PackedInstruction {
                    op,
                    qubits: inst.qubits.clone(),
                    params,
                }
            })
            .collect();
        CircuitData {
            data,
            num_qubits: self.num_qubits,
            global_phase: -self.global_phase,
        }
    }

    /// Wrap this circuit up as a gate that can be appended to other circuits.
    pub fn to_gate(&self, name: impl Into<String>) -> CustomGate {
        CustomGate::new(name, self.clone())
    }

    /// Expand every composite instruction one level into its definition.
    ///
    /// The definition's qubit `i` is mapped onto the `i`-th qubit the instruction acts on, and its
    /// global phase is added to this circuit's.  Standard gates are kept as they are.
    pub fn decompose(&self) -> CircuitData {
        let mut out = CircuitData {
            data: Vec::with_capacity(self.data.len()),
            num_qubits: self.num_qubits,
            global_phase: self.global_phase,
        };
        for inst in &self.data {
            match inst.op.definition(&inst.params) {
                Some(definition) => {
                    debug!(
                        gate = inst.name(),
                        num_inner = definition.len(),
                        "expanding composite gate"
                    );
                    out.global_phase += definition.global_phase;
                    out.data.extend(definition.data.into_iter().map(|inner| {
                        PackedInstruction {
                            qubits: inner
                                .qubits
                                .iter()
                                .map(|q| inst.qubits[q.index()])
                                .collect(),
                            op: inner.op,
                            params: inner.params,
                        }
                    }));
                }
                None => out.data.push(inst.clone()),
            }
        }
        out
    }

    /// Count the instructions by operation name, in order of first appearance.
    pub fn count_ops(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for inst in &self.data {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    pub fn num_nonlocal_gates(&self) -> usize {
        self.data.iter().filter(|inst| inst.qubits.len() > 1).count()
    }

    /// Render the circuit with the given options.
    pub fn draw(&self, options: &DrawOptions) -> String {
        draw_circuit(self, options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_from_standard_gates() {
        let circuit = CircuitData::from_standard_gates(
            2,
            [
                (StandardGate::RYGate, smallvec![0.5], smallvec![Qubit(0)]),
                (StandardGate::CXGate, smallvec![], smallvec![Qubit(0), Qubit(1)]),
            ],
            0.25,
        )
        .unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.global_phase(), 0.25);
        assert_eq!(circuit.num_nonlocal_gates(), 1);
    }

    #[test]
    fn test_non_finite_param_is_rejected() {
        let mut circuit = CircuitData::new(1);
        let err = circuit.ry(f64::NAN, 0).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::InvalidOperation(InvalidOperation::NonFiniteParam { index: 0, .. })
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_qubit_out_of_range_is_rejected() {
        let mut circuit = CircuitData::new(2);
        assert_eq!(
            circuit.cx(0, 2),
            Err(CircuitError::InvalidOperation(
                InvalidOperation::QubitExceedsCapacity(2, 2)
            ))
        );
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_duplicate_qubit_is_rejected() {
        let mut circuit = CircuitData::new(2);
        assert_eq!(
            circuit.cx(1, 1),
            Err(CircuitError::InvalidOperation(
                InvalidOperation::DuplicateQubit(1)
            ))
        );
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let mut circuit = CircuitData::new(2);
        let err = circuit
            .push_standard_gate(StandardGate::RZGate, &[], &[Qubit(0)])
            .unwrap_err();
        assert!(matches!(
            err,
            CircuitError::InvalidOperation(InvalidOperation::ParamCountMismatch {
                expected: 1,
                actual: 0,
                ..
            })
        ));
        let err = circuit
            .push_standard_gate(StandardGate::CXGate, &[], &[Qubit(0)])
            .unwrap_err();
        assert!(matches!(
            err,
            CircuitError::InvalidOperation(InvalidOperation::QubitCountMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_global_phase_is_rejected() {
        let mut circuit = CircuitData::new(1);
        assert!(circuit.set_global_phase(f64::INFINITY).is_err());
        assert_eq!(circuit.global_phase(), 0.);
    }

    #[test]
    fn test_inverse_reverses_and_negates() {
        let mut circuit = CircuitData::new(2);
        circuit.ry(0.5, 0).unwrap();
        circuit.rz(-0.25, 1).unwrap();
        circuit.cx(1, 0).unwrap();
        let inverse = circuit.inverse();
        let names: Vec<&str> = inverse.iter().map(|inst| inst.name()).collect();
        assert_eq!(names, ["cx", "rz", "ry"]);
        assert_eq!(inverse.data()[0].qubits.as_slice(), &[Qubit(1), Qubit(0)]);
        assert_eq!(inverse.data()[1].params.as_slice(), &[0.25]);
        assert_eq!(inverse.data()[2].params.as_slice(), &[-0.5]);
        assert_eq!(inverse.inverse(), circuit);
    }

    #[test]
    fn test_decompose_maps_inner_qubits() {
        let mut inner = CircuitData::new(2);
        inner.cx(1, 0).unwrap();
        inner.ry(0.5, 1).unwrap();
        let gate = inner.to_gate("block");

        let mut outer = CircuitData::new(3);
        outer.append_gate(&gate, &[2, 0]).unwrap();
        outer.rz(0.1, 1).unwrap();
        assert_eq!(outer.len(), 2);

        let decomposed = outer.decompose();
        assert_eq!(decomposed.len(), 3);
        assert_eq!(decomposed.data()[0].qubits.as_slice(), &[Qubit(0), Qubit(2)]);
        assert_eq!(decomposed.data()[1].qubits.as_slice(), &[Qubit(0)]);
        assert_eq!(decomposed.data()[2].name(), "rz");
        // Only standard gates remain, so a second pass changes nothing.
        assert_eq!(decomposed.decompose(), decomposed);
    }

    #[test]
    fn test_count_ops_keeps_first_appearance_order() {
        let mut circuit = CircuitData::new(2);
        circuit.cx(0, 1).unwrap();
        circuit.ry(0.1, 0).unwrap();
        circuit.cx(1, 0).unwrap();
        let counts: Vec<(&str, usize)> = circuit.count_ops().into_iter().collect();
        assert_eq!(counts, [("cx", 2), ("ry", 1)]);
    }
}
