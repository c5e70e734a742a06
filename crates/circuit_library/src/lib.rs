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

pub mod excitation_preserving;
pub mod variational_forms;

pub use excitation_preserving::{excitation_preserving_ansatz, excitation_preserving_num_parameters};
pub use variational_forms::{a_gate, decompose, draw, draw_with_options, r_gate, rd_gate};
