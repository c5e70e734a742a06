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

pub mod circuit_data;
pub mod circuit_drawer;
pub mod error;
pub mod gate_matrix;
pub mod operations;
pub mod packed_instruction;
pub mod util;

/// A qubit line of a circuit, stored as its index.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
#[repr(transparent)]
pub struct Qubit(pub u32);

impl Qubit {
    /// Convert to a usize.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Qubit {
    fn from(value: u32) -> Self {
        Qubit(value)
    }
}
