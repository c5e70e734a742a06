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

//! Print the `A(θ, φ)` gate, boxed and decomposed, in both drawing themes.
//!
//! Set `RUST_LOG=debug` to see the construction and drawing events.

use std::f64::consts::FRAC_PI_4;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use varforms_circuit::error::CircuitError;
use varforms_circuit_library::{a_gate, decompose, draw};
use varforms_quantum_info::predicates::{conserves_excitation_number, ATOL_DEFAULT};
use varforms_quantum_info::unitary_sim::sim_unitary_operation;
use varforms_quantum_info::SimulationError;

fn run() -> Result<(), SimulationError> {
    let gate = a_gate(FRAC_PI_4, 0.5)?;

    println!("{}\n", draw(&gate, "text", false)?);
    println!("{}\n", decompose(&gate, "text")?);
    println!("{}", decompose(&gate, "latex_source")?);

    let mat = sim_unitary_operation(&gate.into(), &[])?;
    println!("{:.3}", mat);
    println!(
        "conserves excitation number: {}",
        conserves_excitation_number(&mat.view(), ATOL_DEFAULT)
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(SimulationError::Circuit(CircuitError::UnknownTheme(theme))) => {
            eprintln!("unknown theme: {theme}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
