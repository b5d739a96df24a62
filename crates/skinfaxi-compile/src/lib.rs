//! Skinfaxi circuit compilation.
//!
//! A small pass-based transpiler: passes implement the [`Pass`] trait,
//! share state through a [`PropertySet`], and run in sequence under a
//! [`PassManager`]. The standard pipeline built by [`PassManagerBuilder`]
//! decomposes multi-controlled Z gates down to the target basis, then
//! injects noise channels from a [`NoiseProfile`](skinfaxi_ir::NoiseProfile).
//!
//! # Example
//!
//! ```rust
//! use skinfaxi_compile::{transpile, BasisGates};
//! use skinfaxi_ir::{Circuit, NoiseProfile};
//!
//! let mut circuit = Circuit::bell().unwrap();
//! let profile = NoiseProfile::from_gate_errors([("cx", 0.05)]);
//! transpile(&mut circuit, BasisGates::universal(), Some(profile))?;
//! # Ok::<(), skinfaxi_compile::CompileError>(())
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod passes;
pub mod property;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use property::{BasisGates, PropertySet};

use skinfaxi_ir::{Circuit, NoiseProfile};

/// Run the standard pipeline over a circuit in place.
pub fn transpile(
    circuit: &mut Circuit,
    basis: BasisGates,
    noise: Option<NoiseProfile>,
) -> CompileResult<()> {
    let mut builder = PassManagerBuilder::new().with_basis_gates(basis);
    if let Some(profile) = noise {
        builder = builder.with_noise_profile(profile);
    }
    let (manager, mut properties) = builder.build();
    manager.run(circuit, &mut properties)
}
