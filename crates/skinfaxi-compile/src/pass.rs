//! The compiler pass trait.

use skinfaxi_ir::Circuit;

use crate::error::CompileResult;
use crate::property::PropertySet;

/// The kind of a compiler pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Analysis passes inspect the circuit and record results in the
    /// property set without modifying the circuit.
    Analysis,
    /// Transformation passes rewrite the circuit.
    Transformation,
}

/// A compiler pass.
///
/// Passes are run in sequence by a [`PassManager`](crate::PassManager) and
/// communicate through a shared [`PropertySet`].
pub trait Pass: Send + Sync {
    /// Name of the pass, for logging and diagnostics.
    fn name(&self) -> &str;

    /// Whether this pass analyzes or transforms the circuit.
    fn kind(&self) -> PassKind;

    /// Run the pass on the circuit.
    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()>;

    /// Whether this pass should run given the current properties.
    ///
    /// Defaults to `true`. Conditional passes override this to skip
    /// themselves when their preconditions are not met.
    fn should_run(&self, _properties: &PropertySet) -> bool {
        true
    }
}
