//! Circuit validation.

use tracing::debug;

use crate::error::{Result, TransimError};

use super::Circuit;

/// Validate a circuit for simulation.
///
/// Checks:
/// - At least one output is declared
///
/// Topological insertion order and the absence of combinational cycles are
/// the builder's responsibility and are not checked.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if circuit.outputs().is_empty() {
        return Err(TransimError::NoOutputs {
            circuit: circuit.name().to_string(),
        });
    }

    if circuit.inputs().is_empty() {
        debug!(circuit = circuit.name(), "circuit has no inputs, a single pass will be rendered");
    }

    Ok(())
}
