//! Phase oracle construction for marked bit strings.

use skinfaxi_ir::{Circuit, QubitId};

use crate::error::{GroverError, GroverResult};

/// Validate a set of marked states and return the common bit length.
pub(crate) fn validate_marked_states(marked_states: &[impl AsRef<str>]) -> GroverResult<usize> {
    let first = marked_states
        .first()
        .ok_or(GroverError::EmptyMarkedStates)?
        .as_ref();
    let expected = first.chars().count();
    if expected == 0 {
        return Err(GroverError::InvalidBitString {
            state: String::new(),
        });
    }

    for state in marked_states {
        let state = state.as_ref();
        if !state.chars().all(|c| c == '0' || c == '1') {
            return Err(GroverError::InvalidBitString {
                state: state.to_string(),
            });
        }
        let got = state.chars().count();
        if got != expected {
            return Err(GroverError::LengthMismatch {
                state: state.to_string(),
                expected,
                got,
            });
        }
    }

    Ok(expected)
}

/// Build the phase oracle for a set of marked bit strings.
///
/// The oracle acts on N qubits, where N is the common length of the
/// marked states, and flips the amplitude sign of exactly the marked
/// basis states.
///
/// Each marked string is read most-significant qubit first, so it is
/// reversed to the little-endian qubit order before use: character `i`
/// of the reversed string belongs to qubit `i`. Positions holding `'0'`
/// become open controls, realized by sandwiching a multi-controlled Z
/// over all qubits between X gates on those positions.
pub fn grover_oracle(marked_states: &[impl AsRef<str>]) -> GroverResult<Circuit> {
    let num_qubits = validate_marked_states(marked_states)?;
    let mut circuit = Circuit::with_size("oracle", num_qubits as u32, 0);
    let all_qubits: Vec<QubitId> = (0..num_qubits).map(QubitId::from).collect();

    for state in marked_states {
        let zero_positions: Vec<QubitId> = state
            .as_ref()
            .chars()
            .rev()
            .enumerate()
            .filter(|(_, c)| *c == '0')
            .map(|(i, _)| QubitId::from(i))
            .collect();

        for &qubit in &zero_positions {
            circuit.x(qubit)?;
        }
        circuit.mcz(all_qubits.iter().copied())?;
        for &qubit in &zero_positions {
            circuit.x(qubit)?;
        }
    }

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfaxi_ir::{InstructionKind, StandardGate};

    #[test]
    fn test_oracle_shape() {
        let oracle = grover_oracle(&["011", "100"]).unwrap();
        assert_eq!(oracle.num_qubits(), 3);
        assert_eq!(oracle.num_clbits(), 0);

        // One mcz per marked state, X sandwiches around each.
        let mcz_count = oracle
            .instructions()
            .iter()
            .filter(|i| i.name() == "mcz")
            .count();
        assert_eq!(mcz_count, 2);
    }

    #[test]
    fn test_oracle_open_controls() {
        // "011" reversed is "110": qubit 2 holds '0' and gets the X sandwich.
        let oracle = grover_oracle(&["011"]).unwrap();
        let instructions = oracle.instructions();
        assert_eq!(instructions.len(), 3);

        assert_eq!(instructions[0].name(), "x");
        assert_eq!(instructions[0].qubits, vec![QubitId(2)]);
        assert!(matches!(
            instructions[1].kind,
            InstructionKind::Gate(StandardGate::Mcz { num_qubits: 3 })
        ));
        assert_eq!(instructions[2].name(), "x");
        assert_eq!(instructions[2].qubits, vec![QubitId(2)]);
    }

    #[test]
    fn test_all_ones_state_needs_no_x() {
        let oracle = grover_oracle(&["111"]).unwrap();
        assert_eq!(oracle.instructions().len(), 1);
        assert_eq!(oracle.instructions()[0].name(), "mcz");
    }

    #[test]
    fn test_empty_marked_states() {
        let states: [&str; 0] = [];
        assert!(matches!(
            grover_oracle(&states),
            Err(GroverError::EmptyMarkedStates)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            grover_oracle(&["011", "1000"]),
            Err(GroverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            grover_oracle(&["01x"]),
            Err(GroverError::InvalidBitString { .. })
        ));
    }
}
