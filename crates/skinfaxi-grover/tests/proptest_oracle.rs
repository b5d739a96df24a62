//! Property-based tests for oracle construction and the iteration formula.

use proptest::prelude::*;
use skinfaxi_grover::{GroverError, grover_oracle, optimal_iterations};

/// Generate a non-empty set of distinct marked bit strings of one length.
fn arb_marked_states() -> impl Strategy<Value = Vec<String>> {
    (1_usize..=6).prop_flat_map(|num_qubits| {
        let space = 1_u64 << num_qubits;
        prop::collection::btree_set(0..space, 1..=space.min(8) as usize).prop_map(
            move |values| {
                values
                    .into_iter()
                    .map(|v| format!("{v:0width$b}", width = num_qubits))
                    .collect()
            },
        )
    })
}

proptest! {
    /// The oracle always acts on as many qubits as the states have bits,
    /// emits exactly one multi-controlled Z per marked state, and its X
    /// sandwiches cancel (even X count per qubit).
    #[test]
    fn test_oracle_structure(marked in arb_marked_states()) {
        let oracle = grover_oracle(&marked).expect("valid marked states must build");

        prop_assert_eq!(oracle.num_qubits(), marked[0].len());

        let mcz_count = oracle
            .instructions()
            .iter()
            .filter(|i| i.name() == "mcz")
            .count();
        prop_assert_eq!(mcz_count, marked.len());

        for q in 0..oracle.num_qubits() {
            let x_count = oracle
                .instructions()
                .iter()
                .filter(|i| i.name() == "x" && i.qubits[0].index() == q)
                .count();
            prop_assert_eq!(x_count % 2, 0, "X gates on qubit {} do not cancel", q);
        }
    }

    /// Every in-domain (N, k) pair yields an iteration count, and more
    /// marked states never require more iterations.
    #[test]
    fn test_iteration_formula_domain(num_qubits in 1_u32..=16) {
        let space = 1_u64 << num_qubits;

        prop_assert!(
            matches!(
                optimal_iterations(num_qubits, 0),
                Err(GroverError::IterationDomain { .. })
            ),
            "expected IterationDomain error for k = 0"
        );
        prop_assert!(
            matches!(
                optimal_iterations(num_qubits, space + 1),
                Err(GroverError::IterationDomain { .. })
            ),
            "expected IterationDomain error for k = N + 1"
        );

        let mut ks = vec![1, 2, space / 2, space];
        ks.retain(|&k| k >= 1 && k <= space);
        ks.sort_unstable();
        ks.dedup();

        let mut previous = u32::MAX;
        for k in ks {
            let iterations = optimal_iterations(num_qubits, k).unwrap();
            prop_assert!(iterations <= previous);
            previous = iterations;
        }
    }
}
