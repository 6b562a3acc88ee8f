// tests/simulation_tests.rs

use approx::assert_abs_diff_eq;
use num_complex::Complex;
use qttt::grover::{apply_diffusion, apply_oracle, diffusion_circuit, oracle_circuit};
use qttt::validation::approx_equal_up_to_phase;
use qttt::{
    Circuit, CircuitBuilder, Gate, GateError, QuantumState, Sampler, SearchError, SimulationEngine,
    Simulator, search_circuit,
};

const NORM_EPSILON: f64 = 1e-6;

fn assert_normalized(state: &QuantumState, context: &str) {
    assert!(
        (state.norm_sqr() - 1.0).abs() < NORM_EPSILON,
        "norm drifted to {} - {}",
        state.norm_sqr(),
        context
    );
}

#[test]
fn test_initialize_is_normalized() -> Result<(), GateError> {
    for n in 1..=6 {
        let state = QuantumState::new(n)?;
        assert_eq!(state.dim(), 1 << n);
        assert_normalized(&state, "initialize");
    }
    Ok(())
}

#[test]
fn test_normalization_after_every_gate_of_search() -> Result<(), SearchError> {
    let circuit = search_circuit(4, &[0, 1, 2, 5, 8], 2)?;
    let mut engine = SimulationEngine::init(4)?;
    for (step, gate) in circuit.gates().iter().enumerate() {
        engine.apply_gate(gate)?;
        assert_normalized(engine.state(), &format!("after gate {} ({})", step, gate));
    }
    Ok(())
}

#[test]
fn test_hadamard_and_bit_flip_involutions() -> Result<(), GateError> {
    // Start from a state with structure on every qubit
    let prep = CircuitBuilder::new(3)
        .add_gate(Gate::hadamard(0))
        .add_gate(Gate::multi_controlled_bit_flip([0], 1))
        .add_gate(Gate::hadamard(2))
        .add_gate(Gate::bit_flip(1))
        .build();
    let mut engine = SimulationEngine::init(3)?;
    prep.apply_to(&mut engine)?;
    let reference = engine.state().clone();

    for qubit in 0..3 {
        for gate in [Gate::hadamard(qubit), Gate::bit_flip(qubit)] {
            engine.apply_gate(&gate)?;
            engine.apply_gate(&gate)?;
            for (a, b) in engine.state().amplitudes().iter().zip(reference.amplitudes()) {
                assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-12);
                assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-12);
            }
        }
    }
    Ok(())
}

#[test]
fn test_oracle_marks_valid_moves_only() -> Result<(), SearchError> {
    let valid = [1, 4, 6, 8];
    let mut engine = SimulationEngine::from_state(QuantumState::uniform(4)?);
    apply_oracle(&mut engine, &valid)?;

    for (i, amp) in engine.state().amplitudes().iter().enumerate() {
        assert_abs_diff_eq!(amp.norm(), 0.25, epsilon = 1e-9);
        let expected_sign = if valid.contains(&i) { -1.0 } else { 1.0 };
        assert_abs_diff_eq!(amp.re, 0.25 * expected_sign, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_oracle_is_self_inverse() -> Result<(), SearchError> {
    let oracle = oracle_circuit(4, &[0, 3, 7])?;
    let mut engine = SimulationEngine::from_state(QuantumState::uniform(4)?);
    oracle.apply_to(&mut engine)?;
    oracle.inverse().apply_to(&mut engine)?;
    assert!(approx_equal_up_to_phase(
        engine.state().amplitudes(),
        QuantumState::uniform(4)?.amplitudes(),
        1e-9
    ));
    Ok(())
}

#[test]
fn test_diffusion_leaves_unmarked_superposition_unchanged() -> Result<(), GateError> {
    for n in 2..=5 {
        let uniform = QuantumState::uniform(n)?;
        let mut engine = SimulationEngine::from_state(uniform.clone());
        apply_diffusion(&mut engine)?;
        assert!(
            approx_equal_up_to_phase(engine.state().amplitudes(), uniform.amplitudes(), 1e-9),
            "diffusion changed the uniform state on {} qubits",
            n
        );
        assert_normalized(engine.state(), "diffusion");
    }
    Ok(())
}

#[test]
fn test_diffusion_circuit_is_self_inverse() -> Result<(), GateError> {
    let diffusion = diffusion_circuit(4);
    let start = QuantumState::from_amplitudes(
        (0..16)
            .map(|k| Complex::new(if k == 3 { -0.25 } else { 0.25 }, 0.0))
            .collect(),
    )?;
    let mut engine = SimulationEngine::from_state(start.clone());
    diffusion.apply_to(&mut engine)?;
    diffusion.apply_to(&mut engine)?;
    for (a, b) in engine.state().amplitudes().iter().zip(start.amplitudes()) {
        assert_abs_diff_eq!((*a - *b).norm(), 0.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_full_board_search_distribution() -> Result<(), SearchError> {
    // Nine marked of sixteen, one round: marked amplitude 3/16, unmarked 5/16 (up to sign)
    let moves: Vec<usize> = (0..9).collect();
    let state = Simulator::new().run(&search_circuit(4, &moves, 1)?)?;
    let probs = state.probabilities();
    for (i, p) in probs.iter().enumerate() {
        let expected = if i < 9 { (3.0f64 / 16.0).powi(2) } else { (5.0f64 / 16.0).powi(2) };
        assert_abs_diff_eq!(*p, expected, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_sampled_counts_follow_amplified_distribution() -> Result<(), SearchError> {
    let circuit = search_circuit(4, &[2, 5], 1)?;
    let mut sampler = Sampler::seeded(314);
    let table = Simulator::new().run_and_sample(&circuit, 4096, &mut sampler)?;
    assert_eq!(table.total(), 4096);

    // 2 of 16 marked: each marked index carries (5/8)^2, every other one (1/8)^2
    let state = Simulator::new().run(&circuit)?;
    for (index, count) in table.iter() {
        let expected = state.probabilities()[index] * 4096.0;
        let observed = count as f64;
        // generous bound: 6 standard deviations
        assert!(
            (observed - expected).abs() <= 6.0 * expected.sqrt() + 1.0,
            "index {}: observed {}, expected {:.1}",
            index,
            observed,
            expected
        );
    }
    Ok(())
}

#[test]
fn test_gate_precondition_errors_are_distinct() {
    let circuit = CircuitBuilder::new(4)
        .add_gate(Gate::multi_controlled_bit_flip([0, 1, 2], 2))
        .build();
    assert_eq!(
        Simulator::new().run(&circuit),
        Err(SearchError::Gate(GateError::ControlTargetOverlap(2)))
    );

    let empty = Circuit::new(0);
    assert_eq!(
        Simulator::new().run(&empty),
        Err(SearchError::Gate(GateError::InvalidRegisterSize(0)))
    );
}
