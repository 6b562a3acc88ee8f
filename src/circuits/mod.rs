// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gates (`qttt::operations::Gate`).
//!
//! A `Circuit` is built once per move decision, applied left to right to a
//! fresh `QuantumState`, and discarded.

use crate::core::GateError;
use crate::operations::Gate;
use crate::simulation::SimulationEngine;
use std::fmt;

/// An ordered sequence of gates over a register of fixed width.
///
/// Analogy: a stripped-down `qiskit.QuantumCircuit` without classical bits;
/// sampling is a separate step (see `simulation::sampler`).
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// Width of the register the gates address.
    num_qubits: usize,

    /// The gates, in application order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Adds a single gate to the end of the sequence.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Adds multiple gates from an iterator to the end of the sequence.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// Appends every gate of `other`. Both circuits must address the same register.
    pub fn append(&mut self, other: &Circuit) -> Result<(), GateError> {
        if other.num_qubits != self.num_qubits {
            return Err(GateError::InvalidRegisterSize(other.num_qubits));
        }
        self.gates.extend(other.gates.iter().cloned());
        Ok(())
    }

    /// The circuit undoing this one. Every gate in the library is its own
    /// inverse, so reversing the order is enough.
    pub fn inverse(&self) -> Circuit {
        Circuit {
            num_qubits: self.num_qubits,
            gates: self.gates.iter().rev().cloned().collect(),
        }
    }

    /// Applies the gates left to right to the engine's state.
    pub fn apply_to(&self, engine: &mut SimulationEngine) -> Result<(), GateError> {
        if engine.num_qubits() != self.num_qubits {
            return Err(GateError::InvalidRegisterSize(self.num_qubits));
        }
        self.gates.iter().try_for_each(|g| engine.apply_gate(g))
    }

    /// Checks every gate against the register width.
    pub fn validate(&self) -> Result<(), GateError> {
        self.gates.iter().try_for_each(|g| g.validate(self.num_qubits))
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for constructing `Circuit` instances using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Adds a single gate; returns `self` for chaining.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Hadamard on every qubit of the register.
    pub fn hadamard_all(self) -> Self {
        let n = self.circuit.num_qubits;
        self.add_gates((0..n).map(Gate::hadamard))
    }

    /// Bit flip on every qubit of the register.
    pub fn bit_flip_all(self) -> Self {
        let n = self.circuit.num_qubits;
        self.add_gates((0..n).map(Gate::bit_flip))
    }

    /// `H(last) · MCX(all but last -> last) · H(last)`: a sign flip on the
    /// all-ones basis state, built from the gate library alone.
    pub fn phase_flip_all_ones(self) -> Self {
        let n = self.circuit.num_qubits;
        let last = n.saturating_sub(1);
        self.add_gate(Gate::hadamard(last))
            .add_gate(Gate::multi_controlled_bit_flip(0..last, last))
            .add_gate(Gate::hadamard(last))
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return writeln!(f, "qttt::Circuit[0 gates on {} qubits]", self.num_qubits);
        }

        const GATE_WIDTH: usize = 5; // e.g., "──H──"
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        let n = self.num_qubits;
        let num_gates = self.gates.len();
        let label_width = format!("q{}", n.saturating_sub(1)).len() + 2;

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre = total_dashes / 2;
            let post = total_dashes - pre;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(post)
            )
        }

        // op_grid[row][time]: gate cell; v_connect[row][time]: connector below row
        let mut op_grid = vec![vec![H_WIRE.to_string().repeat(GATE_WIDTH); num_gates]; n];
        let mut v_connect = vec![vec![' '; num_gates]; n];

        for (t, gate) in self.gates.iter().enumerate() {
            match gate {
                Gate::Hadamard { target } | Gate::BitFlip { target } => {
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate(gate.label());
                    }
                }
                Gate::MultiControlledBitFlip { controls, target } => {
                    for c in controls {
                        if let Some(row) = op_grid.get_mut(*c) {
                            row[t] = format_gate("●");
                        }
                    }
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate("⊕");
                    }
                    let involved = gate.involved_qubits();
                    let r_min = involved.iter().copied().min().unwrap_or(*target);
                    let r_max = involved.iter().copied().max().unwrap_or(*target).min(n);
                    for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row[t] = V_WIRE;
                    }
                }
            }
        }

        writeln!(f, "qttt::Circuit[{} gates on {} qubits]", num_gates, n)?;
        for r in 0..n {
            write!(f, "{:<width$}", format!("q{}: ", r), width = label_width)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r + 1 < n {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..num_gates {
                    let pad = GATE_WIDTH - 1;
                    write!(f, "{}{}{}", " ".repeat(pad / 2), v_connect[r][t], " ".repeat(pad - pad / 2))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
