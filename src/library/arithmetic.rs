//! Adders.

use crate::circuit::{Circuit, WireId};
use crate::components::GroupBuilder;

use super::gates::{and, or, xor};

/// Add two bits. Returns `(sum, carry)`.
pub fn half_adder(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> (WireId, WireId) {
    let mut adder = g.group("HALF_ADDER");
    let sum = xor(&mut adder, a, b);
    let carry = and(&mut adder, a, b);
    (sum, carry)
}

/// Add two bits and a carry. Returns `(sum, carry_out)`.
pub fn full_adder(
    g: &mut GroupBuilder<'_>,
    a: WireId,
    b: WireId,
    carry_in: WireId,
) -> (WireId, WireId) {
    let mut adder = g.group("FULL_ADDER");
    let partial = xor(&mut adder, a, b);
    let sum = xor(&mut adder, partial, carry_in);
    let generate = and(&mut adder, a, b);
    let propagate = and(&mut adder, partial, carry_in);
    let carry_out = or(&mut adder, generate, propagate);
    (sum, carry_out)
}

/// Chain of full adders over equally wide operands, least significant bit
/// first. Returns the sum bits (also LSB first) and the final carry.
pub fn ripple_adder(
    g: &mut GroupBuilder<'_>,
    a: &[WireId],
    b: &[WireId],
    carry_in: WireId,
) -> (Vec<WireId>, WireId) {
    debug_assert_eq!(a.len(), b.len(), "operands must be equally wide");
    let mut adder = g.group(format!("ADDER{}", a.len()));
    let mut carry = carry_in;
    let mut sums = Vec::with_capacity(a.len());
    for (&x, &y) in a.iter().zip(b) {
        let (sum, next) = full_adder(&mut adder, x, y, carry);
        sums.push(sum);
        carry = next;
    }
    (sums, carry)
}

/// Declare `prefix{bits-1}` down to `prefix0`, returned least significant
/// first.
fn declare_operand(circuit: &mut Circuit, prefix: &str, bits: usize) -> Vec<WireId> {
    let mut wires: Vec<WireId> = (0..bits)
        .rev()
        .map(|i| circuit.declare_input(format!("{prefix}{i}")))
        .collect();
    wires.reverse();
    wires
}

pub(crate) fn half_adder_circuit() -> Circuit {
    let mut circuit = Circuit::new("half_adder");
    let a = circuit.declare_input("a");
    let b = circuit.declare_input("b");
    let (sum, carry) = half_adder(&mut circuit.root(), a, b);
    circuit.declare_outputs([carry, sum]);
    circuit
}

pub(crate) fn full_adder_circuit() -> Circuit {
    let mut circuit = Circuit::new("full_adder");
    let a = circuit.declare_input("a");
    let b = circuit.declare_input("b");
    let carry_in = circuit.declare_input("cin");
    let (sum, carry_out) = full_adder(&mut circuit.root(), a, b, carry_in);
    circuit.declare_outputs([carry_out, sum]);
    circuit
}

/// `bits`-wide adder. Inputs and outputs are declared most significant bit
/// first, so truth lines read as binary numbers: `a, b, cin => cout, sum`.
pub(crate) fn adder_circuit(bits: usize) -> Circuit {
    let mut circuit = Circuit::new(format!("adder{bits}"));
    let a = declare_operand(&mut circuit, "a", bits);
    let b = declare_operand(&mut circuit, "b", bits);
    let carry_in = circuit.declare_input("cin");

    let (sums, carry_out) = ripple_adder(&mut circuit.root(), &a, &b, carry_in);
    circuit.declare_output(carry_out);
    circuit.declare_outputs(sums.into_iter().rev());
    circuit
}
