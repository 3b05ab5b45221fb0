//! Latches and registers.
//!
//! State lives in combiner feedback loops. Stepping these circuits only
//! makes sense in sequential mode, where notifying writes let a loop hold its
//! value after the driving input drops.

use crate::circuit::{Circuit, CombineOp, WireId};
use crate::components::GroupBuilder;

use super::gates::{and, not};

/// Set-only latch: once `a` has been high, `q` stays high.
pub fn or_latch(g: &mut GroupBuilder<'_>, a: WireId) -> WireId {
    let mut latch = g.group("OR_LATCH");
    let q = latch.wire(format!("q{}", latch.id().0));
    latch.add_combiner(q, a, q, CombineOp::Or);
    q
}

/// Set/reset latch: `q = (s OR q) AND NOT r`.
///
/// Driving `s` and `r` together is not a meaningful state; circuits built
/// around it reject that assignment with a validator.
pub fn sr_latch(g: &mut GroupBuilder<'_>, s: WireId, r: WireId) -> WireId {
    let mut latch = g.group("SR_LATCH");
    let id = latch.id().0;
    let not_reset = not(&mut latch, r);
    let set_or_hold = latch.wire(format!("sr{id}_t"));
    let q = latch.wire(format!("q{id}"));
    latch.add_combiner(set_or_hold, s, q, CombineOp::Or);
    latch.add_combiner(q, set_or_hold, not_reset, CombineOp::And);
    q
}

/// Gated D latch: `q` follows `d` while `e` is high and holds otherwise.
pub fn d_latch(g: &mut GroupBuilder<'_>, d: WireId, e: WireId) -> WireId {
    let mut latch = g.group("D_LATCH");
    let id = latch.id().0;
    let q = latch.wire(format!("q{id}"));
    let hold = latch.wire(format!("d{id}_hold"));

    // The inverter must subscribe to `e` before the pass gate does, so that a
    // falling enable closes the hold loop before the pass path drops.
    let not_enable = not(&mut latch, e);
    latch.add_combiner(hold, q, not_enable, CombineOp::And);
    let pass = and(&mut latch, d, e);
    latch.add_combiner(q, pass, hold, CombineOp::Or);
    q
}

/// One D latch per bit sharing a `load` enable. Bits are given and returned
/// in the same order.
pub fn register(g: &mut GroupBuilder<'_>, load: WireId, data: &[WireId]) -> Vec<WireId> {
    let mut bank = g.group(format!("REGISTER{}", data.len()));
    data.iter()
        .map(|&bit| d_latch(&mut bank, bit, load))
        .collect()
}

pub(crate) fn or_latch_circuit() -> Circuit {
    let mut circuit = Circuit::new("or_latch");
    let a = circuit.declare_input("a");
    let q = or_latch(&mut circuit.root(), a);
    circuit.declare_output(q);
    circuit
}

pub(crate) fn sr_latch_circuit() -> Circuit {
    let mut circuit = Circuit::new("sr_latch");
    let s = circuit.declare_input("s");
    let r = circuit.declare_input("r");
    let q = sr_latch(&mut circuit.root(), s, r);
    circuit.declare_output(q);
    circuit.add_validator(move |net| !(net.value(s) && net.value(r)));
    circuit
}

pub(crate) fn d_latch_circuit() -> Circuit {
    let mut circuit = Circuit::new("d_latch");
    let d = circuit.declare_input("d");
    let e = circuit.declare_input("e");
    let q = d_latch(&mut circuit.root(), d, e);
    circuit.declare_output(q);
    circuit
}

/// Inputs `load, d{bits-1}..d0`, outputs `q{bits-1}..q0`.
pub(crate) fn register_circuit(bits: usize) -> Circuit {
    let mut circuit = Circuit::new(format!("register{bits}"));
    let load = circuit.declare_input("load");
    let data: Vec<WireId> = (0..bits)
        .rev()
        .map(|i| circuit.declare_input(format!("d{i}")))
        .collect();
    let q = register(&mut circuit.root(), load, &data);
    circuit.declare_outputs(q);
    circuit
}
