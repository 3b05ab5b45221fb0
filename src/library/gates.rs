//! Logic gates assembled from transistors.
//!
//! Each helper adds one named group to the builder it is given and returns
//! the gate's output wire. Internal wires are suffixed with the group's id so
//! that graph nodes stay distinct when a gate is instantiated many times.

use crate::circuit::{CombineOp, WireId};
use crate::components::GroupBuilder;

/// Inverter: output tapped on the collector side, emitter on ground.
pub fn not(g: &mut GroupBuilder<'_>, a: WireId) -> WireId {
    let mut gate = g.group("NOT");
    let id = gate.id().0;
    let rails = gate.rails();
    let out = gate.wire(format!("not{id}"));
    gate.add_transistor(a, rails.vcc, rails.gnd, Some(out));
    out
}

/// Two transistors in series, output at the second emitter.
pub fn and(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("AND");
    let id = gate.id().0;
    let rails = gate.rails();
    let mid = gate.wire(format!("and{id}_m"));
    let out = gate.wire(format!("and{id}"));
    gate.add_transistor(a, rails.vcc, mid, None);
    gate.add_transistor(b, mid, out, None);
    out
}

/// Two parallel transistors whose emitters meet in an OR combiner.
pub fn or(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("OR");
    let id = gate.id().0;
    let rails = gate.rails();
    let left = gate.wire(format!("or{id}_a"));
    let right = gate.wire(format!("or{id}_b"));
    let out = gate.wire(format!("or{id}"));
    gate.add_transistor(a, rails.vcc, left, None);
    gate.add_transistor(b, rails.vcc, right, None);
    gate.add_combiner(out, left, right, CombineOp::Or);
    out
}

/// Two transistors in series down to ground, output tapped above the first.
///
/// When both conduct, the ground conflict detected by the lower transistor
/// pulls the middle node to ground, which de-asserts the upper transistor's
/// collector output.
pub fn nand(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("NAND");
    let id = gate.id().0;
    let rails = gate.rails();
    let mid = gate.wire(format!("nand{id}_m"));
    let out = gate.wire(format!("nand{id}"));
    gate.add_transistor(a, rails.vcc, mid, Some(out));
    gate.add_transistor(b, mid, rails.gnd, None);
    out
}

/// Two grounded transistors whose collector outputs meet in an AND combiner.
pub fn nor(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("NOR");
    let id = gate.id().0;
    let rails = gate.rails();
    let left = gate.wire(format!("nor{id}_a"));
    let right = gate.wire(format!("nor{id}_b"));
    let out = gate.wire(format!("nor{id}"));
    gate.add_transistor(a, rails.vcc, rails.gnd, Some(left));
    gate.add_transistor(b, rails.vcc, rails.gnd, Some(right));
    gate.add_combiner(out, left, right, CombineOp::And);
    out
}

/// `(a OR b) AND (a NAND b)`
pub fn xor(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("XOR");
    let either = or(&mut gate, a, b);
    let not_both = nand(&mut gate, a, b);
    and(&mut gate, either, not_both)
}

pub fn xnor(g: &mut GroupBuilder<'_>, a: WireId, b: WireId) -> WireId {
    let mut gate = g.group("XNOR");
    let differ = xor(&mut gate, a, b);
    not(&mut gate, differ)
}
