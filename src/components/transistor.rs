//! Switching transistor model.
//!
//! The transistor is purely logical: no voltages, no currents. It conducts
//! from collector to emitter while base and collector are both high, and
//! detects a ground conflict when it conducts into an emitter that is itself
//! shorted to ground. In that case it pulls its collector node to ground and
//! de-asserts `collector_out`.
//!
//! NOT, NAND and NOR are built by taking the output at `collector_out` with
//! the emitter on the ground rail; AND and OR take the output at the emitter.

use crate::circuit::{ComponentId, Network, WireId};
use crate::render::{dot_indent, indent, quote};

/// A transistor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transistor {
    pub id: ComponentId,
    pub base: WireId,
    pub collector: WireId,
    pub emitter: WireId,
    /// Output tap on the collector side (the discard rail if unused)
    pub collector_out: WireId,
}

impl Transistor {
    /// Create a new transistor.
    pub fn new(
        id: ComponentId,
        base: WireId,
        collector: WireId,
        emitter: WireId,
        collector_out: WireId,
    ) -> Self {
        Self {
            id,
            base,
            collector,
            emitter,
            collector_out,
        }
    }

    /// Recompute the emitter value and the collector-side outputs.
    pub fn recompute(self, net: &mut Network) {
        let me = self.id;

        // Read both before combining so both subscriptions are made
        let base = net.read(self.base, me);
        let collector = net.read(self.collector, me);
        net.set(self.emitter, base && collector);

        // The emitter write may have cascaded back into our inputs
        let base = net.read(self.base, me);
        let collector = net.read(self.collector, me);
        let emitter_grounded = net.read_ground(self.emitter, me);

        if collector {
            if base && emitter_grounded {
                // Shorted to ground
                net.set_ground(self.collector, true);
                net.set(self.collector_out, false);
            } else {
                net.set_ground(self.collector, false);
                net.set(self.collector_out, true);
            }
        } else {
            net.set_ground(self.collector, false);
            net.set(self.collector_out, false);
        }
    }

    /// Wires with their roles, in rendering order.
    fn terminals(&self) -> [(&'static str, WireId); 4] {
        [
            ("base", self.base),
            ("collector", self.collector),
            ("emitter", self.emitter),
            ("out", self.collector_out),
        ]
    }

    pub(crate) fn render_text(&self, net: &Network, depth: usize) -> String {
        let parts: Vec<String> = self
            .terminals()
            .iter()
            .filter_map(|&(role, wire)| {
                let rendered = net.render_wire(wire);
                (!rendered.is_empty()).then(|| format!("{role}:{rendered}"))
            })
            .collect();
        format!("{}T {}", indent(depth), parts.join(" "))
    }

    pub(crate) fn render_graph(&self, net: &Network, depth: usize) -> String {
        let pad = dot_indent(depth);
        let node = format!("t{}", self.id.0);
        let unused = net.rails().unused;

        let mut lines = vec![format!("{pad}{node} [shape=invtriangle, label=\"\"];")];
        for wire in [self.base, self.collector] {
            if wire != unused {
                lines.push(format!("{pad}{} -> {node};", quote(net.wire_name(wire))));
            }
        }
        for wire in [self.emitter, self.collector_out] {
            if wire != unused {
                lines.push(format!("{pad}{node} -> {};", quote(net.wire_name(wire))));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;

    /// Build a lone transistor with fresh wires on every terminal.
    fn lone_transistor() -> (Network, Transistor) {
        let mut net = Network::new();
        let root = net.add_root("root");
        let base = net.add_wire("b");
        let collector = net.add_wire("c");
        let emitter = net.add_wire("e");
        let out = net.add_wire("o");
        let id = net.attach(root, |id| {
            Component::Transistor(Transistor::new(id, base, collector, emitter, out))
        });
        let transistor = match net.component(id) {
            Component::Transistor(t) => *t,
            other => panic!("expected a transistor, got {}", other.name()),
        };
        (net, transistor)
    }

    #[test]
    fn test_truth_table() {
        // (base, collector, emitter ground) -> (emitter, collector ground, out)
        let table = [
            ((false, false, false), (false, false, false)),
            ((false, false, true), (false, false, false)),
            ((false, true, false), (false, false, true)),
            ((false, true, true), (false, false, true)),
            ((true, false, false), (false, false, false)),
            ((true, false, true), (false, false, false)),
            ((true, true, false), (true, false, true)),
            ((true, true, true), (true, true, false)),
        ];

        for ((base, collector, grounded), (emitter, collector_grounded, out)) in table {
            let (mut net, t) = lone_transistor();
            net.silent_set(t.base, base);
            net.silent_set(t.collector, collector);
            net.set_ground(t.emitter, grounded);
            t.recompute(&mut net);

            let case = format!("base={base} collector={collector} grounded={grounded}");
            assert_eq!(net.value(t.emitter), emitter, "emitter for {case}");
            assert_eq!(net.is_grounded(t.collector), collector_grounded, "ground for {case}");
            assert_eq!(net.value(t.collector_out), out, "out for {case}");
        }
    }

    #[test]
    fn test_reacts_to_ground_changes() {
        let (mut net, t) = lone_transistor();
        net.silent_set(t.base, true);
        net.silent_set(t.collector, true);
        t.recompute(&mut net);
        assert!(net.value(t.collector_out));

        // Subscribed to the emitter's ground flag by the first recompute
        net.set_ground(t.emitter, true);
        assert!(!net.value(t.collector_out));
        assert!(net.is_grounded(t.collector));

        net.set_ground(t.emitter, false);
        assert!(net.value(t.collector_out));
        assert!(!net.is_grounded(t.collector));
    }

    #[test]
    fn test_render_text_skips_unused() {
        let mut net = Network::new();
        let root = net.add_root("root");
        let rails = net.rails();
        let a = net.add_wire("a");
        let id = net.attach(root, |id| {
            Component::Transistor(Transistor::new(id, a, rails.vcc, rails.gnd, rails.unused))
        });
        net.recompute(id);
        assert_eq!(
            net.render_text(id, 1, &Default::default()),
            "|T base:a=0 collector:Vcc emitter:Gnd"
        );
    }

    #[test]
    fn test_render_graph_skips_unused() {
        let mut net = Network::new();
        let root = net.add_root("root");
        let rails = net.rails();
        let a = net.add_wire("a");
        let id = net.attach(root, |id| {
            Component::Transistor(Transistor::new(id, a, rails.vcc, rails.gnd, rails.unused))
        });
        let graph = net.render_graph(id, 0, &Default::default());
        assert_eq!(
            graph,
            [
                "  t1 [shape=invtriangle, label=\"\"];",
                "  \"a\" -> t1;",
                "  \"Vcc\" -> t1;",
                "  t1 -> \"Gnd\";",
            ]
            .join("\n")
        );
    }
}
