//! Joint wire: OR or AND of two wires onto a result wire.

use crate::circuit::{CombineOp, ComponentId, Network, WireId};
use crate::render::{dot_indent, indent, quote, RenderOptions};

/// A combiner component.
///
/// Besides joining two drivers, a combiner can re-broadcast one wire onto
/// another (`a == b`) or feed its own result back (`result == a`), which is
/// the simplest latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combiner {
    pub id: ComponentId,
    pub result: WireId,
    pub a: WireId,
    pub b: WireId,
    pub op: CombineOp,
}

impl Combiner {
    /// Create a new combiner.
    pub fn new(id: ComponentId, result: WireId, a: WireId, b: WireId, op: CombineOp) -> Self {
        Self {
            id,
            result,
            a,
            b,
            op,
        }
    }

    pub(crate) fn op_name(&self) -> &'static str {
        match self.op {
            CombineOp::Or => "OR",
            CombineOp::And => "AND",
        }
    }

    /// Recompute the result wire.
    pub fn recompute(self, net: &mut Network) {
        let a = net.read(self.a, self.id);
        let b = net.read(self.b, self.id);
        net.set(self.result, self.op.apply(a, b));
    }

    pub(crate) fn render_text(&self, net: &Network, depth: usize) -> String {
        let parts: Vec<String> = [("result", self.result), ("a", self.a), ("b", self.b)]
            .iter()
            .filter_map(|&(role, wire)| {
                let rendered = net.render_wire(wire);
                (!rendered.is_empty()).then(|| format!("{role}:{rendered}"))
            })
            .collect();
        format!("{}{} {}", indent(depth), self.op_name(), parts.join(" "))
    }

    pub(crate) fn render_graph(&self, net: &Network, depth: usize, options: &RenderOptions) -> String {
        let pad = dot_indent(depth);
        let unused = net.rails().unused;
        let mut lines = Vec::new();

        if options.draw_nodes {
            let mut wires: Vec<WireId> = Vec::with_capacity(3);
            for wire in [self.result, self.a, self.b] {
                // Ports already have their arrow node
                if wire != unused && !net.is_port(wire) && !wires.contains(&wire) {
                    wires.push(wire);
                }
            }
            for wire in wires {
                let name = quote(net.wire_name(wire));
                if options.draw_shape_point {
                    lines.push(format!("{pad}{name} [shape=point];"));
                } else {
                    lines.push(format!("{pad}{name} [label={}];", quote(&net.render_wire(wire))));
                }
            }
        }

        if options.draw_edges && self.result != unused {
            let operands = if self.a == self.b { vec![self.a] } else { vec![self.a, self.b] };
            for operand in operands.into_iter().filter(|&w| w != unused) {
                let hot = net.value(operand) || net.value(self.result);
                lines.push(format!(
                    "{pad}{} -> {} [color={}];",
                    quote(net.wire_name(operand)),
                    quote(net.wire_name(self.result)),
                    if hot { "red" } else { "blue" }
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;

    fn combiner(op: CombineOp) -> (Network, Combiner) {
        let mut net = Network::new();
        let root = net.add_root("root");
        let a = net.add_wire("a");
        let b = net.add_wire("b");
        let r = net.add_wire("r");
        net.attach(root, |id| Component::Combiner(Combiner::new(id, r, a, b, op)));
        (net, Combiner::new(ComponentId(1), r, a, b, op))
    }

    #[test]
    fn test_or_and_tables() {
        for (op, expected) in [
            (CombineOp::Or, [false, true, true, true]),
            (CombineOp::And, [false, false, false, true]),
        ] {
            for (i, want) in expected.into_iter().enumerate() {
                let (mut net, c) = combiner(op);
                net.silent_set(c.a, i & 2 != 0);
                net.silent_set(c.b, i & 1 != 0);
                c.recompute(&mut net);
                assert_eq!(net.value(c.result), want, "{op} case {i}");
            }
        }
    }

    #[test]
    fn test_self_feeding_latch() {
        let mut net = Network::new();
        let root = net.add_root("root");
        let a = net.add_wire("a");
        let q = net.add_wire("q");
        let id = net.attach(root, |id| {
            Component::Combiner(Combiner::new(id, q, a, q, CombineOp::Or))
        });
        net.recompute(id);
        assert!(!net.value(q));

        net.set(a, true);
        assert!(net.value(q));
        net.set(a, false);
        assert!(net.value(q), "the feedback path holds the value");
    }

    #[test]
    fn test_render_graph_edges() {
        let (mut net, c) = combiner(CombineOp::Or);
        net.silent_set(c.a, true);
        c.recompute(&mut net);

        let options = RenderOptions::new().with_edges(true).with_nodes(true).with_shape_point(true);
        let graph = c.render_graph(&net, 0, &options);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  \"r\" [shape=point];",
                "  \"a\" [shape=point];",
                "  \"b\" [shape=point];",
                "  \"a\" -> \"r\" [color=red];",
                "  \"b\" -> \"r\" [color=red];",
            ]
        );
    }

    #[test]
    fn test_render_graph_cold_edges() {
        let (net, c) = combiner(CombineOp::And);
        let graph = c.render_graph(&net, 0, &RenderOptions::new().with_edges(true));
        assert_eq!(graph, "  \"a\" -> \"r\" [color=blue];\n  \"b\" -> \"r\" [color=blue];");
    }

    #[test]
    fn test_render_text() {
        let (mut net, c) = combiner(CombineOp::And);
        net.silent_set(c.a, true);
        assert_eq!(c.render_text(&net, 0), "AND result:r=0 a:a=1 b:b=0");
    }
}
