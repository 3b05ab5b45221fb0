//! Root circuit structure.

use std::fmt;

use tracing::warn;

use super::network::Network;
use super::types::{ComponentId, Rails, WireId};
use crate::components::{Component, Group, GroupBuilder};
use crate::render::{dot_indent, quote, RenderOptions};

/// A predicate over the current wire state. Assignments for which any
/// validator returns `false` are left out of exhaustive results.
pub type Validator = Box<dyn Fn(&Network) -> bool>;

/// A complete circuit ready for simulation.
pub struct Circuit {
    name: String,
    network: Network,
    /// Group owning the top-level components
    root: ComponentId,
    inputs: Vec<WireId>,
    outputs: Vec<WireId>,
    validators: Vec<Validator>,
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("name", &self.name)
            .field("network", &self.network)
            .field("root", &self.root)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl Circuit {
    /// Create an empty circuit with its rails.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut network = Network::new();
        let root = network.add_root(name.clone());
        Self {
            name,
            network,
            root,
            inputs: Vec::new(),
            outputs: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared rail wires.
    pub fn rails(&self) -> Rails {
        self.network.rails()
    }

    /// Get the underlying network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Get the underlying network mutably, e.g. to prime a wire.
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Declared inputs in declaration order.
    pub fn inputs(&self) -> &[WireId] {
        &self.inputs
    }

    /// Declared outputs in declaration order.
    pub fn outputs(&self) -> &[WireId] {
        &self.outputs
    }

    /// Top-level components in insertion order.
    pub fn components(&self) -> &[ComponentId] {
        self.network.children(self.root)
    }

    /// Allocate a wire that is neither input nor output.
    pub fn wire(&mut self, name: impl Into<String>) -> WireId {
        self.network.add_wire(name)
    }

    /// Allocate and register a new input wire.
    pub fn declare_input(&mut self, name: impl Into<String>) -> WireId {
        let wire = self.network.add_wire(name);
        self.network.mark_port(wire);
        self.inputs.push(wire);
        wire
    }

    /// Register a wire to capture after each pass.
    pub fn declare_output(&mut self, wire: WireId) {
        if wire == self.rails().unused {
            warn!(circuit = %self.name, "ignoring the discard rail as an output");
            return;
        }
        self.network.mark_port(wire);
        self.outputs.push(wire);
    }

    /// Register several output wires in order.
    pub fn declare_outputs(&mut self, wires: impl IntoIterator<Item = WireId>) {
        for wire in wires {
            self.declare_output(wire);
        }
    }

    /// Builder for the top level of the circuit.
    pub fn root(&mut self) -> GroupBuilder<'_> {
        GroupBuilder::new(&mut self.network, self.root)
    }

    /// Add a top-level group and return a builder for it.
    pub fn group(&mut self, name: impl Into<String>) -> GroupBuilder<'_> {
        let name = name.into();
        let id = self
            .network
            .attach(self.root, |id| Component::Group(Group::new(id, name)));
        GroupBuilder::new(&mut self.network, id)
    }

    /// Add a predicate every accepted assignment must satisfy.
    pub fn add_validator(&mut self, validator: impl Fn(&Network) -> bool + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Check the current state against every validator.
    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|validator| validator(&self.network))
    }

    /// Recompute every top-level component once, in insertion order.
    pub fn recompute(&mut self) {
        self.network.recompute(self.root);
    }

    /// Values of the declared inputs.
    pub fn input_values(&self) -> Vec<bool> {
        self.inputs.iter().map(|&w| self.network.value(w)).collect()
    }

    /// Values of the declared outputs.
    pub fn output_values(&self) -> Vec<bool> {
        self.outputs.iter().map(|&w| self.network.value(w)).collect()
    }

    /// Render the current state in the form selected by `options`.
    pub fn render(&self, options: &RenderOptions) -> String {
        if options.is_graph() {
            self.render_graph(options)
        } else if options.unit_test {
            self.render_truth_line()
        } else {
            self.render_text(options)
        }
    }

    /// Compact `inputs=>outputs` line, e.g. `01=>1`.
    pub fn render_truth_line(&self) -> String {
        let bits = |values: Vec<bool>| -> String {
            values.into_iter().map(|v| if v { '1' } else { '0' }).collect()
        };
        format!("{}=>{}", bits(self.input_values()), bits(self.output_values()))
    }

    /// Text dump: an `inputs => outputs` line followed by every top-level
    /// component.
    pub fn render_text(&self, options: &RenderOptions) -> String {
        let wires = |wires: &[WireId]| -> String {
            wires
                .iter()
                .map(|&w| self.network.render_wire(w))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut blocks = vec![format!("{} => {}", wires(&self.inputs), wires(&self.outputs))];
        blocks.extend(
            self.components()
                .iter()
                .map(|&id| self.network.render_text(id, 0, options))
                .filter(|block| !block.is_empty()),
        );
        blocks.join("\n")
    }

    /// Dot-language graph of the whole circuit.
    pub fn render_graph(&self, options: &RenderOptions) -> String {
        let pad = dot_indent(0);
        let mut lines = vec!["digraph {".to_string(), format!("{pad}rankdir=LR;")];

        for (wires, color) in [(&self.inputs, "palegreen"), (&self.outputs, "lightblue")] {
            for &wire in wires.iter() {
                lines.push(format!(
                    "{pad}{} [shape=rarrow, style=filled, fillcolor={color}, label={}];",
                    quote(self.network.wire_name(wire)),
                    quote(&self.network.render_wire(wire)),
                ));
            }
        }

        lines.extend(
            self.components()
                .iter()
                .map(|&id| self.network.render_graph(id, 0, options))
                .filter(|block| !block.is_empty()),
        );
        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CombineOp;

    fn passthrough() -> Circuit {
        let mut circuit = Circuit::new("passthrough");
        let a = circuit.declare_input("a");
        let b = circuit.declare_input("b");
        let out = {
            let mut group = circuit.group("JOIN");
            let out = group.wire("out");
            group.add_combiner(out, a, b, CombineOp::Or);
            out
        };
        circuit.declare_output(out);
        circuit
    }

    #[test]
    fn test_declarations() {
        let mut circuit = passthrough();
        assert_eq!(circuit.inputs().len(), 2);
        assert_eq!(circuit.outputs().len(), 1);
        assert_eq!(circuit.components().len(), 1);

        let unused = circuit.rails().unused;
        circuit.declare_output(unused);
        assert_eq!(circuit.outputs().len(), 1);
    }

    #[test]
    fn test_recompute_and_truth_line() {
        let mut circuit = passthrough();
        let b = circuit.inputs()[1];
        circuit.network_mut().silent_set(b, true);
        circuit.recompute();
        assert_eq!(circuit.render_truth_line(), "01=>1");
        assert_eq!(circuit.render(&RenderOptions::truth_table()), "01=>1");
    }

    #[test]
    fn test_render_text() {
        let mut circuit = passthrough();
        circuit.recompute();
        let text = circuit.render_text(&RenderOptions::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "a=0 b=0 => out=0");
        assert_eq!(lines[1], "---------- JOIN ----------");
        assert_eq!(lines[2], "|OR result:out=0 a:a=0 b:b=0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_graph() {
        let mut circuit = passthrough();
        circuit.recompute();
        let graph = circuit.render(&RenderOptions::new().with_graph(true));
        assert!(graph.starts_with("digraph {\n  rankdir=LR;\n"));
        assert!(graph.ends_with("\n}"));
        assert_eq!(graph.matches("shape=rarrow").count(), 3);
        assert_eq!(graph.matches("subgraph cluster_").count(), 1);
    }

    #[test]
    fn test_graph_wire_nodes_leave_ports_alone() {
        let mut circuit = Circuit::new("chain");
        let a = circuit.declare_input("a");
        let b = circuit.declare_input("b");
        let out = {
            let mut root = circuit.root();
            let mid = root.wire("mid");
            let out = root.wire("out");
            root.add_combiner(mid, a, b, CombineOp::Or);
            root.add_combiner(out, mid, mid, CombineOp::Or);
            out
        };
        circuit.declare_output(out);
        circuit.network_mut().silent_set(a, true);
        circuit.recompute();

        for options in [
            RenderOptions::new().with_nodes(true),
            RenderOptions::new().with_nodes(true).with_shape_point(true),
        ] {
            let graph = circuit.render_graph(&options);
            assert_eq!(graph.matches("\"a\" [").count(), 1);
            assert_eq!(graph.matches("\"out\" [").count(), 1);
            assert!(graph.contains("\"a\" [shape=rarrow, style=filled, fillcolor=palegreen, label=\"a=1\"];"));
            assert_eq!(graph.matches("\"mid\" [").count(), 2);
        }
    }

    #[test]
    fn test_validators() {
        let mut circuit = passthrough();
        let a = circuit.inputs()[0];
        circuit.add_validator(move |net| !net.value(a));
        assert!(circuit.is_valid());
        circuit.network_mut().silent_set(a, true);
        assert!(!circuit.is_valid());
    }
}
