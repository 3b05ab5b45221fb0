//! Hierarchical component container and its construction API.

use crate::circuit::{CombineOp, ComponentId, Network, Rails, WireId};
use crate::render::{dot_indent, frame, quote, RenderOptions};

use super::{Combiner, Component, Transistor};

/// A named, ordered container of child components.
///
/// Recomputing a group recomputes every child once in insertion order, so
/// builders must add producers before consumers.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: ComponentId,
    pub name: String,
    /// Owned children in insertion order
    pub children: Vec<ComponentId>,
}

impl Group {
    /// Create an empty group.
    pub fn new(id: ComponentId, name: String) -> Self {
        Self {
            id,
            name,
            children: Vec::new(),
        }
    }

    pub(crate) fn render_text(&self, net: &Network, depth: usize, options: &RenderOptions) -> String {
        let children = self
            .children
            .iter()
            .map(|&child| net.render_text(child, depth + 1, options));
        frame(&self.name, depth, children)
    }

    pub(crate) fn render_graph(&self, net: &Network, depth: usize, options: &RenderOptions) -> String {
        let pad = dot_indent(depth);
        let mut lines = vec![
            format!("{pad}subgraph cluster_{} {{", self.id.0),
            format!("{pad}  label={};", quote(&self.name)),
            format!("{pad}  style=dotted;"),
        ];
        lines.extend(
            self.children
                .iter()
                .map(|&child| net.render_graph(child, depth + 1, options))
                .filter(|child| !child.is_empty()),
        );
        lines.push(format!("{pad}}}"));
        lines.join("\n")
    }
}

/// Handle for adding components to one group.
///
/// This is the only way to attach devices to a circuit. Every component
/// created through it is appended to the group's children in call order.
#[derive(Debug)]
pub struct GroupBuilder<'n> {
    network: &'n mut Network,
    id: ComponentId,
}

impl<'n> GroupBuilder<'n> {
    pub(crate) fn new(network: &'n mut Network, id: ComponentId) -> Self {
        Self { network, id }
    }

    /// The group being built.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The circuit's rail wires.
    pub fn rails(&self) -> Rails {
        self.network.rails()
    }

    /// Read-only view of the network.
    pub fn network(&self) -> &Network {
        &*self.network
    }

    /// Allocate a new wire.
    pub fn wire(&mut self, name: impl Into<String>) -> WireId {
        self.network.add_wire(name)
    }

    /// Add a transistor. `collector_out` defaults to the discard rail.
    pub fn add_transistor(
        &mut self,
        base: WireId,
        collector: WireId,
        emitter: WireId,
        collector_out: Option<WireId>,
    ) -> ComponentId {
        let collector_out = collector_out.unwrap_or(self.network.rails().unused);
        self.network.attach(self.id, |id| {
            Component::Transistor(Transistor::new(id, base, collector, emitter, collector_out))
        })
    }

    /// Add a combiner writing `op(a, b)` to `result`.
    pub fn add_combiner(&mut self, result: WireId, a: WireId, b: WireId, op: CombineOp) -> ComponentId {
        self.network
            .attach(self.id, |id| Component::Combiner(Combiner::new(id, result, a, b, op)))
    }

    /// Add a nested group and return a builder for it.
    pub fn group(&mut self, name: impl Into<String>) -> GroupBuilder<'_> {
        let name = name.into();
        let id = self
            .network
            .attach(self.id, |id| Component::Group(Group::new(id, name)));
        GroupBuilder::new(self.network, id)
    }
}
