//! Component models for circuit simulation.
//!
//! The component set is closed:
//! - [`Transistor`] - the switching primitive every gate is built from
//! - [`Combiner`] - OR/AND of two wires where two drivers meet
//! - [`Group`] - a named container of other components
//!
//! Each component recomputes its output wires from its input wires and can
//! render itself as text or as a dot-language fragment.

mod combiner;
mod group;
mod transistor;

pub use combiner::Combiner;
pub use group::{Group, GroupBuilder};
pub use transistor::Transistor;

use crate::circuit::Network;
use crate::render::RenderOptions;

/// A circuit component.
#[derive(Debug, Clone)]
pub enum Component {
    Transistor(Transistor),
    Combiner(Combiner),
    Group(Group),
}

impl Component {
    /// Get the component name.
    pub fn name(&self) -> &str {
        match self {
            Component::Transistor(_) => "transistor",
            Component::Combiner(c) => c.op_name(),
            Component::Group(g) => &g.name,
        }
    }

    /// Check if this component contains other components.
    pub fn is_group(&self) -> bool {
        matches!(self, Component::Group(_))
    }

    /// Render as an indented text block. Empty once `depth` is exhausted.
    pub fn render_text(&self, net: &Network, depth: usize, options: &RenderOptions) -> String {
        if options.depth_exhausted(depth) {
            return String::new();
        }
        match self {
            Component::Transistor(t) => t.render_text(net, depth),
            Component::Combiner(c) => c.render_text(net, depth),
            Component::Group(g) => g.render_text(net, depth, options),
        }
    }

    /// Render as dot statements. Empty once `depth` is exhausted.
    pub fn render_graph(&self, net: &Network, depth: usize, options: &RenderOptions) -> String {
        if options.depth_exhausted(depth) {
            return String::new();
        }
        match self {
            Component::Transistor(t) => t.render_graph(net, depth),
            Component::Combiner(c) => c.render_graph(net, depth, options),
            Component::Group(g) => g.render_graph(net, depth, options),
        }
    }
}
