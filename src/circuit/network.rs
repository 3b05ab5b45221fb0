//! Wire and component arena with change propagation.

use tracing::trace;

use super::types::{ComponentId, Rails, WireId, GND, UNUSED, VCC};
use super::wire::Wire;
use crate::components::{Component, Group};
use crate::render::RenderOptions;

/// Storage for every wire and component of one circuit.
///
/// Components refer to wires and to each other through [`WireId`] and
/// [`ComponentId`] handles into this arena. Writing a signal that changes
/// value synchronously recomputes every component that has read it, which
/// may in turn write further signals. Latches settle through this cascade;
/// there is no fixed-point loop.
#[derive(Debug, Clone)]
pub struct Network {
    wires: Vec<Wire>,
    components: Vec<Component>,
    rails: Rails,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Create a network holding only the three rails.
    pub fn new() -> Self {
        // Gnd starts high like Vcc; its ground cell is what grounding
        // transistors read.
        let wires = vec![
            Wire::with_state(VCC, true, false),
            Wire::with_state(GND, true, true),
            Wire::new(UNUSED),
        ];
        Self {
            wires,
            components: Vec::new(),
            rails: Rails::standard(),
        }
    }

    /// The shared rail wires.
    pub fn rails(&self) -> Rails {
        self.rails
    }

    /// Allocate a new low wire.
    pub fn add_wire(&mut self, name: impl Into<String>) -> WireId {
        let id = WireId(self.wires.len());
        self.wires.push(Wire::new(name));
        id
    }

    /// Number of components, groups included.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Get a wire.
    pub fn wire(&self, id: WireId) -> &Wire {
        &self.wires[id.0]
    }

    /// Get the name of a wire.
    pub fn wire_name(&self, id: WireId) -> &str {
        &self.wires[id.0].name
    }

    /// Current logical value of a wire.
    pub fn value(&self, id: WireId) -> bool {
        self.wires[id.0].signal.value()
    }

    /// Current ground flag of a wire.
    pub fn is_grounded(&self, id: WireId) -> bool {
        self.wires[id.0].ground.value()
    }

    /// Check if a wire is a declared input or output of its circuit.
    pub fn is_port(&self, id: WireId) -> bool {
        self.wires[id.0].port
    }

    pub(crate) fn mark_port(&mut self, id: WireId) {
        self.wires[id.0].port = true;
    }

    /// Render a wire per the text format.
    pub fn render_wire(&self, id: WireId) -> String {
        self.wires[id.0].render()
    }

    /// Read a wire's value on behalf of `observer`, subscribing it.
    pub fn read(&mut self, id: WireId, observer: ComponentId) -> bool {
        self.wires[id.0].signal.get(Some(observer))
    }

    /// Read a wire's ground flag on behalf of `observer`, subscribing it.
    pub fn read_ground(&mut self, id: WireId, observer: ComponentId) -> bool {
        self.wires[id.0].ground.get(Some(observer))
    }

    /// Write a wire's value, recomputing its observers if it changed.
    pub fn set(&mut self, id: WireId, value: bool) {
        let wire = &mut self.wires[id.0];
        if wire.signal.set(value) {
            let observers = wire.signal.observers().to_vec();
            trace!(wire = %wire.name, value, observers = observers.len(), "signal changed");
            self.notify(&observers);
        }
    }

    /// Write a wire's ground flag, recomputing its observers if it changed.
    pub fn set_ground(&mut self, id: WireId, grounded: bool) {
        let wire = &mut self.wires[id.0];
        if wire.ground.set(grounded) {
            let observers = wire.ground.observers().to_vec();
            trace!(wire = %wire.name, grounded, observers = observers.len(), "ground changed");
            self.notify(&observers);
        }
    }

    /// Write a wire's value without notifying anyone.
    pub fn silent_set(&mut self, id: WireId, value: bool) {
        self.wires[id.0].signal.silent_set(value);
    }

    fn notify(&mut self, observers: &[ComponentId]) {
        for &observer in observers {
            self.recompute(observer);
        }
    }

    /// Get a component.
    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    /// Children of a group, empty for devices.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        match &self.components[id.0] {
            Component::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// Add a group with no parent.
    pub(crate) fn add_root(&mut self, name: impl Into<String>) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components.push(Component::Group(Group::new(id, name.into())));
        id
    }

    /// Add a component built from its freshly assigned id and append it to
    /// `parent`'s children.
    pub(crate) fn attach(
        &mut self,
        parent: ComponentId,
        build: impl FnOnce(ComponentId) -> Component,
    ) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components.push(build(id));
        match &mut self.components[parent.0] {
            Component::Group(group) => group.children.push(id),
            other => debug_assert!(false, "{} cannot own children", other.name()),
        }
        id
    }

    /// Recompute one component. Groups recompute their children once, in
    /// insertion order.
    pub fn recompute(&mut self, id: ComponentId) {
        match &self.components[id.0] {
            Component::Transistor(transistor) => {
                let transistor = *transistor;
                transistor.recompute(self);
            }
            Component::Combiner(combiner) => {
                let combiner = *combiner;
                combiner.recompute(self);
            }
            Component::Group(_) => {
                // Children never change after assembly, but cascades need
                // `&mut self`, so walk by index.
                let mut index = 0;
                while let Some(&child) = self.children(id).get(index) {
                    self.recompute(child);
                    index += 1;
                }
            }
        }
    }

    /// Render a component as text at `depth`.
    pub fn render_text(&self, id: ComponentId, depth: usize, options: &RenderOptions) -> String {
        self.components[id.0].render_text(self, depth, options)
    }

    /// Render a component as a dot fragment at `depth`.
    pub fn render_graph(&self, id: ComponentId, depth: usize, options: &RenderOptions) -> String {
        self.components[id.0].render_graph(self, depth, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::types::CombineOp;
    use crate::components::Combiner;

    #[test]
    fn test_rails() {
        let net = Network::new();
        let rails = net.rails();
        assert!(net.value(rails.vcc));
        assert!(!net.is_grounded(rails.vcc));
        assert!(net.value(rails.gnd));
        assert!(net.is_grounded(rails.gnd));
        assert!(!net.value(rails.unused));
        assert_eq!(net.render_wire(rails.unused), "");
    }

    #[test]
    fn test_set_notifies_only_on_change() {
        let mut net = Network::new();
        let root = net.add_root("root");
        let a = net.add_wire("a");
        let out = net.add_wire("out");
        let comb = net.attach(root, |id| {
            Component::Combiner(Combiner::new(id, out, a, a, CombineOp::Or))
        });

        // First recompute subscribes the combiner to `a`
        net.recompute(comb);
        assert!(!net.value(out));

        net.set(a, true);
        assert!(net.value(out));

        // Changing `out` behind the combiner's back is not undone by an
        // unchanged write to `a`
        net.silent_set(out, false);
        net.set(a, true);
        assert!(!net.value(out));

        net.set(a, false);
        net.set(a, true);
        assert!(net.value(out));
    }

    #[test]
    fn test_silent_set_does_not_cascade() {
        let mut net = Network::new();
        let root = net.add_root("root");
        let a = net.add_wire("a");
        let out = net.add_wire("out");
        net.attach(root, |id| {
            Component::Combiner(Combiner::new(id, out, a, a, CombineOp::And))
        });
        net.recompute(root);

        net.silent_set(a, true);
        assert!(!net.value(out));
        net.recompute(root);
        assert!(net.value(out));
    }
}
