//! Template library of named circuits.
//!
//! Every template is an ordinary client of the construction API: it declares
//! inputs, builds gates out of transistors through
//! [`GroupBuilder`](crate::components::GroupBuilder), and declares outputs.
//! Multi-bit inputs and outputs are declared most significant bit first.
//!
//! | Name | Inputs | Outputs |
//! |------|--------|---------|
//! | `not` | `a` | `!a` |
//! | `and`, `or`, `nand`, `nor`, `xor`, `xnor` | `a b` | gate output |
//! | `half_adder` | `a b` | `carry sum` |
//! | `full_adder` | `a b cin` | `cout sum` |
//! | `adder2`, `adder4`, `adder8` | `a.. b.. cin` | `cout sum..` |
//! | `or_latch` | `a` | `q` |
//! | `sr_latch` | `s r` | `q` |
//! | `d_latch` | `d e` | `q` |
//! | `register2`, `register4` | `load d..` | `q..` |

pub mod arithmetic;
pub mod gates;
pub mod memory;

use tracing::debug;

use crate::circuit::{Circuit, WireId};
use crate::components::GroupBuilder;
use crate::error::{Result, TransimError};

/// A named circuit constructor.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Circuit,
}

impl Template {
    /// Build a fresh instance of the circuit.
    pub fn build(&self) -> Circuit {
        (self.build)()
    }
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "not",
        description: "Inverter",
        build: not_circuit,
    },
    Template {
        name: "and",
        description: "2-input AND gate",
        build: and_circuit,
    },
    Template {
        name: "or",
        description: "2-input OR gate",
        build: or_circuit,
    },
    Template {
        name: "nand",
        description: "2-input NAND gate",
        build: nand_circuit,
    },
    Template {
        name: "nor",
        description: "2-input NOR gate",
        build: nor_circuit,
    },
    Template {
        name: "xor",
        description: "2-input XOR gate",
        build: xor_circuit,
    },
    Template {
        name: "xnor",
        description: "2-input XNOR gate",
        build: xnor_circuit,
    },
    Template {
        name: "half_adder",
        description: "1-bit adder without carry in",
        build: arithmetic::half_adder_circuit,
    },
    Template {
        name: "full_adder",
        description: "1-bit adder with carry in",
        build: arithmetic::full_adder_circuit,
    },
    Template {
        name: "adder2",
        description: "2-bit ripple-carry adder",
        build: adder2_circuit,
    },
    Template {
        name: "adder4",
        description: "4-bit ripple-carry adder",
        build: adder4_circuit,
    },
    Template {
        name: "adder8",
        description: "8-bit ripple-carry adder (sampled)",
        build: adder8_circuit,
    },
    Template {
        name: "or_latch",
        description: "Self-feeding OR latch",
        build: memory::or_latch_circuit,
    },
    Template {
        name: "sr_latch",
        description: "Set/reset latch",
        build: memory::sr_latch_circuit,
    },
    Template {
        name: "d_latch",
        description: "Gated D latch",
        build: memory::d_latch_circuit,
    },
    Template {
        name: "register2",
        description: "2-bit register",
        build: register2_circuit,
    },
    Template {
        name: "register4",
        description: "4-bit register",
        build: register4_circuit,
    },
];

/// All templates in listing order.
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

/// Names of all templates in listing order.
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

/// Build the template called `name`.
pub fn build(name: &str) -> Result<Circuit> {
    let template = TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| TransimError::unknown_circuit(name))?;
    let circuit = template.build();
    debug!(
        circuit = name,
        inputs = circuit.inputs().len(),
        outputs = circuit.outputs().len(),
        components = circuit.network().num_components(),
        "built circuit"
    );
    Ok(circuit)
}

fn not_circuit() -> Circuit {
    let mut circuit = Circuit::new("not");
    let a = circuit.declare_input("a");
    let out = gates::not(&mut circuit.root(), a);
    circuit.declare_output(out);
    circuit
}

fn binary_circuit(name: &str, gate: fn(&mut GroupBuilder<'_>, WireId, WireId) -> WireId) -> Circuit {
    let mut circuit = Circuit::new(name);
    let a = circuit.declare_input("a");
    let b = circuit.declare_input("b");
    let out = gate(&mut circuit.root(), a, b);
    circuit.declare_output(out);
    circuit
}

fn and_circuit() -> Circuit {
    binary_circuit("and", gates::and)
}

fn or_circuit() -> Circuit {
    binary_circuit("or", gates::or)
}

fn nand_circuit() -> Circuit {
    binary_circuit("nand", gates::nand)
}

fn nor_circuit() -> Circuit {
    binary_circuit("nor", gates::nor)
}

fn xor_circuit() -> Circuit {
    binary_circuit("xor", gates::xor)
}

fn xnor_circuit() -> Circuit {
    binary_circuit("xnor", gates::xnor)
}

fn adder2_circuit() -> Circuit {
    arithmetic::adder_circuit(2)
}

fn adder4_circuit() -> Circuit {
    arithmetic::adder_circuit(4)
}

fn adder8_circuit() -> Circuit {
    arithmetic::adder_circuit(8)
}

fn register2_circuit() -> Circuit {
    memory::register_circuit(2)
}

fn register4_circuit() -> Circuit {
    memory::register_circuit(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{validate_circuit, ComponentId};
    use crate::render::RenderOptions;
    use crate::sim::Simulator;

    #[test]
    fn test_every_template_builds_and_validates() {
        for name in names() {
            let circuit = build(name).unwrap();
            assert_eq!(circuit.name(), name);
            validate_circuit(&circuit).unwrap();
        }
    }

    #[test]
    fn test_unknown_template() {
        let err = build("alu").unwrap_err();
        assert!(matches!(err, TransimError::UnknownCircuit { ref name } if name == "alu"));
    }

    #[test]
    fn test_gate_templates() {
        let options = RenderOptions::truth_table();
        let table = |name: &str| Simulator::new(build(name).unwrap()).simulate(&options);
        assert_eq!(table("and"), vec!["00=>0", "01=>0", "10=>0", "11=>1"]);
        assert_eq!(table("or"), vec!["00=>0", "01=>1", "10=>1", "11=>1"]);
        assert_eq!(table("not"), vec!["0=>1", "1=>0"]);
    }

    #[test]
    fn test_graph_nodes_and_clusters() {
        for name in names() {
            let mut circuit = build(name).unwrap();
            circuit.recompute();
            let graph = circuit.render_graph(&RenderOptions::new().with_edges(true));

            let arrows = circuit.inputs().len() + circuit.outputs().len();
            assert_eq!(graph.matches("shape=rarrow").count(), arrows, "{name}");

            // Every group except the implicit root becomes a cluster
            let network = circuit.network();
            let groups = (0..network.num_components())
                .filter(|&i| network.component(ComponentId(i)).is_group())
                .count();
            assert_eq!(graph.matches("subgraph cluster_").count(), groups - 1, "{name}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let render = || {
            let mut sim = Simulator::new(build("full_adder").unwrap());
            sim.simulate(&RenderOptions::new().with_graph(true).with_nodes(true))
        };
        assert_eq!(render(), render());
    }
}
