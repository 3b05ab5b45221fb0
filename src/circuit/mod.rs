//! Circuit representation: signal cells, wires, the network arena and the
//! root circuit.
//!
//! A [`Circuit`] owns a [`Network`] in which every [`Wire`] and component
//! lives. Builders attach components through [`GroupBuilder`]s handed out by
//! the circuit and refer to wires by [`WireId`].
//!
//! [`GroupBuilder`]: crate::components::GroupBuilder

mod graph;
mod network;
mod signal;
mod types;
mod validate;
mod wire;

pub use graph::{Circuit, Validator};
pub use network::Network;
pub use signal::Signal;
pub use types::*;
pub use validate::validate_circuit;
pub use wire::Wire;
