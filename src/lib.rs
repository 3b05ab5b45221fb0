//! # Transim Core
//!
//! A transistor-level digital circuit simulator.
//!
//! This library provides:
//! - A logical transistor model with ground-conflict detection
//! - OR/AND combiners for joining drivers and building feedback loops
//! - Hierarchical grouping of components into gates, adders and latches
//! - Exhaustive, sampled and sequential simulation drivers
//! - Text, truth-table and Graphviz dot renderings of every pass
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Signal cells, wires, the component arena and the root circuit
//! - [`components`] - Transistor, combiner and group models
//! - [`sim`] - Simulation drivers
//! - [`library`] - Named circuit templates built from transistors
//! - [`render`] - Rendering options and formatting helpers
//! - [`output`] - Console and dot-file output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! transim nand --unit-test
//! transim sr_latch --unit-test --steps 10,00,01,00
//! ```
//!
//! ### Library
//!
//! ```
//! use transim_core::{library, RenderOptions, Simulator};
//!
//! let circuit = library::build("xor").unwrap();
//! let mut sim = Simulator::new(circuit);
//! let lines = sim.simulate(&RenderOptions::truth_table());
//! assert_eq!(lines, ["00=>0", "01=>1", "10=>1", "11=>0"]);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitSim } from 'transim_core';
//!
//! const sim = new WasmCircuitSim('xor');
//! console.log(sim.simulate(true));
//! ```
//!
//! ## Propagation Model
//!
//! Every wire carries two signal cells: its logical value and a ground flag.
//! Reading a cell on behalf of a component subscribes that component; writing
//! a changed value recomputes every subscriber on the spot. A simulation pass
//! primes the inputs, then recomputes all components once in insertion order.
//! Combinational logic settles because builders add producers before
//! consumers, and latches settle through the notification cascade alone.

pub mod circuit;
pub mod components;
pub mod error;
pub mod library;
pub mod render;
pub mod sim;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use error::{Result, TransimError};
pub use render::RenderOptions;
pub use sim::{Simulator, DEFAULT_EXHAUSTIVE_LIMIT, DEFAULT_SEED};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSim;
