//! Simulation drivers.
//!
//! A [`Simulator`] owns a [`Circuit`](crate::circuit::Circuit) and evaluates
//! it in one of three ways:
//!
//! - **exhaustive**: every input assignment in binary counting order, used
//!   while the input count stays within the configured limit
//! - **sampled**: a single seeded random assignment, used for wide circuits
//!   and for single-graph rendering
//! - **sequential**: caller-scripted steps applied with notifying writes so
//!   that latches keep their state between steps
//!
//! Each pass primes the inputs, recomputes the circuit once in insertion
//! order and renders the result. There is no fixed-point iteration; feedback
//! settles through the signal cells' change notifications.

mod enumerate;
mod simulator;

pub use enumerate::Assignments;
pub use simulator::{SimulationMode, Simulator, SimulatorConfig};

/// Largest input count simulated exhaustively by default.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 9;

/// Hard ceiling on the exhaustive limit. 2^24 passes is already far beyond
/// anything worth printing.
pub const MAX_EXHAUSTIVE_LIMIT: usize = 24;

/// Seed for the sampled mode's random generator.
pub const DEFAULT_SEED: u64 = 0x5EED;
