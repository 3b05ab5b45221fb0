//! Main simulator interface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{Result, TransimError};
use crate::render::RenderOptions;

use super::{Assignments, DEFAULT_EXHAUSTIVE_LIMIT, DEFAULT_SEED, MAX_EXHAUSTIVE_LIMIT};

/// Configuration for the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Largest input count that is enumerated exhaustively.
    pub exhaustive_limit: usize,
    /// Seed for the sampled mode.
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exhaustive limit, clamped to [`MAX_EXHAUSTIVE_LIMIT`].
    ///
    /// Circuits with more inputs fall back to a single sampled pass.
    pub fn with_exhaustive_limit(mut self, exhaustive_limit: usize) -> Self {
        self.exhaustive_limit = exhaustive_limit.min(MAX_EXHAUSTIVE_LIMIT);
        self
    }

    /// Set the sampled mode seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// How [`Simulator::simulate`] walks the input space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// Every assignment in counting order
    Exhaustive,
    /// One seeded random assignment
    Sampled,
}

/// The main circuit simulator.
#[derive(Debug)]
pub struct Simulator {
    /// The circuit being simulated
    circuit: Circuit,
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator for the given circuit with default configuration.
    pub fn new(circuit: Circuit) -> Self {
        Self::with_config(circuit, SimulatorConfig::default())
    }

    /// Create a new simulator for the given circuit with custom configuration.
    pub fn with_config(circuit: Circuit, config: SimulatorConfig) -> Self {
        Self { circuit, config }
    }

    /// Get the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get the circuit mutably.
    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    /// Take the circuit back, with whatever state the last pass left.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// The mode [`simulate`](Self::simulate) picks for these options.
    pub fn mode(&self, options: &RenderOptions) -> SimulationMode {
        if !options.draw_single_graph && self.circuit.inputs().len() <= self.config.exhaustive_limit
        {
            SimulationMode::Exhaustive
        } else {
            SimulationMode::Sampled
        }
    }

    /// Evaluate the circuit and render every accepted pass.
    ///
    /// Inputs are primed silently, so each pass is one recompute of the whole
    /// circuit. Exhaustive passes rejected by a validator are dropped; the
    /// sampled pass is always rendered.
    pub fn simulate(&mut self, options: &RenderOptions) -> Vec<String> {
        let mode = self.mode(options);
        debug!(
            circuit = %self.circuit.name(),
            inputs = self.circuit.inputs().len(),
            ?mode,
            "simulating"
        );

        let renderings = match mode {
            SimulationMode::Exhaustive => {
                let width = self.circuit.inputs().len();
                let mut renderings = Vec::new();
                for assignment in Assignments::new(width) {
                    self.prime(&assignment);
                    if self.circuit.is_valid() {
                        renderings.push(self.circuit.render(options));
                    } else {
                        debug!(circuit = %self.circuit.name(), ?assignment, "assignment rejected");
                    }
                }
                renderings
            }
            SimulationMode::Sampled => {
                let mut rng = StdRng::seed_from_u64(self.config.seed);
                let assignment: Vec<bool> = (0..self.circuit.inputs().len())
                    .map(|_| rng.random::<bool>())
                    .collect();
                self.prime(&assignment);
                vec![self.circuit.render(options)]
            }
        };

        debug!(circuit = %self.circuit.name(), passes = renderings.len(), "simulation done");
        renderings
    }

    /// Prime the inputs silently and recompute once.
    fn prime(&mut self, assignment: &[bool]) {
        let inputs = self.circuit.inputs().to_vec();
        let network = self.circuit.network_mut();
        for (&wire, &value) in inputs.iter().zip(assignment) {
            network.silent_set(wire, value);
        }
        self.circuit.recompute();
    }

    /// Apply scripted input steps in order and render after each.
    ///
    /// Each step holds one `0` or `1` per input in declaration order. Values
    /// are written with notification, so feedback state carries over from
    /// one step to the next. Validators are not consulted.
    pub fn run_sequence<S: AsRef<str>>(
        &mut self,
        steps: &[S],
        options: &RenderOptions,
    ) -> Result<Vec<String>> {
        let inputs = self.circuit.inputs().to_vec();
        let mut renderings = Vec::with_capacity(steps.len());

        for (index, step) in steps.iter().enumerate() {
            let values = parse_step(index, step.as_ref(), inputs.len())?;
            for (&wire, value) in inputs.iter().zip(values) {
                self.circuit.network_mut().set(wire, value);
            }
            self.circuit.recompute();
            renderings.push(self.circuit.render(options));
        }

        debug!(circuit = %self.circuit.name(), steps = steps.len(), "sequence done");
        Ok(renderings)
    }
}

/// Parse one sequential step into input values.
fn parse_step(index: usize, step: &str, width: usize) -> Result<Vec<bool>> {
    let count = step.chars().count();
    if count != width {
        return Err(TransimError::invalid_step(
            index,
            step,
            format!("expected {width} input values, found {count}"),
        ));
    }
    step.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(TransimError::invalid_step(
                index,
                step,
                format!("expected '0' or '1', found '{other}'"),
            )),
        })
        .collect()
}
