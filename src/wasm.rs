//! WASM bindings for Transim Core.
//!
//! Exposes the CLI flow to JavaScript: pick a template by name, simulate it,
//! and get the renderings back as one newline-joined string.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSim, circuit_names } from 'transim_core';
//!
//! await init();
//!
//! console.log(circuit_names());
//!
//! const sim = new WasmCircuitSim('xor');
//! console.log(sim.simulate(true));           // "00=>0\n01=>1\n10=>1\n11=>0"
//!
//! const latch = new WasmCircuitSim('d_latch');
//! console.log(latch.run_sequence('11,10,00,01'));
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::validate_circuit;
use crate::error::TransimError;
use crate::library;
use crate::render::RenderOptions;
use crate::sim::{Simulator, SimulatorConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: TransimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible circuit simulator.
///
/// Wraps the native [`Simulator`]. Latch state persists between calls.
#[wasm_bindgen]
pub struct WasmCircuitSim {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuitSim {
    /// Create a simulator for a template from the circuit library.
    ///
    /// # Example
    /// ```javascript
    /// const sim = new WasmCircuitSim('adder4');
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<WasmCircuitSim, JsValue> {
        Self::with_config(name, crate::DEFAULT_EXHAUSTIVE_LIMIT, crate::DEFAULT_SEED)
    }

    /// Create a simulator with a custom exhaustive limit and sampling seed.
    #[wasm_bindgen]
    pub fn with_config(
        name: &str,
        exhaustive_limit: usize,
        seed: u64,
    ) -> Result<WasmCircuitSim, JsValue> {
        let circuit = library::build(name).map_err(to_js)?;
        validate_circuit(&circuit).map_err(to_js)?;

        let config = SimulatorConfig::new()
            .with_exhaustive_limit(exhaustive_limit)
            .with_seed(seed);
        Ok(WasmCircuitSim {
            simulator: Simulator::with_config(circuit, config),
        })
    }

    /// Simulate exhaustively (or sampled for wide circuits) and return one
    /// rendering per line: truth lines when `unit_test` is set, text dumps
    /// otherwise.
    #[wasm_bindgen]
    pub fn simulate(&mut self, unit_test: bool) -> String {
        let options = RenderOptions::new().with_unit_test(unit_test);
        self.simulator.simulate(&options).join("\n")
    }

    /// Render one sampled pass as a dot graph.
    #[wasm_bindgen]
    pub fn graph(&mut self, edges: bool) -> String {
        let options = RenderOptions::new()
            .with_single_graph(true)
            .with_edges(edges);
        self.simulator.simulate(&options).join("\n")
    }

    /// Apply comma-separated input steps and return one truth line per step.
    #[wasm_bindgen]
    pub fn run_sequence(&mut self, steps: &str) -> Result<String, JsValue> {
        let steps: Vec<&str> = steps
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect();
        if steps.is_empty() {
            return Err(to_js(TransimError::WasmError {
                message: "no input steps given".to_string(),
            }));
        }
        let lines = self
            .simulator
            .run_sequence(steps.as_slice(), &RenderOptions::truth_table())
            .map_err(to_js)?;
        Ok(lines.join("\n"))
    }

    /// Get the name of the simulated circuit.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.simulator.circuit().name().to_string()
    }
}

/// Names of every template in the circuit library.
#[wasm_bindgen]
pub fn circuit_names() -> Vec<String> {
    library::names().into_iter().map(String::from).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
