//! Transim - Transistor-level Digital Circuit Simulator
//!
//! Builds a circuit from the template library, evaluates it and prints one
//! rendering per pass.
//!
//! # Usage
//!
//! ```bash
//! transim xor --unit-test
//! transim d_latch --unit-test --steps 11,10,00,01
//! transim adder8 --single-graph --edges --out-dir graphs && dot -Tsvg graphs/adder8_0.dot
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn, Level};
use transim_core::{
    circuit::validate_circuit,
    error::Result,
    library,
    output::{print_renderings, write_graphs},
    render::RenderOptions,
    sim::SimulatorConfig,
    Simulator, DEFAULT_EXHAUSTIVE_LIMIT, DEFAULT_SEED,
};

/// Transistor-level digital circuit simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the circuit template to simulate
    #[arg(value_name = "CIRCUIT", required_unless_present = "list")]
    circuit: Option<String>,

    /// List the available circuit templates
    #[arg(long)]
    list: bool,

    /// Render every pass as a dot graph
    #[arg(long)]
    graph: bool,

    /// Render one sampled pass as a dot graph
    #[arg(long)]
    single_graph: bool,

    /// Draw wire nodes for combiners
    #[arg(long)]
    nodes: bool,

    /// Draw wire nodes as points
    #[arg(long)]
    shape_point: bool,

    /// Draw colored combiner edges
    #[arg(long)]
    edges: bool,

    /// Print compact `inputs=>outputs` lines
    #[arg(short, long)]
    unit_test: bool,

    /// Maximum rendering depth (negative for unlimited)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    max_depth: i64,

    /// Comma-separated input steps for sequential mode, e.g. 10,00,01
    #[arg(long, value_delimiter = ',')]
    steps: Option<Vec<String>>,

    /// Largest input count simulated exhaustively
    #[arg(long, default_value_t = DEFAULT_EXHAUSTIVE_LIMIT)]
    exhaustive_limit: usize,

    /// Seed for sampled simulation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Directory to write dot files to (graph modes only)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_signed_max_depth(self.max_depth)
            .with_graph(self.graph)
            .with_single_graph(self.single_graph)
            .with_nodes(self.nodes)
            .with_shape_point(self.shape_point)
            .with_edges(self.edges)
            .with_unit_test(self.unit_test)
    }

    fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig::new()
            .with_exhaustive_limit(self.exhaustive_limit)
            .with_seed(self.seed)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn list_templates() {
    for template in library::templates() {
        println!("{:<12} {}", template.name, template.description);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let name = match args.circuit.as_deref() {
        Some(name) if !args.list => name,
        _ => {
            list_templates();
            return Ok(());
        }
    };

    // Build and validate the circuit
    let circuit = library::build(name)?;
    validate_circuit(&circuit)?;

    let options = args.render_options();
    let mut simulator = Simulator::with_config(circuit, args.simulator_config());

    let renderings = match &args.steps {
        Some(steps) => simulator.run_sequence(steps.as_slice(), &options)?,
        None => simulator.simulate(&options),
    };
    info!(circuit = name, renderings = renderings.len(), "simulation finished");

    print_renderings(&renderings)?;

    if let Some(dir) = &args.out_dir {
        if options.is_graph() {
            write_graphs(&renderings, dir, name, options.draw_single_graph)?;
        } else {
            warn!("--out-dir only applies with --graph or --single-graph");
        }
    }

    Ok(())
}
