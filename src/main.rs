//! SpiceGrid - crossbar netlist inspector
//!
//! Parses a crossbar SPICE netlist and prints a summary, the circuit model
//! or the schematic layout.
//!
//! # Usage
//!
//! ```bash
//! spicegrid crossbar.sp
//! spicegrid crossbar.sp --format layout --m-suffix milli > layout.json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use spicegrid::{
    error::Result,
    layout, netlist,
    netlist::{format_engineering, MSuffix, ParseOptions, ParsedNetlist},
    LayoutConfig,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Human-readable overview and diagnostics
    Summary,
    /// Circuit model and diagnostics as JSON
    Circuit,
    /// Schematic primitives as JSON
    Layout,
}

/// Crossbar SPICE netlist parser and schematic layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Meaning of a bare `m`/`M` suffix
    #[arg(long, value_enum, ignore_case = true, default_value_t = MSuffix::Contextual)]
    m_suffix: MSuffix,

    /// Fail on the first warning instead of skipping the line
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let options = ParseOptions::new()
        .with_m_suffix(args.m_suffix)
        .with_strict(args.strict);

    let parsed = netlist::parse_file(&args.netlist, options)?;

    match args.format {
        Format::Summary => print_summary(&parsed),
        Format::Circuit => println!("{}", serde_json::to_string_pretty(&parsed)?),
        Format::Layout => {
            let schematic = layout(&parsed.circuit, &LayoutConfig::default());
            println!("{}", serde_json::to_string_pretty(&schematic)?);
        }
    }

    Ok(())
}

fn print_summary(parsed: &ParsedNetlist) {
    let circuit = &parsed.circuit;
    let dims = circuit.grid_dimensions;

    if dims.is_empty() {
        println!("grid:        no array cells");
    } else {
        println!("grid:        {} x {}", dims.rows, dims.cols);
    }
    println!("components:  {}", circuit.components.len());
    println!("nodes:       {}", circuit.nodes.len());
    println!(
        "parasitics:  {}F",
        format_engineering(circuit.total_capacitance())
    );
    for binding in circuit.params.iter() {
        match binding.value {
            Some(value) => println!("param:       {} = {}", binding.name, format_engineering(value)),
            None => println!("param:       {} = {} (unresolved)", binding.name, binding.expression),
        }
    }

    let unplaced: Vec<&str> = circuit
        .components
        .iter()
        .filter(|c| !c.role.is_placed())
        .map(|c| c.id.as_str())
        .collect();
    if !unplaced.is_empty() {
        println!("unplaced:    {}", unplaced.join(", "));
    }

    for diagnostic in &parsed.diagnostics {
        println!("{}", diagnostic);
    }
}
