//! Netlist parser for crossbar-array SPICE decks.
//!
//! The grammar is a line-oriented subset of SPICE. Only the elements that
//! make up a crossbar schematic are decoded; everything else is skipped and
//! reported as a [`Diagnostic`].
//!
//! # Grammar Overview
//!
//! ```text
//! netlist   = { line }
//! line      = comment | card | element | empty
//! comment   = '*' { any_char }
//! card      = '.' name { argument }            ; only .PARAM is read
//! element   = id node+ [value | model] { key '=' value }
//! trailer   = ('$' | ';') { any_char }         ; inline comment
//! ```
//!
//! # Elements
//!
//! | Letter | Element | Syntax |
//! |--------|---------|--------|
//! | X | Array cell | `X<row>_<col> <bl> <wl> <sl> <mid> <model> [k=v ...]` |
//! | R | Resistor | `R<name> <n1> <n2> <value>` |
//! | C | Capacitor | `C<name> <n1> <n2> <value>` |
//! | V | Voltage source | `V<name> <n+> <n-> [dc <v> \| pwl <t0> <v0> ...]` |
//! | G | Behavioral source | recognized, not decoded |
//!
//! A capacitor with one terminal on ground (`0` or `gnd`) is folded into
//! the other node's parasitic capacitance and does not appear as a
//! component.
//!
//! # Example
//!
//! ```text
//! * 1x2 slice
//! .PARAM vread = 0.3
//! X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL Res=10M
//! X1_2 bl12 wl1 sl12 mid1_2 CIM_CELL Res=10M
//! Rint_sl_1_1 sl11 sl12 200.0
//! C_bl11 bl11 0 1e-15
//! Vwl1 wl1 0 pwl 0 0 1e-8 vread
//! ```

mod diagnostics;
mod lexer;
mod params;
mod parser;
mod value;
mod waveform;

pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use lexer::{classify, lines, ElementType, Line, Statement, COMMENT_MARKER};
pub use params::{ParamBinding, ParamTable};
pub use parser::{ParseOptions, ParsedNetlist, Parser};
pub use value::{
    format_engineering, parse_number, parse_value, try_parse_value, MSuffix, ValueContext,
};
pub use waveform::{extract_pwl, PwlExtraction};

use crate::error::{Result, SpiceGridError};

/// Parse netlist text with default options.
pub fn parse(input: &str) -> ParsedNetlist {
    Parser::new(input, ParseOptions::default()).parse()
}

/// Parse netlist text, honoring [`ParseOptions::strict`].
pub fn parse_with(input: &str, options: ParseOptions) -> Result<ParsedNetlist> {
    let parsed = Parser::new(input, options).parse();
    if options.strict {
        if let Some(first) = parsed.warnings().next() {
            return Err(SpiceGridError::rejected(first.line, first.kind.to_string()));
        }
    }
    Ok(parsed)
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path, options: ParseOptions) -> Result<ParsedNetlist> {
    let content = std::fs::read_to_string(path).map_err(|e| SpiceGridError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_with(&content, options)
}
