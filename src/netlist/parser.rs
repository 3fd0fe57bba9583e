//! Element decoders and the parse driver.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Serialize;

use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::lexer::{lines, ElementType, Line, Statement};
use super::params::ParamTable;
use super::value::{try_parse_value, MSuffix, ValueContext};
use super::waveform::extract_pwl;
use crate::circuit::{
    roles, Circuit, CircuitBuilder, Component, ComponentKind, ComponentRole,
};

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resolution of the ambiguous `m` suffix
    pub m_suffix: MSuffix,
    /// Turn the first warning into an error instead of skipping the line
    pub strict: bool,
}

impl ParseOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how a bare `m` suffix is read.
    pub fn with_m_suffix(mut self, m_suffix: MSuffix) -> Self {
        self.m_suffix = m_suffix;
        self
    }

    /// Reject netlists that produce warnings.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A parsed circuit together with everything the parser skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedNetlist {
    pub circuit: Circuit,
    /// Ordered by line
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedNetlist {
    /// Diagnostics of warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

/// Single-pass netlist parser.
///
/// `.PARAM` cards are collected first so that waveform breakpoints may
/// reference constants declared anywhere in the document.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
    builder: CircuitBuilder,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a parser over netlist text.
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        let mut diagnostics = Vec::new();
        let params = collect_params(input, options.m_suffix, &mut diagnostics);
        Self {
            input,
            options,
            builder: CircuitBuilder::new(params, options.m_suffix),
            diagnostics,
        }
    }

    /// Decode every line. Never fails; see [`ParsedNetlist::diagnostics`].
    pub fn parse(mut self) -> ParsedNetlist {
        for line in lines(self.input) {
            self.decode(line);
        }

        self.diagnostics.sort_by_key(|d| d.line);
        let circuit = self.builder.build();
        info!(
            "parsed {} components, {} nodes, {}x{} array ({} diagnostics)",
            circuit.components.len(),
            circuit.nodes.len(),
            circuit.grid_dimensions.rows,
            circuit.grid_dimensions.cols,
            self.diagnostics.len()
        );

        ParsedNetlist {
            circuit,
            diagnostics: self.diagnostics,
        }
    }

    fn report(&mut self, line: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(line, kind);
        if diagnostic.is_warning() {
            warn!("{}", diagnostic);
        } else {
            debug!("{}", diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }

    fn decode(&mut self, line: Line<'_>) {
        let (element, tokens) = match &line.statement {
            // Collected up front
            Statement::Param { .. } => return,
            Statement::ControlCard { card } => {
                let card = card.clone();
                self.report(line.number, DiagnosticKind::IgnoredControlCard { card });
                return;
            }
            Statement::Element { element, tokens } => (*element, tokens.clone()),
        };

        let id = tokens[0];
        let kind = match element {
            ElementType::ArrayCell => ComponentKind::ArrayCell,
            ElementType::Resistor => ComponentKind::Resistor,
            ElementType::Capacitor => ComponentKind::Capacitor,
            ElementType::VoltageSource => ComponentKind::VoltageSource,
            ElementType::Behavioral => {
                let id = id.to_string();
                self.report(line.number, DiagnosticKind::BehavioralSource { id });
                return;
            }
            ElementType::Unsupported(prefix) => {
                self.report(line.number, DiagnosticKind::UnsupportedElement { prefix });
                return;
            }
        };

        let expected = kind.expected_node_count();
        let found = tokens.len() - 1;
        if found < expected {
            let id = id.to_string();
            self.report(
                line.number,
                DiagnosticKind::MissingTokens {
                    id,
                    expected,
                    found,
                },
            );
            return;
        }

        // Capacitors to ground never become components; they claim their
        // name only when they stay visible.
        if kind != ComponentKind::Capacitor && !self.claim(line.number, id) {
            return;
        }

        debug!("line {}: {} '{}'", line.number, kind, id);
        match kind {
            ComponentKind::ArrayCell => self.decode_cell(&line, &tokens),
            ComponentKind::Resistor => self.decode_resistor(&line, &tokens),
            ComponentKind::Capacitor => self.decode_capacitor(&line, &tokens),
            ComponentKind::VoltageSource => self.decode_source(&line, &tokens),
        }
    }

    /// Reserve an instance name, reporting a duplicate.
    fn claim(&mut self, line: usize, id: &str) -> bool {
        if self.builder.claim(id) {
            return true;
        }
        let id = id.to_string();
        self.report(line, DiagnosticKind::DuplicateComponent { id });
        false
    }

    /// Token at `idx` unless it is absent or a `key=value` pair. A missing
    /// token is reported against `field`.
    fn positional<'t>(
        &mut self,
        line: &Line<'_>,
        tokens: &[&'t str],
        idx: usize,
        field: &str,
    ) -> Option<&'t str> {
        let token = tokens.get(idx).copied().filter(|t| !t.contains('='));
        if token.is_none() {
            self.report(
                line.number,
                DiagnosticKind::MissingValue {
                    id: tokens[0].to_string(),
                    field: field.to_string(),
                },
            );
        }
        token
    }

    /// `X<row>_<col> <bl> <wl> <sl> <mid> <model> [key=value ...]`
    fn decode_cell(&mut self, line: &Line<'_>, tokens: &[&str]) {
        let id = tokens[0];
        let mut params = key_values(&tokens[5..]);
        if let Some(model) = self.positional(line, tokens, 5, "model") {
            params.insert("model".to_string(), model.to_string());
        }

        let role = match roles::cell_position(id) {
            Some(position) => ComponentRole::Cell { position },
            None => {
                let id = id.to_string();
                self.report(line.number, DiagnosticKind::UnplacedCell { id });
                ComponentRole::Unplaced
            }
        };

        self.builder
            .push(component(line, ComponentKind::ArrayCell, tokens, 4, params, role));
    }

    /// `R<name> <n1> <n2> <value> [key=value ...]`
    fn decode_resistor(&mut self, line: &Line<'_>, tokens: &[&str]) {
        let id = tokens[0];
        let mut params = key_values(&tokens[3..]);
        if let Some(value) = self.positional(line, tokens, 3, "value") {
            params.insert("value".to_string(), value.to_string());
        }

        let role = roles::resistor_role(id);
        if role == ComponentRole::Unplaced && roles::is_line_resistor(id) {
            let id = id.to_string();
            self.report(line.number, DiagnosticKind::UnplacedResistor { id });
        }
        self.builder
            .push(component(line, ComponentKind::Resistor, tokens, 2, params, role));
    }

    /// `C<name> <n1> <n2> <value>`; a capacitor to ground becomes node
    /// capacitance instead of a visible component.
    fn decode_capacitor(&mut self, line: &Line<'_>, tokens: &[&str]) {
        let id = tokens[0];
        let raw_value = self.positional(line, tokens, 3, "value");
        let policy = self.options.m_suffix;
        let parsed = raw_value.and_then(|v| try_parse_value(v, ValueContext::Generic, policy));
        let farads = match (parsed, raw_value) {
            (Some(v), _) => v,
            (None, Some(token)) => {
                self.report(
                    line.number,
                    DiagnosticKind::UnparsedValue {
                        id: id.to_string(),
                        token: token.to_string(),
                    },
                );
                0.0
            }
            (None, None) => 0.0,
        };

        let n1 = self.builder.node(tokens[1]);
        let n2 = self.builder.node(tokens[2]);
        match (self.builder.is_ground(n1), self.builder.is_ground(n2)) {
            (false, true) => self.builder.add_capacitance(n1, farads),
            (true, false) => self.builder.add_capacitance(n2, farads),
            (true, true) => {
                let id = id.to_string();
                self.report(line.number, DiagnosticKind::GroundedCapacitor { id });
            }
            (false, false) => {
                if !self.claim(line.number, id) {
                    return;
                }
                let mut params = key_values(&tokens[3..]);
                if let Some(value) = raw_value {
                    params.insert("value".to_string(), value.to_string());
                }
                self.builder.push(component(
                    line,
                    ComponentKind::Capacitor,
                    tokens,
                    2,
                    params,
                    ComponentRole::Unplaced,
                ));
            }
        }
    }

    /// `V<name> <n+> <n-> [dc <v> | <v> | pwl <t0> <v0> ...]`
    fn decode_source(&mut self, line: &Line<'_>, tokens: &[&str]) {
        let id = tokens[0];
        let rest = &tokens[3..];
        let mut params = key_values(rest);
        let mut waveform = None;

        match rest.iter().position(|t| t.eq_ignore_ascii_case("pwl")) {
            Some(idx) => {
                let extraction = extract_pwl(&rest[idx + 1..], self.builder.params());
                if let Some(token) = extraction.stopped_at {
                    let kept = extraction.points.len();
                    self.report(
                        line.number,
                        DiagnosticKind::WaveformTruncated {
                            id: id.to_string(),
                            token,
                            kept,
                        },
                    );
                }
                if let Some(token) = extraction.dangling {
                    self.report(
                        line.number,
                        DiagnosticKind::DanglingWaveformToken {
                            id: id.to_string(),
                            token,
                        },
                    );
                }
                params.insert("type".to_string(), "PWL".to_string());
                waveform = Some(extraction.points);
            }
            None => {
                params.insert("type".to_string(), "DC".to_string());
                let level = match rest.first() {
                    Some(t) if t.eq_ignore_ascii_case("dc") => rest.get(1),
                    first => first,
                };
                if let Some(level) = level.filter(|t| !t.contains('=')) {
                    params.insert("value".to_string(), level.to_string());
                }
            }
        }

        let role = roles::source_role(id, tokens[1]);
        if role == ComponentRole::Unplaced && roles::is_source_line_driver(id) {
            self.report(
                line.number,
                DiagnosticKind::UnplacedSource {
                    id: id.to_string(),
                    node: tokens[1].to_string(),
                },
            );
        }

        let mut source = component(line, ComponentKind::VoltageSource, tokens, 2, params, role);
        source.waveform = waveform;
        self.builder.push(source);
    }
}

/// Build a component from its tokens: the instance name followed by
/// `node_count` node names.
fn component(
    line: &Line<'_>,
    kind: ComponentKind,
    tokens: &[&str],
    node_count: usize,
    params: BTreeMap<String, String>,
    role: ComponentRole,
) -> Component {
    Component {
        id: tokens[0].to_string(),
        kind,
        nodes: tokens[1..=node_count].iter().map(|n| n.to_string()).collect(),
        params,
        waveform: None,
        role,
        line: line.number,
        raw_line: line.raw.to_string(),
    }
}

/// Collect `key=value` tokens; tokens without `=` are ignored.
fn key_values(tokens: &[&str]) -> BTreeMap<String, String> {
    tokens
        .iter()
        .filter_map(|t| t.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Pre-pass over the document collecting `.PARAM` bindings.
fn collect_params(input: &str, policy: MSuffix, diagnostics: &mut Vec<Diagnostic>) -> ParamTable {
    let mut table = ParamTable::new();
    for line in lines(input) {
        if let Statement::Param { body } = line.statement {
            for binding in table.capture(body, line.number, policy) {
                let diagnostic = Diagnostic::new(
                    line.number,
                    DiagnosticKind::UnresolvedParam {
                        name: binding.name,
                        expression: binding.expression,
                    },
                );
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::{GridDimensions, GridPosition};
    use crate::netlist::{parse, parse_with, Severity};

    fn full_array(skip: Option<(u32, u32)>) -> String {
        let mut text = String::new();
        for r in 1..=4 {
            for c in 1..=4 {
                if skip == Some((r, c)) {
                    continue;
                }
                text.push_str(&format!(
                    "X{r}_{c} bl{r}{c} wl{r} sl{r}{c} mid{r}_{c} CIM_CELL ini_state=0.2 Res=5000000.0\n"
                ));
            }
        }
        text
    }

    #[test]
    fn test_parse_cell() {
        let parsed = parse("X1_2 bl12 wl1 sl12 mid1_2 CIM_CELL ini_state=0.2 Res=10M");
        let cell = &parsed.circuit.components[0];
        assert_eq!(cell.kind, ComponentKind::ArrayCell);
        assert_eq!(cell.nodes, vec!["bl12", "wl1", "sl12", "mid1_2"]);
        assert_eq!(cell.grid_position(), Some(GridPosition::new(1, 2)));
        assert_eq!(cell.param("model"), Some("CIM_CELL"));
        assert_eq!(cell.param("ini_state"), Some("0.2"));
        assert_eq!(parsed.circuit.nodes.len(), 4);
    }

    #[test]
    fn test_res_10m_reads_as_megaohms() {
        let parsed = parse("X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL Res=10M");
        assert_relative_eq!(parsed.circuit.resistance("X1_1").unwrap(), 10e6);

        let milli = parse_with(
            "X1_1 bl11 wl1 sl11 mid1_1 CIM_CELL Res=10M",
            ParseOptions::new().with_m_suffix(MSuffix::Milli),
        )
        .unwrap();
        assert_relative_eq!(milli.circuit.resistance("X1_1").unwrap(), 10e-3);
    }

    #[test]
    fn test_unplaced_cell_is_kept() {
        let parsed = parse("XFeFET bl wl sl mid MFMIS1 readonly=1\nX1_1a a b c d M");
        let circuit = &parsed.circuit;
        assert_eq!(circuit.components.len(), 2);
        assert!(circuit.components.iter().all(|c| c.grid_position().is_none()));
        assert_eq!(circuit.grid_dimensions, GridDimensions::default());
        assert_eq!(parsed.diagnostics.len(), 2);
        assert!(parsed.diagnostics.iter().all(|d| d.severity == Severity::Info));
    }

    #[test]
    fn test_grid_bounding_box() {
        let full = parse(&full_array(None));
        assert_eq!(full.circuit.grid_dimensions, GridDimensions { rows: 4, cols: 4 });
        assert_eq!(full.circuit.cells().count(), 16);

        let sparse = parse(&full_array(Some((3, 2))));
        assert_eq!(sparse.circuit.grid_dimensions, GridDimensions { rows: 4, cols: 4 });
        assert_eq!(sparse.circuit.cells().count(), 15);
    }

    #[test]
    fn test_node_uniqueness() {
        let parsed = parse(&full_array(None));
        // 16 bl, 4 wl, 16 sl, 16 mid
        assert_eq!(parsed.circuit.nodes.len(), 52);
        let mut names: Vec<&str> = parsed.circuit.nodes.iter().map(|n| n.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 52);
        for comp in &parsed.circuit.components {
            for node in &comp.nodes {
                assert!(parsed.circuit.node(node).is_some());
            }
        }
    }

    #[test]
    fn test_parasitic_capacitance() {
        let parsed = parse("C_bl11 bl11 0 1e-15\nC_bl11b GND bl11 2f\nCc bl11 bl12 3p");
        let circuit = &parsed.circuit;

        assert_relative_eq!(circuit.node("bl11").unwrap().capacitance, 3e-15, max_relative = 1e-12);
        assert_eq!(circuit.node("bl12").unwrap().capacitance, 0.0);
        assert_eq!(circuit.node("0").unwrap().capacitance, 0.0);

        assert_eq!(circuit.components.len(), 1);
        let cc = &circuit.components[0];
        assert_eq!(cc.id, "Cc");
        assert_eq!(cc.kind, ComponentKind::Capacitor);
        assert_relative_eq!(cc.capacitance(MSuffix::Contextual).unwrap(), 3e-12, max_relative = 1e-12);
    }

    #[test]
    fn test_grounded_capacitor_is_a_no_op() {
        let parsed = parse("Cg 0 gnd 1p");
        assert!(parsed.circuit.components.is_empty());
        assert_eq!(parsed.circuit.total_capacitance(), 0.0);
        assert!(matches!(
            parsed.diagnostics[0].kind,
            DiagnosticKind::GroundedCapacitor { .. }
        ));
    }

    #[test]
    fn test_unparsed_capacitor_value_defaults_to_zero() {
        let parsed = parse("C1 n1 0 cpar");
        assert_eq!(parsed.circuit.node("n1").unwrap().capacitance, 0.0);
        assert_eq!(parsed.warnings().count(), 1);
    }

    #[test]
    fn test_resistor_roles() {
        let parsed = parse("Rint_bl_1_1 bl11 bl21 200.0\nRint_sl_1_1 sl11 sl12 200.0\nRlimit mid sl Res");
        let c = &parsed.circuit;
        assert_eq!(
            c.component("Rint_bl_1_1").unwrap().role.endpoints(),
            Some((GridPosition::new(1, 1), GridPosition::new(2, 1)))
        );
        assert_eq!(
            c.component("Rint_sl_1_1").unwrap().role.endpoints(),
            Some((GridPosition::new(1, 1), GridPosition::new(1, 2)))
        );
        assert_eq!(c.component("Rlimit").unwrap().role, ComponentRole::Unplaced);
        assert_eq!(c.component("Rint_bl_1_1").unwrap().param("value"), Some("200.0"));
        assert_relative_eq!(c.resistance("Rint_sl_1_1").unwrap(), 200.0);
    }

    #[test]
    fn test_voltage_sources() {
        let input = "\
Vbl1 bl10 0 pwl 0 0 9e-9 0 1e-8 0.3
Vwl1 wl1 0 pwl 0 0 1e-8 vstage1 2e-8 0.5
Vsl1 sl41 0 0
Vdd vdd 0 DC 1.2
";
        let parsed = parse(input);
        let c = &parsed.circuit;

        let vbl = c.component("Vbl1").unwrap();
        assert_eq!(vbl.param("type"), Some("PWL"));
        assert_eq!(vbl.role, ComponentRole::BitLineDriver { col: 1 });
        assert_eq!(c.waveform("Vbl1").unwrap().len(), 3);

        let points: Vec<(f64, f64)> = c
            .waveform("Vwl1")
            .unwrap()
            .iter()
            .map(|p| (p.time, p.voltage))
            .collect();
        assert_eq!(points, vec![(0.0, 0.0)]);
        assert!(parsed.warnings().any(|d| matches!(
            &d.kind,
            DiagnosticKind::WaveformTruncated { token, kept: 1, .. } if token == "vstage1"
        )));

        let vsl = c.component("Vsl1").unwrap();
        assert_eq!(vsl.param("type"), Some("DC"));
        assert_eq!(vsl.param("value"), Some("0"));
        assert_eq!(
            vsl.role,
            ComponentRole::SourceLineDriver {
                cell: GridPosition::new(4, 1)
            }
        );
        assert!(vsl.waveform().is_none());

        let vdd = c.component("Vdd").unwrap();
        assert_eq!(vdd.param("value"), Some("1.2"));
        assert_eq!(vdd.role, ComponentRole::Unplaced);
    }

    #[test]
    fn test_param_substitution_in_pwl() {
        let input = "Vwl1 wl1 0 pwl 0 0 1e-8 vstage1 2e-8 vstage2\n.PARAM vstage1 = 1.05\n.PARAM vstage2=2.15\n";
        let parsed = parse(input);
        let wave = parsed.circuit.waveform("Vwl1").unwrap();
        assert_eq!(wave.len(), 3);
        assert_relative_eq!(wave[1].voltage, 1.05);
        assert_relative_eq!(wave[2].voltage, 2.15);
        assert_eq!(parsed.warnings().count(), 0);
    }

    #[test]
    fn test_unplaced_source_line_driver() {
        let parsed = parse("Vsl9 sl_integral_1 0 0");
        assert_eq!(parsed.circuit.components.len(), 1);
        assert!(matches!(
            parsed.diagnostics[0].kind,
            DiagnosticKind::UnplacedSource { .. }
        ));
    }

    #[test]
    fn test_skipped_lines_are_reported() {
        let input = "\
* comment
.OPTIONS POST
G_int_1 0 sl_integral_1 CUR = 'I(Vsl1)'
L1 a b 1u
R2 a
R1 a b 1k
R1 c d 2k
.END
";
        let parsed = parse(input);
        // only a missing node drops the element
        assert_eq!(parsed.circuit.components.len(), 1);
        assert_eq!(parsed.circuit.component("R1").unwrap().nodes, vec!["a", "b"]);
        assert!(parsed.circuit.component("R2").is_none());

        let lines: Vec<usize> = parsed.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 7, 8]);
        assert_eq!(parsed.warnings().count(), 3);
    }

    #[test]
    fn test_missing_model_and_value_keep_elements() {
        let input = "\
X1_1 bl11 wl1 sl11 mid1_1
X2_2 bl22 wl2 sl22 mid2_2 CIM_CELL
Rint_bl_1_1 bl11 bl21
C1 n1 0
X3_3 bl33 wl3 sl33 mid3_3 Res=10M
";
        let parsed = parse(input);
        let c = &parsed.circuit;

        let ids: Vec<&str> = c.components.iter().map(|comp| comp.id.as_str()).collect();
        assert_eq!(ids, vec!["X1_1", "X2_2", "Rint_bl_1_1", "X3_3"]);
        assert_eq!(c.grid_dimensions, GridDimensions { rows: 3, cols: 3 });

        assert_eq!(c.component("X1_1").unwrap().param("model"), None);
        assert_eq!(c.component("X3_3").unwrap().param("model"), None);
        assert_relative_eq!(c.resistance("X3_3").unwrap(), 10e6);

        let r = c.component("Rint_bl_1_1").unwrap();
        assert_eq!(r.param("value"), None);
        assert!(r.role.is_placed());
        assert_eq!(c.node("n1").unwrap().capacitance, 0.0);

        let missing: Vec<usize> = parsed
            .warnings()
            .filter(|d| matches!(d.kind, DiagnosticKind::MissingValue { .. }))
            .map(|d| d.line)
            .collect();
        assert_eq!(missing, vec![1, 3, 4, 5]);

        let schematic = crate::layout::layout(c, &crate::layout::LayoutConfig::default());
        assert_eq!(schematic.primitives.len(), 4);
    }

    #[test]
    fn test_repeated_ground_capacitor_names_accumulate() {
        let parsed = parse("C_bl11 bl11 0 1e-15\nC_bl11 bl11 0 1e-15\n");
        assert_relative_eq!(
            parsed.circuit.node("bl11").unwrap().capacitance,
            2e-15,
            max_relative = 1e-12
        );
        assert!(parsed.diagnostics.is_empty());

        let visible = parse("Cc a b 1p\nCc a b 2p\nCc a 0 1f");
        assert_eq!(visible.circuit.components.len(), 1);
        assert_eq!(visible.circuit.component("Cc").unwrap().param("value"), Some("1p"));
        assert_relative_eq!(visible.circuit.node("a").unwrap().capacitance, 1e-15, max_relative = 1e-12);
        let kinds: Vec<&DiagnosticKind> = visible.diagnostics.iter().map(|d| &d.kind).collect();
        assert_eq!(
            kinds,
            vec![&DiagnosticKind::DuplicateComponent { id: "Cc".to_string() }]
        );
    }

    #[test]
    fn test_line_resistor_past_last_index_is_reported() {
        let parsed = parse("Rint_bl_4294967295_1 a b 200");
        let r = &parsed.circuit.components[0];
        assert_eq!(r.role, ComponentRole::Unplaced);
        assert_eq!(r.role.endpoints(), None);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].severity, Severity::Info);
        assert!(matches!(
            &parsed.diagnostics[0].kind,
            DiagnosticKind::UnplacedResistor { id } if id == "Rint_bl_4294967295_1"
        ));
    }

    #[test]
    fn test_strict_mode_rejects_warnings() {
        let err = parse_with("L1 a b 1u", ParseOptions::new().with_strict(true)).unwrap_err();
        assert!(err.to_string().contains("line 1"));

        let ok = parse_with(".END\nR1 a b 1k", ParseOptions::new().with_strict(true));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = full_array(Some((2, 2))) + "C_bl11 bl11 0 1e-15\nVbl1 bl10 0 pwl 0 0 1e-8 0.3\n";
        assert_eq!(parse(&text), parse(&text));
    }
}
