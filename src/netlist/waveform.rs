//! Piecewise-linear (PWL) breakpoint extraction.

use crate::circuit::WaveformPoint;

use super::params::ParamTable;

/// Outcome of decoding the tokens that follow a `pwl` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct PwlExtraction {
    /// Breakpoints decoded before the first unresolvable token
    pub points: Vec<WaveformPoint>,
    /// The token extraction stopped at, if it stopped early
    pub stopped_at: Option<String>,
    /// A trailing token left without a partner
    pub dangling: Option<String>,
}

/// Decode `(time, voltage)` pairs from the tokens after `pwl`.
///
/// Each token must be a plain number or the name of a constant `.PARAM`
/// binding. Extraction ends at the first pair with an unresolvable member;
/// later pairs are not recovered even if they are numeric.
pub fn extract_pwl(tokens: &[&str], params: &ParamTable) -> PwlExtraction {
    let tokens: Vec<&str> = tokens
        .iter()
        .map(|t| t.trim_matches(|c| c == '(' || c == ')'))
        .filter(|t| !t.is_empty())
        .collect();

    let mut points = Vec::with_capacity(tokens.len() / 2);
    let mut pairs = tokens.chunks_exact(2);

    for pair in pairs.by_ref() {
        let time = params.resolve(pair[0]);
        let voltage = params.resolve(pair[1]);
        match (time, voltage) {
            (Some(time), Some(voltage)) => points.push(WaveformPoint { time, voltage }),
            _ => {
                let culprit = if time.is_none() { pair[0] } else { pair[1] };
                return PwlExtraction {
                    points,
                    stopped_at: Some(culprit.to_string()),
                    dangling: None,
                };
            }
        }
    }

    PwlExtraction {
        points,
        stopped_at: None,
        dangling: pairs.remainder().first().map(|t| t.to_string()),
    }
}
