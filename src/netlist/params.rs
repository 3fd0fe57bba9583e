//! `.PARAM` bindings.
//!
//! Only constant bindings are understood: `.PARAM name = <literal>` where the
//! literal parses with the value normalizer. Expressions are kept verbatim
//! but never evaluated.

use std::collections::HashMap;

use serde::Serialize;

use super::value::{parse_number, try_parse_value, MSuffix, ValueContext};

/// One `name = value` binding from a `.PARAM` card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamBinding {
    pub name: String,
    /// Right-hand side as written
    pub expression: String,
    /// Folded value, when the right-hand side is a constant
    pub value: Option<f64>,
    pub line: usize,
}

/// Parameter table collected from every `.PARAM` card of a document.
///
/// Names are case-insensitive. A later binding replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamTable {
    bindings: Vec<ParamBinding>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ParamTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text after `.PARAM` and record every binding found.
    ///
    /// Accepts `a=1`, `a = 1` and several bindings per card. Returns the
    /// bindings whose right-hand side could not be folded to a constant.
    pub fn capture(&mut self, body: &str, line: usize, policy: MSuffix) -> Vec<ParamBinding> {
        let mut unresolved = Vec::new();
        for (name, expression) in split_assignments(body) {
            let value = try_parse_value(&expression, ValueContext::Generic, policy);
            let binding = ParamBinding {
                name,
                expression,
                value,
                line,
            };
            if binding.value.is_none() {
                unresolved.push(binding.clone());
            }
            self.insert(binding);
        }
        unresolved
    }

    fn insert(&mut self, binding: ParamBinding) {
        let key = binding.name.to_ascii_lowercase();
        match self.index.get(&key) {
            Some(&idx) => self.bindings[idx] = binding,
            None => {
                self.index.insert(key, self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&ParamBinding> {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(|&idx| &self.bindings[idx])
    }

    /// Resolve a waveform token: a plain number, or a reference to a
    /// constant binding (optionally wrapped in quotes or braces).
    pub fn resolve(&self, token: &str) -> Option<f64> {
        if let Some(v) = parse_number(token) {
            return Some(v);
        }
        let name = token.trim_matches(|c| matches!(c, '\'' | '"' | '{' | '}'));
        self.get(name).and_then(|b| b.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Split `a = 1 b=2 c= 'x * 2'` into `(name, rhs)` pairs.
///
/// A right-hand side runs up to the name of the next binding, so spaced
/// expressions are kept whole.
fn split_assignments(body: &str) -> Vec<(String, String)> {
    // Give `=` its own token so compact and spaced forms look alike.
    let glued = body.replace('=', " = ");
    let tokens: Vec<&str> = glued.split_whitespace().collect();
    let equals: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|&(i, t)| *t == "=" && i > 0)
        .map(|(i, _)| i)
        .collect();

    let mut pairs = Vec::new();
    for (k, &eq) in equals.iter().enumerate() {
        let end = equals.get(k + 1).map_or(tokens.len(), |&next| next - 1);
        if eq + 1 < end {
            pairs.push((tokens[eq - 1].to_string(), tokens[eq + 1..end].join(" ")));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_capture_spaced_and_compact() {
        let mut table = ParamTable::new();
        assert!(table.capture("vstage1 = 1.05", 3, MSuffix::Contextual).is_empty());
        assert!(table.capture("t_edge=1n t_pw=9e-09", 4, MSuffix::Contextual).is_empty());

        assert_eq!(table.len(), 3);
        assert_relative_eq!(table.resolve("VSTAGE1").unwrap(), 1.05);
        assert_relative_eq!(table.resolve("t_edge").unwrap(), 1e-9, max_relative = 1e-12);
        assert_relative_eq!(table.resolve("{t_pw}").unwrap(), 9e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_expressions_stay_unresolved() {
        let mut table = ParamTable::new();
        let unresolved = table.capture("vmid = 'vstage1*2'", 7, MSuffix::Contextual);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].name, "vmid");
        assert_eq!(table.resolve("vmid"), None);
        assert_eq!(table.get("vmid").map(|b| b.line), Some(7));
    }

    #[test]
    fn test_spaced_expression_is_kept_whole() {
        let mut table = ParamTable::new();
        let unresolved = table.capture("vmid = 'vstage1 * 2' vlow=0.1", 2, MSuffix::Contextual);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].expression, "'vstage1 * 2'");
        assert_relative_eq!(table.resolve("vlow").unwrap(), 0.1);

        let names: Vec<&str> = table.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["vmid", "vlow"]);
    }

    #[test]
    fn test_rebinding_replaces_value() {
        let mut table = ParamTable::new();
        table.capture("w = 1", 1, MSuffix::Contextual);
        table.capture("W = 3", 2, MSuffix::Contextual);
        assert_eq!(table.len(), 1);
        assert_relative_eq!(table.resolve("w").unwrap(), 3.0);
    }

    #[test]
    fn test_numbers_resolve_without_bindings() {
        let table = ParamTable::new();
        assert_relative_eq!(table.resolve("2e-8").unwrap(), 2e-8);
        assert_eq!(table.resolve("vstage1"), None);
    }
}
