//! Line classifier for the netlist.
//!
//! Each physical line becomes at most one [`Statement`]. Blank lines and
//! `*` comment lines produce nothing; `$` and `;` start inline comments.

/// The comment marker at the start of a line.
pub const COMMENT_MARKER: char = '*';

/// Element family selected by the first letter of an instance name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// `X` subcircuit instance (array cell)
    ArrayCell,
    /// `R`
    Resistor,
    /// `C`
    Capacitor,
    /// `V`
    VoltageSource,
    /// `G` behavioral/controlled source, recognized but not decoded
    Behavioral,
    /// Anything else
    Unsupported(char),
}

impl ElementType {
    /// Element type from the first character of an instance name.
    pub fn from_prefix(prefix: char) -> Self {
        match prefix.to_ascii_uppercase() {
            'X' => Self::ArrayCell,
            'R' => Self::Resistor,
            'C' => Self::Capacitor,
            'V' => Self::VoltageSource,
            'G' => Self::Behavioral,
            other => Self::Unsupported(other),
        }
    }
}

/// A classified netlist line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    /// `.PARAM` card; `body` is the text after the keyword
    Param { body: &'a str },
    /// Any other dot card, lower-cased name in `card`
    ControlCard { card: String },
    /// Element line, split on whitespace; `tokens[0]` is the instance name
    Element {
        element: ElementType,
        tokens: Vec<&'a str>,
    },
}

/// A statement with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Trimmed source text, comments included
    pub raw: &'a str,
    pub statement: Statement<'a>,
}

/// Strip inline `$`/`;` comments.
fn strip_inline_comment(text: &str) -> &str {
    match text.find(['$', ';']) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Classify a single line, or `None` if it carries no statement.
pub fn classify(text: &str) -> Option<Statement<'_>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return None;
    }

    let content = strip_inline_comment(trimmed).trim_end();
    if content.is_empty() {
        return None;
    }

    if content.starts_with('.') {
        let (card, body) = match content.split_once(char::is_whitespace) {
            Some((card, body)) => (card, body.trim()),
            None => (content, ""),
        };
        let card = card.to_ascii_lowercase();
        return Some(if card == ".param" {
            Statement::Param { body }
        } else {
            Statement::ControlCard { card }
        });
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let prefix = tokens.first()?.chars().next()?;
    Some(Statement::Element {
        element: ElementType::from_prefix(prefix),
        tokens,
    })
}

/// Iterate over the statement-bearing lines of a netlist.
pub fn lines(input: &str) -> impl Iterator<Item = Line<'_>> {
    input.lines().enumerate().filter_map(|(idx, text)| {
        classify(text).map(|statement| Line {
            number: idx + 1,
            raw: text.trim(),
            statement,
        })
    })
}
