//! Schematic roles inferred from crossbar naming conventions.
//!
//! | Pattern | Role |
//! |---------|------|
//! | `X<row>_<col>` | array cell |
//! | `Rint_bl_<row>_<col>` | bit-line segment to the cell below |
//! | `Rint_sl_<row>_<col>` | source-line segment to the cell on the right |
//! | `Vbl<col>` | bit-line driver |
//! | `Vwl<row>` | word-line driver |
//! | `Vsl...` with first node `sl<row><col>` | source-line driver |
//!
//! All patterns are case-insensitive. Indices are 1-based; a zero index
//! leaves the element unplaced.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ComponentRole, GridPosition};

static CELL_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^X(\d+)_(\d+)$").unwrap());
static BL_RESISTOR_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Rint_bl_(\d+)_(\d+)$").unwrap());
static SL_RESISTOR_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Rint_sl_(\d+)_(\d+)$").unwrap());
static BL_DRIVER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Vbl(\d+)").unwrap());
static WL_DRIVER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Vwl(\d+)").unwrap());
// Row takes every digit but the last, so `sl123` is row 12, column 3.
static SL_NODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^sl(\d+)(\d)$").unwrap());

fn index(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|&i| i > 0)
}

fn position(re: &Regex, text: &str) -> Option<GridPosition> {
    let caps = re.captures(text)?;
    Some(GridPosition::new(index(&caps[1])?, index(&caps[2])?))
}

/// Grid position of an `X<row>_<col>` instance.
pub fn cell_position(id: &str) -> Option<GridPosition> {
    position(&CELL_ID, id)
}

/// Role of a resistor from its instance name.
///
/// A segment whose far end would not have a valid index stays unplaced.
pub fn resistor_role(id: &str) -> ComponentRole {
    if let Some(from) = position(&BL_RESISTOR_ID, id).filter(|p| p.below().is_some()) {
        ComponentRole::BitLineResistor { from }
    } else if let Some(from) = position(&SL_RESISTOR_ID, id).filter(|p| p.right().is_some()) {
        ComponentRole::SourceLineResistor { from }
    } else {
        ComponentRole::Unplaced
    }
}

/// Whether the instance name uses the line-resistor prefix.
pub fn is_line_resistor(id: &str) -> bool {
    id.get(..8).is_some_and(|p| {
        p.eq_ignore_ascii_case("rint_bl_") || p.eq_ignore_ascii_case("rint_sl_")
    })
}

/// Whether the instance name marks a source-line driver.
pub fn is_source_line_driver(id: &str) -> bool {
    id.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("vsl"))
}

/// Role of a voltage source from its instance name and first node.
pub fn source_role(id: &str, first_node: &str) -> ComponentRole {
    if let Some(col) = BL_DRIVER_ID.captures(id).and_then(|c| index(&c[1])) {
        return ComponentRole::BitLineDriver { col };
    }
    if let Some(row) = WL_DRIVER_ID.captures(id).and_then(|c| index(&c[1])) {
        return ComponentRole::WordLineDriver { row };
    }
    if is_source_line_driver(id) {
        if let Some(cell) = position(&SL_NODE, first_node) {
            return ComponentRole::SourceLineDriver { cell };
        }
    }
    ComponentRole::Unplaced
}
