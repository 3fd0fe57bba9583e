//! Placement of circuit components on the schematic grid.

use log::{debug, info};

use super::config::LayoutConfig;
use super::geometry::{Anchor, Layout, Orientation, Point, Primitive};
use crate::circuit::{Circuit, Component, ComponentRole, GridPosition, Track};

/// Lay out a circuit.
///
/// Pure and deterministic: shapes follow the component order, and
/// components without a role produce nothing.
pub fn layout(circuit: &Circuit, config: &LayoutConfig) -> Layout {
    let mut primitives = Vec::with_capacity(circuit.components.len() * 2);

    for component in &circuit.components {
        place(component, config, &mut primitives);
    }

    let dims = circuit.grid_dimensions;
    let width = config.margin_left + f64::from(dims.cols) * config.pitch_x() + config.canvas_padding;
    let height = config.margin_top + f64::from(dims.rows) * config.pitch_y() + config.canvas_padding;

    info!(
        "laid out {} primitives on a {}x{} canvas",
        primitives.len(),
        width,
        height
    );

    Layout {
        primitives,
        width,
        height,
    }
}

fn place(component: &Component, cfg: &LayoutConfig, out: &mut Vec<Primitive>) {
    if component.role.is_placed() {
        debug!("placing {} as {:?}", component.id, component.role);
    }
    let id = component.id.clone();
    match component.role {
        ComponentRole::Unplaced => {}

        ComponentRole::Cell { position } => {
            let origin = cfg.cell_origin(position);
            let anchor = |idx: usize, track: Track, at: Point| Anchor {
                node: component.nodes.get(idx).cloned().unwrap_or_default(),
                track,
                at,
            };
            out.push(Primitive::Cell {
                id,
                position,
                origin,
                width: cfg.cell_width,
                height: cfg.cell_height,
                bit_line: anchor(
                    0,
                    Track::BitLine,
                    Point::new(origin.x + cfg.bit_line_inset, origin.y),
                ),
                word_line: anchor(
                    1,
                    Track::WordLine,
                    Point::new(origin.x, origin.y + cfg.track_inset),
                ),
                source_line: anchor(
                    2,
                    Track::SourceLine,
                    Point::new(
                        origin.x + cfg.cell_width,
                        origin.y + cfg.cell_height - cfg.track_inset,
                    ),
                ),
            });
        }

        ComponentRole::BitLineResistor { from } => {
            let Some(next) = from.below() else {
                return;
            };
            let x = cfg.bit_line_x(from.col);
            let top = cfg.cell_origin(from).y + cfg.cell_height;
            let bottom = cfg.cell_origin(next).y;
            out.push(Primitive::Resistor {
                id,
                orientation: Orientation::Vertical,
                center: Point::new(x, (top + bottom) / 2.0),
                length: bottom - top,
                track: Track::BitLine,
                label: component.param("value").map(str::to_string),
            });
        }

        ComponentRole::SourceLineResistor { from } => {
            let y = cfg.source_line_y(from.row);
            let Some(next) = from.right() else {
                return;
            };
            let left = cfg.cell_origin(from).x + cfg.cell_width;
            let right = cfg.cell_origin(next).x;
            out.push(Primitive::Resistor {
                id,
                orientation: Orientation::Horizontal,
                center: Point::new((left + right) / 2.0, y),
                length: right - left,
                track: Track::SourceLine,
                label: component.param("value").map(str::to_string),
            });
        }

        ComponentRole::BitLineDriver { col } => {
            let center = Point::new(cfg.bit_line_x(col), cfg.margin_top - cfg.driver_offset);
            out.push(Primitive::VoltageGlyph {
                label: id.clone(),
                id,
                orientation: Orientation::Vertical,
                center,
                track: Track::BitLine,
            });
            out.push(Primitive::Wire {
                from: Point::new(center.x, center.y + cfg.glyph_radius),
                to: Point::new(center.x, cfg.margin_top),
                track: Track::BitLine,
                dashed: true,
            });
        }

        ComponentRole::WordLineDriver { row } => {
            let center = Point::new(cfg.margin_left - cfg.driver_offset, cfg.word_line_y(row));
            out.push(Primitive::VoltageGlyph {
                label: id.clone(),
                id,
                orientation: Orientation::Horizontal,
                center,
                track: Track::WordLine,
            });
            out.push(Primitive::Wire {
                from: Point::new(center.x + cfg.glyph_radius, center.y),
                to: Point::new(cfg.margin_left, center.y),
                track: Track::WordLine,
                dashed: true,
            });
        }

        ComponentRole::SourceLineDriver { cell } => {
            let center = source_driver_center(cfg, cell);
            out.push(Primitive::GroundSourceGlyph {
                id,
                center,
                track: Track::SourceLine,
            });
            out.push(Primitive::Wire {
                from: Point::new(center.x, center.y - cfg.glyph_radius),
                to: Point::new(center.x, cfg.source_line_y(cell.row)),
                track: Track::SourceLine,
                dashed: true,
            });
        }
    }
}

fn source_driver_center(cfg: &LayoutConfig, cell: GridPosition) -> Point {
    let center = cfg.cell_center(cell);
    Point::new(center.x, center.y + cfg.cell_height / 2.0 + cfg.ground_drop)
}
