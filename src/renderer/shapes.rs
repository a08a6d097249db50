//! Shape generation for board primitives

use glam::Vec2;

use super::DrawCommand;
use super::palette;
use crate::sim::Cell;

/// Pixel centre of a cell
#[inline]
pub fn cell_center(cell: Cell, cell_px: f32) -> Vec2 {
    (Vec2::new(cell.x as f32, cell.y as f32) + 0.5) * cell_px
}

/// A shaded dot filling `scale` of the cell: drop shadow, body, highlight
pub fn dot(out: &mut Vec<DrawCommand>, cell: Cell, cell_px: f32, scale: f32, color: &'static str) {
    let center = cell_center(cell, cell_px);
    let r = cell_px * scale * 0.5;

    out.push(DrawCommand::Circle {
        center: center + Vec2::new(cell_px * 0.04, cell_px * 0.06),
        radius: r * 1.03,
        color: palette::SHADOW,
    });
    out.push(DrawCommand::Circle {
        center,
        radius: r,
        color,
    });
    out.push(DrawCommand::Circle {
        center: center - Vec2::new(r * 0.35, r * 0.45),
        radius: r * 0.28,
        color: palette::HIGHLIGHT,
    });
}

/// Rounded block inset slightly from the cell edges
pub fn obstacle(out: &mut Vec<DrawCommand>, cell: Cell, cell_px: f32) {
    let inset = cell_px * 0.08;
    out.push(DrawCommand::RoundRect {
        min: Vec2::new(cell.x as f32, cell.y as f32) * cell_px + inset,
        size: Vec2::splat(cell_px * 0.84),
        corner: cell_px * 0.12,
        color: palette::OBSTACLE,
    });
}
