//! 2D canvas rendering
//!
//! `build_frame` turns the game state into a flat list of draw commands
//! without touching any platform API. `canvas` (wasm only) replays that list
//! onto a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod palette;
pub mod shapes;

use glam::Vec2;

use crate::sim::{GameState, PowerUpKind};

/// One primitive for the 2D backend. Colors are CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: &'static str },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    RoundRect {
        min: Vec2,
        size: Vec2,
        corner: f32,
        color: &'static str,
    },
}

/// Build the draw list for a square surface of `size_px` pixels.
/// Back to front: background, food, power-ups, speed boosts, obstacles,
/// snake (tail first so the head ends on top).
pub fn build_frame(state: &GameState, size_px: f32) -> Vec<DrawCommand> {
    let cell_px = size_px / state.tuning.grid_size as f32;
    let registry = &state.registry;
    let mut out = Vec::with_capacity(
        1 + 3 * (1
            + registry.power_ups.len()
            + registry.speed_boosts.len()
            + state.snake.len())
            + registry.obstacles.len(),
    );

    out.push(DrawCommand::Clear {
        color: palette::BACKGROUND,
    });

    if let Some(food) = registry.food {
        shapes::dot(&mut out, food, cell_px, 0.45, palette::FOOD);
    }
    for p in &registry.power_ups {
        let color = match p.kind {
            PowerUpKind::Grow => palette::GROW,
            PowerUpKind::Invincible => palette::INVINCIBLE,
        };
        shapes::dot(&mut out, p.cell, cell_px, 0.42, color);
    }
    for s in &registry.speed_boosts {
        shapes::dot(&mut out, s.cell, cell_px, 0.36, palette::SPEED_BOOST);
    }
    for &o in &registry.obstacles {
        shapes::obstacle(&mut out, o, cell_px);
    }

    let len = state.snake.len();
    let head_color = if state.is_invincible() {
        palette::HEAD_INVINCIBLE
    } else {
        palette::HEAD
    };
    for (i, cell) in state.snake.segments().enumerate().rev() {
        let (scale, color) = if i == 0 {
            (0.9, head_color)
        } else {
            (0.6 - (i as f32 / len as f32) * 0.4, palette::BODY)
        };
        shapes::dot(&mut out, cell, cell_px, scale, color);
    }

    out
}
