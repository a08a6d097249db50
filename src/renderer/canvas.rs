//! Canvas 2D backend

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::DrawCommand;

/// Replay a draw list onto the canvas. `size_px` is the canvas edge length.
pub fn paint(ctx: &CanvasRenderingContext2d, size_px: f64, commands: &[DrawCommand]) {
    for cmd in commands {
        match *cmd {
            DrawCommand::Clear { color } => {
                ctx.clear_rect(0.0, 0.0, size_px, size_px);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, size_px, size_px);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                if ctx
                    .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
                    .is_err()
                {
                    continue;
                }
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            DrawCommand::RoundRect {
                min,
                size,
                corner,
                color,
            } => {
                if round_rect_path(
                    ctx,
                    min.x as f64,
                    min.y as f64,
                    size.x as f64,
                    size.y as f64,
                    corner as f64,
                )
                .is_err()
                {
                    continue;
                }
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
        }
    }
}

fn round_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), wasm_bindgen::JsValue> {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
