// Canvas painter for the board. All drawing is in board units; `dpr` only scales the transform.
use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::config::BoardConfig;
use crate::geometry::{Node, Obstacle, Point};
use crate::model::{GameState, Phase};

const BG: &str = "#020617";
const GRID: &str = "#1e293b";
const OBSTACLE_FILL: &str = "#b91c1c";
const OBSTACLE_STROKE: &str = "#fecaca";
const STROKE_DRAWING: &str = "#facc15";
const STROKE_WON: &str = "#22c55e";
const STROKE_LOST: &str = "#ef4444";
const CORNER_RADIUS: f64 = 8.0;

struct NodeStyle {
    label: &'static str,
    fill: &'static str,
    stroke: &'static str,
    text: &'static str,
}

const START_STYLE: NodeStyle =
    NodeStyle { label: "A", fill: "#16a34a", stroke: "#bbf7d0", text: "#ecfdf5" };
const END_STYLE: NodeStyle =
    NodeStyle { label: "B", fill: "#2563eb", stroke: "#bfdbfe", text: "#eff6ff" };

pub fn stroke_color(phase: Phase) -> &'static str {
    match phase {
        Phase::Won => STROKE_WON,
        Phase::Lost => STROKE_LOST,
        Phase::Idle | Phase::Drawing => STROKE_DRAWING,
    }
}

pub fn draw(ctx: &CanvasRenderingContext2d, gs: &GameState, dpr: f64) {
    let cfg = &*gs.config;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BG);
    ctx.fill_rect(0.0, 0.0, cfg.width, cfg.height);
    draw_grid(ctx, cfg);
    for o in &cfg.obstacles {
        draw_obstacle(ctx, o);
    }
    draw_node(ctx, &cfg.start, &START_STYLE);
    draw_node(ctx, &cfg.end, &END_STYLE);
    if gs.path.len() > 1 {
        draw_path(ctx, &gs.path, stroke_color(gs.phase));
    }
}

fn draw_grid(ctx: &CanvasRenderingContext2d, cfg: &BoardConfig) {
    if cfg.grid_spacing <= 0.0 {
        return;
    }
    ctx.set_stroke_style_str(GRID);
    ctx.set_line_width(0.5);
    ctx.begin_path();
    let mut x = 0.0;
    while x <= cfg.width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, cfg.height);
        x += cfg.grid_spacing;
    }
    let mut y = 0.0;
    while y <= cfg.height {
        ctx.move_to(0.0, y);
        ctx.line_to(cfg.width, y);
        y += cfg.grid_spacing;
    }
    ctx.stroke();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, o: &Obstacle, radius: f64) {
    let r = radius.min(o.width / 2.0).min(o.height / 2.0);
    let (x0, y0, x1, y1) = (o.x, o.y, o.x + o.width, o.y + o.height);
    ctx.begin_path();
    ctx.move_to(x0 + r, y0);
    ctx.arc_to(x1, y0, x1, y1, r).ok();
    ctx.arc_to(x1, y1, x0, y1, r).ok();
    ctx.arc_to(x0, y1, x0, y0, r).ok();
    ctx.arc_to(x0, y0, x1, y0, r).ok();
    ctx.close_path();
}

fn draw_obstacle(ctx: &CanvasRenderingContext2d, o: &Obstacle) {
    rounded_rect(ctx, o, CORNER_RADIUS);
    ctx.set_global_alpha(0.9);
    ctx.set_fill_style_str(OBSTACLE_FILL);
    ctx.fill();
    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(OBSTACLE_STROKE);
    ctx.set_line_width(2.0);
    ctx.stroke();
}

fn draw_node(ctx: &CanvasRenderingContext2d, n: &Node, style: &NodeStyle) {
    ctx.begin_path();
    ctx.arc(n.x, n.y, n.r, 0.0, TAU).ok();
    ctx.set_fill_style_str(style.fill);
    ctx.fill();
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(3.0);
    ctx.stroke();

    ctx.set_fill_style_str(style.text);
    ctx.set_font("20px system-ui, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(style.label, n.x, n.y).ok();
}

fn draw_path(ctx: &CanvasRenderingContext2d, path: &[Point], color: &str) {
    let Some((first, rest)) = path.split_first() else { return };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(4.0);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.stroke();
}
