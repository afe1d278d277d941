mod tween;

pub use tween::{ALIVE_SCALE, AnimationTiming, CellAnimator, DEAD_SCALE, ScaleTween, scale_for};

use macroquad::prelude::*;
use crate::application::{OrbitCamera, Simulation};
use crate::domain::{CellRegistry, grid_index::world_position};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Blend from the dim dead tone to the cell color as the cube grows
fn cube_color(scale: f32) -> Color {
    let t = ((scale - DEAD_SCALE) / (ALIVE_SCALE - DEAD_SCALE)).clamp(0.0, 1.0);
    let dead = Color::from_rgba(20, 30, 50, 255);
    let alive = Color::from_rgba(0x33, 0x55, 0x97, 255);
    Color::new(
        dead.r + (alive.r - dead.r) * t,
        dead.g + (alive.g - dead.g) * t,
        dead.b + (alive.b - dead.b) * t,
        1.0,
    )
}

/// Draw every cell as a flat cube scaled by its animation
pub fn draw_cells(registry: &CellRegistry, animator: &CellAnimator, camera: &OrbitCamera, cell_size: f32) {
    set_camera(&camera.to_camera3d());

    let resolution = registry.resolution();
    for cell in registry.all() {
        let scale = animator.scale(cell.index());
        let (x, z) = world_position(cell.index(), resolution);
        let size = vec3(cell_size, cell_size / 10.0, cell_size) * scale;
        draw_cube(vec3(x, 0.0, z), size, None, cube_color(scale));
    }

    set_default_camera();
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw run statistics in the top-left corner
pub fn draw_hud(sim: &Simulation, animator: &CellAnimator) {
    let resolution = sim.registry.resolution();
    let step_ms = sim.last_step_time_ms;

    // Color code the step time
    let perf_color = if step_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)  // Green: good
    } else if step_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)  // Yellow: okay
    } else {
        Color::from_rgba(255, 0, 0, 255)  // Red: slow
    };

    let labels = [
        (
            format!("Grid: {}x{} ({} cells)", resolution.x(), resolution.y(), format_number(sim.registry.len())),
            20.0, 12.0, GRAY,
        ),
        (
            format!("Generation: {}", sim.generation),
            38.0, 16.0, WHITE,
        ),
        (
            format!("Alive: {}", format_number(sim.registry.alive_count())),
            56.0, 16.0, Color::from_rgba(0x66, 0x88, 0xcc, 255),
        ),
        (
            format!("Step: {:.1}ms ({}) | FPS: {}", step_ms, sim.algorithm.name(), get_fps()),
            74.0, 13.0, perf_color,
        ),
        (
            format!("Animating: {}", format_number(animator.active())),
            90.0, 12.0, GRAY,
        ),
        (
            if sim.is_running { "Running".to_owned() } else { "Paused".to_owned() },
            108.0, 14.0,
            if sim.is_running { Color::from_rgba(0, 255, 0, 255) } else { Color::from_rgba(255, 165, 0, 255) },
        ),
        (
            "Space: Play/Pause  S: Step  R: Random  C: Clear  A: Algorithm".to_owned(),
            126.0, 12.0, GRAY,
        ),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, 10.0, *y, *size, *color);
    });
}
