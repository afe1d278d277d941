use macroquad::prelude::*;
use crate::application::{OrbitCamera, Simulation};

/// Convert a screen position to normalized device coordinates
pub fn screen_to_ndc(position: Vec2, screen: Vec2) -> Vec2 {
    vec2(
        2.0 * (position.x / screen.x) - 1.0,
        -2.0 * (position.y / screen.y) + 1.0,
    )
}

/// Tracks the last pointer position, from mouse or the first touch.
/// Starts at the screen center like an untouched cursor.
pub struct Pointer {
    ndc: Vec2,
}

impl Pointer {
    pub fn new() -> Self {
        Self { ndc: Vec2::ZERO }
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Refresh from this frame's mouse or touch input
    pub fn update(&mut self) {
        let screen = vec2(screen_width(), screen_height());
        if screen.x <= 0.0 || screen.y <= 0.0 {
            return;
        }

        let position = match touches().first() {
            Some(touch) => touch.position,
            None => Vec2::from(mouse_position()),
        };
        self.ndc = screen_to_ndc(position, screen);
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}

/// Cast the pointer into the scene and resurrect the dead cell it hits
pub fn handle_pointer(sim: &mut Simulation, camera: &OrbitCamera, pointer: &Pointer) -> Option<usize> {
    let aspect = screen_width() / screen_height();
    sim.resurrect_at(camera.ground_point(pointer.ndc(), aspect))
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::A, Simulation::cycle_algorithm),
        (KeyCode::S, Simulation::step),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_ndc_corners() {
        let screen = vec2(800.0, 600.0);
        assert_eq!(screen_to_ndc(vec2(0.0, 0.0), screen), vec2(-1.0, 1.0));
        assert_eq!(screen_to_ndc(vec2(800.0, 600.0), screen), vec2(1.0, -1.0));
        assert_eq!(screen_to_ndc(vec2(400.0, 300.0), screen), vec2(0.0, 0.0));
    }

    #[test]
    fn test_pointer_starts_centered() {
        assert_eq!(Pointer::new().ndc(), Vec2::ZERO);
    }
}
