use log::{error, info};
use macroquad::prelude::*;
use cube_life::{
    OrbitCamera, Simulation, SimulationConfig,
    rendering::{self, AnimationTiming, CellAnimator},
    input::{self, Pointer},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cube Life".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Load the JSON config named on the command line, or the defaults
fn load_config() -> SimulationConfig {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => SimulationConfig::default(),
        Some("--example") => {
            match serde_json::to_string_pretty(&SimulationConfig::default()) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Error serializing config: {}", e),
            }
            std::process::exit(0);
        }
        Some(path) => SimulationConfig::from_json_file(path).unwrap_or_else(|e| {
            error!("{}: {}", path, e);
            eprintln!("Usage: {} [config.json | --example]", args[0]);
            std::process::exit(1);
        }),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    let resolution = config.resolve_resolution(screen_width());

    let mut sim = Simulation::new(&config, resolution).unwrap_or_else(|e| {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    // Initial population is shown at rest
    sim.registry.drain_events().for_each(drop);

    let mut animator = CellAnimator::from_registry(
        &sim.registry,
        AnimationTiming::from_step_interval(config.step_interval_secs),
    );
    let mut camera = OrbitCamera::for_resolution(resolution);
    let mut pointer = Pointer::new();

    info!("Stepping every {:.2}s", config.step_interval_secs);

    loop {
        let dt = get_frame_time();

        pointer.update();
        input::handle_pointer(&mut sim, &camera, &pointer);
        sim = input::process_keyboard_input(sim);

        // Update game state
        sim = sim.tick(dt);

        for event in sim.registry.drain_events() {
            animator.handle(event);
        }
        animator.update(dt);
        camera.spin(config.camera_spin);

        clear_background(BLACK);
        rendering::draw_cells(&sim.registry, &animator, &camera, config.cell_size);
        rendering::draw_hud(&sim, &animator);

        next_frame().await;
    }
}
