//! Step timing benchmark comparing serial and parallel planning

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use cube_life::domain::{CellRegistry, GridError, Resolution, StepAlgorithm, step};

fn random_registry(size: usize) -> Result<CellRegistry, GridError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let resolution = Resolution::new(size, size)?;
    Ok(CellRegistry::with_random_population(resolution, 0.15, &mut rng))
}

fn benchmark(size: usize, iterations: u32, algorithm: StepAlgorithm) -> Result<f64, GridError> {
    let mut registry = random_registry(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(e) = step::advance(&mut registry, algorithm) {
            eprintln!("Step failed: {}", e);
            break;
        }
        registry.drain_events().for_each(drop);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    println!("=== Cube Life Step Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let (serial_ms, parallel_ms) = match (
            benchmark(size, iterations, StepAlgorithm::Serial),
            benchmark(size, iterations, StepAlgorithm::Parallel),
        ) {
            (Ok(serial), Ok(parallel)) => (serial, parallel),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Skipping {}x{}: {}", size, size, e);
                continue;
            }
        };

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
