//! Life World demo runner
//!
//! Builds a world from an optional JSON config (first argument) and prints
//! each generation.

use simulation::SimulationConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            SimulationConfig::from_json_file(&path)?
        }
        None => SimulationConfig::default(),
    };

    let mut world = config.build_world()?;
    info!(
        "World '{}' ready: {}x{} {}, rules {}, population {}",
        world.name(),
        world.size(),
        world.size(),
        world.topology(),
        world.rules(),
        world.population()
    );

    println!("Generation {}\n{}", world.generation(), world.render());

    let start = std::time::Instant::now();
    for _ in 0..config.generations {
        let report = world.step();
        println!("Generation {}\n{}", report.generation, world.render());

        if world.is_extinct() {
            info!("World went extinct at generation {}", report.generation);
            break;
        }
    }

    info!(
        "Run complete: {:?} total, {} generations, {} final population",
        start.elapsed(),
        world.generation(),
        world.population()
    );

    Ok(())
}
