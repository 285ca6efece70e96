//! Coastal maze demo — builds the startup content set and hands it to an
//! in-memory loader, the same wiring the engine performs at boot.
//!
//! Run with: cargo run --example coast_maze

use orbis_content::content::coast_maze;
use orbis_content::core::loader::CollectingLoader;

fn main() {
    let mut loader = CollectingLoader::new();
    coast_maze::install(&mut loader, 2026).expect("Failed to install coastal maze");

    println!(
        "Loaded {} rooms ({}x{}, prefix {})",
        loader.entities.len(),
        coast_maze::WIDTH,
        coast_maze::HEIGHT,
        coast_maze::ID_PREFIX
    );
    println!();

    for (id, def) in &loader.entities {
        let exits: Vec<&str> = def
            .room()
            .map(|rc| rc.exits.keys().map(|dir| dir.name()).collect())
            .unwrap_or_default();
        println!("{:<18} {} -> [{}]", id, def.name, exits.join(", "));
    }

    // A second install must fail: every id is already taken.
    match coast_maze::install(&mut loader, 2026) {
        Err(e) => println!("\nReinstall rejected as expected: {e}"),
        Ok(()) => println!("\nUnexpected: reinstall succeeded"),
    }
}
