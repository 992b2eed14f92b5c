//! Generates one puzzle per layer on a 9x9 board and prints it.
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```

use sudoku_generator::{Factory, FactoryConfig, PuzzleLayer};

fn main() {
    env_logger::init();

    let factory = Factory::new(9, FactoryConfig::default()).expect("factory setup should succeed");

    for layer in [
        PuzzleLayer::NakedSingle,
        PuzzleLayer::HiddenSingle,
        PuzzleLayer::Consensus,
    ] {
        let puzzle = factory
            .generate(layer, 1, 500)
            .flatten()
            .next()
            .unwrap_or_else(|| panic!("failed to generate a {layer} puzzle in 500 attempts"));
        println!("{layer}:\n{puzzle:#}");
    }
}
