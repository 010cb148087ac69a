use std::process::ExitCode;
use std::str::FromStr;

use escher::{generate, Family, GenerationConfig, GenerationFailure};
use log::error;

fn main() -> ExitCode {
    env_logger::init();

    // every argument names a constraint family to enable, e.g. `generator layerHasAir blockHasNeighbor`
    let mut config = GenerationConfig {
        dims: (5, 5, 3),
        density: 0.2,
        seed: 42,
        ..Default::default()
    };
    for name in std::env::args().skip(1) {
        match Family::from_str(&name) {
            Ok(family) => { config.enabled.insert(family); }
            Err(_) => {
                error!("unknown constraint family {name}");
                return ExitCode::from(2);
            }
        }
    }

    match generate(&config) {
        Ok(level) => {
            print!("{}", level);
            ExitCode::SUCCESS
        }
        Err(failure @ GenerationFailure::BudgetExceeded { .. }) => {
            error!("{failure}; try a larger budget or another seed");
            ExitCode::FAILURE
        }
        Err(failure) => {
            error!("{failure}");
            ExitCode::FAILURE
        }
    }
}
