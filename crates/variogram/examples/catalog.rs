//! Prints the built-in variogram catalog and seeds each model from a small
//! experimental variogram.
//!
//! Run with `RUST_LOG=debug` to see the registry being assembled.

use krige_variogram::{VariogramConfig, VariogramError, VariogramRegistry};
use ndarray::Array1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = VariogramRegistry::builtin();

    let lags = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0];
    let semivariance = [0.21, 0.38, 0.52, 0.61, 0.66, 0.68];
    let distances = Array1::linspace(0.0, 30.0, 7);

    for model in registry.iter() {
        let names: Vec<_> = model.parameter_names().collect();
        println!("{} ({})", model.name(), names.join(", "));

        if let Some(bounds) = model.bounds(&lags, &semivariance) {
            println!("  lower: {:?}", bounds.lower);
            println!("  upper: {:?}", bounds.upper);
        }

        let Some(guess) = model.initial_guess(&lags, &semivariance) else {
            continue;
        };
        println!("  guess: {guess:?}");

        let config = VariogramConfig::new(model.name(), guess);
        let fitted = registry.resolve(&config)?;
        println!("  gamma: {:.3}", fitted.semivariance_array(&distances));
        println!("  config: {}", serde_json::to_string(&config)?);
    }

    match registry.lookup("matern") {
        Err(VariogramError::ModelNotFound { name }) => println!("no model named `{name}`"),
        other => println!("unexpected lookup result: {other:?}"),
    }

    Ok(())
}
