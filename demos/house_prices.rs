extern crate pricefit;

use pricefit::datasets::Dataset;
use pricefit::helpers::test_helpers::generate_house_prices;
use pricefit::pipeline::Pipeline;
use pricefit::split::SplitParams;
use tracing_subscriber::EnvFilter;

const PARAMETERS: &str = r#"{
    "features": ["sqft", "bedrooms"],
    "test_size": 0.2,
    "random_state": 42
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // An optional CSV path replaces the synthetic table.
    let dataset: Dataset<f64> = match std::env::args().nth(1) {
        Some(path) => Dataset::from_csv_path(path)?,
        None => generate_house_prices(100, 5000., 42),
    };

    let params = SplitParams::from_json(PARAMETERS)?;
    let output = Pipeline::new(params).run(&dataset)?;

    println!(
        "coefficients: {}, intercept: {:.3}",
        output.model.coefficients(),
        output.model.intercept()
    );
    println!("{}", serde_json::to_string_pretty(&output.metrics)?);
    Ok(())
}
