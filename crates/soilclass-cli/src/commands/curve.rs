//! Curve command - print the gradation curve for plotting.

use colored::Colorize;
use soilclass::SoilClassifier;

use crate::cli::SampleArgs;

const BAR_WIDTH: usize = 40;

pub fn run(input: SampleArgs, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sample = super::load_sample(input)?;
    let summary = SoilClassifier::new().classify(&sample)?;
    let series = summary.plot_series();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!("{}", "Grain Size Distribution Curve".cyan().bold());
    println!("{:>9}  {:>7}  {:>8}", "Sieve mm", "log10", "Passing");
    for point in &series {
        let filled = ((point.passing_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH));
        println!(
            "{:>9}  {:>7.3}  {:>7.2}%  {}",
            point.sieve_size_mm,
            point.log10_size,
            point.passing_percent,
            bar.cyan()
        );
    }

    Ok(())
}
