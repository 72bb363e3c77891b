//! Classify command - run the pipeline and print the summary table.

use colored::Colorize;
use soilclass::{SoilClass, SoilClassifier};

use crate::cli::SampleArgs;

pub fn run(input: SampleArgs, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sample = super::load_sample(input)?;
    let summary = SoilClassifier::new().classify(&sample)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let rows = summary.table_rows();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    println!("{}", "--- Soil Classification Summary ---".cyan().bold());
    for (label, value) in &rows {
        println!("{:width$}  {}", label, value, width = width);
    }
    println!("{}", "-----------------------------------".cyan().bold());

    if verbose {
        println!();
        println!("{}", "Gradation:".yellow().bold());
        for point in summary.curve.points() {
            println!("  {:>7} mm  {:>6.2}% passing", point.sieve_size_mm, point.passing_percent);
        }
    }

    println!();
    println!("{} {}", "Soil classified as:".green().bold(), colorize_class(summary.classification));

    Ok(())
}

fn colorize_class(class: SoilClass) -> colored::ColoredString {
    if class.is_fine_grained() {
        class.label().magenta().bold()
    } else {
        class.label().white().bold()
    }
}
