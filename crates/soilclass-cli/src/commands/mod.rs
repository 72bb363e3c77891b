//! CLI command implementations.

pub mod classify;
pub mod curve;

use soilclass::{SampleInput, SampleParser};

use crate::cli::SampleArgs;

/// Build a sample from a file or from inline flags. Flags override file values.
pub fn load_sample(args: SampleArgs) -> Result<SampleInput, Box<dyn std::error::Error>> {
    let mut sample = match args.file {
        Some(ref file) => {
            let (sample, source) = SampleParser::new().parse_file(file)?;
            tracing::info!(file = %source.file, format = %source.format, hash = %source.hash, "Loaded sample");
            sample
        }
        None => {
            if args.retained.is_empty() {
                return Err("Provide a sample FILE or --retained with --ll and --pl".into());
            }
            let (Some(ll), Some(pl)) = (args.liquid_limit, args.plastic_limit) else {
                return Err("--retained requires both --ll and --pl".into());
            };
            SampleInput::from_retained(&args.retained, ll, pl)?
        }
    };

    if let Some(ll) = args.liquid_limit {
        sample.liquid_limit = ll;
    }
    if let Some(pl) = args.plastic_limit {
        sample.plastic_limit = pl;
    }
    if let Some(moisture) = args.moisture {
        sample.moisture_content = Some(moisture);
    }
    if let Some(id) = args.sample_id {
        sample.sample_id = Some(id);
    }

    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file_args(file: &str) -> SampleArgs {
        SampleArgs {
            file: Some(PathBuf::from(file)),
            retained: Vec::new(),
            liquid_limit: None,
            plastic_limit: None,
            moisture: None,
            sample_id: None,
        }
    }

    #[test]
    fn test_missing_file_reports_library_io_error() {
        let err = load_sample(file_args("/nonexistent/sample.csv")).unwrap_err();
        let err = err
            .downcast_ref::<soilclass::SoilError>()
            .expect("expected a SoilError");
        assert!(matches!(err, soilclass::SoilError::Io { path, .. } if path == &PathBuf::from("/nonexistent/sample.csv")));
    }

    #[test]
    fn test_inline_flags_require_limits() {
        let args = SampleArgs {
            file: None,
            retained: vec![0.0; 6],
            liquid_limit: Some(30.0),
            plastic_limit: None,
            moisture: None,
            sample_id: None,
        };
        assert!(load_sample(args).is_err());
    }
}
