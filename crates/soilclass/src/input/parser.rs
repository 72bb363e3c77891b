//! Sample file loading (JSON, CSV, TSV).
//!
//! Delimited files hold one `key,value` pair per row. A numeric key is a
//! sieve size in millimetres with its retained percentage; the named keys
//! `liquid_limit`, `plastic_limit`, `moisture_content` and `sample_id` set
//! the scalar fields. The first row may be a header such as `key,value` or
//! `sieve_mm,retained_percent`; any other unknown key is an error, as is a
//! scalar key given twice.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::sample::SampleInput;
use super::source::SourceMetadata;
use crate::error::{Result, SoilError};
use crate::gradation::SieveReading;

/// Sample file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Json,
    Csv,
    Tsv,
}

impl SampleFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(SampleFormat::Json),
            "csv" | "txt" => Ok(SampleFormat::Csv),
            "tsv" | "tab" => Ok(SampleFormat::Tsv),
            other => Err(SoilError::UnsupportedFormat(format!(
                "'{}' (expected .json, .csv or .tsv)",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::Json => "json",
            SampleFormat::Csv => "csv",
            SampleFormat::Tsv => "tsv",
        }
    }
}

/// Parses sample files into [`SampleInput`].
#[derive(Debug, Default)]
pub struct SampleParser;

impl SampleParser {
    pub fn new() -> Self {
        Self
    }

    /// Load a sample file and return the readings and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(SampleInput, SourceMetadata)> {
        let path = path.as_ref();
        let format = SampleFormat::from_path(path)?;

        let mut file = File::open(path).map_err(|e| SoilError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| SoilError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let sample = self.parse_bytes(&contents, format)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format.name().to_string(),
            sample.readings.len(),
        );

        tracing::debug!(
            file = %metadata.file,
            format = %metadata.format,
            readings = metadata.reading_count,
            "Loaded sample file"
        );

        Ok((sample, metadata))
    }

    /// Parse in-memory sample data.
    pub fn parse_bytes(&self, bytes: &[u8], format: SampleFormat) -> Result<SampleInput> {
        match format {
            SampleFormat::Json => Ok(serde_json::from_slice(bytes)?),
            SampleFormat::Csv => parse_delimited(bytes, b','),
            SampleFormat::Tsv => parse_delimited(bytes, b'\t'),
        }
    }
}

fn parse_delimited(bytes: &[u8], delimiter: u8) -> Result<SampleInput> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut readings = Vec::new();
    let mut sample_id = None;
    let mut liquid_limit = None;
    let mut plastic_limit = None;
    let mut moisture_content = None;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row + 1);

        let key = record.get(0).unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        let value = record.get(1).ok_or_else(|| SoilError::Parse {
            line,
            message: format!("expected two fields, found '{}'", key),
        })?;

        if let Ok(sieve_size_mm) = key.parse::<f64>() {
            readings.push(SieveReading::new(sieve_size_mm, parse_number(value, line)?));
            continue;
        }

        match key.to_lowercase().as_str() {
            "liquid_limit" | "ll" => set_once(&mut liquid_limit, parse_number(value, line)?, key, line)?,
            "plastic_limit" | "pl" => set_once(&mut plastic_limit, parse_number(value, line)?, key, line)?,
            "moisture_content" | "moisture" => {
                set_once(&mut moisture_content, parse_number(value, line)?, key, line)?
            }
            "sample_id" | "sample" => set_once(&mut sample_id, value.to_string(), key, line)?,
            header if row == 0 && is_header_row(header, value) => continue,
            _ => {
                return Err(SoilError::Parse {
                    line,
                    message: format!("unknown key '{}'", key),
                });
            }
        }
    }

    if readings.is_empty() {
        return Err(SoilError::MissingField("sieve readings".to_string()));
    }

    Ok(SampleInput {
        sample_id,
        readings,
        liquid_limit: liquid_limit.ok_or_else(|| SoilError::MissingField("liquid_limit".to_string()))?,
        plastic_limit: plastic_limit.ok_or_else(|| SoilError::MissingField("plastic_limit".to_string()))?,
        moisture_content,
    })
}

/// Header labels accepted in the first row, paired with a non-numeric value column.
const HEADER_KEYS: &[&str] = &["key", "field", "name", "sieve", "sieve_mm", "sieve_size_mm"];

fn is_header_row(key: &str, value: &str) -> bool {
    HEADER_KEYS.contains(&key) && value.parse::<f64>().is_err()
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &str, line: usize) -> Result<()> {
    if slot.is_some() {
        return Err(SoilError::Parse {
            line,
            message: format!("duplicate key '{}'", key),
        });
    }
    *slot = Some(value);
    Ok(())
}

fn parse_number(value: &str, line: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|_| SoilError::Parse {
        line,
        message: format!("'{}' is not a number", value),
    })
}
