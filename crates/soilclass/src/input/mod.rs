//! Sample input and file loading.

mod parser;
mod sample;
mod source;

pub use parser::{SampleFormat, SampleParser};
pub use sample::SampleInput;
pub use source::SourceMetadata;
