use clap::Parser;
use std::path::PathBuf;

use m4a2mp3_core::ConversionRequest;

/// Convert M4A files to MP3 using FFmpeg
#[derive(Debug, Parser)]
#[command(name = "m4a2mp3", version, about)]
pub struct Cli {
    /// Path to the source .m4a file
    pub input: PathBuf,

    /// Destination path for the .mp3 file (defaults to same name as input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target bitrate for the MP3 output, e.g. 192k or 256k [default: 192k]
    #[arg(short, long)]
    pub bitrate: Option<String>,

    /// Apply loudness normalization (EBU R128)
    #[arg(short, long)]
    pub normalize: bool,

    /// Replace output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Configuration file (TOML); M4A2MP3_* environment variables override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Builds the conversion request, filling the bitrate from `default_bitrate`
    /// when none was given.
    pub fn to_request(&self, default_bitrate: &str) -> ConversionRequest {
        let mut request = ConversionRequest::new(&self.input)
            .with_bitrate(self.bitrate.as_deref().unwrap_or(default_bitrate))
            .with_normalize(self.normalize)
            .with_overwrite(self.overwrite);
        if let Some(output) = &self.output {
            request = request.with_output(output);
        }
        request
    }
}
