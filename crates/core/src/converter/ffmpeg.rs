//! FFmpeg-based converter implementation.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::config::ConverterConfig;
use super::error::ConverterError;
use super::staging::StagingFile;
use super::traits::Converter;
use super::types::{
    validate_bitrate, ConversionRequest, ConversionResult, OUTPUT_SAMPLE_RATE_HZ,
};

/// FFmpeg-based converter implementation.
///
/// The ffmpeg binary is resolved once, in [`FfmpegConverter::new`]. A value of
/// this type therefore always points at an executable that existed at
/// startup.
#[derive(Debug, Clone)]
pub struct FfmpegConverter {
    config: ConverterConfig,
    ffmpeg: PathBuf,
}

impl FfmpegConverter {
    /// Creates a new FFmpeg converter, failing if ffmpeg cannot be found.
    pub fn new(config: ConverterConfig) -> Result<Self, ConverterError> {
        let ffmpeg =
            which::which(&config.ffmpeg_path).map_err(|_| ConverterError::ToolUnavailable {
                path: config.ffmpeg_path.clone(),
            })?;
        debug!(ffmpeg = %ffmpeg.display(), "Located ffmpeg");
        Ok(Self { config, ffmpeg })
    }

    /// Resolved path of the ffmpeg binary.
    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg
    }

    /// Builds ffmpeg arguments for an M4A to MP3 conversion.
    ///
    /// Paths are passed through as `OsStr`, so names that are not valid
    /// UTF-8 reach ffmpeg unchanged.
    fn build_args(
        &self,
        input_path: &Path,
        staging_path: &Path,
        request: &ConversionRequest,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-hide_banner".into(),
            "-nostdin".into(),
            "-loglevel".into(),
            self.config.ffmpeg_log_level.clone().into(),
            // The staging file already exists
            "-y".into(),
            "-i".into(),
            input_path.as_os_str().to_owned(),
        ];

        // Audio only, MP3 at a fixed sample rate
        args.extend([
            "-vn".into(),
            "-acodec".into(),
            "libmp3lame".into(),
            "-b:a".into(),
            request.bitrate.clone().into(),
            "-ar".into(),
            OUTPUT_SAMPLE_RATE_HZ.to_string().into(),
        ]);

        // Keep source tags
        args.extend(["-map_metadata".into(), "0".into()]);

        let filters = request.filters();
        if !filters.is_empty() {
            let chain = filters
                .iter()
                .map(|f| f.ffmpeg_name())
                .collect::<Vec<_>>()
                .join(",");
            args.extend(["-af".into(), chain.into()]);
        }

        // Output
        args.extend(["-f".into(), "mp3".into()]);
        args.push(staging_path.as_os_str().to_owned());

        args
    }

    /// Checks everything that can be checked without touching the filesystem
    /// for writing. Returns the resolved output path.
    async fn check_preconditions(
        &self,
        request: &ConversionRequest,
    ) -> Result<PathBuf, ConverterError> {
        let is_file = tokio::fs::metadata(&request.input_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(ConverterError::InputNotFound {
                path: request.input_path.clone(),
            });
        }

        let output_path = request.resolved_output_path();
        if output_path.exists() && !request.overwrite {
            return Err(ConverterError::OutputAlreadyExists { path: output_path });
        }

        validate_bitrate(&request.bitrate)?;

        Ok(output_path)
    }

    /// Runs the conversion.
    async fn run_conversion(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConverterError> {
        let start = Instant::now();
        let output_path = self.check_preconditions(request).await?;
        let input_path = encoder_path(&request.input_path)?;

        // Ensure output directory exists
        let output_dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => encoder_path(parent)?,
            _ => encoder_path(Path::new("."))?,
        };
        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| ConverterError::OutputDirectoryFailed {
                path: output_dir.clone(),
                source,
            })?;

        let staging = StagingFile::create_in(&output_dir)?;
        let args = self.build_args(&input_path, staging.path(), request);
        debug!(ffmpeg = %self.ffmpeg.display(), ?args, "Running ffmpeg");

        // Dropping this future kills ffmpeg; `staging` then removes the partial file.
        let output = Command::new(&self.ffmpeg)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConverterError::ToolUnavailable {
                        path: self.ffmpeg.clone(),
                    }
                } else {
                    ConverterError::Io(e)
                }
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();

        if !output.status.success() {
            warn!(
                input = %request.input_path.display(),
                exit_code = ?output.status.code(),
                stderr = %stderr,
                "ffmpeg exited with an error"
            );
            staging.discard();
            return Err(ConverterError::encoding_failed(output.status.code()));
        }

        if !stderr.is_empty() {
            debug!(stderr = %stderr, "ffmpeg reported diagnostics");
        }

        let output_size_bytes = tokio::fs::metadata(staging.path()).await?.len();
        staging.commit(&output_path)?;

        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            input = %request.input_path.display(),
            output = %output_path.display(),
            output_size_bytes,
            duration_ms,
            "Conversion complete"
        );

        Ok(ConversionResult {
            output_path,
            output_size_bytes,
            duration_ms,
        })
    }
}

/// Makes `path` absolute for the encoder command line.
///
/// ffmpeg reads an argument starting with `-` as an option and a leading
/// `name:` as a protocol. An absolute path is neither.
fn encoder_path(path: &Path) -> Result<PathBuf, ConverterError> {
    Ok(std::path::absolute(path)?)
}

#[async_trait]
impl Converter for FfmpegConverter {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConverterError> {
        self.run_conversion(&request).await
    }
}
