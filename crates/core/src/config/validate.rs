use super::{types::Config, ConfigError};
use crate::converter::{validate_bitrate, FFMPEG_LOG_LEVELS};

/// Validate configuration
/// Currently validates:
/// - converter.ffmpeg_path is not empty
/// - converter.ffmpeg_log_level is a level ffmpeg understands
/// - defaults.bitrate is a valid bitrate
/// - server.port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.converter.ffmpeg_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "converter.ffmpeg_path cannot be empty".to_string(),
        ));
    }

    if !FFMPEG_LOG_LEVELS.contains(&config.converter.ffmpeg_log_level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "converter.ffmpeg_log_level must be one of {}, got '{}'",
            FFMPEG_LOG_LEVELS.join(", "),
            config.converter.ffmpeg_log_level
        )));
    }

    if let Err(e) = validate_bitrate(&config.defaults.bitrate) {
        return Err(ConfigError::ValidationError(format!("defaults.bitrate: {}", e)));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Ok(())
}
