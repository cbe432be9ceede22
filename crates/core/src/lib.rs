pub mod config;
pub mod converter;
pub mod predictor;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, ConversionDefaults, ServerConfig,
};
pub use converter::{
    ConversionRequest, ConversionResult, Converter, ConverterConfig, ConverterError,
    FfmpegConverter,
};
pub use predictor::{PredictionInput, Predictor};
