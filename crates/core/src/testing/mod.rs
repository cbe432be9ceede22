//! Testing utilities and mock implementations.
//!
//! Front ends take an `Arc<dyn Converter>`, so they can be exercised without
//! an ffmpeg binary by handing them a [`MockConverter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use m4a2mp3_core::testing::MockConverter;
//!
//! let converter = Arc::new(MockConverter::new());
//! let predictor = Predictor::new(converter.clone());
//! ```

mod mock_converter;

pub use mock_converter::{MockConverter, RecordedConversion};
