//! Transform error type.

use themed_style_sfc::ParseError;

/// Error returned by the transform entry points.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The source could not be split into SFC blocks.
    #[error("failed to parse SFC: {0}")]
    Parse(#[from] ParseError),

    /// The host-supplied configuration had a malformed option value.
    #[error("invalid transform configuration: {0}")]
    Config(#[from] serde_json::Error),
}
