//! Transform options and their resolution from host configuration.

use serde::Deserialize;
use serde_json::Value;

/// Resolved options for one transform invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Active theme name. `None` means no theme is active: every themed
    /// style block is blanked and no base block is replaced.
    pub theme: Option<String>,
    /// Print the transform output to the debug sink.
    pub debug: bool,
}

/// Recognized keys of the opaque host configuration. Unknown keys are
/// ignored; absent or `null` keys fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    theme: Option<String>,
    debug: Option<bool>,
}

impl ThemeOptions {
    /// Overlay a host-supplied configuration value onto the defaults.
    ///
    /// A key with a value of the wrong type is an error rather than a
    /// silent fallback.
    pub fn from_config(config: &Value) -> Result<Self, serde_json::Error> {
        let overlay = ConfigOverlay::deserialize(config)?;
        Ok(Self {
            theme: overlay.theme,
            debug: overlay.debug.unwrap_or(false),
        })
    }

    /// Options with the given active theme and debug output disabled.
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            debug: false,
        }
    }
}
