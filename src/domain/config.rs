// ============================================================================
// Driver Configuration
// Settings for the line-oriented addition driver
// ============================================================================

use crate::numeric::validate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number added to every accepted input line unless configured otherwise.
pub const DEFAULT_ADDEND: &str = "-123.456";

// ============================================================================
// Echo Mode
// ============================================================================

/// How an accepted line is echoed on the left of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EchoMode {
    /// The line as read (after trimming)
    #[default]
    Raw,
    /// The canonical form of the line, e.g. `007.50` echoes as `7.5`
    Canonical,
}

// ============================================================================
// Complete Driver Configuration
// ============================================================================

/// Configuration for [`LineProcessor`](crate::driver::LineProcessor)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Numeral added to each accepted line
    pub addend: String,

    /// Strip surrounding whitespace before validating
    pub trim_whitespace: bool,

    /// Skip lines that are empty (after trimming, if enabled)
    pub skip_blank_lines: bool,

    /// Left-hand side of the report line
    pub echo_mode: EchoMode,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            addend: DEFAULT_ADDEND.to_string(),
            trim_whitespace: true,
            skip_blank_lines: true,
            echo_mode: EchoMode::Raw,
        }
    }
}

impl DriverConfig {
    /// Create a configuration with the default addend
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the addend
    pub fn with_addend(mut self, addend: impl Into<String>) -> Self {
        self.addend = addend.into();
        self
    }

    /// Builder method: Enable or disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Builder method: Enable or disable blank line skipping
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Builder method: Set the echo mode
    pub fn with_echo_mode(mut self, mode: EchoMode) -> Self {
        self.echo_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        validate(&self.addend).map_err(|e| format!("Addend '{}' rejected: {}", self.addend, e))
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}
