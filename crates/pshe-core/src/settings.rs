// Pshe Settings Module
// User defaults for the program to run, echo, quoting and platform

#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};

use crate::dispatch::DEFAULT_PROGRAM;
use crate::{Dispatcher, Layout, Platform, PlatformError};

/// Settings loaded from a TOML file (default: ~/.config/pshe/settings.toml)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Executable to launch
    program: String,

    /// Print the converted command before running it
    echo: bool,

    /// Abort instead of guessing when a quote is never closed
    strict_quotes: bool,

    /// Platform override for the layout (detected when unset)
    platform: Option<Platform>,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

impl From<PlatformError> for SettingsError {
    fn from(err: PlatformError) -> Self {
        SettingsError::InvalidValue(err.to_string())
    }
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    general: Option<GeneralSettings>,

    #[serde(default)]
    layout: Option<LayoutSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct GeneralSettings {
    #[serde(default)]
    program: Option<String>,

    #[serde(default)]
    echo: Option<bool>,

    #[serde(default)]
    strict_quotes: Option<bool>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LayoutSettings {
    #[serde(default)]
    platform: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            echo: true,
            strict_quotes: false,
            platform: None,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(general) = toml_settings.general {
            if let Some(program) = general.program {
                if program.trim().is_empty() {
                    return Err(SettingsError::InvalidValue(
                        "general.program cannot be empty".to_string(),
                    ));
                }
                settings.program = program;
            }
            if let Some(echo) = general.echo {
                settings.echo = echo;
            }
            if let Some(strict) = general.strict_quotes {
                settings.strict_quotes = strict;
            }
        }

        if let Some(platform) = toml_settings.layout.and_then(|l| l.platform) {
            settings.platform = Some(Platform::from_name(&platform)?);
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pshe").join("settings.toml"))
    }

    /// Load from default location (~/.config/pshe/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                log::debug!("loading settings from {}", path.display());
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn strict_quotes(&self) -> bool {
        self.strict_quotes
    }

    /// Platform override, if one was configured
    pub fn platform_override(&self) -> Option<Platform> {
        self.platform
    }

    /// Configured platform, or the running one
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn set_program(&mut self, program: impl Into<String>) {
        self.program = program.into();
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn set_strict_quotes(&mut self, strict: bool) {
        self.strict_quotes = strict;
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = Some(platform);
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    /// Dispatcher configured from these settings
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(Layout::for_platform(self.platform()))
            .with_program(self.program.clone())
            .with_echo(self.echo)
            .with_strict_quotes(self.strict_quotes)
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Pshe Settings
# Place this file at: ~/.config/pshe/settings.toml

[general]
# Program to run with the converted arguments
program = "git"

# Print "> $ git ..." before running
echo = true

# Refuse to run when a quote is never closed
strict_quotes = false

[layout]
# Optional platform override (auto-detected if not set)
# Valid values: "aix", "darwin", "freebsd", "linux", "openbsd", "sunos", "win32"
# platform = "darwin"
"#
}
