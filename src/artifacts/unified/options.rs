use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown color mode `{0}`, expected `always` or `never`")]
    UnknownColorMode(String),
    #[error("diff header name must be a single line: {0:?}")]
    MultiLineName(String),
}

/// Checks that `name` fits on one header line.
pub fn validate_name(name: &str) -> Result<(), OptionsError> {
    if name.contains(['\n', '\r']) {
        return Err(OptionsError::MultiLineName(name.to_string()));
    }
    Ok(())
}

/// Whether unified output carries terminal color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Never,
    Always,
}

impl ColorMode {
    pub fn is_enabled(self) -> bool {
        self == ColorMode::Always
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}

impl FromStr for ColorMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(OptionsError::UnknownColorMode(other.to_string())),
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

/// Rendering options for [`write_unified`](super::writer::write_unified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedOptions {
    name_a: String,
    name_b: String,
    color: ColorMode,
}

impl Default for UnifiedOptions {
    fn default() -> Self {
        Self {
            name_a: "a".to_string(),
            name_b: "b".to_string(),
            color: ColorMode::Never,
        }
    }
}

impl UnifiedOptions {
    /// Sets the names shown in the `---` and `+++` header lines.
    ///
    /// # Panics
    ///
    /// Panics if a name contains a line break. Use [`UnifiedOptions::try_names`]
    /// for names that come from user input.
    pub fn names(self, name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        match self.try_names(name_a, name_b) {
            Ok(options) => options,
            Err(error) => panic!("{error}"),
        }
    }

    /// Sets the header names, rejecting names that contain a line break.
    pub fn try_names(
        mut self,
        name_a: impl Into<String>,
        name_b: impl Into<String>,
    ) -> Result<Self, OptionsError> {
        let (name_a, name_b) = (name_a.into(), name_b.into());
        validate_name(&name_a)?;
        validate_name(&name_b)?;
        self.name_a = name_a;
        self.name_b = name_b;
        Ok(self)
    }

    pub fn color(mut self, color: impl Into<ColorMode>) -> Self {
        self.color = color.into();
        self
    }

    pub fn name_a(&self) -> &str {
        &self.name_a
    }

    pub fn name_b(&self) -> &str {
        &self.name_b
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color
    }
}
