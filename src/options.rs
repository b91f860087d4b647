// Indentation policy configuration.
// Bounds, step size, and the default level travel as an explicit value
// handed to each editor, so documents in the same process can run
// different policies.

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error;

/// Indentation policy for one editor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentOptions {
    /// Smallest allowed indent value
    pub min: i32,
    /// Largest allowed indent value
    pub max: i32,
    /// Amount a single indent or outdent action moves by
    pub step: i32,
    /// Indent assigned when a node carries none, and the fallback for
    /// unparseable style attributes
    pub default_level: i32,
}

impl Default for IndentOptions {
    fn default() -> Self {
        IndentOptions {
            min: 0,
            max: 210,
            step: 30,
            default_level: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read indent options: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse indent options: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid indent options: {0}")]
    Invalid(String),
}

impl IndentOptions {
    /// Check the policy for internal consistency
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.min > self.max {
            return Err(OptionsError::Invalid(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.step <= 0 {
            return Err(OptionsError::Invalid(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.default_level < self.min || self.default_level > self.max {
            return Err(OptionsError::Invalid(format!(
                "default level {} outside [{}, {}]",
                self.default_level, self.min, self.max
            )));
        }
        Ok(())
    }

    /// The indent values one step apart that a document can settle on,
    /// for UI pickers and the like
    pub fn levels(&self) -> Vec<i32> {
        let mut levels = Vec::new();
        if self.step <= 0 {
            return levels;
        }
        let mut level = self.min;
        while level <= self.max {
            levels.push(level);
            level += self.step;
        }
        levels
    }
}

/// Load and validate indent options from a TOML file
pub fn load_options(path: &Path) -> Result<IndentOptions, OptionsError> {
    let contents = fs::read_to_string(path)?;
    let options: IndentOptions = toml::from_str(&contents)?;
    options.validate()?;
    Ok(options)
}

/// Load indent options, falling back to the defaults when the file is
/// missing or bad. Parse and validation problems are logged, not raised.
pub fn load_options_or_default(path: &Path) -> IndentOptions {
    match load_options(path) {
        Ok(options) => options,
        Err(err) => {
            log::warn!(
                "falling back to default indent options, {} unusable: {err}",
                path.display()
            );
            IndentOptions::default()
        }
    }
}

/// Persist indent options as pretty-printed TOML
pub fn save_options(path: &Path, options: &IndentOptions) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(options)
        .map_err(|err| io::Error::other(format!("toml serialization error: {err}")))?;

    fs::write(path, toml)
}
