//! Configuration types for labinsight.
//!
//! The configuration lives in a JSON file named [`CONFIG_FILE_NAME`] at the
//! project root. It is loaded once per run and passed by reference to every
//! component that needs it.

use crate::types::{IdentifierKind, NamingConvention};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-relative name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".labinsight";

/// Top-level analysis configuration.
///
/// Fields written by other tools into the same file (project name, engine,
/// dev-server port, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Convention assigned to each identifier kind.
    #[serde(default)]
    pub casing: CasingConfig,

    /// Feature toggles.
    #[serde(default)]
    pub options: OptionsConfig,

    /// Directory names pruned at any depth.
    #[serde(default = "default_ignored_directories")]
    pub ignored_directories: Vec<String>,

    /// File names skipped at any depth.
    #[serde(default)]
    pub ignored_files: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            casing: CasingConfig::default(),
            options: OptionsConfig::default(),
            ignored_directories: default_ignored_directories(),
            ignored_files: Vec::new(),
        }
    }
}

fn default_ignored_directories() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

impl AnalysisConfig {
    /// Loads configuration from the project root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when there is no configuration file,
    /// or another variant if it cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&root.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or names an unknown convention.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the convention configured for `kind`, if any.
    #[must_use]
    pub fn convention_for(&self, kind: IdentifierKind) -> Option<NamingConvention> {
        self.casing.get(kind)
    }

    /// Kinds that have a convention assigned, in kind order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = (IdentifierKind, NamingConvention)> + '_ {
        IdentifierKind::ALL
            .into_iter()
            .filter_map(|kind| self.convention_for(kind).map(|c| (kind, c)))
    }

    /// Checks if a directory name is on the ignore-list.
    #[must_use]
    pub fn is_ignored_directory(&self, name: &str) -> bool {
        self.ignored_directories.iter().any(|d| d == name)
    }

    /// Checks if a file name is on the ignore-list.
    #[must_use]
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignored_files.iter().any(|f| f == name)
    }
}

/// Per-kind convention assignment. An absent key leaves the kind unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasingConfig {
    /// Convention for variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_casing: Option<NamingConvention>,
    /// Convention for functions and methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_casing: Option<NamingConvention>,
    /// Convention for classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_casing: Option<NamingConvention>,
    /// Convention for properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_casing: Option<NamingConvention>,
    /// Convention for parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_casing: Option<NamingConvention>,
    /// Convention for type aliases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_casing: Option<NamingConvention>,
    /// Convention for interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_casing: Option<NamingConvention>,
    /// Convention for enums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_casing: Option<NamingConvention>,
}

impl CasingConfig {
    /// Returns the convention for `kind`.
    #[must_use]
    pub fn get(&self, kind: IdentifierKind) -> Option<NamingConvention> {
        match kind {
            IdentifierKind::Variable => self.variable_casing,
            IdentifierKind::Function => self.method_casing,
            IdentifierKind::Class => self.class_casing,
            IdentifierKind::Property => self.property_casing,
            IdentifierKind::Parameter => self.parameter_casing,
            IdentifierKind::Type => self.type_casing,
            IdentifierKind::Interface => self.interface_casing,
            IdentifierKind::Enum => self.enum_casing,
        }
    }

    /// Sets the convention for `kind`.
    pub fn set(&mut self, kind: IdentifierKind, convention: Option<NamingConvention>) {
        let slot = match kind {
            IdentifierKind::Variable => &mut self.variable_casing,
            IdentifierKind::Function => &mut self.method_casing,
            IdentifierKind::Class => &mut self.class_casing,
            IdentifierKind::Property => &mut self.property_casing,
            IdentifierKind::Parameter => &mut self.parameter_casing,
            IdentifierKind::Type => &mut self.type_casing,
            IdentifierKind::Interface => &mut self.interface_casing,
            IdentifierKind::Enum => &mut self.enum_casing,
        };
        *slot = convention;
    }
}

/// Boolean feature toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfig {
    /// Only surface per-file tallies that contain violations.
    #[serde(default)]
    pub silent: bool,

    /// Report every use of the `any` type.
    #[serde(default)]
    pub no_any: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file at the expected path.
    #[error("No configuration found at {path}; create one before running the analysis")]
    Missing {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
