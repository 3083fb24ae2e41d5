//! Generation run settings.

use std::path::PathBuf;

use pickle_pack::Protocol;

use crate::{CorpusError, LINE_EXTENSION};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Receives all artifacts; created when missing.
    pub out_dir: PathBuf,
    pub protocol: Protocol,
    /// Extension of the binary artifact, without the dot.
    pub extension: String,
    /// Fixture names to generate; empty means all.
    pub only: Vec<String>,
    /// Fixed capture time in epoch seconds instead of "now".
    pub timestamp: Option<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("testdata"),
            protocol: Protocol::default(),
            extension: "pickle".to_owned(),
            only: Vec::new(),
            timestamp: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The binary extension must be a plain, non-empty file suffix distinct
    /// from the line artifact's.
    pub fn validate(&self) -> Result<(), CorpusError> {
        let ext = self.extension.as_str();
        let plain = !ext.is_empty()
            && ext != LINE_EXTENSION
            && !ext.starts_with('.')
            && !ext.contains(['/', '\\']);
        if plain {
            Ok(())
        } else {
            Err(CorpusError::InvalidExtension(self.extension.clone()))
        }
    }
}
