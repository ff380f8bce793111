//! Template conversion use case
//!
//! Loads a template through the tag registry and writes it back out, either
//! as canonical JSON or as re-serialized YAML.

use crate::domain::{document, TagRegistry, TrustMode, Value};
use crate::error::Result;
use crate::infrastructure::TemplateSource;
use tracing::info;

/// Output syntax for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Options for conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Template to read
    pub source: TemplateSource,

    /// Output syntax
    pub format: OutputFormat,

    /// Loader/dumper pair to use
    pub mode: TrustMode,

    /// Single-line JSON (ignored for YAML)
    pub compact: bool,
}

/// Service for converting templates
pub struct ConvertService {
    registry: TagRegistry,
}

impl ConvertService {
    pub fn new(registry: TagRegistry) -> Self {
        ConvertService { registry }
    }

    /// Read and convert a template, returning the output text
    pub fn execute(&self, options: &ConvertOptions) -> Result<String> {
        let text = options.source.read()?;
        info!(source = %options.source.label(), mode = %options.mode, "converting template");
        self.convert_str(&text, options)
    }

    /// Convert template text already in memory
    pub fn convert_str(&self, text: &str, options: &ConvertOptions) -> Result<String> {
        let value = self.load(text, options.mode)?;
        let mut output = match options.format {
            OutputFormat::Json => document::to_json_string(&value, !options.compact)?,
            OutputFormat::Yaml => document::dump(&self.registry, options.mode, &value)?,
        };
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }

    pub fn load(&self, text: &str, mode: TrustMode) -> Result<Value> {
        document::load(&self.registry, mode, text)
    }
}
