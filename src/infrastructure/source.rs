//! Reading templates from files, directories or stdin

use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where a template is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Stdin,
    File(PathBuf),
}

impl TemplateSource {
    /// `None` and `-` mean stdin
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => TemplateSource::File(p.to_path_buf()),
            _ => TemplateSource::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            TemplateSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            TemplateSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }

    /// Label used in reports
    pub fn label(&self) -> String {
        match self {
            TemplateSource::Stdin => "<stdin>".to_string(),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }
}

/// Expand a path into template sources.
///
/// Directories are walked recursively for `.yaml`, `.yml` and `.template`
/// files, sorted by path. Anything else is taken as-is.
pub fn collect_sources(path: Option<&Path>) -> Result<Vec<TemplateSource>> {
    let source = TemplateSource::from_arg(path);
    let dir = match &source {
        TemplateSource::File(p) if p.is_dir() => p.clone(),
        _ => return Ok(vec![source]),
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop while walking templates"))
        })?;
        if entry.file_type().is_file() && is_template(entry.path()) {
            files.push(TemplateSource::File(entry.into_path()));
        }
    }
    Ok(files)
}

fn is_template(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml" | "template")
    )
}
