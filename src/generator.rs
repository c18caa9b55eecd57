use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::docs;
use crate::errors::{DemoError, DemoResult};
use crate::html;
use crate::models::ApiDocument;

/// Both generated artifacts, rendered in memory.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub json: String,
    pub html: String,
}

impl Artifacts {
    pub fn render(doc: &ApiDocument) -> DemoResult<Self> {
        Ok(Self {
            json: doc.to_pretty_json()?,
            html: html::render_documentation(doc)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone)]
pub struct DemoReport {
    pub json: WrittenFile,
    pub html: WrittenFile,
}

/// Builds the demo document and writes `openapi_demo.json` followed by
/// `api_documentation_demo.html` into the configured directory.
pub fn produce_demo(config: &GeneratorConfig) -> DemoResult<DemoReport> {
    let json_path = config.json_path();
    let html_path = config.html_path();

    if !config.overwrite {
        for path in [&json_path, &html_path] {
            if path.exists() {
                return Err(DemoError::OutputExists(path.clone()));
            }
        }
    }

    let doc = docs::build_document();
    tracing::debug!(
        output_dir = %config.output_dir().display(),
        paths = doc.paths.len(),
        operations = doc.operation_count(),
        schemas = doc.components.schemas.len(),
        "built demo document"
    );

    let artifacts = Artifacts::render(&doc)?;
    let json = write_artifact(&json_path, &artifacts.json, config.overwrite)?;
    let html = write_artifact(&html_path, &artifacts.html, config.overwrite)?;

    Ok(DemoReport { json, html })
}

fn write_artifact(path: &Path, contents: &str, overwrite: bool) -> DemoResult<WrittenFile> {
    if overwrite {
        fs::write(path, contents).map_err(|err| DemoError::io(path, err))?;
    } else {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::AlreadyExists => DemoError::OutputExists(path.to_path_buf()),
                _ => DemoError::io(path, err),
            })?;
        file.write_all(contents.as_bytes())
            .map_err(|err| DemoError::io(path, err))?;
    }

    let written = WrittenFile {
        path: path.to_path_buf(),
        bytes: contents.len(),
        sha256: sha256_hex(contents.as_bytes()),
    };
    tracing::info!(path = %written.path.display(), bytes = written.bytes, "wrote artifact");
    Ok(written)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
