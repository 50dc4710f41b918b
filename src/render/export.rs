//! PNG export through the Graphviz `dot` executable
//!
//! The DOT source and the rendered image live in a temporary directory that
//! is removed when the export returns, whether it succeeded or not. Every
//! failure is reported as [`MindMapError::Export`].

use crate::errors::{MindMapError, Result};
use crate::render::mindmap::MindMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Base name of the DOT source file inside the temporary directory
pub const EXPORT_BASENAME: &str = "mindmap";

/// File name offered for the rendered image
pub const EXPORT_FILENAME: &str = "mindmap.png";

/// Content type of the rendered image
pub const EXPORT_MIME: &str = "image/png";

/// Graphviz layout program used by default
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

/// A rendered image ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    /// Write the image bytes to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)
            .map_err(|e| MindMapError::export(format!("cannot write {}: {e}", path.display())))
    }
}

/// Renders mind maps to PNG with Graphviz
#[derive(Debug, Clone)]
pub struct PngExporter {
    program: PathBuf,
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngExporter {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_DOT_PROGRAM),
        }
    }

    /// Use a different Graphviz executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Render `map` to PNG bytes
    pub fn render(&self, map: &MindMap) -> Result<ExportedImage> {
        let dir = tempfile::Builder::new()
            .prefix(EXPORT_BASENAME)
            .tempdir()
            .map_err(|e| MindMapError::export(format!("cannot create temporary directory: {e}")))?;

        let source = dir.path().join(EXPORT_BASENAME);
        let target = dir.path().join(EXPORT_FILENAME);

        fs::write(&source, map.to_dot())
            .map_err(|e| MindMapError::export(format!("cannot write DOT source: {e}")))?;

        let output = Command::new(&self.program)
            .arg("-Tpng")
            .arg("-o")
            .arg(&target)
            .arg(&source)
            .output()
            .map_err(|e| {
                MindMapError::export(format!("cannot run {}: {e}", self.program.display()))
            })?;

        if !output.status.success() {
            return Err(MindMapError::export(format!(
                "{} failed ({}): {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let bytes = fs::read(&target)
            .map_err(|e| MindMapError::export(format!("cannot read rendered image: {e}")))?;

        tracing::debug!(bytes = bytes.len(), "rendered png");

        Ok(ExportedImage {
            file_name: EXPORT_FILENAME,
            mime: EXPORT_MIME,
            bytes,
        })
    }

    /// Render `map` and write the PNG to `path`
    pub fn export_to(&self, map: &MindMap, path: impl AsRef<Path>) -> Result<()> {
        self.render(map)?.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_missing_program_is_export_error() {
        let exporter = PngExporter::new().with_program("/nonexistent/graphviz/dot");
        let err = exporter.render(&MindMap::new("AI")).unwrap_err();

        assert!(matches!(err, MindMapError::Export(_)));
        assert!(err.to_string().starts_with("error saving mindmap: "));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_export_error() {
        let exporter = PngExporter::new().with_program("false");
        let err = exporter.render(&MindMap::new("AI")).unwrap_err();
        assert!(matches!(err, MindMapError::Export(_)));
    }

    #[test]
    #[ignore = "requires the Graphviz `dot` executable on PATH"]
    fn test_export_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILENAME);
        let exporter = PngExporter::new();

        let image = exporter.render(&MindMap::new("AI")).unwrap();
        assert_eq!(image.file_name, "mindmap.png");
        assert_eq!(image.mime, "image/png");
        assert!(image.bytes.starts_with(PNG_MAGIC));

        exporter.export_to(&MindMap::new("AI"), &path).unwrap();
        assert!(fs::read(&path).unwrap().starts_with(PNG_MAGIC));
    }
}
