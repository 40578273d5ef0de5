//! In-memory source reader for content that is already decoded

use super::SourceReader;
use super::cell::Workbook;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves text and workbooks registered under paths
#[derive(Debug, Clone, Default)]
pub struct MemorySourceReader {
    texts: HashMap<PathBuf, String>,
    workbooks: HashMap<PathBuf, Workbook>,
}

impl MemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.texts.insert(path.into(), text.into());
        self
    }

    pub fn with_workbook(mut self, path: impl Into<PathBuf>, workbook: Workbook) -> Self {
        self.workbooks.insert(path.into(), workbook);
        self
    }

    fn not_found(path: &Path) -> Error {
        Error::io(
            format!("Failed to read {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no in-memory source"),
        )
    }
}

impl SourceReader for MemorySourceReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn read_workbook(&self, path: &Path) -> Result<Workbook> {
        self.workbooks
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }
}
