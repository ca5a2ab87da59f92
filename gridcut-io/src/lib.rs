pub mod css;

use std::fs;
use std::path::{Path, PathBuf};

use gridcut_core::geometry::Line;
use gridcut_core::grid::GridDimensions;
use gridcut_engine::sketch::Sketch;
use gridcut_engine::validation::check_dimensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse line set {path:?}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize output: {0}")]
    SerializeError(#[source] serde_json::Error),
    #[error("invalid document structure: {0}")]
    InvalidDocument(String),
}

/// 磁盘上的线段集合：画布尺寸加上按绘制顺序排列的线段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub dimensions: GridDimensions,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl LineSet {
    pub fn new(dimensions: GridDimensions, lines: Vec<Line>) -> Self {
        Self { dimensions, lines }
    }

    pub fn from_sketch(sketch: &Sketch) -> Self {
        Self::new(sketch.dimensions(), sketch.lines().to_vec())
    }

    pub fn into_sketch(self) -> Sketch {
        Sketch::with_lines(self.dimensions, self.lines)
    }
}

pub trait LineSetLoader {
    fn load(&self, path: &Path) -> Result<LineSet, IoError>;
}

pub trait LineSetSaver {
    fn save(&self, line_set: &LineSet, path: &Path) -> Result<(), IoError>;
}

pub struct JsonFacade;

impl JsonFacade {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, data: &str, path: &Path) -> Result<LineSet, IoError> {
        let line_set: LineSet =
            serde_json::from_str(data).map_err(|source| IoError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        check_dimensions(&line_set.dimensions)
            .map_err(|err| IoError::InvalidDocument(err.to_string()))?;
        Ok(line_set)
    }
}

impl Default for JsonFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSetLoader for JsonFacade {
    fn load(&self, path: &Path) -> Result<LineSet, IoError> {
        let data = fs::read_to_string(path).map_err(|source| IoError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let line_set = self.parse(&data, path)?;
        debug!(path = %path.display(), lines = line_set.lines.len(), "已读取线段集合");
        Ok(line_set)
    }
}

impl LineSetSaver for JsonFacade {
    fn save(&self, line_set: &LineSet, path: &Path) -> Result<(), IoError> {
        let data = serde_json::to_string_pretty(line_set).map_err(IoError::SerializeError)?;
        fs::write(path, data).map_err(|source| IoError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
