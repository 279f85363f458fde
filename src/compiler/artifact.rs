//! 编译产物及其持久化

use crate::error::{ImportError, Result};
use crate::scene::CompiledNode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 产物在目标资源库中的稳定标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactHandle {
    pub url: String,
}

impl ArtifactHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 一个 EXML 文件的编译结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub url: String,
    pub root: CompiledNode,
}

/// 产物存储，失败会终止整个运行
pub trait ArtifactStore {
    fn persist(&mut self, artifact: &Artifact) -> Result<ArtifactHandle>;
}

/// 以 JSON 写入 `output_path` 的存储
#[derive(Debug, Default)]
pub struct FsArtifactStore;

impl FsArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|e| ImportError::io(dir, e))
            }
            _ => Ok(()),
        }
    }
}

impl ArtifactStore for FsArtifactStore {
    fn persist(&mut self, artifact: &Artifact) -> Result<ArtifactHandle> {
        let path = &artifact.output_path;
        Self::ensure_dir(path)?;
        let text = serde_json::to_string_pretty(artifact).map_err(|e| ImportError::json(path, e))?;
        std::fs::write(path, text).map_err(|e| ImportError::io(path, e))?;
        Ok(ArtifactHandle::new(artifact.url.clone()))
    }
}
