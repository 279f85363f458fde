//! 一次运行内的皮肤缓存

use super::artifact::ArtifactHandle;
use crate::scene::CompiledNode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 已编译文件的结果，用于皮肤实例化
#[derive(Debug, Clone)]
pub struct CachedSkin {
    pub handle: ArtifactHandle,
    pub root: CompiledNode,
}

/// 源文件路径 -> 编译结果；解析失败的文件记为 None，不再重试
#[derive(Debug, Default)]
pub struct SkinCache {
    entries: HashMap<PathBuf, Option<CachedSkin>>,
}

impl SkinCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 外层 None 表示未编译过，内层 None 表示编译失败
    pub fn get(&self, path: &Path) -> Option<Option<&CachedSkin>> {
        self.entries.get(path).map(Option::as_ref)
    }

    pub fn insert(&mut self, path: PathBuf, handle: ArtifactHandle, root: CompiledNode) {
        self.entries.insert(path, Some(CachedSkin { handle, root }));
    }

    pub fn mark_failed(&mut self, path: PathBuf) {
        self.entries.insert(path, None);
    }
}
