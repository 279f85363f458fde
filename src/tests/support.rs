//! 测试辅助：内存中的资源定位器与产物存储、临时工程目录

use crate::compiler::{Artifact, ArtifactHandle, ArtifactStore, CompileReport, ExmlCompiler};
use crate::config::{CompilerOptions, ResourceTable, SkinTable};
use crate::error::{ImportError, Result};
use crate::geometry::{Rect, Size};
use crate::parser::{ExmlNode, ExmlParser};
use crate::resource::{FontMetrics, ResourceHandle, ResourceLocator};
use crate::scene::CompiledNode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EUI: &str = r#"xmlns:e="http://ns.egret.com/eui""#;

/// 内存资源定位器
#[derive(Default)]
pub struct MemoryLocator {
    textures: HashMap<String, Size>,
    frames: HashMap<(String, String), Size>,
    fonts: HashMap<String, FontMetrics>,
    pub borders: Vec<(ResourceHandle, Rect)>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, path: &str, width: f32, height: f32) -> Self {
        self.textures.insert(path.to_string(), Size::new(width, height));
        self
    }

    pub fn with_frame(mut self, sheet: &str, frame: &str, width: f32, height: f32) -> Self {
        self.frames
            .insert((sheet.to_string(), frame.to_string()), Size::new(width, height));
        self
    }

    pub fn with_font(mut self, path: &str, font_size: f32, line_height: f32) -> Self {
        self.fonts.insert(path.to_string(), FontMetrics { font_size, line_height });
        self
    }
}

impl ResourceLocator for MemoryLocator {
    fn resolve(&mut self, path: &str, sub_frame: Option<&str>) -> Option<ResourceHandle> {
        match sub_frame {
            Some(frame) => self
                .frames
                .contains_key(&(path.to_string(), frame.to_string()))
                .then(|| ResourceHandle::with_frame(path, frame)),
            None => (self.textures.contains_key(path) || self.fonts.contains_key(path))
                .then(|| ResourceHandle::new(path)),
        }
    }

    fn texture_size(&mut self, handle: &ResourceHandle) -> Option<Size> {
        match &handle.frame {
            Some(frame) => self.frames.get(&(handle.path.clone(), frame.clone())).copied(),
            None => self.textures.get(&handle.path).copied(),
        }
    }

    fn set_border(&mut self, handle: &ResourceHandle, grid: Rect) -> Result<()> {
        self.borders.push((handle.clone(), grid));
        Ok(())
    }

    fn load_bitmap_font(&mut self, handle: &ResourceHandle) -> Result<FontMetrics> {
        self.fonts.get(&handle.path).copied().ok_or_else(|| {
            ImportError::io(
                &handle.path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, "not a bitmap font"),
            )
        })
    }
}

/// 内存产物存储
#[derive(Default)]
pub struct MemoryStore {
    pub artifacts: Vec<Artifact>,
    /// 为 true 时模拟存储不可用
    pub offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某个源文件被持久化的次数
    pub fn persist_count(&self, source: &Path) -> usize {
        self.artifacts.iter().filter(|a| a.source == source).count()
    }

    pub fn root_of(&self, source: &Path) -> Option<&CompiledNode> {
        self.artifacts.iter().find(|a| a.source == source).map(|a| &a.root)
    }
}

impl ArtifactStore for MemoryStore {
    fn persist(&mut self, artifact: &Artifact) -> Result<ArtifactHandle> {
        if self.offline {
            return Err(ImportError::Store("store offline".to_string()));
        }
        self.artifacts.push(artifact.clone());
        Ok(ArtifactHandle::new(artifact.url.clone()))
    }
}

/// 临时源目录
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// 写入文件并返回绝对路径
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn options(&self) -> CompilerOptions {
        CompilerOptions::new(self.root(), self.path("out"))
    }
}

/// 一次编译运行的输入
pub struct Session {
    pub options: CompilerOptions,
    pub skins: SkinTable,
    pub resources: ResourceTable,
    pub locator: MemoryLocator,
    pub store: MemoryStore,
}

impl Session {
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            options: fixture.options(),
            skins: SkinTable::new(),
            resources: ResourceTable::new(),
            locator: MemoryLocator::new(),
            store: MemoryStore::new(),
        }
    }

    pub fn run(&mut self, files: &[PathBuf]) -> Result<CompileReport> {
        ExmlCompiler::new(
            self.options.clone(),
            &self.skins,
            &self.resources,
            &mut self.locator,
            &mut self.store,
        )
        .run(files)
    }

    /// 编译单个文件并返回其根节点
    pub fn compile_root(&mut self, file: &Path) -> CompiledNode {
        self.run(&[file.to_path_buf()]).unwrap();
        self.store.root_of(file).cloned().unwrap()
    }
}

pub fn parse(exml: &str) -> ExmlNode {
    ExmlParser::new(exml).parse().unwrap()
}

/// 按名字路径取子孙节点
pub fn child<'a>(node: &'a CompiledNode, path: &str) -> &'a CompiledNode {
    path.split('/').fold(node, |n, name| {
        n.children
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no child '{}' under '{}'", name, n.name))
    })
}
