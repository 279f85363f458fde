//! EXML 编译器
//!
//! 递归地把元素树、跨文件皮肤引用和组件语义组合成场景节点树。
//! 一次运行内顺序执行：编译 A 时遇到皮肤 B，会先同步编译 B 再实例化。

mod artifact;
mod cache;
mod report;

pub use artifact::{Artifact, ArtifactHandle, ArtifactStore, FsArtifactStore};
pub use cache::{CachedSkin, SkinCache};
pub use report::{CompileReport, Diagnostic, DiagnosticKind, SkippedFile};

use crate::config::{normalize_path, CompilerOptions, ResourceTable, SkinTable};
use crate::error::{ImportError, Result};
use crate::geometry::Size;
use crate::importer::{ImportContext, WidgetRegistry};
use crate::layout::LayoutEngine;
use crate::parser::{attrs, skin_key_of, widget_name, ExmlNode, ExmlParser};
use crate::resource::ResourceLocator;
use crate::scene::CompiledNode;
use std::path::{Path, PathBuf};

/// 产物文件扩展名
pub const ARTIFACT_EXTENSION: &str = "prefab";

/// 单次编译运行，所有状态归该对象所有
pub struct ExmlCompiler<'a> {
    options: CompilerOptions,
    skins: &'a SkinTable,
    resources: &'a ResourceTable,
    locator: &'a mut dyn ResourceLocator,
    store: &'a mut dyn ArtifactStore,
    registry: WidgetRegistry,
    layout: LayoutEngine,
    cache: SkinCache,
    /// 正在编译的文件栈，用于发现皮肤循环引用
    in_progress: Vec<PathBuf>,
    report: CompileReport,
}

impl<'a> ExmlCompiler<'a> {
    pub fn new(
        options: CompilerOptions,
        skins: &'a SkinTable,
        resources: &'a ResourceTable,
        locator: &'a mut dyn ResourceLocator,
        store: &'a mut dyn ArtifactStore,
    ) -> Self {
        let layout = LayoutEngine::new(options.y_axis);
        Self {
            options,
            skins,
            resources,
            locator,
            store,
            registry: WidgetRegistry::with_defaults(),
            layout,
            cache: SkinCache::new(),
            in_progress: Vec::new(),
            report: CompileReport::default(),
        }
    }

    /// 替换组件注册表
    pub fn with_registry(mut self, registry: WidgetRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn report(&self) -> &CompileReport {
        &self.report
    }

    pub fn into_report(self) -> CompileReport {
        self.report
    }

    /// 依次编译所有文件；单个文件解析失败不影响其它文件，存储失败立即终止
    pub fn run<I, P>(mut self, files: I) -> Result<CompileReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for file in files {
            self.compile(file.as_ref())?;
        }
        tracing::info!(
            "Compiled {} EXML files, skipped {}",
            self.report.artifacts.len(),
            self.report.skipped.len()
        );
        Ok(self.report)
    }

    /// 产物位置：保持源文件相对 `source_root` 的目录结构
    pub fn output_location(&self, path: &Path) -> (PathBuf, String) {
        let rel_dir = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.options.source_root).ok())
            .unwrap_or_else(|| Path::new(""));
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{}.{}", stem, ARTIFACT_EXTENSION);

        let output_path = self.options.output_root.join(rel_dir).join(&file_name);

        let mut url = self.options.target_url.trim_end_matches('/').to_string();
        for part in rel_dir.components() {
            url.push('/');
            url.push_str(&part.as_os_str().to_string_lossy());
        }
        url.push('/');
        url.push_str(&file_name);

        (output_path, url)
    }

    /// 编译单个文件；解析失败返回 Ok(None)，同一文件在一次运行内只编译一次
    pub fn compile(&mut self, path: &Path) -> Result<Option<ArtifactHandle>> {
        let normalized = normalize_path(path);
        let path = normalized.as_path();
        if let Some(cached) = self.cache.get(path) {
            tracing::debug!("Skin cache hit: {}", path.display());
            return Ok(cached.map(|c| c.handle.clone()));
        }

        let (output_path, url) = self.output_location(path);
        tracing::info!("Compiling {}", path.display());

        let element = match read_source(path) {
            Ok(element) => element,
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!("Skipping {}: {}", path.display(), reason);
                self.report.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::ParseFailure,
                    path,
                    reason.clone(),
                ));
                self.report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason,
                });
                self.cache.mark_failed(path.to_path_buf());
                return Ok(None);
            }
        };

        // 自身注册为皮肤的文件，根元素使用皮肤键对应的组件类型
        let skins = self.skins;
        let root_widget = skins
            .key_for_path(path)
            .map(widget_name)
            .filter(|w| !w.is_empty());

        self.in_progress.push(path.to_path_buf());
        let built = self.build_node(&element, root_widget, None, path);
        self.in_progress.pop();
        let root = built?;

        let artifact = Artifact {
            source: path.to_path_buf(),
            output_path,
            url,
            root,
        };
        let handle = self.store.persist(&artifact)?;
        tracing::debug!("Persisted {} -> {}", path.display(), handle.url);

        self.report.artifacts.push(handle.clone());
        self.cache.insert(path.to_path_buf(), handle.clone(), artifact.root);
        Ok(Some(handle))
    }

    /// 构建节点：结构 -> 布局 -> 子节点 -> 组件语义（自底向上）
    fn build_node(
        &mut self,
        element: &ExmlNode,
        widget_override: Option<&str>,
        parent_size: Option<Size>,
        source: &Path,
    ) -> Result<CompiledNode> {
        let skin_key = skin_key_of(element);
        let name = node_name(element);
        let inline_skin = inline_skin_children(element);

        let mut node = if widget_override.is_some() || inline_skin.is_some() {
            CompiledNode::new(name)
        } else {
            match self.skin_path_for(element, &skin_key) {
                Some(skin_path) => self.instantiate_skin(skin_path, name)?,
                None => CompiledNode::new(name),
            }
        };

        self.layout.apply(&mut node, element, parent_size);

        let widget = match widget_override {
            Some(w) => Some(w.to_string()),
            None if !skin_key.is_empty() => Some(widget_name(&skin_key).to_string()),
            None => None,
        };
        node.widget = widget.clone();

        // 子元素来源：内联皮肤块或直接子元素，两者都经过子元素过滤器
        let size = node.size;
        for child in inline_skin.unwrap_or(element.children.as_slice()) {
            if let Some(w) = widget.as_deref() {
                if !self.registry.accepts_child(w, child) {
                    tracing::debug!("{} rejects child <{}>", w, child.qualified_name());
                    continue;
                }
            }
            let built = self.build_node(child, None, Some(size), source)?;
            node.add_child(built);
        }

        if let Some(w) = widget.as_deref() {
            let mut ctx = ImportContext {
                resources: self.resources,
                locator: &mut *self.locator,
                diagnostics: &mut self.report.diagnostics,
                source,
                is_skin_template: widget_override.is_some(),
            };
            if !self.registry.import(w, &mut node, element, &mut ctx) {
                tracing::trace!("No importer for {}", w);
            }
        }

        Ok(node)
    }

    /// `skinName` 属性指向的皮肤优先，其次按皮肤键查找
    fn skin_path_for(&self, element: &ExmlNode, skin_key: &str) -> Option<&'a Path> {
        let skins = self.skins;
        element
            .get_attr("skinName")
            .and_then(|name| skins.get(name))
            .or_else(|| skins.get(skin_key))
    }

    /// 编译皮肤文件并深拷贝其根节点
    fn instantiate_skin(&mut self, skin_path: &Path, name: String) -> Result<CompiledNode> {
        if self.in_progress.iter().any(|p| p == skin_path) {
            tracing::debug!("Skin cycle through {}, using plain node", skin_path.display());
            return Ok(CompiledNode::new(name));
        }

        self.compile(skin_path)?;

        match self.cache.get(skin_path).flatten() {
            Some(cached) => {
                let mut node = cached.root.clone();
                node.name = name;
                node.skin = Some(cached.handle.clone());
                Ok(node)
            }
            None => Ok(CompiledNode::new(name)),
        }
    }
}

fn read_source(path: &Path) -> Result<ExmlNode> {
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    ExmlParser::new(&text).parse().map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 节点名：`id` 属性，否则为元素本地名
fn node_name(element: &ExmlNode) -> String {
    element
        .get_attr("id")
        .unwrap_or(element.local_name.as_str())
        .to_string()
}

/// 内联皮肤：`<e:skinName><e:Skin>...</e:Skin></e:skinName>`，返回内层 Skin 的子元素
fn inline_skin_children(element: &ExmlNode) -> Option<&[ExmlNode]> {
    let block = attrs::first_child_by_local_name(element, "skinName")?;
    Some(block.children.first().map_or(&[][..], |skin| skin.children.as_slice()))
}
