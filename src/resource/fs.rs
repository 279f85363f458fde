//! 基于文件系统的资源定位器

use super::{BitmapFont, FontMetrics, ResourceHandle, ResourceLocator, SpriteSheet};
use crate::error::{ImportError, Result};
use crate::geometry::{Rect, Size};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 在目标资源根目录下定位资源
pub struct FsResourceLocator {
    root: PathBuf,
    sheets: HashMap<String, Option<SpriteSheet>>,
}

impl FsResourceLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sheets: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn sheet(&mut self, path: &str) -> Option<&SpriteSheet> {
        if !self.sheets.contains_key(path) {
            let loaded = std::fs::read_to_string(self.full_path(path))
                .ok()
                .and_then(|text| SpriteSheet::from_json(&text).ok());
            self.sheets.insert(path.to_string(), loaded);
        }
        self.sheets.get(path).and_then(Option::as_ref)
    }

    /// 图集对应的纹理路径（相对根目录）
    fn sheet_texture_path(&mut self, path: &str) -> Option<String> {
        let file = self.sheet(path)?.file.clone();
        let dir = Path::new(path).parent().unwrap_or_else(|| Path::new(""));
        Some(dir.join(file).to_string_lossy().into_owned())
    }

    fn meta_path(&self, handle: &ResourceHandle) -> PathBuf {
        let mut p = self.full_path(&handle.path).into_os_string();
        p.push(".meta");
        PathBuf::from(p)
    }
}

impl ResourceLocator for FsResourceLocator {
    fn resolve(&mut self, path: &str, sub_frame: Option<&str>) -> Option<ResourceHandle> {
        if path.is_empty() || !self.full_path(path).is_file() {
            return None;
        }
        match sub_frame {
            None => Some(ResourceHandle::new(path)),
            Some(frame) => {
                self.sheet(path)?.frame(frame)?;
                Some(ResourceHandle::with_frame(path, frame))
            }
        }
    }

    fn texture_size(&mut self, handle: &ResourceHandle) -> Option<Size> {
        if let Some(frame) = &handle.frame {
            return self.sheet(&handle.path)?.frame(frame).map(|f| f.source_size());
        }
        let (w, h) = image::image_dimensions(self.full_path(&handle.path)).ok()?;
        Some(Size::new(w as f32, h as f32))
    }

    fn set_border(&mut self, handle: &ResourceHandle, grid: Rect) -> Result<()> {
        let texture = self
            .texture_size(handle)
            .unwrap_or(Size::new(grid.right(), grid.bottom()));
        let insets = grid.insets_within(texture);

        // 图集子帧的边框写在图集纹理的元数据里，按帧名分开
        let meta_handle = match &handle.frame {
            Some(_) => match self.sheet_texture_path(&handle.path) {
                Some(texture_path) => ResourceHandle::new(texture_path),
                None => handle.clone(),
            },
            None => handle.clone(),
        };
        let meta_path = self.meta_path(&meta_handle);

        let mut meta = match std::fs::read_to_string(&meta_path) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            Err(_) => Map::new(),
        };

        let border = json!({
            "top": insets.top,
            "bottom": insets.bottom,
            "left": insets.left,
            "right": insets.right,
        });
        match &handle.frame {
            Some(frame) => {
                let frames = meta
                    .entry("subMetas")
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(frames) = frames {
                    frames.insert(frame.clone(), json!({ "border": border }));
                }
            }
            None => {
                meta.insert("border".to_string(), border);
            }
        }

        let text = serde_json::to_string_pretty(&Value::Object(meta))
            .map_err(|e| ImportError::json(&meta_path, e))?;
        std::fs::write(&meta_path, text).map_err(|e| ImportError::io(&meta_path, e))
    }

    fn load_bitmap_font(&mut self, handle: &ResourceHandle) -> Result<FontMetrics> {
        let path = self.full_path(&handle.path);
        let text = std::fs::read_to_string(&path).map_err(|e| ImportError::io(&path, e))?;
        if let Some(metrics) = BitmapFont::parse_classic_metrics(&text) {
            return Ok(metrics);
        }
        let face = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        BitmapFont::from_egret_json(&text, &face)
            .map(|font| font.metrics())
            .map_err(|e| ImportError::json(&path, e))
    }
}
