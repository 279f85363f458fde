//! 编译运行报告

use super::artifact::ArtifactHandle;
use std::fmt;
use std::path::PathBuf;

/// 非致命问题的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 标记解析失败，文件被跳过
    ParseFailure,
    /// 节点已有另一种渲染行为，无法再添加
    BehaviorConflict,
    /// 资源名无法解析
    UnresolvedResource,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticKind::ParseFailure => "parse-failure",
            DiagnosticKind::BehaviorConflict => "behavior-conflict",
            DiagnosticKind::UnresolvedResource => "unresolved-resource",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, file: impl Into<PathBuf>, message: String) -> Self {
        Self { kind, file: file.into(), message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.file.display(), self.message)
    }
}

/// 因解析失败被跳过的文件
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    /// 按完成顺序排列（被引用的皮肤先于引用者）
    pub artifacts: Vec<ArtifactHandle>,
    pub skipped: Vec<SkippedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileReport {
    /// 没有文件被跳过
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}
