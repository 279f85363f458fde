//! 单元测试模块
//! 覆盖解析、配置、资源、布局、组件导入、编译器与工程导入

pub mod support;
pub mod config_tests;
pub mod layout_tests;
pub mod project_tests;
