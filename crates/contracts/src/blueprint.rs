//! RegistryBlueprint - Config Loader 输出
//!
//! 描述完整的日志路由配置：sink 定义与 stream 绑定。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 配置版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// 完整的路由配置蓝图
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryBlueprint {
    /// 配置版本
    #[serde(default)]
    pub version: ConfigVersion,

    /// Sink 定义列表
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,

    /// Stream -> Sink 绑定列表
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
}

impl RegistryBlueprint {
    /// 按名称查找 sink 定义
    pub fn sink(&self, name: &str) -> Option<&SinkConfig> {
        self.sinks.iter().find(|s| s.name == name)
    }

    /// 绑定到指定 sink 的所有 stream 名称 (按配置顺序)
    pub fn streams_for_sink<'a>(&'a self, sink: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.streams
            .iter()
            .filter(move |s| s.sink == sink)
            .map(|s| s.name.as_str())
    }
}

/// Sink 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink 名称
    pub name: String,

    /// Sink 类型
    pub sink_type: SinkType,

    /// 类型特定参数
    ///
    /// - console: `target` = `stdout` | `stderr`
    /// - file: `path`
    #[serde(default)]
    pub params: HashMap<String, String>,
}

/// Sink 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// 控制台输出
    Console,
    /// tracing 日志输出
    Log,
    /// 文件输出 (追加)
    File,
    /// 丢弃
    Null,
}

impl SinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Log => "log",
            Self::File => "file",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for SinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream 绑定配置
///
/// 多个 stream 可以引用同一个 sink，此时共享同一个 sink 实例。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Stream 名称 (允许为空字符串)
    pub name: String,

    /// 引用的 sink 名称
    pub sink: String,
}
