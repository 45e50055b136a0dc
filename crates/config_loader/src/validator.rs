//! 配置校验模块
//!
//! 校验规则：
//! - sink 名称非空且唯一
//! - 每个 stream 引用的 sink 已声明
//! - file sink 必须提供非空 `path`
//! - console sink 的 `target` 只能是 stdout / stderr
//!
//! stream 名称允许为空；重复的 stream 名称不是错误 (后者覆盖前者)。

use std::collections::HashSet;

use contracts::{ContractError, RegistryBlueprint, SinkConfig, SinkType};

/// 校验 RegistryBlueprint 配置
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(blueprint: &RegistryBlueprint) -> Result<(), ContractError> {
    validate_sink_names(blueprint)?;
    validate_sink_params(blueprint)?;
    validate_stream_refs(blueprint)?;
    Ok(())
}

/// 校验 sink 名称非空且唯一
fn validate_sink_names(blueprint: &RegistryBlueprint) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for (idx, sink) in blueprint.sinks.iter().enumerate() {
        if sink.name.is_empty() {
            return Err(ContractError::config_validation(
                format!("sinks[{}].name", idx),
                "sink name cannot be empty",
            ));
        }
        if !seen.insert(sink.name.as_str()) {
            return Err(ContractError::config_validation(
                format!("sinks[name={}]", sink.name),
                "duplicate sink name",
            ));
        }
    }
    Ok(())
}

/// 校验类型特定参数
fn validate_sink_params(blueprint: &RegistryBlueprint) -> Result<(), ContractError> {
    for sink in &blueprint.sinks {
        match sink.sink_type {
            SinkType::File => validate_file_params(sink)?,
            SinkType::Console => validate_console_params(sink)?,
            SinkType::Log | SinkType::Null => {}
        }
    }
    Ok(())
}

fn validate_file_params(sink: &SinkConfig) -> Result<(), ContractError> {
    match sink.params.get("path") {
        Some(path) if !path.is_empty() => Ok(()),
        _ => Err(ContractError::config_validation(
            format!("sinks[{}].params.path", sink.name),
            "file sink requires a non-empty 'path'",
        )),
    }
}

fn validate_console_params(sink: &SinkConfig) -> Result<(), ContractError> {
    let Some(target) = sink.params.get("target") else {
        return Ok(());
    };
    match target.to_lowercase().as_str() {
        "stdout" | "stderr" => Ok(()),
        _ => Err(ContractError::config_validation(
            format!("sinks[{}].params.target", sink.name),
            format!("console target must be 'stdout' or 'stderr', got '{}'", target),
        )),
    }
}

/// 校验 stream -> sink 引用
fn validate_stream_refs(blueprint: &RegistryBlueprint) -> Result<(), ContractError> {
    let declared: HashSet<&str> = blueprint.sinks.iter().map(|s| s.name.as_str()).collect();

    for (idx, stream) in blueprint.streams.iter().enumerate() {
        if !declared.contains(stream.sink.as_str()) {
            return Err(ContractError::config_validation(
                format!("streams[{}].sink", idx),
                format!(
                    "stream '{}' references unknown sink '{}'",
                    stream.name, stream.sink
                ),
            ));
        }
    }
    Ok(())
}
