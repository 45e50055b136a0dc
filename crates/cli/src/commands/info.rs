//! `info` command implementation.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::RegistryBlueprint;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    sinks: Vec<SinkInfo>,
    streams: Vec<StreamInfo>,
}

#[derive(Serialize)]
struct SinkInfo {
    name: String,
    sink_type: String,
    streams: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    params: HashMap<String, String>,
}

#[derive(Serialize)]
struct StreamInfo {
    name: String,
    sink: String,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.json {
        let info = build_config_info(&blueprint, args.params);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&blueprint, args.params);
    }

    Ok(())
}

fn build_config_info(blueprint: &RegistryBlueprint, with_params: bool) -> ConfigInfo {
    let sinks = blueprint
        .sinks
        .iter()
        .map(|s| SinkInfo {
            name: s.name.clone(),
            sink_type: s.sink_type.to_string(),
            streams: blueprint
                .streams_for_sink(&s.name)
                .map(str::to_string)
                .collect(),
            params: if with_params {
                s.params.clone()
            } else {
                HashMap::new()
            },
        })
        .collect();

    let streams = blueprint
        .streams
        .iter()
        .map(|s| StreamInfo {
            name: s.name.clone(),
            sink: s.sink.clone(),
        })
        .collect();

    ConfigInfo {
        version: format!("{:?}", blueprint.version),
        sinks,
        streams,
    }
}

fn print_config_info(blueprint: &RegistryBlueprint, with_params: bool) {
    println!("\nVersion: {:?}", blueprint.version);

    println!("\n📤 Sinks ({})", blueprint.sinks.len());
    for (i, sink) in blueprint.sinks.iter().enumerate() {
        let is_last = i == blueprint.sinks.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        println!("   {} {} ({})", prefix, sink.name, sink.sink_type);

        if with_params {
            let mut params: Vec<_> = sink.params.iter().collect();
            params.sort();
            for (key, value) in params {
                println!("   {}  {} = {}", child_prefix, key, value);
            }
        }
    }

    println!("\n🔀 Streams ({})", blueprint.streams.len());
    for (i, stream) in blueprint.streams.iter().enumerate() {
        let is_last = i == blueprint.streams.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        println!("   {} {:?} → {}", prefix, stream.name, stream.sink);
    }

    println!();
}
