//! Builder - turns a RegistryBlueprint into bound streams

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use contracts::{RegistryBlueprint, SharedSink, SinkConfig, SinkType};

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::sinks::{ConsoleSink, FileSink, LogSink, NullSink};

/// Builder for a private Registry populated from a blueprint
pub struct RegistryBuilder {
    blueprint: RegistryBlueprint,
}

impl RegistryBuilder {
    /// Create a new RegistryBuilder
    pub fn new(blueprint: RegistryBlueprint) -> Self {
        Self { blueprint }
    }

    /// Build an independent registry with every stream bound
    #[instrument(name = "registry_builder_build", skip(self))]
    pub fn build(self) -> Result<Registry, RegistryError> {
        let registry = Registry::new();
        install(&registry, &self.blueprint)?;
        Ok(registry)
    }
}

/// Create a sink from configuration
#[instrument(
    name = "registry_create_sink",
    skip(config),
    fields(sink = %config.name, sink_type = %config.sink_type)
)]
pub fn create_sink(config: &SinkConfig) -> Result<SharedSink, RegistryError> {
    let sink: SharedSink = match config.sink_type {
        SinkType::Console => Arc::new(
            ConsoleSink::from_params(&config.name, &config.params)
                .map_err(|e| RegistryError::sink_creation(&config.name, e))?,
        ),
        SinkType::Log => Arc::new(LogSink::new(&config.name)),
        SinkType::File => Arc::new(
            FileSink::from_params(&config.name, &config.params)
                .map_err(|e| RegistryError::sink_creation(&config.name, e.to_string()))?,
        ),
        SinkType::Null => Arc::new(NullSink::new(&config.name)),
    };
    Ok(sink)
}

/// Bind every stream of `blueprint` into `registry`
///
/// Each declared sink is built once; streams naming the same sink share
/// that instance. Nothing is bound unless every sink builds and every
/// stream reference resolves. Returns the number of stream entries bound.
#[instrument(
    name = "registry_install",
    skip(registry, blueprint),
    fields(sinks = blueprint.sinks.len(), streams = blueprint.streams.len())
)]
pub fn install(registry: &Registry, blueprint: &RegistryBlueprint) -> Result<usize, RegistryError> {
    let mut sinks: HashMap<&str, SharedSink> = HashMap::with_capacity(blueprint.sinks.len());
    for config in &blueprint.sinks {
        sinks.insert(config.name.as_str(), create_sink(config)?);
    }

    let mut bindings = Vec::with_capacity(blueprint.streams.len());
    for stream in &blueprint.streams {
        let sink = sinks
            .get(stream.sink.as_str())
            .ok_or_else(|| RegistryError::UnknownSink {
                stream: stream.name.clone(),
                sink: stream.sink.clone(),
            })?;
        bindings.push((stream.name.as_str(), Arc::clone(sink)));
    }

    let bound = bindings.len();
    for (name, sink) in bindings {
        registry.add_sink(name, sink);
    }

    info!(streams = bound, "Blueprint installed");
    Ok(bound)
}
