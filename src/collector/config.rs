use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors surfaced while reading or checking a collector document.
#[derive(Error, Debug)]
pub enum CollectorConfigError {
    #[error("parsing collector configuration: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("pipeline {pipeline:?} references unknown {kind} {name:?}")]
    UnknownComponent {
        pipeline: String,
        kind: ComponentKind,
        name: String,
    },

    #[error("service extensions reference unknown extension {0:?}")]
    UnknownExtension(String),
}

/// Component section a pipeline entry can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Receiver,
    Processor,
    Exporter,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Receiver => write!(f, "receiver"),
            ComponentKind::Processor => write!(f, "processor"),
            ComponentKind::Exporter => write!(f, "exporter"),
        }
    }
}

/// Minimally-typed view of a collector configuration document.
///
/// Component bodies stay opaque (`null`-bodied components are common); only
/// the section keys and the service wiring are modeled, which is all the
/// cross-reference check needs. Unknown top-level and service keys such as
/// `service.telemetry` are ignored.
#[derive(Debug, Deserialize)]
pub struct CollectorConfig {
    #[serde(default)]
    extensions: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    receivers: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    processors: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    exporters: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    service: Service,
}

#[derive(Debug, Default, Deserialize)]
struct Service {
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    pipelines: BTreeMap<String, Pipeline>,
}

#[derive(Debug, Default, Deserialize)]
struct Pipeline {
    #[serde(default)]
    receivers: Vec<String>,
    #[serde(default)]
    processors: Vec<String>,
    #[serde(default)]
    exporters: Vec<String>,
}

impl CollectorConfig {
    /// Reads a document with placeholder tokens left as-is; `${NAME}` is a
    /// plain YAML scalar, so unresolved documents still parse.
    pub fn from_yaml(document: &str) -> Result<Self, CollectorConfigError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Checks that every name wired into the service section exists in the
    /// matching top-level section. Components that are defined but never
    /// referenced are legal.
    pub fn check_pipeline_references(&self) -> Result<(), CollectorConfigError> {
        for extension in &self.service.extensions {
            if !self.extensions.contains_key(extension) {
                return Err(CollectorConfigError::UnknownExtension(extension.clone()));
            }
        }

        for (pipeline_name, pipeline) in &self.service.pipelines {
            check_references(
                pipeline_name,
                &pipeline.receivers,
                ComponentKind::Receiver,
                &self.receivers,
            )?;
            check_references(
                pipeline_name,
                &pipeline.processors,
                ComponentKind::Processor,
                &self.processors,
            )?;
            check_references(
                pipeline_name,
                &pipeline.exporters,
                ComponentKind::Exporter,
                &self.exporters,
            )?;
        }

        Ok(())
    }
}

fn check_references(
    pipeline: &str,
    referenced: &[String],
    kind: ComponentKind,
    defined: &BTreeMap<String, serde_yaml::Value>,
) -> Result<(), CollectorConfigError> {
    referenced.iter().try_for_each(|name| {
        if defined.contains_key(name) {
            Ok(())
        } else {
            Err(CollectorConfigError::UnknownComponent {
                pipeline: pipeline.to_string(),
                kind,
                name: name.clone(),
            })
        }
    })
}
