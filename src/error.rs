// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JanitorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to create Kubernetes client: {0}")]
    KubeconfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{schema} object {name} has no UID")]
    MissingUid { schema: String, name: String },

    #[error("{field} not found in {file}")]
    MissingField { field: &'static str, file: String },

    #[error("Unexpected plugin setting {name:?} in {file}")]
    UnexpectedPluginSetting { name: String, file: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to patch {target}: {source}")]
    PatchError {
        target: String,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, JanitorError>;
