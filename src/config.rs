// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments of the utilities. Every flag can also be set from the environment.

use crate::constants::{konfigure::DEFAULT_OUTPUT_DIR, DEFAULT_FLUX_NAMESPACE};
use crate::error::{JanitorError, Result};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Back up Argo CD and Flux custom resources to YAML files
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct BackupArgs {
    /// Directory in which argo-backup/ and flux-backup/ are created
    #[arg(long, env = "BACKUP_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Disable self-heal on all Argo CD Applications
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct PauseArgoArgs {
    /// Only pause Applications in this namespace
    #[arg(long, env = "ARGO_NAMESPACE")]
    pub namespace: Option<String>,
}

impl PauseArgoArgs {
    /// Namespace filter, `None` meaning all namespaces
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

/// Reset the status of Flux Kustomizations
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct EmptyStatusArgs {
    /// Namespace holding the Kustomizations
    #[arg(long, env = "FLUX_NAMESPACE", default_value = DEFAULT_FLUX_NAMESPACE)]
    pub namespace: String,
}

impl EmptyStatusArgs {
    pub fn validate(&self) -> Result<()> {
        require("namespace", &self.namespace)
    }
}

/// Required namespace filter
#[derive(Args, Debug, Clone)]
pub struct NamespaceArgs {
    /// Namespace to remove finalizers in
    #[arg(long)]
    pub namespace: String,
}

impl NamespaceArgs {
    pub fn validate(&self) -> Result<()> {
        require("namespace", &self.namespace)
    }
}

/// Remove finalizers from Argo CD, Flux, and Starboard resources in a namespace
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct StarboardFinalizerArgs {
    #[command(flatten)]
    pub namespace: NamespaceArgs,
}

/// Convert Argo CD Applications of a collection into Konfigure generators
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct ConvertArgs {
    /// Path to a directory containing the collection
    #[arg(long, env = "COLLECTION_DIR")]
    pub collection_dir: PathBuf,

    /// Target directory, inside the collection directory, where all new resources will be saved
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: String,
}

impl ConvertArgs {
    pub fn validate(&self) -> Result<()> {
        if self.collection_dir.as_os_str().is_empty() {
            return Err(JanitorError::InvalidArgument(
                "collection-dir flag is required".to_string(),
            ));
        }
        if self.dir.is_empty() {
            return Err(JanitorError::InvalidArgument(
                "dir flag cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn require(flag: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(JanitorError::InvalidArgument(format!(
            "{} flag is required",
            flag
        )));
    }
    Ok(())
}
