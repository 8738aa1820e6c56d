// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from ambient credentials

use crate::error::{JanitorError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a Kubernetes client from the local kubeconfig or the in-cluster service account
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| JanitorError::KubeconfigError(format!("Failed to infer config: {}", e)))?;

    debug!("Using cluster {}", config.cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| JanitorError::KubeconfigError(format!("Failed to create client: {}", e)))?;

    info!("Connected to Kubernetes cluster");
    Ok(client)
}
