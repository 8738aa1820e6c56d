// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Disable self-heal on Argo CD Applications so automated sync stops reverting changes.

use super::{patch_all, replace_patch, PatchTarget};
use crate::constants::paths;
use crate::error::Result;
use crate::kubernetes::list_objects;
use crate::schemas::ARGO_APPLICATION;
use kube::Client;
use tracing::{info, instrument};

/// Set `spec.syncPolicy.automated.selfHeal` to false on every Application.
///
/// Returns the number of Applications patched.
#[instrument(skip(client))]
pub async fn pause_applications(client: &Client, namespace: Option<&str>) -> Result<usize> {
    let apps = list_objects(client, &ARGO_APPLICATION, namespace).await?;
    info!("Pausing {} Argo Applications...", apps.len());

    let patch = replace_patch(paths::SELF_HEAL, serde_json::Value::Bool(false));
    patch_all(client, &ARGO_APPLICATION, &apps, &patch, PatchTarget::Object).await
}
